//! Driver laser
//!
//! Only used once per run: the custom scenario converts the energy the laser
//! deposits on the chamber walls into the starting speed of its particles.
//! Defaults follow the NIF inertial confinement laser.

use super::constants::{ELECTRON_VOLT, PLANCK, SPEED_OF_LIGHT};

/// Empirical scale applied to the deposited energy
const ENERGY_SCALE: f64 = 7.242971666667e22;

#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    pub wavelength: f64, // m
    pub intensity: f64, // W/m^2
    pub activation_time: f64, // s
}

impl Default for Laser {
    fn default() -> Self {
        Self {
            wavelength: 3.51e-8,
            intensity: 5e18,
            activation_time: 1.0,
        }
    }
}

impl Laser {
    pub fn new(wavelength: f64, intensity: f64, activation_time: f64) -> Self {
        Self {
            wavelength,
            intensity,
            activation_time,
        }
    }

    /// Hz
    pub fn frequency(&self) -> f64 {
        SPEED_OF_LIGHT / self.wavelength
    }

    /// Energy deposited on `area` (m^2) during `dt` seconds (J)
    pub fn energy(&self, area: f64, dt: f64) -> f64 {
        let photon_energy = PLANCK * self.frequency();
        let n_photons = photon_energy * self.intensity / area * dt;
        ELECTRON_VOLT * photon_energy * n_photons * ENERGY_SCALE
    }

    /// Energy deposited over the whole activation window (J)
    pub fn initial_energy(&self, area: f64) -> f64 {
        self.energy(area, self.activation_time)
    }
}
