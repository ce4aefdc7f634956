//! Core state types for the chamber simulation
//!
//! A `Particle` is a species tag plus its kinematic state. Mass, charge and
//! the other species constants are read through the tag, so a particle never
//! carries a copy of them.

use nalgebra::Vector3;
use super::constants::{MAX_SPEED, ROOM_TEMPERATURE};
use super::forces::coulomb_acceleration;
use super::species::Species;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub temperature: f64, // K, not used by the dynamics
    pub species: Species,
}

impl Particle {
    pub fn new(species: Species, x: NVec3, v: NVec3) -> Self {
        Self {
            x,
            v,
            temperature: ROOM_TEMPERATURE,
            species,
        }
    }

    /// Particle of `species` at rest at `x`
    pub fn at_rest(species: Species, x: NVec3) -> Self {
        Self::new(species, x, NVec3::zeros())
    }

    pub fn mass(&self) -> f64 {
        self.species.mass()
    }

    pub fn charge(&self) -> f64 {
        self.species.charge()
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.v.norm_squared()
    }

    /// Unit vector along the velocity, `None` when at rest
    pub fn direction(&self) -> Option<NVec3> {
        self.v.try_normalize(0.0)
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (other.x - self.x).norm()
    }

    /// Unit vector pointing from `self` to `other`, `None` when they coincide
    pub fn unit_vector_to(&self, other: &Particle) -> Option<NVec3> {
        (other.x - self.x).try_normalize(0.0)
    }

    /// Kick the velocity by the Coulomb interaction with `other` over `dt`,
    /// then clamp the speed to [`MAX_SPEED`].
    ///
    /// Coincident particles exert no force on each other.
    pub fn apply_electrostatic_influence(&mut self, other: &Particle, dt: f64) {
        if let Some(a) = coulomb_acceleration(self, other) {
            self.v += dt * a;
            self.clamp_speed(MAX_SPEED);
        }
    }

    /// Drift: x += v dt
    pub fn advance(&mut self, dt: f64) {
        self.x += dt * self.v;
    }

    /// Add `delta` joules of kinetic energy, keeping the direction of motion.
    /// A particle at rest has no direction and is left untouched.
    pub fn add_energy(&mut self, delta: f64) {
        if let Some(dir) = self.direction() {
            let energy = (self.kinetic_energy() + delta).max(0.0);
            self.v = dir * (2.0 * energy / self.mass()).sqrt();
        }
    }

    fn clamp_speed(&mut self, max_speed: f64) {
        let speed = self.speed();
        if speed > max_speed {
            self.v *= max_speed / speed;
        }
    }
}
