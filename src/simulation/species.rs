//! Species catalog
//!
//! The four nuclei tracked by the chamber. Every species-specific constant is
//! looked up through [`Species`] so the engine never needs to know which
//! concrete kind a particle is, except in the fusion rule.

use serde::Serialize;

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Species {
    Deuteron,
    Triton,
    Helion,
    Neutron,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Deuteron,
        Species::Triton,
        Species::Helion,
        Species::Neutron,
    ];

    /// Rest mass (kg)
    pub fn mass(&self) -> f64 {
        match self {
            Species::Deuteron => M_DEUTERON,
            Species::Triton => M_TRITON,
            Species::Helion => M_HELION,
            Species::Neutron => M_NEUTRON,
        }
    }

    /// Electric charge (C)
    pub fn charge(&self) -> f64 {
        match self {
            Species::Deuteron => ELEMENTARY_CHARGE,
            Species::Triton => ELEMENTARY_CHARGE,
            Species::Helion => 2.0 * ELEMENTARY_CHARGE,
            Species::Neutron => 0.0,
        }
    }

    /// Rest mass energy equivalent (MeV)
    pub fn mass_mev(&self) -> f64 {
        match self {
            Species::Deuteron => MEV_DEUTERON,
            Species::Triton => MEV_TRITON,
            Species::Helion => MEV_HELION,
            Species::Neutron => MEV_NEUTRON,
        }
    }

    /// Magnetic dipole moment (J/T), descriptive only
    pub fn magnetic_moment(&self) -> f64 {
        match self {
            Species::Deuteron => MU_DEUTERON,
            Species::Triton => MU_TRITON,
            Species::Helion => MU_HELION,
            Species::Neutron => MU_NEUTRON,
        }
    }

    /// Charge radius (m), where one is tabulated
    pub fn radius(&self) -> Option<f64> {
        match self {
            Species::Deuteron => Some(R_DEUTERON),
            Species::Neutron => Some(R_NEUTRON),
            Species::Triton | Species::Helion => None,
        }
    }

    /// Short symbol used by text output
    pub fn tag(&self) -> &'static str {
        match self {
            Species::Deuteron => "D",
            Species::Triton => "T",
            Species::Helion => "He",
            Species::Neutron => "n",
        }
    }

    /// Marker color for renderers
    pub fn color(&self) -> &'static str {
        match self {
            Species::Deuteron => "#ff1a00", // red
            Species::Triton => "#2254dd",   // blue
            Species::Helion => "#FFDC00",   // yellow
            Species::Neutron => "#28d73c",  // green
        }
    }
}

/// Descriptive neutron data. None of it takes part in the dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeutronMetadata {
    pub kind: &'static str,
    pub statistics: &'static str,
    pub quarks: [char; 3],
    pub spin: f64,
    pub radius: f64,                    // m
    pub mean_lifetime: f64,             // s
    pub electric_dipole_moment: f64,    // e cm
    pub electric_polarizability: f64,   // fm^3
    pub magnetic_polarizability: f64,   // fm^3
}

pub const NEUTRON_METADATA: NeutronMetadata = NeutronMetadata {
    kind: "Baryon",
    statistics: "Fermion",
    quarks: ['u', 'd', 'd'],
    spin: 0.5,
    radius: R_NEUTRON,
    mean_lifetime: 879.466,
    electric_dipole_moment: 2.9e-26,
    electric_polarizability: 1.1615e-3,
    magnetic_polarizability: 3.720e-4,
};
