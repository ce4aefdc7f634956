//! Physical and reaction constants (SI units, CODATA 2018)

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Coulomb constant 1 / (4 pi eps0) (N m^2 / C^2)
pub const COULOMB_CONSTANT: f64 = 8.9875517923e9;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Planck constant (J s)
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Electron volt (J)
pub const ELECTRON_VOLT: f64 = 1.602176634e-19;

// Rest masses (kg)
pub const M_DEUTERON: f64 = 3.3435837724e-27;
pub const M_TRITON: f64 = 5.0073567446e-27;
pub const M_HELION: f64 = 5.0064127796e-27;
pub const M_NEUTRON: f64 = 1.67492749804e-27;

// Rest mass energy equivalents (MeV)
pub const MEV_DEUTERON: f64 = 1875.61294257;
pub const MEV_TRITON: f64 = 2808.92113298;
pub const MEV_HELION: f64 = 2808.39160743;
pub const MEV_NEUTRON: f64 = 939.56542052;

// Magnetic moments (J/T)
pub const MU_DEUTERON: f64 = 4.330735094e-27;
pub const MU_TRITON: f64 = 1.5046095202e-26;
pub const MU_HELION: f64 = -1.074617532e-26;
pub const MU_NEUTRON: f64 = -9.6623651e-27;

/// Deuteron rms charge radius (m)
pub const R_DEUTERON: f64 = 2.12799e-15;

/// Neutron radius used for display (m)
pub const R_NEUTRON: f64 = 0.8e-15;

/// Energy released by one D + T -> He + n reaction (MeV)
pub const FUSION_ENERGY_MEV: f64 = 17.59;

/// Share of the reaction output energy carried by the neutron
pub const NEUTRON_ENERGY_RATIO: f64 = 0.7987;

/// MeV -> J
pub const MEV_IN_JOULES: f64 = 1.6021773e-13;

/// Ceiling applied to every particle speed after a force update (m/s)
pub const MAX_SPEED: f64 = 1e8;

/// Default per-particle and chamber temperature (K)
pub const ROOM_TEMPERATURE: f64 = 298.15;
