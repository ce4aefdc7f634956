//! Configuration types for loading chamber scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. Only `scenario` is required:
//!
//! - [`RunConfig`]        – stop time, RNG seed, report interval
//! - [`ChamberConfig`]    – box dimensions (custom scenario only)
//! - [`LaserConfig`]      – driver laser (custom scenario only)
//! - [`ParametersConfig`] – overrides for the scenario table
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! scenario: 6               # 1-6, see ScenarioId
//! particle_pairs: 10        # ignored by the two-particle scenarios
//!
//! run:
//!   stop_time: 1.0e-7       # simulated seconds
//!   seed: 0                 # StdRng seed for particle placement
//!   report_every: 10        # ticks between reports
//!   max_steps: 100000       # hard cap on ticks
//!
//! chamber:
//!   dimensions: [1.0, 1.0, 1.0]
//!
//! laser:
//!   wavelength: 3.51e-8     # m
//!   intensity: 5.0e17       # W/m^2
//!   activation_time: 1.0    # s
//!
//! parameters:
//!   wall_coeff: 0.3         # fraction of normal KE removed per wall hit
//!   min_fusion_distance: 5.0e-4
//!   adaptive_dt: true
//!   n_frames: 5
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::laser::Laser;

/// Run control read by the driver
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunConfig {
    pub stop_time: Option<f64>, // s, default 1e-7
    pub seed: Option<u64>, // default 0
    pub report_every: Option<usize>, // default 1
    pub max_steps: Option<usize>, // default 100000
}

/// Box dimensions, only honoured by the custom scenario
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChamberConfig {
    pub dimensions: Option<Vec<f64>>, // [x, y, z] in m, default 1 m cube
}

impl ChamberConfig {
    pub fn dimensions(&self) -> SimResult<[f64; 3]> {
        match self.dimensions.as_deref() {
            None => Ok([1.0, 1.0, 1.0]),
            Some([x, y, z]) => Ok([*x, *y, *z]),
            Some(other) => Err(SimError::InvalidParameter(format!(
                "chamber.dimensions needs exactly 3 values, got {}",
                other.len()
            ))),
        }
    }
}

/// Laser settings, missing fields fall back to [`Laser::default`]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LaserConfig {
    pub wavelength: Option<f64>, // m
    pub intensity: Option<f64>, // W/m^2
    pub activation_time: Option<f64>, // s
}

impl LaserConfig {
    pub fn to_laser(&self) -> Laser {
        let d = Laser::default();
        Laser::new(
            self.wavelength.unwrap_or(d.wavelength),
            self.intensity.unwrap_or(d.intensity),
            self.activation_time.unwrap_or(d.activation_time),
        )
    }
}

/// Overrides on top of the scenario table
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub wall_coeff: Option<f64>,
    pub min_fusion_distance: Option<f64>, // m
    pub adaptive_dt: Option<bool>,
    pub n_frames: Option<u32>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub scenario: u8, // preset id, 1-6
    pub particle_pairs: Option<usize>, // default 5
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub chamber: ChamberConfig,
    #[serde(default)]
    pub laser: LaserConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
