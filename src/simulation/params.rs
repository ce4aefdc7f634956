//! Tunable chamber parameters
//!
//! `Parameters` holds the runtime settings of one chamber:
//! - fusion threshold distance,
//! - wall coefficient (fraction of the normal kinetic energy removed per hit),
//! - adaptive timestep switch and frame count

use crate::error::{SimError, SimResult};

/// Timestep used before the first adaptive update when nothing better is known (s)
pub const DEFAULT_DT: f64 = 1e-9;

/// Fraction of the colliding component's kinetic energy taken by a wall
pub const DEFAULT_WALL_COEFF: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub min_fusion_distance: f64, // m
    pub wall_coeff: f64, // fraction removed, not retained
    pub adaptive_dt: bool, // recompute dt every tick
    pub n_frames: u32, // frames for the fastest particle to cross x
}

impl Parameters {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.min_fusion_distance.is_finite() && self.min_fusion_distance > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "min_fusion_distance must be finite and > 0, got {}",
                self.min_fusion_distance
            )));
        }
        if !(0.0..1.0).contains(&self.wall_coeff) {
            return Err(SimError::InvalidParameter(format!(
                "wall_coeff must lie in [0, 1), got {}",
                self.wall_coeff
            )));
        }
        if self.n_frames == 0 {
            return Err(SimError::InvalidParameter("n_frames must be > 0".into()));
        }
        Ok(())
    }
}
