//! Explicit time stepping helpers
//!
//! The chamber uses a symplectic-Euler style update: velocities are kicked
//! during the pairwise pass, then every position drifts with the new
//! velocity over an adaptively chosen `dt`.

use super::states::Particle;

/// Timestep that makes a particle moving at `max_speed` cross `x_extent` in
/// `n_frames` steps. `None` when nothing moves, so the caller keeps its dt.
pub fn adaptive_timestep(x_extent: f64, n_frames: u32, max_speed: f64) -> Option<f64> {
    if max_speed > 0.0 && max_speed.is_finite() {
        Some((x_extent / n_frames as f64) / max_speed)
    } else {
        None
    }
}

/// Drift: x_n+1 = x_n + dt v_n+1
pub fn advance_positions(particles: &mut [Particle], dt: f64) {
    for p in particles.iter_mut() {
        p.advance(dt);
    }
}
