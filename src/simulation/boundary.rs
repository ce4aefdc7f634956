//! Wall model for the rectangular chamber
//!
//! The chamber spans `[0, dims[k]]` on every axis. A particle found outside
//! is put back on the wall, its normal velocity component is damped and
//! flipped, and the kinetic energy taken from that component is shared
//! equally by every particle in the chamber (the colliding one included).

use super::states::{NVec3, Particle};

/// Reflect particle `idx` off every wall it has crossed this tick.
///
/// For each offending axis with pre-collision component `v`:
/// - `lost = m v^2 / 2 * wall_coeff` is removed from that component,
/// - `lost / n` is handed to each of the `n` particles via `add_energy`,
/// - the component becomes `-v * sqrt(1 - wall_coeff)`.
///
/// Returns the total energy removed (J).
pub fn reflect_particle(particles: &mut [Particle], idx: usize, dims: &NVec3, wall_coeff: f64) -> f64 {
    let mut removed = 0.0;

    for axis in 0..3 {
        let coord = particles[idx].x[axis];
        let wall = if coord < 0.0 {
            0.0
        } else if coord > dims[axis] {
            dims[axis]
        } else {
            continue;
        };

        particles[idx].x[axis] = wall;

        // Damping is computed from the component before any redistribution
        let v = particles[idx].v[axis];
        let lost = 0.5 * particles[idx].mass() * v * v * wall_coeff;
        redistribute_energy(particles, lost);

        particles[idx].v[axis] = -(v * (1.0 - wall_coeff).sqrt());
        removed += lost;
    }

    removed
}

/// Share `energy` equally between all particles
pub fn redistribute_energy(particles: &mut [Particle], energy: f64) {
    if particles.is_empty() {
        return;
    }
    let share = energy / particles.len() as f64;
    for p in particles.iter_mut() {
        p.add_energy(share);
    }
}

/// True when `x` lies inside the closed box `[0, dims]`
pub fn inside(x: &NVec3, dims: &NVec3) -> bool {
    (0..3).all(|k| x[k] >= 0.0 && x[k] <= dims[k])
}
