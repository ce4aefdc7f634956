//! Electrostatic pair force
//!
//! Plain Coulomb law without softening: the only guard is at exactly zero
//! separation, where no force is produced at all.

use super::constants::COULOMB_CONSTANT;
use super::states::{NVec3, Particle};

/// Acceleration felt by `target` due to `source`.
///
/// Returns `None` when the two particles sit on the same point. Like charges
/// push `target` away from `source`, opposite charges pull it in, and any
/// pair involving a neutral particle yields a zero vector.
pub fn coulomb_acceleration(target: &Particle, source: &Particle) -> Option<NVec3> {
    // r is the displacement vector from target to source
    let r = source.x - target.x;

    // Squared separation |r|^2
    let r2 = r.norm_squared();
    if r2 == 0.0 {
        return None;
    }

    // Signed force magnitude k q1 q2 / r^2, positive for repulsion
    let force = COULOMB_CONSTANT * target.charge() * source.charge() / r2;

    // a = F / m_target
    let acc = force / target.mass();

    // Repulsion acts along -r_hat
    let r_hat = r / r2.sqrt();
    Some(-acc * r_hat)
}
