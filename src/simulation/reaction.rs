//! D + T -> He + n reaction rule
//!
//! The rule is purely geometric: a deuteron and a triton closer than the
//! chamber's minimum fusion distance always fuse. Counters live in the
//! chamber; this module only builds the products.

use super::constants::{FUSION_ENERGY_MEV, MEV_IN_JOULES, NEUTRON_ENERGY_RATIO};
use super::species::Species;
use super::states::{NVec3, Particle};

/// The two particles replacing a fused pair
#[derive(Debug, Clone, Copy)]
pub struct FusionProducts {
    pub helion: Particle,
    pub neutron: Particle,
}

impl FusionProducts {
    pub fn kinetic_energy(&self) -> f64 {
        self.helion.kinetic_energy() + self.neutron.kinetic_energy()
    }
}

/// Energy released per reaction (J)
pub fn fusion_energy_joules() -> f64 {
    FUSION_ENERGY_MEV * MEV_IN_JOULES
}

/// True when the pair is exactly one deuteron and one triton, in either order
pub fn is_fusable_pair(p1: &Particle, p2: &Particle) -> bool {
    matches!(
        (p1.species, p2.species),
        (Species::Deuteron, Species::Triton) | (Species::Triton, Species::Deuteron)
    )
}

pub fn fusion_can_occur(p1: &Particle, p2: &Particle, min_fusion_distance: f64) -> bool {
    is_fusable_pair(p1, p2) && p1.distance_to(p2) < min_fusion_distance
}

/// Fuse a deuteron/triton pair given in any order.
///
/// The helion appears where the triton was and follows the triton's former
/// heading; the neutron appears where the deuteron was and follows the
/// deuteron's heading. The reactants' kinetic energy plus the reaction
/// energy is split between them, the neutron taking `NEUTRON_ENERGY_RATIO`.
///
/// A reactant at rest has no heading. Its product then moves opposite to the
/// other product, and if both reactants are at rest the neutron leaves along
/// +x and the helion along -x.
///
/// Returns `None` if the pair is not a deuteron and a triton.
pub fn execute_fusion(p1: &Particle, p2: &Particle) -> Option<FusionProducts> {
    let (deuteron, triton) = match (p1.species, p2.species) {
        (Species::Deuteron, Species::Triton) => (p1, p2),
        (Species::Triton, Species::Deuteron) => (p2, p1),
        _ => return None,
    };

    let input_energy = triton.kinetic_energy() + deuteron.kinetic_energy();
    let output_energy = input_energy + fusion_energy_joules();
    let neutron_energy = NEUTRON_ENERGY_RATIO * output_energy;
    let helion_energy = output_energy - neutron_energy;

    let (helion_dir, neutron_dir) = match (triton.direction(), deuteron.direction()) {
        (Some(t), Some(d)) => (t, d),
        (Some(t), None) => (t, -t),
        (None, Some(d)) => (-d, d),
        (None, None) => (-NVec3::x(), NVec3::x()),
    };

    let helion_speed = (2.0 * helion_energy / Species::Helion.mass()).sqrt();
    let neutron_speed = (2.0 * neutron_energy / Species::Neutron.mass()).sqrt();

    Some(FusionProducts {
        helion: Particle::new(Species::Helion, triton.x, helion_dir * helion_speed),
        neutron: Particle::new(Species::Neutron, deuteron.x, neutron_dir * neutron_speed),
    })
}
