//! Scenario presets and initial conditions
//!
//! A scenario fixes the chamber geometry, the number of particles, and how
//! they start out. `Scenario` is the runtime bundle built from a
//! [`ScenarioConfig`]: a seeded chamber, the seed that produced it, and the
//! run settings read by the driver.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::constants::BOLTZMANN;
use crate::simulation::engine::Chamber;
use crate::simulation::species::Species;
use crate::simulation::states::{NVec3, Particle};

/// Fusion distance as a fraction of the preset chamber edge
pub const FUSION_DISTANCE_RATIO: f64 = 5e-2;

/// Fusion distance for chambers with user-supplied dimensions (m)
pub const CUSTOM_FUSION_DISTANCE: f64 = 5e-4;

/// Fraction by which the triton sits above the z midline in the two-particle presets
pub const Z_OFFSET_FACTOR: f64 = 1.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    FullChamber,
    HeadOnCollision,
    HeadOnMiss,
    AngledCollision,
    AngledMiss,
    Custom,
}

/// How particles are placed at t = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `particle_pairs` deuteron/triton pairs at random positions
    Scattered,
    /// One pair approaching along x on the y/z midline
    HeadOn,
    /// One pair approaching along x while both drift in +y
    Angled,
}

/// One row of the scenario table
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub chamber_size: Option<f64>, // cube edge (m), None keeps the given dimensions
    pub start_speed: Option<f64>, // m/s, None derives it from the laser
    pub n_frames: u32, // frames for the fastest particle to cross the chamber
    pub layout: Layout,
}

impl TryFrom<u8> for ScenarioId {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(ScenarioId::FullChamber),
            2 => Ok(ScenarioId::HeadOnCollision),
            3 => Ok(ScenarioId::HeadOnMiss),
            4 => Ok(ScenarioId::AngledCollision),
            5 => Ok(ScenarioId::AngledMiss),
            6 => Ok(ScenarioId::Custom),
            other => Err(SimError::InvalidScenario(other)),
        }
    }
}

impl ScenarioId {
    pub fn id(&self) -> u8 {
        match self {
            ScenarioId::FullChamber => 1,
            ScenarioId::HeadOnCollision => 2,
            ScenarioId::HeadOnMiss => 3,
            ScenarioId::AngledCollision => 4,
            ScenarioId::AngledMiss => 5,
            ScenarioId::Custom => 6,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::FullChamber => "Chamber full of particles",
            ScenarioId::HeadOnCollision => "Pair of particles moving towards each other (with collision)",
            ScenarioId::HeadOnMiss => "Pair of particles moving towards each other (without collision)",
            ScenarioId::AngledCollision => "Pair of particles at an angle (with collision)",
            ScenarioId::AngledMiss => "Pair of particles at an angle (without collision)",
            ScenarioId::Custom => "Custom simulation",
        }
    }

    /// The demonstration speeds sit on either side of the Coulomb barrier at
    /// the fusion distance (roughly 7.4e4 m/s for a 1e-11 m threshold).
    pub fn preset(&self) -> Preset {
        match self {
            ScenarioId::FullChamber => Preset {
                chamber_size: Some(1e-2),
                start_speed: Some(1e6),
                n_frames: 5,
                layout: Layout::Scattered,
            },
            ScenarioId::HeadOnCollision => Preset {
                chamber_size: Some(2e-10),
                start_speed: Some(5e5),
                n_frames: 20,
                layout: Layout::HeadOn,
            },
            ScenarioId::HeadOnMiss => Preset {
                chamber_size: Some(2e-10),
                start_speed: Some(2e4),
                n_frames: 20,
                layout: Layout::HeadOn,
            },
            ScenarioId::AngledCollision => Preset {
                chamber_size: Some(2e-10),
                start_speed: Some(5e5),
                n_frames: 20,
                layout: Layout::Angled,
            },
            ScenarioId::AngledMiss => Preset {
                chamber_size: Some(2e-10),
                start_speed: Some(2e4),
                n_frames: 20,
                layout: Layout::Angled,
            },
            ScenarioId::Custom => Preset {
                chamber_size: None,
                start_speed: None,
                n_frames: 5,
                layout: Layout::Scattered,
            },
        }
    }
}

impl Preset {
    pub fn min_fusion_distance(&self) -> f64 {
        match self.chamber_size {
            Some(size) => size * FUSION_DISTANCE_RATIO,
            None => CUSTOM_FUSION_DISTANCE,
        }
    }

    /// Two-particle demonstrations always hold exactly one pair
    pub fn fixed_pairs(&self) -> Option<usize> {
        match self.layout {
            Layout::Scattered => None,
            Layout::HeadOn | Layout::Angled => Some(1),
        }
    }
}

/// Thermal speed scale used to draw the random heading of scattered particles:
/// `sqrt(1.5 k T / (m / 2)) / pairs * 2`
pub fn gas_velocity(species: Species, temperature: f64, particle_pairs: usize) -> f64 {
    let vsqr = (1.5 * BOLTZMANN * temperature) / (species.mass() / 2.0);
    vsqr.max(0.0).sqrt() / particle_pairs.max(1) as f64 * 2.0
}

fn random_position<R: Rng>(rng: &mut R, dims: &NVec3) -> NVec3 {
    NVec3::new(
        rng.gen_range(0.0..=dims.x),
        rng.gen_range(0.0..=dims.y),
        rng.gen_range(0.0..=dims.z),
    )
}

/// Random heading from a vector drawn uniformly in the cube `[-g, g]^3`
fn random_heading<R: Rng>(rng: &mut R, g: f64) -> NVec3 {
    let g = if g.is_finite() { g.abs() } else { 0.0 };
    let v = NVec3::new(
        rng.gen_range(-g..=g),
        rng.gen_range(-g..=g),
        rng.gen_range(-g..=g),
    );
    v.try_normalize(0.0).unwrap_or_else(NVec3::x)
}

/// Build the t = 0 particle list for `layout`.
///
/// Scattered layouts draw, for each pair, a deuteron position and heading and
/// then a triton position and heading, in that order, so a given seed always
/// yields the same chamber.
pub fn initial_particles<R: Rng>(
    layout: Layout,
    dims: &NVec3,
    particle_pairs: usize,
    start_speed: f64,
    temperature: f64,
    rng: &mut R,
) -> Vec<Particle> {
    let (x, y, z) = (dims.x, dims.y, dims.z);
    let s = start_speed;

    match layout {
        Layout::Scattered => {
            let mut particles = Vec::with_capacity(2 * particle_pairs);
            for _ in 0..particle_pairs {
                for species in [Species::Deuteron, Species::Triton] {
                    let pos = random_position(rng, dims);
                    let g = gas_velocity(species, temperature, particle_pairs);
                    let vel = random_heading(rng, g) * s;
                    particles.push(Particle::new(species, pos, vel));
                }
            }
            particles
        }
        Layout::HeadOn => vec![
            Particle::new(Species::Deuteron, NVec3::new(0.0, y / 2.0, z / 2.0), NVec3::new(s, 0.0, 0.0)),
            Particle::new(Species::Triton, NVec3::new(x, y / 2.0, Z_OFFSET_FACTOR * z / 2.0), NVec3::new(-s, 0.0, 0.0)),
        ],
        Layout::Angled => vec![
            Particle::new(Species::Deuteron, NVec3::new(0.0, 0.0, z / 2.0), NVec3::new(s, s, 0.0)),
            Particle::new(Species::Triton, NVec3::new(x, 0.0, Z_OFFSET_FACTOR * z / 2.0), NVec3::new(-s, s, 0.0)),
        ],
    }
}

/// Fully-initialized run: a seeded chamber plus the settings the driver needs
pub struct Scenario {
    pub chamber: Chamber,
    pub seed: u64, // seed of the StdRng that placed the particles
    pub stop_time: f64, // simulated seconds
    pub report_every: usize, // ticks between reports
    pub max_steps: usize, // hard cap on ticks
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Laser (runtime) from LaserConfig
        let laser = cfg.laser.to_laser();

        // Chamber geometry and particle count
        let dims = cfg.chamber.dimensions()?;
        let mut chamber = Chamber::new(&laser, dims, cfg.scenario, cfg.particle_pairs.unwrap_or(5))?;

        // Optional overrides on top of the scenario table
        let mut params = chamber.parameters().clone();
        let p_cfg = &cfg.parameters;
        params.wall_coeff = p_cfg.wall_coeff.unwrap_or(params.wall_coeff);
        params.min_fusion_distance = p_cfg.min_fusion_distance.unwrap_or(params.min_fusion_distance);
        params.adaptive_dt = p_cfg.adaptive_dt.unwrap_or(params.adaptive_dt);
        params.n_frames = p_cfg.n_frames.unwrap_or(params.n_frames);
        chamber.set_parameters(params)?;

        // Seeded random source owned by the scenario
        let seed = cfg.run.seed.unwrap_or(0);
        let mut rng = StdRng::seed_from_u64(seed);
        chamber.create_particles(&mut rng)?;

        let stop_time = cfg.run.stop_time.unwrap_or(1e-7);
        if !(stop_time.is_finite() && stop_time > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "stop_time must be finite and > 0, got {stop_time}"
            )));
        }

        info!(
            "scenario {} ({}): {} particles, chamber {:.3e} x {:.3e} x {:.3e} m",
            chamber.scenario().id(),
            chamber.scenario().description(),
            chamber.particles().len(),
            chamber.dims().x,
            chamber.dims().y,
            chamber.dims().z,
        );

        Ok(Self {
            chamber,
            seed,
            stop_time,
            report_every: cfg.run.report_every.unwrap_or(1).max(1),
            max_steps: cfg.run.max_steps.unwrap_or(100_000),
        })
    }
}
