//! Chamber engine
//!
//! The chamber owns every particle and advances them one adaptive tick at a
//! time. A tick is, in order:
//! - pairwise pass: fuse eligible D/T pairs in place, otherwise apply the
//!   Coulomb kick of `p[j]` on `p[i]`
//! - adaptive dt from the fastest particle
//! - drift with the new dt
//! - wall reflection with damping and ensemble-wide energy redistribution
//! - aggregate observables (temperature, pressure, mean speed)
//! - time += dt

use log::{debug, info, warn};
use rand::Rng;

use crate::error::{SimError, SimResult};
use crate::reporting::summary::Snapshot;
use crate::simulation::boundary::reflect_particle;
use crate::simulation::constants::{BOLTZMANN, FUSION_ENERGY_MEV, M_DEUTERON, ROOM_TEMPERATURE};
use crate::simulation::integrator::{adaptive_timestep, advance_positions};
use crate::simulation::laser::Laser;
use crate::simulation::params::{Parameters, DEFAULT_DT, DEFAULT_WALL_COEFF};
use crate::simulation::reaction::{execute_fusion, fusion_can_occur, FusionProducts};
use crate::simulation::scenario::{initial_particles, Preset, ScenarioId};
use crate::simulation::species::Species;
use crate::simulation::states::{NVec3, Particle};

#[derive(Debug, Clone)]
pub struct Chamber {
    dims: NVec3, // box edges (m), corner at the origin
    scenario: ScenarioId,
    preset: Preset,
    particle_pairs: usize,
    params: Parameters,
    laser_energy: f64, // J deposited by the laser at construction
    particles: Vec<Particle>,
    seeded: bool,

    // Aggregates
    time: f64, // s
    dt: f64, // s
    sub_energy: f64, // J removed by the walls
    total_energy_released: f64, // MeV
    reaction_count: u64,
    temperature: f64, // K
    pressure: f64, // Pa
    avg_velocity: f64, // m/s
}

impl Chamber {
    /// Build an empty chamber for `scenario` (1-6).
    ///
    /// Presets 1-5 replace `dims` by their own cube and presets 2-5 hold a
    /// single pair whatever `particle_pairs` says. The laser energy is
    /// evaluated once here from the final surface area.
    pub fn new(laser: &Laser, dims: [f64; 3], scenario: u8, particle_pairs: usize) -> SimResult<Self> {
        let scenario = ScenarioId::try_from(scenario)?;
        let preset = scenario.preset();

        let dims = match preset.chamber_size {
            Some(size) => NVec3::repeat(size),
            None => NVec3::from(dims),
        };
        if !dims.iter().all(|l| l.is_finite() && *l > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "chamber dimensions must be finite and > 0, got {:?}",
                dims.as_slice()
            )));
        }

        let particle_pairs = preset.fixed_pairs().unwrap_or(particle_pairs);
        if particle_pairs == 0 {
            return Err(SimError::InvalidParameter("particle_pairs must be > 0".into()));
        }

        let params = Parameters {
            min_fusion_distance: preset.min_fusion_distance(),
            wall_coeff: DEFAULT_WALL_COEFF,
            adaptive_dt: true,
            n_frames: preset.n_frames,
        };
        params.validate()?;

        let mut chamber = Self {
            dims,
            scenario,
            preset,
            particle_pairs,
            params,
            laser_energy: 0.0,
            particles: Vec::new(),
            seeded: false,
            time: 0.0,
            dt: DEFAULT_DT,
            sub_energy: 0.0,
            total_energy_released: 0.0,
            reaction_count: 0,
            temperature: ROOM_TEMPERATURE,
            pressure: 0.0,
            avg_velocity: 0.0,
        };
        chamber.laser_energy = laser.initial_energy(chamber.surface_area());

        Ok(chamber)
    }

    /// Replace the tunables taken from the scenario table
    pub fn set_parameters(&mut self, params: Parameters) -> SimResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Speed given to every particle at t = 0 (m/s).
    ///
    /// The custom scenario splits the laser energy evenly over all particles
    /// and converts it with the deuteron mass.
    pub fn start_speed(&self) -> f64 {
        match self.preset.start_speed {
            Some(speed) => speed,
            None => {
                let particle_energy = self.laser_energy / (2 * self.particle_pairs) as f64;
                (2.0 * particle_energy.max(0.0) / M_DEUTERON).sqrt()
            }
        }
    }

    /// Place the scenario's particles. Must be called exactly once, before stepping.
    pub fn create_particles<R: Rng>(&mut self, rng: &mut R) -> SimResult<()> {
        if self.seeded {
            return Err(SimError::AlreadySeeded);
        }

        let start_speed = self.start_speed();
        self.particles = initial_particles(
            self.preset.layout,
            &self.dims,
            self.particle_pairs,
            start_speed,
            self.temperature,
            rng,
        );
        self.dt = adaptive_timestep(self.dims.x, self.params.n_frames, start_speed).unwrap_or(DEFAULT_DT);
        self.seeded = true;
        Ok(())
    }

    /// Seed the chamber with an explicit particle list instead of the
    /// scenario layout. Same one-shot rule as [`Chamber::create_particles`].
    /// The collection keeps the length of `particles` for the rest of the run.
    pub fn seed_particles(&mut self, particles: Vec<Particle>) -> SimResult<()> {
        if self.seeded {
            return Err(SimError::AlreadySeeded);
        }
        if particles.is_empty() {
            return Err(SimError::InvalidParameter("cannot seed a chamber with no particles".into()));
        }

        let max_speed = particles.iter().map(Particle::speed).fold(0.0, f64::max);
        self.particles = particles;
        self.dt = adaptive_timestep(self.dims.x, self.params.n_frames, max_speed).unwrap_or(DEFAULT_DT);
        self.seeded = true;
        Ok(())
    }

    /// Advance the chamber by one adaptive tick
    pub fn step(&mut self) {
        let n = self.particles.len();
        if n == 0 {
            warn!("step() on a chamber with no particles, call create_particles() first");
            return;
        }

        // Pairwise pass over the live collection: a fused slot is seen with
        // its new identity by every later pair of this tick
        let mut max_speed = 0.0_f64;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let other = self.particles[j];
                if fusion_can_occur(&self.particles[i], &other, self.params.min_fusion_distance) {
                    if let Some(products) = execute_fusion(&self.particles[i], &other) {
                        self.record_fusion(i, j, products);
                    }
                } else {
                    self.particles[i].apply_electrostatic_influence(&other, self.dt);
                }
            }
            max_speed = max_speed.max(self.particles[i].speed());
        }

        if self.params.adaptive_dt {
            if let Some(dt) = adaptive_timestep(self.dims.x, self.params.n_frames, max_speed) {
                if dt != self.dt {
                    debug!("dt {:.3e} -> {:.3e} s (max speed {:.3e} m/s)", self.dt, dt, max_speed);
                }
                self.dt = dt;
            }
        }

        advance_positions(&mut self.particles, self.dt);
        self.clip_to_bounds();
        self.time += self.dt;
    }

    fn record_fusion(&mut self, i: usize, j: usize, products: FusionProducts) {
        self.reaction_count += 1;
        self.total_energy_released += FUSION_ENERGY_MEV;
        self.particles[i] = products.helion;
        self.particles[j] = products.neutron;
        info!(
            "fusion #{} at t = {:.3e} s (slots {}, {}), {:.2} MeV released so far",
            self.reaction_count, self.time, i, j, self.total_energy_released
        );
    }

    /// Reflect every particle back into the box and refresh the aggregates.
    ///
    /// Each particle's kinetic energy and speed are summed right after its own
    /// reflections, so energy handed out by later collisions in the same pass
    /// only shows up in the next tick's aggregates.
    fn clip_to_bounds(&mut self) {
        let n = self.particles.len();
        let mut ke_sum = 0.0;
        let mut speed_sum = 0.0;

        for idx in 0..n {
            self.sub_energy += reflect_particle(&mut self.particles, idx, &self.dims, self.params.wall_coeff);
            let p = &self.particles[idx];
            ke_sum += p.kinetic_energy();
            speed_sum += p.speed();
        }

        let count = n as f64;
        let mean_ke = ke_sum / count;
        self.avg_velocity = speed_sum / count;
        self.pressure = count * mean_ke / self.volume();
        self.temperature = mean_ke / (3.0 * BOLTZMANN);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub fn count(&self, species: Species) -> usize {
        self.particles.iter().filter(|p| p.species == species).count()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn particle_pairs(&self) -> usize {
        self.particle_pairs
    }

    pub fn dims(&self) -> &NVec3 {
        &self.dims
    }

    pub fn volume(&self) -> f64 {
        self.dims.x * self.dims.y * self.dims.z
    }

    pub fn surface_area(&self) -> f64 {
        let (x, y, z) = (self.dims.x, self.dims.y, self.dims.z);
        2.0 * (x * y + x * z + y * z)
    }

    pub fn min_fusion_distance(&self) -> f64 {
        self.params.min_fusion_distance
    }

    pub fn laser_energy(&self) -> f64 {
        self.laser_energy
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Cumulative energy removed by wall collisions (J)
    pub fn sub_energy(&self) -> f64 {
        self.sub_energy
    }

    /// Cumulative fusion energy released (MeV)
    pub fn total_energy_released(&self) -> f64 {
        self.total_energy_released
    }

    pub fn reaction_count(&self) -> u64 {
        self.reaction_count
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn avg_velocity(&self) -> f64 {
        self.avg_velocity
    }
}
