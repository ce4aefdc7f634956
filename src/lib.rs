pub mod error;
pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Particle, NVec3};
pub use simulation::species::{Species, NeutronMetadata, NEUTRON_METADATA};
pub use simulation::engine::Chamber;
pub use simulation::params::Parameters;
pub use simulation::laser::Laser;
pub use simulation::reaction::{execute_fusion, fusion_can_occur, FusionProducts};
pub use simulation::scenario::{Scenario, ScenarioId, gas_velocity};

pub use configuration::config::{ScenarioConfig, RunConfig, ChamberConfig, LaserConfig, ParametersConfig};

pub use reporting::summary::Snapshot;
pub use reporting::headless::{run_headless, OutputFormat};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
