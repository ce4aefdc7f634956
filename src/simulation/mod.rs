pub mod constants;
pub mod species;
pub mod states;
pub mod params;
pub mod forces;
pub mod reaction;
pub mod integrator;
pub mod boundary;
pub mod laser;
pub mod scenario;
pub mod engine;
