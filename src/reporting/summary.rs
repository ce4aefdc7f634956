//! Per-frame snapshot of the chamber aggregates
//!
//! A `Snapshot` is what an external renderer reads after each tick. It can
//! be rendered as the text panel shown next to the chamber plot or as a CSV
//! row (paste straight into a spreadsheet to graph).

use serde::Serialize;

use crate::simulation::engine::Chamber;
use crate::simulation::species::Species;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time: f64, // s
    pub dt: f64, // s
    pub particles: usize,
    pub deuterons: usize,
    pub tritons: usize,
    pub helions: usize,
    pub neutrons: usize,
    pub reaction_count: u64,
    pub released_energy_mev: f64,
    pub sub_energy: f64, // J
    pub temperature: f64, // K
    pub pressure: f64, // Pa
    pub avg_velocity: f64, // m/s
}

pub const CSV_HEADER: &str =
    "time,dt,particles,deuterons,tritons,helions,neutrons,reactions,released_mev,sub_energy_j,temperature_k,pressure_pa,avg_velocity";

impl Snapshot {
    pub fn capture(chamber: &Chamber) -> Self {
        Self {
            time: chamber.time(),
            dt: chamber.dt(),
            particles: chamber.particles().len(),
            deuterons: chamber.count(Species::Deuteron),
            tritons: chamber.count(Species::Triton),
            helions: chamber.count(Species::Helion),
            neutrons: chamber.count(Species::Neutron),
            reaction_count: chamber.reaction_count(),
            released_energy_mev: chamber.total_energy_released(),
            sub_energy: chamber.sub_energy(),
            temperature: chamber.temperature(),
            pressure: chamber.pressure(),
            avg_velocity: chamber.avg_velocity(),
        }
    }

    pub fn csv_row(&self) -> String {
        format!(
            "{:e},{:e},{},{},{},{},{},{},{:.2},{:e},{:e},{:e},{:e}",
            self.time,
            self.dt,
            self.particles,
            self.deuterons,
            self.tritons,
            self.helions,
            self.neutrons,
            self.reaction_count,
            self.released_energy_mev,
            self.sub_energy,
            self.temperature,
            self.pressure,
            self.avg_velocity,
        )
    }
}

/// Multi-line status panel for one frame
pub fn panel(chamber: &Chamber) -> String {
    let s = chamber.snapshot();
    let mut out = String::new();
    out.push_str(&format!("Laser Init Energy:      {:.3e} [J]\n", chamber.laser_energy()));
    out.push_str(&format!("Particle Number:        {}\n", s.particles));
    out.push_str(&format!("Volume:                 {:.2e} [m3]\n", chamber.volume()));
    out.push_str(&format!("Time:                   {:.3e} [s]\n", s.time));
    out.push_str(&format!("Subtracted Energy:      {:.3e} [J]\n", s.sub_energy));
    out.push_str(&format!("Total reactions:        {}\n", s.reaction_count));
    out.push_str(&format!("Total released energy:  {:.2} [MeV]\n", s.released_energy_mev));
    out.push_str(&format!("Temperature:            {:.3e} [K]\n", s.temperature));
    out.push_str(&format!("Pressure:               {:.3e} [Pa]\n", s.pressure));
    out.push_str(&format!("Avg Velocity:           {:.3e} [m/s]\n", s.avg_velocity));
    for species in Species::ALL {
        out.push_str(&format!("  {:<3} {:>4}  ({})\n", species.tag(), chamber.count(species), species.color()));
    }
    out
}
