//! Headless driver loop
//!
//! Steps a [`Scenario`] until its stop time (or step cap) and writes a report
//! every `report_every` ticks. This is the terminal stand-in for the
//! animated plot: the chamber only ever sees `step()` and read accessors.

use std::io::Write;

use log::{info, warn};

use crate::error::SimResult;
use crate::reporting::summary::{panel, CSV_HEADER};
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Panel,
    Csv,
    Yaml, // one document per report
}

/// Returns the number of ticks taken
pub fn run_headless<W: Write>(scenario: &mut Scenario, out: &mut W, format: OutputFormat) -> SimResult<usize> {
    if format == OutputFormat::Csv {
        writeln!(out, "{CSV_HEADER}")?;
    }

    let mut steps = 0;
    // Keep stepping while time <= stop_time, the last frame lands just past it
    while scenario.chamber.time() <= scenario.stop_time {
        if steps >= scenario.max_steps {
            warn!(
                "stopped after {} steps at t = {:.3e} s, before stop time {:.3e} s",
                steps,
                scenario.chamber.time(),
                scenario.stop_time
            );
            break;
        }

        scenario.chamber.step();
        steps += 1;

        if steps % scenario.report_every.max(1) == 0 {
            match format {
                OutputFormat::Panel => writeln!(out, "--- step {steps} ---\n{}", panel(&scenario.chamber))?,
                OutputFormat::Csv => writeln!(out, "{}", scenario.chamber.snapshot().csv_row())?,
                OutputFormat::Yaml => {
                    let doc = serde_yaml::to_string(&scenario.chamber.snapshot())?;
                    write!(out, "---\n{doc}")?;
                }
            }
        }
    }

    info!(
        "finished after {} steps: t = {:.3e} s, {} reactions, {:.2} MeV released",
        steps,
        scenario.chamber.time(),
        scenario.chamber.reaction_count(),
        scenario.chamber.total_energy_released()
    );
    Ok(steps)
}
