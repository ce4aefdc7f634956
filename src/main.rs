use dtsim::{ScenarioConfig, Scenario};
use dtsim::{run_headless, OutputFormat};
use dtsim::{bench_step, bench_step_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "D-T fusion chamber particle simulation")]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "full_chamber.yaml")]
    file_name: String,

    /// Print CSV rows instead of the status panel
    #[arg(long)]
    csv: bool,

    /// Print one YAML snapshot document per report
    #[arg(long, conflicts_with = "csv")]
    yaml: bool,

    /// Time the chamber tick instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV cost curve
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve()?;
        } else {
            bench_step()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("failed to build scenario")?;

    let format = if args.csv {
        OutputFormat::Csv
    } else if args.yaml {
        OutputFormat::Yaml
    } else {
        OutputFormat::Panel
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_headless(&mut scenario, &mut out, format)?;

    Ok(())
}
