use sheetfall::run_2d;
use sheetfall::{Scenario, ScenarioConfig};
use sheetfall::{bench_quadrature, bench_step};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sheet_drop.yaml")]
    file_name: String,

    /// Run the quadrature/step timing harness instead of the viewer
    #[arg(long)]
    bench: bool,

    /// Print the force-vs-separation curve for the scenario and exit
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Print force samples from just above contact out to the ball's starting
/// separation, one `z F(z)` pair per line.
fn print_force_curve(scenario: &Scenario) -> Result<()> {
    let system = &scenario.system;

    let z_max = system.ball.x - system.sheet.x;
    let curve = scenario
        .forces
        .sample_curve(&system.sheet, system.ball.m, 0.1, z_max, 100)?;
    for (z, force) in curve {
        println!("{z:.4} {force:.9e}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_quadrature();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    if args.curve {
        return print_force_curve(&scenario);
    }

    run_2d(scenario);

    Ok(())
}
