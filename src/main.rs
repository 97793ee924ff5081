//! Command-line runner: one full run of the splitting loop, one report line
//! per step

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hue_spread::simulation::Simulation;
use hue_spread::strategy::SplitRule;

#[derive(Parser)]
#[command(name = "hue-spread")]
#[command(about = "Greedy interval-splitting experiments for online color assignment")]
struct Cli {
    /// Divisor controlling where each new color lands in the widest gap;
    /// doubles as the label on report lines. Defaults to 7/4.
    divisor: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rule = match cli.divisor {
        Some(arg) => {
            // Confirmation comes first, before the argument is validated
            println!("using divisor: {}", arg);
            SplitRule::parse(&arg)?
        }
        None => SplitRule::seven_fourths(),
    };

    let mut sim = Simulation::new(rule);
    while let Some(report) = sim.step() {
        println!("{}", report);
    }

    Ok(())
}
