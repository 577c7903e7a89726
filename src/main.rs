//! consensus-engine command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use consensus_engine::config::AppConfig;
use consensus_engine::scenario::{Scenario, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "consensus-engine")]
#[command(about = "Multi-criteria group decision engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a scenario file and print the JSON report
    Evaluate {
        /// Path to the scenario JSON document
        scenario: PathBuf,

        /// Fail when a decision maker left pairs unjudged
        #[arg(long)]
        strict: bool,

        /// Print the report on a single line
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    config.logging.init().context("initialising logging")?;

    match cli.command {
        Command::Evaluate {
            scenario,
            strict,
            compact,
        } => {
            debug!(path = %scenario.display(), "Loading scenario");
            let document = Scenario::from_path(&scenario)
                .with_context(|| format!("reading scenario {}", scenario.display()))?;

            let runner = ScenarioRunner::new()
                .with_strict_completeness(strict || config.engine.strict_completeness);
            let report = runner.run(&document).await.context("evaluating scenario")?;

            let output = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", output);
        }
    }

    Ok(())
}
