// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitness Report Binary
//!
//! Renders a summary for a single activity record given on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitness_tracker::{
    config::{resolve_config_path, FitnessConfig},
    constants::env_config,
    logging::LoggingConfig,
    ReportFormatter,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "fitness-report")]
#[command(about = "Distance, speed and calorie summary for an activity record")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Body weight in kilograms (default: FITNESS_WEIGHT_KG)
    #[arg(long, global = true)]
    weight: Option<f64>,

    /// Height in centimeters (default: FITNESS_HEIGHT_CM)
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Activity label config file (default: FITNESS_CONFIG or ./fitness_config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the report as JSON
    #[arg(long, global = true, default_value = "false")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a `steps,activity,duration` record
    Training {
        /// Record such as "6000,Running,40m"
        record: String,
    },
    /// Summarize a `steps,duration` record
    DaySteps {
        /// Record such as "8000,1h20m"
        record: String,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    LoggingConfig::from_env().init()?;

    let cli = Cli::parse();

    let weight = cli
        .weight
        .or_else(env_config::default_weight_kg)
        .context("Weight is required: pass --weight or set FITNESS_WEIGHT_KG")?;
    let height = cli
        .height
        .or_else(env_config::default_height_cm)
        .context("Height is required: pass --height or set FITNESS_HEIGHT_CM")?;

    let config = FitnessConfig::load(resolve_config_path(cli.config))?;
    let formatter = ReportFormatter::new(config);

    let output = match &cli.command {
        Commands::Training { record } => {
            info!(record = %record, "Building training report");
            let outcome = formatter.training_report(record, weight, height)?;
            render(&outcome, cli.json)?
        }
        Commands::DaySteps { record } => {
            info!(record = %record, "Building day steps report");
            let report = formatter.day_steps_report(record, weight, height)?;
            render(&report, cli.json)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn render<T>(value: &T, json: bool) -> Result<String>
where
    T: serde::Serialize + std::fmt::Display,
{
    if json {
        serde_json::to_string_pretty(value).context("Failed to serialize report")
    } else {
        Ok(value.to_string())
    }
}
