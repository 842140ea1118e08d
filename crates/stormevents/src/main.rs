// crates/stormevents/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use stormevents_core::pipeline::{self, PipelinePaths};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Storm events data pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the cleaning pipeline and print its summary as JSON
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Raw storm extract (defaults to the cache location)
    #[arg(long)]
    raw: Option<PathBuf>,
    /// State reference table with names and coordinates
    #[arg(long)]
    states: Option<PathBuf>,
    /// Where to write the cleaned, enriched table
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let mut paths = PipelinePaths::default();
            if let Some(raw) = args.raw {
                paths.raw = raw;
            }
            if let Some(states) = args.states {
                paths.states = states;
            }
            if let Some(output) = args.output {
                paths.output = output;
            }

            let summary = pipeline::run(&paths)?;
            info!(rows = summary.rows_written, "pipeline finished");
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
