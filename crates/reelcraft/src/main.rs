//! Reelcraft CLI binary.
//!
//! This binary provides command-line access to Reelcraft's functionality:
//! - Generate a video plan from a request file, replaying a response transcript
//! - Select visual effects for a scene context

use clap::Parser;
use reelcraft_core::init_telemetry;
use tracing_subscriber::filter::LevelFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_effects_command, handle_plan_command};

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    init_telemetry(log_level)?;

    match cli.command {
        Commands::Plan {
            request,
            transcript,
            trace,
        } => {
            handle_plan_command(&request, &transcript, trace).await?;
        }

        Commands::Effects(effects_cmd) => {
            handle_effects_command(effects_cmd)?;
        }
    }

    Ok(())
}
