//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use reelcraft_core::{BrandStyle, EmotionalTone, SceneType};
use reelcraft_effects::EffectIntensity;

/// Reelcraft - structured video plans from product descriptions
#[derive(Parser, Debug)]
#[command(name = "reelcraft")]
#[command(about = "Structured video plans from product descriptions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the three-stage pipeline from a request file, replaying a
    /// pre-recorded response transcript
    Plan {
        /// Path to the pipeline request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Path to the response transcript JSON file (array of raw
        /// responses, one per stage, in order)
        #[arg(long)]
        transcript: PathBuf,

        /// Also print the execution trace
        #[arg(long)]
        trace: bool,
    },

    /// Effect selection commands
    #[command(subcommand)]
    Effects(EffectsCommands),
}

/// Effect selection subcommands
#[derive(Subcommand, Debug)]
pub enum EffectsCommands {
    /// Select effects for one scene
    Select {
        /// Narrative role of the scene
        #[arg(long)]
        role: SceneType,

        /// Emotional tone
        #[arg(long)]
        tone: EmotionalTone,

        /// Brand style
        #[arg(long)]
        brand: BrandStyle,

        /// Scene motion intensity
        #[arg(long, default_value = "medium")]
        intensity: EffectIntensity,

        /// The scene places at least one image
        #[arg(long)]
        images: bool,

        /// The scene places a product screenshot
        #[arg(long)]
        screenshot: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Select effects for all five narrative roles at once
    All {
        /// Emotional tone
        #[arg(long)]
        tone: EmotionalTone,

        /// Brand style
        #[arg(long)]
        brand: BrandStyle,

        /// Scene motion intensity
        #[arg(long, default_value = "medium")]
        intensity: EffectIntensity,

        /// The scenes place at least one image
        #[arg(long)]
        images: bool,

        /// The scenes place a product screenshot
        #[arg(long)]
        screenshot: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List the effect registry
    List {
        /// Filter to one category (reveal, transition, emphasis, ambient)
        #[arg(long)]
        category: Option<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
