//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! reelcraft binary.

mod commands;
mod effects;
mod plan;

pub use commands::{Cli, Commands};
pub use effects::handle_effects_command;
pub use plan::handle_plan_command;
