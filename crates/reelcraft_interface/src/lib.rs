//! Trait definitions for the Reelcraft video plan generator.
//!
//! This crate defines the seam between the creative pipeline and the
//! external text-completion service, plus the execution records the
//! orchestrator hands back to callers for diagnostics.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod execution;
mod traits;

pub use execution::{PipelineExecution, StageExecution};
pub use traits::CompletionDriver;
