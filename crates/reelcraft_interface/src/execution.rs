//! Pipeline execution records.
//!
//! These structures capture what was actually sent to and received from the
//! completion service for each stage, for diagnostics and replay. They are
//! created fresh per pipeline invocation and never persisted by this core.

use reelcraft_core::PipelineStage;
use serde::{Deserialize, Serialize};

/// Record of a single completed stage call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageExecution {
    /// Which generation stage ran.
    pub stage: PipelineStage,
    /// The user message that was sent (the system prompt is fixed per stage).
    pub user_message: String,
    /// The model used, if the configuration overrode the driver default.
    pub model: Option<String>,
    /// The max_output_tokens applied to the call.
    pub max_output_tokens: u32,
    /// The raw text response from the service, pre-extraction.
    pub response: String,
    /// Position in the execution sequence (0-indexed).
    pub sequence_number: usize,
}

/// Complete execution trace for one pipeline run.
///
/// Only produced for runs that completed all three stages; a failed run
/// surfaces a stage-tagged error instead, with its own truncated payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineExecution {
    /// Ordered list of stage executions (marketing, art direction, execution).
    pub stages: Vec<StageExecution>,
}
