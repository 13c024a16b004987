//! Orchestrator-boundary pipeline errors.

use reelcraft_core::PipelineStage;

/// Characters of raw model output retained on a pipeline error.
const RAW_OUTPUT_CHARS: usize = 600;

/// A generation stage failed.
///
/// Extraction, validation, and transport failures all collapse into this
/// type at the orchestrator boundary; the stage tag is always preserved so
/// callers can tell which of the three generation steps failed. Not
/// persisted; surfaced to the caller of the orchestrator.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error in stage '{}': {}", stage, message)]
pub struct PipelineError {
    /// Which generation stage failed.
    pub stage: PipelineStage,
    /// Human-readable description of the failure.
    pub message: String,
    /// Truncated raw model output, when the stage got that far.
    pub raw_output: Option<String>,
}

impl PipelineError {
    /// Create a new PipelineError for the given stage.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelcraft_core::PipelineStage;
    /// use reelcraft_error::PipelineError;
    ///
    /// let err = PipelineError::new(PipelineStage::Marketing, "no JSON in response");
    /// assert_eq!(err.stage, PipelineStage::Marketing);
    /// assert!(err.raw_output.is_none());
    /// ```
    pub fn new(stage: PipelineStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            raw_output: None,
        }
    }

    /// Attach the raw model output, truncated to a diagnostic payload.
    pub fn with_raw_output(mut self, raw: &str) -> Self {
        self.raw_output = Some(raw.chars().take(RAW_OUTPUT_CHARS).collect());
        self
    }
}
