//! Orchestrator configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use reelcraft_core::PipelineStage;

/// Per-invocation knobs for the orchestrator.
///
/// All fields have sensible defaults; construct with [`Default`] or the
/// generated builder.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .model("sonnet-large".to_string())
///     .temperature(0.7)
///     .build()
///     .unwrap();
/// assert_eq!(config.model().as_deref(), Some("sonnet-large"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
#[builder(default, setter(into))]
pub struct PipelineConfig {
    /// Model override passed to the driver; `None` means the driver default.
    #[builder(setter(into, strip_option))]
    model: Option<String>,
    /// Sampling temperature; `None` means the driver default.
    #[builder(setter(into, strip_option))]
    temperature: Option<f32>,
    /// Output-token ceiling for the marketing stage.
    marketing_max_tokens: u32,
    /// Output-token ceiling for the art-direction stage.
    art_direction_max_tokens: u32,
    /// Output-token ceiling for the execution stage.
    execution_max_tokens: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: None,
            marketing_max_tokens: 2048,
            art_direction_max_tokens: 2048,
            // scene sequences are the largest payload by far
            execution_max_tokens: 4096,
        }
    }
}

impl PipelineConfig {
    /// Start building a configuration.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// The output-token ceiling for a stage.
    pub fn max_tokens_for(&self, stage: PipelineStage) -> u32 {
        match stage {
            PipelineStage::Marketing => self.marketing_max_tokens,
            PipelineStage::ArtDirection => self.art_direction_max_tokens,
            PipelineStage::Execution => self.execution_max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budgets() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_tokens_for(PipelineStage::Marketing), 2048);
        assert_eq!(config.max_tokens_for(PipelineStage::Execution), 4096);
        assert!(config.model().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PipelineConfig::builder()
            .execution_max_tokens(8192u32)
            .build()
            .unwrap();
        assert_eq!(config.max_tokens_for(PipelineStage::Execution), 8192);
        // untouched fields keep their defaults
        assert_eq!(config.max_tokens_for(PipelineStage::Marketing), 2048);
    }
}
