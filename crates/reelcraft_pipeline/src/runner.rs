//! Single-stage execution against the completion driver.

use reelcraft_core::{CompletionRequest, PipelineStage};
use reelcraft_error::{PipelineError, ReelcraftResult};
use reelcraft_interface::{CompletionDriver, StageExecution};

use crate::config::PipelineConfig;
use crate::extraction::{extract_json, parse_stage};
use crate::prompt::system_prompt;

/// Runs one stage: build the request, call the driver, extract and decode.
///
/// Every failure on the way (transport, a text-free response, extraction,
/// strict decoding) is tagged with the stage before surfacing. Validation
/// of the decoded value stays with the caller, which holds the cross-stage
/// context the checks need.
pub(crate) struct StageRunner<'a, D> {
    driver: &'a D,
    config: &'a PipelineConfig,
}

impl<'a, D: CompletionDriver> StageRunner<'a, D> {
    pub(crate) fn new(driver: &'a D, config: &'a PipelineConfig) -> Self {
        Self { driver, config }
    }

    /// Run a stage to a decoded output plus its execution record.
    #[tracing::instrument(skip_all, fields(stage = %stage, sequence_number))]
    pub(crate) async fn run<T>(
        &self,
        stage: PipelineStage,
        user_message: String,
        sequence_number: usize,
    ) -> ReelcraftResult<(T, StageExecution)>
    where
        T: serde::de::DeserializeOwned,
    {
        let max_output_tokens = self.config.max_tokens_for(stage);

        let request = CompletionRequest::builder()
            .system_prompt(system_prompt(stage))
            .user_message(user_message.clone())
            .max_output_tokens(max_output_tokens)
            .temperature(*self.config.temperature())
            .model(self.config.model().clone())
            .build()
            .map_err(|e| {
                PipelineError::new(stage, format!("failed to build completion request: {}", e))
            })?;

        tracing::info!(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            max_output_tokens,
            "Dispatching stage"
        );

        let response = self.driver.generate(&request).await.map_err(|e| {
            PipelineError::new(stage, format!("completion service call failed: {}", e))
        })?;

        let raw = response
            .first_text()
            .ok_or_else(|| PipelineError::new(stage, "response contained no text segment"))?;

        let json = extract_json(raw).map_err(|e| {
            PipelineError::new(stage, format!("{}", e)).with_raw_output(raw)
        })?;

        let decoded = parse_stage::<T>(&json).map_err(|e| {
            PipelineError::new(stage, format!("{}", e)).with_raw_output(raw)
        })?;

        let record = StageExecution {
            stage,
            user_message,
            model: self.config.model().clone(),
            max_output_tokens,
            response: raw.to_string(),
            sequence_number,
        };

        Ok((decoded, record))
    }
}
