//! Sequential three-stage orchestration.

use reelcraft_core::PipelineStage;
use reelcraft_error::{PipelineError, ReelcraftResult};
use reelcraft_interface::{CompletionDriver, PipelineExecution};

use crate::art_direction::ArtDirectionOutput;
use crate::config::PipelineConfig;
use crate::execution::VideoExecutorOutput;
use crate::marketing::StrategyOutput;
use crate::prompt::{
    build_art_direction_message, build_execution_message, build_marketing_message,
};
use crate::request::{PipelineOutput, PipelineRequest};
use crate::runner::StageRunner;

/// Drives the three generation stages in order against one driver.
///
/// Stages run strictly sequentially; each consumes only the *validated*
/// outputs of the stages before it. The first failure, whether transport,
/// extraction, decoding, or validation, stops the run with a stage-tagged
/// error. There are no retries and no placeholder substitution: a response
/// the strict types reject is a failed run.
///
/// # Examples
///
/// ```rust,ignore
/// use reelcraft_core::ProductType;
/// use reelcraft_pipeline::{PipelineOrchestrator, PipelineRequest};
///
/// # async fn example(driver: impl reelcraft_interface::CompletionDriver) {
/// let orchestrator = PipelineOrchestrator::new(driver);
/// let request = PipelineRequest::new("task manager for tech teams", ProductType::Saas);
/// let plan = orchestrator.execute(&request).await.unwrap();
/// assert!(plan.execution.scenes.len() >= 2);
/// # }
/// ```
pub struct PipelineOrchestrator<D> {
    driver: D,
    config: PipelineConfig,
}

impl<D: CompletionDriver> PipelineOrchestrator<D> {
    /// Create an orchestrator with the default configuration.
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, PipelineConfig::default())
    }

    /// Create an orchestrator with an explicit configuration.
    pub fn with_config(driver: D, config: PipelineConfig) -> Self {
        Self { driver, config }
    }

    /// The driver this orchestrator dispatches to.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run all three stages and return the validated plan.
    ///
    /// # Errors
    ///
    /// Returns a stage-tagged error for the first stage that fails; later
    /// stages are never attempted.
    pub async fn execute(&self, request: &PipelineRequest) -> ReelcraftResult<PipelineOutput> {
        let (output, _trace) = self.execute_traced(request).await?;
        Ok(output)
    }

    /// Run all three stages, also returning the raw execution trace.
    #[tracing::instrument(skip_all, fields(product_type = %request.product_type))]
    pub async fn execute_traced(
        &self,
        request: &PipelineRequest,
    ) -> ReelcraftResult<(PipelineOutput, PipelineExecution)> {
        request.validate()?;

        let runner = StageRunner::new(&self.driver, &self.config);
        let images = &request.provided_images;

        let (strategy, marketing_record) = runner
            .run::<StrategyOutput>(
                PipelineStage::Marketing,
                build_marketing_message(request),
                0,
            )
            .await?;
        strategy.validate().map_err(|e| {
            PipelineError::new(PipelineStage::Marketing, format!("{}", e))
                .with_raw_output(&marketing_record.response)
        })?;
        tracing::info!(
            key_messages = strategy.key_messages.len(),
            "Marketing strategy validated"
        );

        let (art_direction, art_record) = runner
            .run::<ArtDirectionOutput>(
                PipelineStage::ArtDirection,
                build_art_direction_message(&strategy, request.product_type, images),
                1,
            )
            .await?;
        art_direction.validate().map_err(|e| {
            PipelineError::new(PipelineStage::ArtDirection, format!("{}", e))
                .with_raw_output(&art_record.response)
        })?;
        tracing::info!(
            design_pack = %art_direction.design_pack,
            "Art direction validated"
        );

        let (execution, execution_record) = runner
            .run::<VideoExecutorOutput>(
                PipelineStage::Execution,
                build_execution_message(&strategy, &art_direction, images),
                2,
            )
            .await?;
        execution
            .validate(&strategy, &art_direction.image_usage_rules, images)
            .map_err(|e| {
                PipelineError::new(PipelineStage::Execution, format!("{}", e))
                    .with_raw_output(&execution_record.response)
            })?;
        tracing::info!(scenes = execution.scenes.len(), "Scene plan validated");

        let output = PipelineOutput {
            strategy,
            art_direction,
            execution,
        };
        let trace = PipelineExecution {
            stages: vec![marketing_record, art_record, execution_record],
        };

        Ok((output, trace))
    }
}
