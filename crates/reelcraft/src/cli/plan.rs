//! Plan command handler: run the pipeline against a recorded transcript.
//!
//! The `plan` command exists for offline inspection of the pipeline: given a
//! request file and a transcript of raw completion responses (one per stage,
//! in order), it replays the transcript through the real orchestrator and
//! prints the validated plan. Wiring a live completion service means
//! implementing [`CompletionDriver`] over its API instead.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use reelcraft_core::{CompletionRequest, CompletionResponse, Output};
use reelcraft_error::{ReelcraftResult, TransportError};
use reelcraft_interface::CompletionDriver;
use reelcraft_pipeline::{PipelineOrchestrator, PipelineRequest};

/// Replays pre-recorded responses in order.
struct ScriptedDriver {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedDriver {
    fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn generate(&self, _request: &CompletionRequest) -> ReelcraftResult<CompletionResponse> {
        let next = self
            .responses
            .lock()
            .map_err(|_| TransportError::new("transcript lock poisoned"))?
            .pop_front()
            .ok_or_else(|| TransportError::new("transcript exhausted"))?;

        Ok(CompletionResponse {
            outputs: vec![Output::Text(next)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "transcript"
    }
}

/// Handle the plan command.
pub async fn handle_plan_command(
    request_path: &Path,
    transcript_path: &Path,
    print_trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let request: PipelineRequest = serde_json::from_str(&std::fs::read_to_string(request_path)?)?;
    let transcript: Vec<String> = serde_json::from_str(&std::fs::read_to_string(transcript_path)?)?;

    tracing::info!(
        responses = transcript.len(),
        product_type = %request.product_type,
        "Replaying transcript through the pipeline"
    );

    let orchestrator = PipelineOrchestrator::new(ScriptedDriver::new(transcript));
    let (output, trace) = orchestrator.execute_traced(&request).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    if print_trace {
        eprintln!("{}", serde_json::to_string_pretty(&trace)?);
    }

    Ok(())
}
