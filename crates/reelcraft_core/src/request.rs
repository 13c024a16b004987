//! Request and response types for the external completion service.

use crate::Output;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single call to the external text-completion service.
///
/// Each pipeline stage sends exactly one of these: a fixed system prompt for
/// the stage plus a user message built from the stage's input data.
///
/// # Examples
///
/// ```
/// use reelcraft_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .system_prompt("You are a marketing strategist.")
///     .user_message("Product: task manager for tech teams")
///     .max_output_tokens(2048u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_output_tokens, 2048);
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Fixed per-stage instructions for the model.
    pub system_prompt: String,
    /// The stage's user message, built from validated upstream data.
    pub user_message: String,
    /// Maximum number of tokens the service may generate.
    pub max_output_tokens: u32,
    /// Sampling temperature (0.0 to 1.0), if overridden.
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Model identifier, if overridden. The driver chooses otherwise.
    #[builder(default)]
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Start building a request.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// The unified response object from the completion service.
///
/// # Examples
///
/// ```
/// use reelcraft_core::{CompletionResponse, Output};
///
/// let response = CompletionResponse {
///     outputs: vec![Output::Text("{\"ok\": true}".to_string())],
/// };
///
/// assert_eq!(response.first_text(), Some("{\"ok\": true}"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated outputs from the model, in arrival order.
    pub outputs: Vec<Output>,
}

impl CompletionResponse {
    /// The first text segment of the response, if any.
    ///
    /// The pipeline only consumes text; a response without a text segment is
    /// treated as a transport failure by the stage runner.
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            Output::Json(_) => None,
        })
    }
}
