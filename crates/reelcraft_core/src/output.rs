//! Output types from completion-service responses.

use serde::{Deserialize, Serialize};

/// Supported output segments from the completion service.
///
/// # Examples
///
/// ```
/// use reelcraft_core::Output;
///
/// let text = Output::Text("Here is your plan.".to_string());
/// let json = Output::Json(serde_json::json!({"scenes": []}));
/// assert_ne!(text, json);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output. May wrap JSON in markdown fences or prose.
    Text(String),

    /// Structured JSON output, for services that support a native JSON mode.
    Json(serde_json::Value),
}
