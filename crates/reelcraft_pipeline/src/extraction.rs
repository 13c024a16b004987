//! Utilities for extracting structured data from completion responses.
//!
//! The completion service is not guaranteed to emit pure JSON despite
//! instruction: responses may wrap the JSON in fenced code blocks or mix it
//! with explanatory prose. This module provides the two-pass extraction the
//! stage runner applies to every response.

use reelcraft_error::{ExtractionError, ValidationError, ValidationErrorKind};

/// Extract a single JSON document from a raw completion response.
///
/// Strategies, in order:
/// 1. A fenced code block (```json or a bare ```); its inner text becomes
///    the candidate. Without a fence the whole response is the candidate.
/// 2. Parse the candidate. On failure, fall back to the substring between
///    the first `{` and the last `}` of the *original* raw text.
///
/// # Errors
///
/// Returns an error carrying the head of the raw text if neither pass
/// yields valid JSON.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::extract_json;
///
/// let response = "Here's the plan you asked for:\n\
///     \n\
///     ```json\n\
///     {\"core_promise\": \"Ship faster\"}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("Ship faster"));
/// ```
pub fn extract_json(raw: &str) -> Result<String, ExtractionError> {
    let candidate = extract_from_code_block(raw).unwrap_or_else(|| raw.trim().to_string());

    if serde_json::from_str::<serde_json::Value>(&candidate).is_ok() {
        return Ok(candidate);
    }

    // second pass over the original text, not the fence candidate
    if let Some(slice) = outer_brace_slice(raw) {
        if serde_json::from_str::<serde_json::Value>(slice).is_ok() {
            return Ok(slice.to_string());
        }
    }

    tracing::error!(
        response_length = raw.len(),
        "No JSON found in completion response"
    );

    Err(ExtractionError::new(raw))
}

/// Extract content from a markdown code fence.
///
/// Looks for ```json first, then a bare ``` fence. A missing closing fence
/// usually means a truncated response; the content from the opening fence
/// to the end is returned so the parse error names the real problem.
fn extract_from_code_block(raw: &str) -> Option<String> {
    if let Some(start) = raw.find("```json") {
        let content_start = start + "```json".len();
        return Some(match raw[content_start..].find("```") {
            Some(end) => raw[content_start..content_start + end].trim().to_string(),
            None => raw[content_start..].trim().to_string(),
        });
    }

    if let Some(start) = raw.find("```") {
        let content_start = start + 3;
        // skip a language specifier, if any
        let skip_to = raw[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        return Some(match raw[skip_to..].find("```") {
            Some(end) => raw[skip_to..skip_to + end].trim().to_string(),
            None => raw[skip_to..].trim().to_string(),
        });
    }

    None
}

/// The substring between the first `{` and the last `}`, if both exist.
fn outer_brace_slice(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parse extracted JSON into a stage's strict output type.
///
/// # Errors
///
/// Returns a validation error naming the decode failure; the stage runner
/// tags it with the failing stage.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::parse_stage;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Probe {
///     scenes: Vec<String>,
/// }
///
/// let probe: Probe = parse_stage(r#"{"scenes": ["hook"]}"#).unwrap();
/// assert_eq!(probe.scenes.len(), 1);
/// ```
pub fn parse_stage<T>(json: &str) -> Result<T, ValidationError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| {
        let preview = json.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "Stage output failed strict decoding"
        );

        ValidationError::new(ValidationErrorKind::Decode(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
    })
}
