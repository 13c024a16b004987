//! Extraction error types.

/// Characters of raw model output retained for diagnostics.
const PREVIEW_CHARS: usize = 200;

/// No parseable JSON could be found in a raw model response.
///
/// Carries the head of the raw text so the caller can see what the model
/// actually produced.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: no JSON found in response (preview: {preview:?}) at line {line} in {file}")]
pub struct ExtractionError {
    /// The first ~200 characters of the raw response.
    pub preview: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError from the raw response text.
    ///
    /// The raw text is truncated to a short preview on a character boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelcraft_error::ExtractionError;
    ///
    /// let err = ExtractionError::new("I'm sorry, I can't produce JSON.");
    /// assert!(err.preview.contains("sorry"));
    /// ```
    #[track_caller]
    pub fn new(raw: &str) -> Self {
        let location = std::panic::Location::caller();
        Self {
            preview: raw.chars().take(PREVIEW_CHARS).collect(),
            line: location.line(),
            file: location.file(),
        }
    }
}
