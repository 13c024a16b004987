//! Transport error types.

/// The call to the external completion service failed.
///
/// Covers network errors, non-2xx responses, and responses with no usable
/// text segment. Retry and backoff are the driver's concern; the pipeline
/// treats any transport failure like a validation failure for that stage.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", message, line, file)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// File where the error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelcraft_error::TransportError;
    ///
    /// let err = TransportError::new("completion service returned 503");
    /// assert!(err.message.contains("503"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
