//! Top-level error wrapper types.

use crate::{ExtractionError, PipelineError, TransportError, ValidationError};

/// The foundation error enum for the Reelcraft workspace.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ReelcraftError, TransportError};
///
/// let transport = TransportError::new("connection reset");
/// let err: ReelcraftError = transport.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelcraftErrorKind {
    /// No parseable JSON in a model response.
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// A stage output violated its contract.
    #[from(ValidationError)]
    Validation(ValidationError),
    /// The completion-service call itself failed.
    #[from(TransportError)]
    Transport(TransportError),
    /// Stage-tagged failure at the orchestrator boundary.
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Reelcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ReelcraftResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> ReelcraftResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::TooFewScenes(1)))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelcraft Error: {}", _0)]
pub struct ReelcraftError(Box<ReelcraftErrorKind>);

impl ReelcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelcraftErrorKind {
        &self.0
    }

    /// The stage-tagged pipeline error, when this error is one.
    pub fn as_pipeline(&self) -> Option<&PipelineError> {
        match self.kind() {
            ReelcraftErrorKind::Pipeline(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ReelcraftErrorKind
impl<T> From<T> for ReelcraftError
where
    T: Into<ReelcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelcraft operations.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ReelcraftResult, TransportError};
///
/// fn call_service() -> ReelcraftResult<String> {
///     Err(TransportError::new("404 Not Found"))?
/// }
/// ```
pub type ReelcraftResult<T> = std::result::Result<T, ReelcraftError>;
