//! Stage validation error types.

/// Specific constraint violations found while validating a stage output.
///
/// Validation never coerces, defaults, or repairs: a missing required field
/// or an out-of-range enum value is a failure, full stop. Anything serde
/// cannot decode into the stage's strict types surfaces as [`Decode`].
///
/// [`Decode`]: ValidationErrorKind::Decode
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The decoded JSON does not match the stage's strict shape.
    #[display("Failed to decode stage output: {}", _0)]
    Decode(String),
    /// A required text field is empty or whitespace-only.
    #[display("Field '{}' is empty", _0)]
    EmptyField(String),
    /// The emotional arc must name at least one beat.
    #[display("Emotional arc is empty")]
    EmptyEmotionalArc,
    /// Fewer key messages than the required minimum of three.
    #[display("Expected at least 3 key messages, found {}", _0)]
    TooFewKeyMessages(usize),
    /// A required key message id (hook, problem, solution) is absent.
    #[display("Required key message '{}' is missing", _0)]
    MissingKeyMessage(String),
    /// Two key messages share the same id.
    #[display("Duplicate key message id '{}'", _0)]
    DuplicateKeyMessage(String),
    /// A palette slot holds something other than a hex or rgba color.
    #[display("Palette slot '{}' holds invalid color '{}'", slot, value)]
    InvalidColor {
        /// Palette slot name.
        slot: String,
        /// The offending value.
        value: String,
    },
    /// Composition rules must require at least one element per scene.
    #[display("min_elements_per_scene must be at least 1")]
    ZeroMinElements,
    /// Fewer scenes than the required minimum of two.
    #[display("Expected at least 2 scenes, found {}", _0)]
    TooFewScenes(usize),
    /// A scene declared a non-positive duration.
    #[display("Scene {} has zero duration", _0)]
    ZeroDuration(usize),
    /// Two consecutive scenes share the same layout.
    #[display("Scenes {} and {} share the same layout", _0, _1)]
    RepeatedLayout(usize, usize),
    /// Two consecutive scenes share the same motion entry.
    #[display("Scenes {} and {} share the same motion entry", _0, _1)]
    RepeatedEntry(usize, usize),
    /// A scene's headline does not match its key message verbatim.
    #[display("Scene {} headline does not match the '{}' key message verbatim", scene, id)]
    HeadlineMismatch {
        /// Scene index.
        scene: usize,
        /// The key message id the headline should repeat.
        id: String,
    },
    /// A scene's role has no corresponding key message to quote.
    #[display("Scene {} has role '{}' but the strategy carries no such key message", scene, role)]
    MissingKeyMessageForScene {
        /// Scene index.
        scene: usize,
        /// The scene's narrative role.
        role: String,
    },
    /// More image placements across the sequence than the art direction allows.
    #[display("Image placements ({}) exceed the video budget ({})", used, max)]
    ImageBudgetExceeded {
        /// Total placements across all scenes.
        used: u32,
        /// Maximum allowed per video.
        max: u32,
    },
    /// A scene references an image id that was never provided.
    #[display("Scene {} places unknown image '{}'", scene, id)]
    UnknownImage {
        /// Scene index.
        scene: usize,
        /// The unknown image id.
        id: String,
    },
    /// The pipeline request itself is malformed.
    #[display("Invalid pipeline request: {}", _0)]
    InvalidRequest(String),
}

/// Error type for stage validation failures.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::TooFewKeyMessages(2));
/// assert!(format!("{}", err).contains("key messages"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific constraint that was violated.
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
