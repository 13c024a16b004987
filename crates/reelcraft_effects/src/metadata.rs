//! Effect metadata types.

use reelcraft_core::EmotionalTone;
use serde::{Deserialize, Serialize};

/// Broad family of an effect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EffectCategory {
    /// Brings an element into view.
    Reveal,
    /// Carries the viewer from one scene to the next.
    Transition,
    /// Draws attention to an element already on screen.
    Emphasis,
    /// Continuous background motion.
    Ambient,
}

/// The kind of content an effect is suited to act on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    /// Headlines and copy.
    Text,
    /// Photographs and graphics.
    Image,
    /// Product UI screenshots.
    Screenshot,
    /// Numbers and metrics.
    Stat,
    /// Brand logos.
    Logo,
    /// Decorative shapes.
    Shape,
}

/// How forceful an effect reads on screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EffectIntensity {
    /// Barely-there motion.
    Subtle,
    /// Noticeable but restrained.
    Medium,
    /// Maximum-attention motion.
    Dramatic,
}

/// Identifier of a catalog effect.
///
/// A closed set: the registry carries exactly one entry per id, in a fixed
/// authoring order that the selector relies on for deterministic
/// tie-breaking.
///
/// # Examples
///
/// ```
/// use reelcraft_effects::EffectId;
///
/// assert_eq!(format!("{}", EffectId::TextWordCascade), "text_word_cascade");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum EffectId {
    // image reveals
    ImageParallaxPan,
    ImageMaskWipe,
    ImageDeviceTilt,
    ImageFloatIn,
    ImageCrossZoom,
    ImageBlurFocus,
    // text reveals
    TextWordCascade,
    TextLineSlide,
    TextCharFlicker,
    TextBlockFade,
    TextScaleSnap,
    TextTypewriter,
    // stat reveals
    StatCountUp,
    StatBarGrow,
    StatRingSweep,
    StatFlipOdometer,
    // transitions
    TransitionCrossfade,
    TransitionSlidePush,
    TransitionWhipPan,
    TransitionIrisWipe,
    TransitionSplitReveal,
    TransitionZoomThrough,
    // emphasis
    EmphasisPulse,
    EmphasisUnderlineSweep,
    EmphasisColorPop,
    EmphasisShake,
    EmphasisGlow,
    // ambient
    AmbientGradientDrift,
    AmbientParticleField,
    AmbientGrainShimmer,
}

/// One catalog entry.
///
/// Entries are immutable, process-wide constant data; the selector only
/// reads them, so unsynchronized concurrent access is safe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectMetadata {
    /// Catalog identifier.
    pub id: EffectId,
    /// Broad family.
    pub category: EffectCategory,
    /// Content kinds this effect is suited to act on.
    pub best_for: &'static [ContentType],
    /// Tones this effect reinforces; matching the scene tone earns a bonus.
    pub tones: &'static [EmotionalTone],
    /// How forceful the effect reads.
    pub intensity: EffectIntensity,
    /// How much attention the effect commands (1..=10).
    pub impact_score: u8,
    /// How polished the effect reads (1..=10).
    pub professional_score: u8,
    /// How contemporary the effect reads (1..=10).
    pub modern_score: u8,
    /// Sensible duration bounds in frames at 30 fps.
    pub duration_range: (u32, u32),
}
