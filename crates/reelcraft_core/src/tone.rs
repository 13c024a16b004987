//! Emotional tones and brand styles.

use serde::{Deserialize, Serialize};

/// Emotional register of a message or scene.
///
/// Used both to drive message choice in the marketing stage and to score
/// candidate effects in the selection engine.
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
pub enum EmotionalTone {
    /// Credible, businesslike.
    Professional,
    /// Light, humorous.
    Playful,
    /// Time-pressured, now-or-never.
    Urgent,
    /// Aspirational, uplifting.
    Inspiring,
    /// Assertive, high-contrast.
    Bold,
    /// Reassuring, low-stimulation.
    Calm,
    /// Warm, approachable.
    Friendly,
}

/// Overall brand style of the visual system.
///
/// # Examples
///
/// ```
/// use reelcraft_core::BrandStyle;
///
/// assert_eq!(format!("{}", BrandStyle::Minimal), "minimal");
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
pub enum BrandStyle {
    /// Restrained, whitespace-heavy.
    Minimal,
    /// Contemporary, gradient-friendly.
    Modern,
    /// Loud, high-impact.
    Bold,
    /// Traditional, editorial.
    Classic,
    /// Colorful, informal.
    Playful,
}
