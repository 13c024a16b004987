//! Pipeline stage identifiers.

use serde::{Deserialize, Serialize};

/// One of the three ordered generation stages.
///
/// The stage tag travels with every pipeline error so callers can tell
/// exactly which generation step failed.
///
/// # Examples
///
/// ```
/// use reelcraft_core::PipelineStage;
///
/// assert_eq!(format!("{}", PipelineStage::Marketing), "marketing");
/// assert_eq!(format!("{}", PipelineStage::ArtDirection), "art_direction");
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
pub enum PipelineStage {
    /// Stage 1: marketing strategy.
    Marketing,
    /// Stage 2: art direction.
    ArtDirection,
    /// Stage 3: scene execution.
    Execution,
}
