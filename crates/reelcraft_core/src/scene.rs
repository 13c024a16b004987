//! Narrative scene roles.

use serde::{Deserialize, Serialize};

/// The narrative role of a scene in the output video.
///
/// The five-beat arc is fixed: hook the viewer, name the problem, present
/// the solution, back it with proof, then call to action. The same roles
/// drive both scene generation and effect selection.
///
/// # Examples
///
/// ```
/// use reelcraft_core::SceneType;
///
/// assert_eq!(format!("{}", SceneType::Hook), "hook");
/// assert_eq!(format!("{}", SceneType::Cta), "cta");
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
pub enum SceneType {
    /// Opening attention grab.
    Hook,
    /// The pain point the product addresses.
    Problem,
    /// The product as the answer.
    Solution,
    /// Evidence: stats, social proof, demonstrations.
    Proof,
    /// Call to action.
    Cta,
}
