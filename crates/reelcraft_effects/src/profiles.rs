//! Per-scene priority profiles.
//!
//! These are hand-authored weights encoding what each narrative beat needs
//! from its motion: a hook buys attention, a solution scene sells
//! credibility, a call to action pushes again. They are constants, not
//! learned values.

use crate::metadata::EffectIntensity;
use reelcraft_core::SceneType;
use serde::Serialize;

/// Scoring weights for one narrative role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePriorityProfile {
    /// Multiplier on an effect's impact score.
    pub impact_weight: f32,
    /// Multiplier on an effect's professional score.
    pub professional_weight: f32,
    /// Intensity this beat prefers; an exact match earns a bonus.
    pub preferred_intensity: EffectIntensity,
}

static HOOK: ScenePriorityProfile = ScenePriorityProfile {
    impact_weight: 1.5,
    professional_weight: 0.8,
    preferred_intensity: EffectIntensity::Dramatic,
};

static PROBLEM: ScenePriorityProfile = ScenePriorityProfile {
    impact_weight: 1.2,
    professional_weight: 1.0,
    preferred_intensity: EffectIntensity::Medium,
};

static SOLUTION: ScenePriorityProfile = ScenePriorityProfile {
    impact_weight: 1.0,
    professional_weight: 1.5,
    preferred_intensity: EffectIntensity::Medium,
};

static PROOF: ScenePriorityProfile = ScenePriorityProfile {
    impact_weight: 0.9,
    professional_weight: 1.4,
    preferred_intensity: EffectIntensity::Subtle,
};

static CTA: ScenePriorityProfile = ScenePriorityProfile {
    impact_weight: 1.4,
    professional_weight: 0.9,
    preferred_intensity: EffectIntensity::Dramatic,
};

/// The priority profile for a narrative role.
///
/// # Examples
///
/// ```
/// use reelcraft_core::SceneType;
/// use reelcraft_effects::{EffectIntensity, profile_for};
///
/// let hook = profile_for(SceneType::Hook);
/// assert_eq!(hook.preferred_intensity, EffectIntensity::Dramatic);
/// assert!(hook.impact_weight > hook.professional_weight);
/// ```
pub fn profile_for(role: SceneType) -> &'static ScenePriorityProfile {
    match role {
        SceneType::Hook => &HOOK,
        SceneType::Problem => &PROBLEM,
        SceneType::Solution => &SOLUTION,
        SceneType::Proof => &PROOF,
        SceneType::Cta => &CTA,
    }
}
