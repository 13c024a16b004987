//! Multi-criteria effect selection.
//!
//! Every selection is a pure function of the context plus the immutable
//! registry: score each candidate, take the best, break ties by registry
//! order. No randomness, no state.

use crate::metadata::{ContentType, EffectCategory, EffectId, EffectIntensity, EffectMetadata};
use crate::profiles::{ScenePriorityProfile, profile_for};
use crate::registry::registry;
use reelcraft_core::{BrandStyle, EmotionalTone, SceneType};
use serde::{Deserialize, Serialize};

/// Everything the selector knows about one scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectContext {
    /// Narrative role of the scene the effects will play in. Transitions
    /// are scored against this role too: the transition should suit what
    /// the viewer is about to see, not what they are leaving.
    pub role: SceneType,
    /// Emotional tone of the scene.
    pub tone: EmotionalTone,
    /// Overall brand style of the visual system.
    pub brand_style: BrandStyle,
    /// Motion intensity the scene's art direction calls for.
    pub intensity: EffectIntensity,
    /// Whether any image asset is available to the scene.
    pub has_images: bool,
    /// Whether a product screenshot specifically is available.
    pub has_screenshot: bool,
}

/// The concrete treatments chosen for one scene, one per effect slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSelection {
    /// Image reveal, absent when the scene has no image to reveal.
    pub image_reveal: Option<EffectId>,
    /// Headline/copy reveal.
    pub text_reveal: EffectId,
    /// Numeric stat reveal.
    pub stat_reveal: EffectId,
    /// Transition into this scene.
    pub transition: EffectId,
    /// Emphasis treatment for the scene's focal element.
    pub emphasis: EffectId,
}

/// One [`EffectSelection`] per narrative role, for a whole video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEffects {
    /// Selections for the hook scene.
    pub hook: EffectSelection,
    /// Selections for the problem scene.
    pub problem: EffectSelection,
    /// Selections for the solution scene.
    pub solution: EffectSelection,
    /// Selections for the proof scene.
    pub proof: EffectSelection,
    /// Selections for the call-to-action scene.
    pub cta: EffectSelection,
}

/// Score a candidate effect against a priority profile and scene context.
///
/// The formula is fixed:
///
/// ```text
/// score = impact * p.impact_weight
///       + professional * p.professional_weight
///       + (brand_style in {modern, bold} ? modern * 0.5 : 0)
///       + (tone in effect.tones ? 3 : 0)
///       + (intensity == p.preferred ? 2 : intensity == context ? 1 : 0)
///       - (brand_style == minimal and intensity == dramatic ? 3 : 0)
/// ```
///
/// Pure and side-effect-free; safe under concurrent invocations.
pub fn score_effect(
    effect: &EffectMetadata,
    profile: &ScenePriorityProfile,
    context: &EffectContext,
) -> f32 {
    let mut score = f32::from(effect.impact_score) * profile.impact_weight
        + f32::from(effect.professional_score) * profile.professional_weight;

    if matches!(context.brand_style, BrandStyle::Modern | BrandStyle::Bold) {
        score += f32::from(effect.modern_score) * 0.5;
    }

    if effect.tones.contains(&context.tone) {
        score += 3.0;
    }

    if effect.intensity == profile.preferred_intensity {
        score += 2.0;
    } else if effect.intensity == context.intensity {
        score += 1.0;
    }

    if context.brand_style == BrandStyle::Minimal && effect.intensity == EffectIntensity::Dramatic {
        score -= 3.0;
    }

    score
}

/// Highest-scoring candidate, first-in-registry-order on ties.
fn best_candidate<'a, F>(context: &EffectContext, accept: F) -> Option<EffectId>
where
    F: Fn(&EffectMetadata) -> bool,
{
    let profile = profile_for(context.role);
    let mut best: Option<(f32, EffectId)> = None;

    for effect in registry().iter().filter(|effect| accept(effect)) {
        let score = score_effect(effect, profile, context);
        // strict comparison keeps the earliest entry on a tie
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, effect.id));
        }
    }

    best.map(|(_, id)| id)
}

/// Select the image reveal for a scene, if the scene has an image.
///
/// Returns `None` when neither an image nor a screenshot is available in
/// context; there is nothing to reveal. Screenshot-specific effects are
/// preferred when a screenshot is present.
pub fn select_image_reveal(context: &EffectContext) -> Option<EffectId> {
    if !context.has_images && !context.has_screenshot {
        return None;
    }

    let wanted = if context.has_screenshot {
        ContentType::Screenshot
    } else {
        ContentType::Image
    };

    best_candidate(context, |effect| {
        effect.category == EffectCategory::Reveal
            && (effect.best_for.contains(&wanted) || effect.best_for.contains(&ContentType::Image))
    })
}

/// Select the reveal for a non-image content kind, with a named fallback.
fn select_reveal(context: &EffectContext, content: ContentType, fallback: EffectId) -> EffectId {
    best_candidate(context, |effect| {
        effect.category == EffectCategory::Reveal && effect.best_for.contains(&content)
    })
    .unwrap_or(fallback)
}

/// Select an effect of the given category, with a named fallback.
fn select_category(
    context: &EffectContext,
    category: EffectCategory,
    fallback: EffectId,
) -> EffectId {
    best_candidate(context, |effect| effect.category == category).unwrap_or(fallback)
}

/// Fill all five effect slots for a single scene context.
///
/// Every slot except the image reveal always returns a concrete id; when
/// scoring yields no candidates the slot falls back to a named default
/// (`text_word_cascade` for text, `stat_count_up` for stats,
/// `transition_crossfade`, `emphasis_pulse`).
pub fn select_effects(context: &EffectContext) -> EffectSelection {
    let selection = EffectSelection {
        image_reveal: select_image_reveal(context),
        text_reveal: select_reveal(context, ContentType::Text, EffectId::TextWordCascade),
        stat_reveal: select_reveal(context, ContentType::Stat, EffectId::StatCountUp),
        transition: select_category(
            context,
            EffectCategory::Transition,
            EffectId::TransitionCrossfade,
        ),
        emphasis: select_category(context, EffectCategory::Emphasis, EffectId::EmphasisPulse),
    };

    tracing::debug!(
        role = %context.role,
        tone = %context.tone,
        text_reveal = %selection.text_reveal,
        transition = %selection.transition,
        "Selected scene effects"
    );

    selection
}

/// Fill effect slots for every narrative role of a video.
///
/// The tone, brand style, intensity, and media availability of `context`
/// apply to all five roles; only the role (and with it the priority
/// profile) varies. Deterministic: identical contexts yield identical
/// selections.
pub fn select_all_effects(context: &EffectContext) -> SceneEffects {
    let for_role = |role: SceneType| select_effects(&EffectContext { role, ..*context });

    SceneEffects {
        hook: for_role(SceneType::Hook),
        problem: for_role(SceneType::Problem),
        solution: for_role(SceneType::Solution),
        proof: for_role(SceneType::Proof),
        cta: for_role(SceneType::Cta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find_effect;

    fn context() -> EffectContext {
        EffectContext {
            role: SceneType::Hook,
            tone: EmotionalTone::Professional,
            brand_style: BrandStyle::Modern,
            intensity: EffectIntensity::Medium,
            has_images: true,
            has_screenshot: false,
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let ctx = context();
        assert_eq!(select_all_effects(&ctx), select_all_effects(&ctx));
    }

    #[test]
    fn test_image_reveal_requires_media() {
        let ctx = EffectContext {
            has_images: false,
            has_screenshot: false,
            ..context()
        };
        assert!(select_image_reveal(&ctx).is_none());
        assert!(select_image_reveal(&context()).is_some());
    }

    #[test]
    fn test_screenshot_context_picks_screenshot_capable_effect() {
        let ctx = EffectContext {
            has_images: true,
            has_screenshot: true,
            ..context()
        };
        let id = select_image_reveal(&ctx).unwrap();
        let effect = find_effect(id).unwrap();
        assert!(
            effect.best_for.contains(&ContentType::Screenshot)
                || effect.best_for.contains(&ContentType::Image)
        );
    }

    #[test]
    fn test_tone_match_never_lowers_score() {
        // Monotonicity: an effect whose tones include the requested tone
        // scores at least 3 points higher than the same effect without the
        // match, all else equal.
        let ctx = context();
        let profile = profile_for(ctx.role);

        for effect in registry() {
            let base = score_effect(effect, profile, &ctx);
            let matched = EffectMetadata {
                tones: &[EmotionalTone::Professional],
                ..effect.clone()
            };
            let boosted = score_effect(&matched, profile, &ctx);
            if effect.tones.contains(&ctx.tone) {
                assert_eq!(base, boosted);
            } else {
                assert_eq!(boosted, base + 3.0);
            }
        }
    }

    #[test]
    fn test_minimal_brand_penalizes_dramatic_effects() {
        let minimal = EffectContext {
            brand_style: BrandStyle::Minimal,
            ..context()
        };
        let modern = EffectContext {
            brand_style: BrandStyle::Modern,
            ..context()
        };
        let profile = profile_for(minimal.role);

        for effect in registry() {
            if effect.intensity == EffectIntensity::Dramatic {
                assert!(
                    score_effect(effect, profile, &minimal)
                        < score_effect(effect, profile, &modern),
                    "{} should score lower under a minimal brand",
                    effect.id
                );
            }
        }
    }

    #[test]
    fn test_transition_scored_with_target_profile() {
        // The hook profile prefers dramatic motion; the proof profile
        // prefers subtle. The same context should pick a transition at
        // least as dramatic for a hook as for a proof scene.
        let hook = context();
        let proof = EffectContext {
            role: SceneType::Proof,
            ..hook
        };

        let into_hook = find_effect(select_effects(&hook).transition).unwrap();
        let into_proof = find_effect(select_effects(&proof).transition).unwrap();
        assert!(into_hook.intensity >= into_proof.intensity);
    }

    #[test]
    fn test_all_roles_get_concrete_non_image_slots() {
        let effects = select_all_effects(&context());
        for selection in [
            effects.hook,
            effects.problem,
            effects.solution,
            effects.proof,
            effects.cta,
        ] {
            assert_eq!(
                find_effect(selection.text_reveal).unwrap().category,
                EffectCategory::Reveal
            );
            assert_eq!(
                find_effect(selection.transition).unwrap().category,
                EffectCategory::Transition
            );
            assert_eq!(
                find_effect(selection.emphasis).unwrap().category,
                EffectCategory::Emphasis
            );
        }
    }
}
