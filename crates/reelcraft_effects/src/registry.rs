//! The static effect catalog.
//!
//! Entries are hand-authored constant data, loaded once at startup and
//! never mutated at runtime. The authoring order is part of the contract:
//! the selector breaks score ties by taking the earliest entry, so
//! reordering this table changes selection results.

use crate::metadata::{EffectId, EffectMetadata};

use crate::metadata::ContentType as C;
use crate::metadata::EffectCategory as Cat;
use crate::metadata::EffectId as Id;
use crate::metadata::EffectIntensity as I;
use reelcraft_core::EmotionalTone as T;

/// The full effect catalog, in authoring order.
static REGISTRY: &[EffectMetadata] = &[
    // --- image reveals ---
    EffectMetadata {
        id: Id::ImageParallaxPan,
        category: Cat::Reveal,
        best_for: &[C::Image, C::Screenshot],
        tones: &[T::Professional, T::Calm, T::Inspiring],
        intensity: I::Medium,
        impact_score: 6,
        professional_score: 9,
        modern_score: 8,
        duration_range: (24, 60),
    },
    EffectMetadata {
        id: Id::ImageMaskWipe,
        category: Cat::Reveal,
        best_for: &[C::Image, C::Screenshot],
        tones: &[T::Bold, T::Urgent],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 6,
        modern_score: 9,
        duration_range: (15, 36),
    },
    EffectMetadata {
        id: Id::ImageDeviceTilt,
        category: Cat::Reveal,
        best_for: &[C::Screenshot],
        tones: &[T::Professional, T::Friendly],
        intensity: I::Medium,
        impact_score: 7,
        professional_score: 8,
        modern_score: 9,
        duration_range: (24, 48),
    },
    EffectMetadata {
        id: Id::ImageFloatIn,
        category: Cat::Reveal,
        best_for: &[C::Image, C::Logo],
        tones: &[T::Calm, T::Friendly, T::Inspiring],
        intensity: I::Subtle,
        impact_score: 4,
        professional_score: 8,
        modern_score: 6,
        duration_range: (18, 40),
    },
    EffectMetadata {
        id: Id::ImageCrossZoom,
        category: Cat::Reveal,
        best_for: &[C::Image],
        tones: &[T::Urgent, T::Bold, T::Playful],
        intensity: I::Dramatic,
        impact_score: 8,
        professional_score: 5,
        modern_score: 7,
        duration_range: (12, 30),
    },
    EffectMetadata {
        id: Id::ImageBlurFocus,
        category: Cat::Reveal,
        best_for: &[C::Image, C::Screenshot],
        tones: &[T::Calm, T::Professional],
        intensity: I::Subtle,
        impact_score: 5,
        professional_score: 9,
        modern_score: 7,
        duration_range: (20, 45),
    },
    // --- text reveals ---
    EffectMetadata {
        id: Id::TextWordCascade,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Professional, T::Inspiring, T::Friendly],
        intensity: I::Medium,
        impact_score: 7,
        professional_score: 8,
        modern_score: 8,
        duration_range: (15, 40),
    },
    EffectMetadata {
        id: Id::TextLineSlide,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Professional, T::Calm],
        intensity: I::Subtle,
        impact_score: 5,
        professional_score: 9,
        modern_score: 7,
        duration_range: (15, 36),
    },
    EffectMetadata {
        id: Id::TextCharFlicker,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Playful, T::Urgent, T::Bold],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 4,
        modern_score: 8,
        duration_range: (12, 28),
    },
    EffectMetadata {
        id: Id::TextBlockFade,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Calm, T::Professional, T::Friendly],
        intensity: I::Subtle,
        impact_score: 3,
        professional_score: 9,
        modern_score: 5,
        duration_range: (12, 30),
    },
    EffectMetadata {
        id: Id::TextScaleSnap,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Bold, T::Urgent, T::Playful],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 5,
        modern_score: 7,
        duration_range: (10, 24),
    },
    EffectMetadata {
        id: Id::TextTypewriter,
        category: Cat::Reveal,
        best_for: &[C::Text],
        tones: &[T::Playful, T::Friendly],
        intensity: I::Medium,
        impact_score: 6,
        professional_score: 6,
        modern_score: 4,
        duration_range: (20, 50),
    },
    // --- stat reveals ---
    EffectMetadata {
        id: Id::StatCountUp,
        category: Cat::Reveal,
        best_for: &[C::Stat],
        tones: &[T::Professional, T::Inspiring, T::Bold],
        intensity: I::Medium,
        impact_score: 8,
        professional_score: 8,
        modern_score: 7,
        duration_range: (20, 45),
    },
    EffectMetadata {
        id: Id::StatBarGrow,
        category: Cat::Reveal,
        best_for: &[C::Stat],
        tones: &[T::Professional, T::Calm],
        intensity: I::Subtle,
        impact_score: 5,
        professional_score: 9,
        modern_score: 6,
        duration_range: (20, 40),
    },
    EffectMetadata {
        id: Id::StatRingSweep,
        category: Cat::Reveal,
        best_for: &[C::Stat],
        tones: &[T::Inspiring, T::Friendly],
        intensity: I::Medium,
        impact_score: 7,
        professional_score: 7,
        modern_score: 9,
        duration_range: (24, 48),
    },
    EffectMetadata {
        id: Id::StatFlipOdometer,
        category: Cat::Reveal,
        best_for: &[C::Stat],
        tones: &[T::Urgent, T::Bold, T::Playful],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 5,
        modern_score: 6,
        duration_range: (18, 36),
    },
    // --- transitions ---
    EffectMetadata {
        id: Id::TransitionCrossfade,
        category: Cat::Transition,
        best_for: &[C::Text, C::Image],
        tones: &[T::Calm, T::Professional, T::Friendly],
        intensity: I::Subtle,
        impact_score: 3,
        professional_score: 9,
        modern_score: 5,
        duration_range: (10, 24),
    },
    EffectMetadata {
        id: Id::TransitionSlidePush,
        category: Cat::Transition,
        best_for: &[C::Text, C::Image],
        tones: &[T::Professional, T::Urgent],
        intensity: I::Medium,
        impact_score: 6,
        professional_score: 8,
        modern_score: 7,
        duration_range: (10, 20),
    },
    EffectMetadata {
        id: Id::TransitionWhipPan,
        category: Cat::Transition,
        best_for: &[C::Image, C::Text],
        tones: &[T::Urgent, T::Bold, T::Playful],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 5,
        modern_score: 8,
        duration_range: (6, 14),
    },
    EffectMetadata {
        id: Id::TransitionIrisWipe,
        category: Cat::Transition,
        best_for: &[C::Image, C::Shape],
        tones: &[T::Playful, T::Friendly],
        intensity: I::Medium,
        impact_score: 7,
        professional_score: 6,
        modern_score: 6,
        duration_range: (12, 24),
    },
    EffectMetadata {
        id: Id::TransitionSplitReveal,
        category: Cat::Transition,
        best_for: &[C::Text, C::Image, C::Shape],
        tones: &[T::Bold, T::Urgent, T::Inspiring],
        intensity: I::Dramatic,
        impact_score: 8,
        professional_score: 7,
        modern_score: 9,
        duration_range: (12, 24),
    },
    EffectMetadata {
        id: Id::TransitionZoomThrough,
        category: Cat::Transition,
        best_for: &[C::Image, C::Screenshot],
        tones: &[T::Urgent, T::Inspiring],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 6,
        modern_score: 8,
        duration_range: (10, 20),
    },
    // --- emphasis ---
    EffectMetadata {
        id: Id::EmphasisPulse,
        category: Cat::Emphasis,
        best_for: &[C::Text, C::Stat, C::Logo],
        tones: &[T::Professional, T::Friendly, T::Calm],
        intensity: I::Subtle,
        impact_score: 4,
        professional_score: 8,
        modern_score: 6,
        duration_range: (12, 30),
    },
    EffectMetadata {
        id: Id::EmphasisUnderlineSweep,
        category: Cat::Emphasis,
        best_for: &[C::Text],
        tones: &[T::Professional, T::Inspiring],
        intensity: I::Medium,
        impact_score: 6,
        professional_score: 9,
        modern_score: 8,
        duration_range: (12, 26),
    },
    EffectMetadata {
        id: Id::EmphasisColorPop,
        category: Cat::Emphasis,
        best_for: &[C::Text, C::Shape],
        tones: &[T::Playful, T::Bold, T::Urgent],
        intensity: I::Medium,
        impact_score: 7,
        professional_score: 6,
        modern_score: 8,
        duration_range: (10, 22),
    },
    EffectMetadata {
        id: Id::EmphasisShake,
        category: Cat::Emphasis,
        best_for: &[C::Text, C::Stat],
        tones: &[T::Urgent, T::Playful],
        intensity: I::Dramatic,
        impact_score: 9,
        professional_score: 3,
        modern_score: 5,
        duration_range: (8, 16),
    },
    EffectMetadata {
        id: Id::EmphasisGlow,
        category: Cat::Emphasis,
        best_for: &[C::Text, C::Logo, C::Shape],
        tones: &[T::Inspiring, T::Calm, T::Bold],
        intensity: I::Medium,
        impact_score: 6,
        professional_score: 7,
        modern_score: 7,
        duration_range: (16, 36),
    },
    // --- ambient ---
    EffectMetadata {
        id: Id::AmbientGradientDrift,
        category: Cat::Ambient,
        best_for: &[C::Shape],
        tones: &[T::Calm, T::Inspiring, T::Professional],
        intensity: I::Subtle,
        impact_score: 3,
        professional_score: 8,
        modern_score: 9,
        duration_range: (60, 300),
    },
    EffectMetadata {
        id: Id::AmbientParticleField,
        category: Cat::Ambient,
        best_for: &[C::Shape],
        tones: &[T::Playful, T::Inspiring],
        intensity: I::Medium,
        impact_score: 5,
        professional_score: 5,
        modern_score: 7,
        duration_range: (60, 300),
    },
    EffectMetadata {
        id: Id::AmbientGrainShimmer,
        category: Cat::Ambient,
        best_for: &[C::Shape],
        tones: &[T::Calm, T::Bold],
        intensity: I::Subtle,
        impact_score: 2,
        professional_score: 7,
        modern_score: 8,
        duration_range: (60, 300),
    },
];

/// The effect catalog in its stable authoring order.
pub fn registry() -> &'static [EffectMetadata] {
    REGISTRY
}

/// Look up a single catalog entry by id.
///
/// # Examples
///
/// ```
/// use reelcraft_effects::{EffectCategory, EffectId, find_effect};
///
/// let effect = find_effect(EffectId::StatCountUp).unwrap();
/// assert_eq!(effect.category, EffectCategory::Reveal);
/// ```
pub fn find_effect(id: EffectId) -> Option<&'static EffectMetadata> {
    REGISTRY.iter().find(|effect| effect.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_exactly_one_entry() {
        for effect in REGISTRY {
            let count = REGISTRY.iter().filter(|e| e.id == effect.id).count();
            assert_eq!(count, 1, "duplicate registry entry for {}", effect.id);
        }
    }

    #[test]
    fn test_scores_in_range() {
        for effect in REGISTRY {
            for score in [
                effect.impact_score,
                effect.professional_score,
                effect.modern_score,
            ] {
                assert!(
                    (1..=10).contains(&score),
                    "{} has score {} out of range",
                    effect.id,
                    score
                );
            }
        }
    }

    #[test]
    fn test_duration_ranges_are_ordered() {
        for effect in REGISTRY {
            let (min, max) = effect.duration_range;
            assert!(min > 0 && min <= max, "{} has bad duration range", effect.id);
        }
    }

    #[test]
    fn test_each_slot_has_candidates() {
        use crate::metadata::{ContentType, EffectCategory};

        let reveals_for = |content: ContentType| {
            REGISTRY
                .iter()
                .filter(|e| e.category == EffectCategory::Reveal && e.best_for.contains(&content))
                .count()
        };

        assert!(reveals_for(ContentType::Text) >= 3);
        assert!(reveals_for(ContentType::Image) >= 3);
        assert!(reveals_for(ContentType::Screenshot) >= 2);
        assert!(reveals_for(ContentType::Stat) >= 3);

        let by_category = |category: EffectCategory| {
            REGISTRY.iter().filter(|e| e.category == category).count()
        };
        assert!(by_category(EffectCategory::Transition) >= 4);
        assert!(by_category(EffectCategory::Emphasis) >= 3);
    }
}
