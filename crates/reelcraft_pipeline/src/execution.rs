//! Stage 3 contract: scene-by-scene execution.
//!
//! The final stage turns the validated strategy and art direction into
//! concrete scene specifications. Cross-scene invariants live here: scene
//! count, positive durations, layout and entry variety between neighbors,
//! the whole-video image budget, and verbatim headline reuse.

use reelcraft_core::{ImageAsset, SceneType};
use reelcraft_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

use crate::art_direction::{EntryStyle, ImageUsageRules, MotionIntensity, ScreenshotTreatment};
use crate::marketing::{KeyMessageId, StrategyOutput};

/// The named scene layouts the execution stage may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SceneLayout {
    /// Headline centered over a quiet background.
    CenteredHero,
    /// Text on one half, imagery on the other.
    SplitScreen,
    /// Image edge to edge with overlaid text.
    FullBleedImage,
    /// A single oversized number or statistic.
    StatCallout,
    /// Stacked cards revealed in sequence.
    CardStack,
    /// A diagonal divider between two fields.
    DiagonalSplit,
    /// Type is the whole composition.
    TypographicPoster,
    /// Product inside a device mockup.
    DeviceFrame,
    /// A grid of images or tiles.
    GridCollage,
    /// A quote with attribution, spotlit.
    QuoteSpotlight,
    /// A full-width call-to-action strip.
    CtaBanner,
}

/// How a scene fills its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BackgroundStyle {
    /// One flat color.
    Solid,
    /// A gradient between slots.
    Gradient,
    /// A subtle texture layer.
    Texture,
}

/// A scene's background, referencing palette slots by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneBackground {
    /// Fill style.
    pub style: BackgroundStyle,
    /// Palette slot names, in paint order.
    pub color_refs: Vec<String>,
}

/// Relative type scale of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextScale {
    /// Smaller than the system default.
    Compact,
    /// The system default.
    Standard,
    /// Oversized, hero-weight type.
    Hero,
}

/// Per-scene typography choices within the system's rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneTypography {
    /// Relative type scale for this scene.
    pub scale: TextScale,
    /// Words in the headline to set in the accent color.
    pub emphasis_words: Vec<String>,
}

/// Per-scene motion within the system's motion language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneMotion {
    /// How this scene's elements enter.
    pub entry: EntryStyle,
    /// Energy for this scene.
    pub intensity: MotionIntensity,
}

/// Where a placed image sits in the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImagePosition {
    /// Left half or column.
    Left,
    /// Right half or column.
    Right,
    /// Centered focal placement.
    Center,
    /// Behind the text layer.
    Backdrop,
}

/// One caller-provided image placed into a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagePlacement {
    /// Id of the provided image asset.
    pub image_id: String,
    /// Where the image sits.
    pub position: ImagePosition,
    /// How the image is framed.
    pub treatment: ScreenshotTreatment,
}

/// One fully specified narrative beat of the output video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSpec {
    /// The narrative beat this scene carries.
    pub scene_type: SceneType,
    /// The key message for this beat, repeated verbatim.
    pub headline: String,
    /// Optional supporting line under the headline.
    #[serde(default)]
    pub support_text: Option<String>,
    /// Spatial arrangement.
    pub layout: SceneLayout,
    /// Background fill.
    pub background: SceneBackground,
    /// Type scale and emphasis.
    pub typography: SceneTypography,
    /// Entry and energy.
    pub motion: SceneMotion,
    /// Images placed in this scene.
    pub images: Vec<ImagePlacement>,
    /// Scene length in frames, positive.
    pub duration_frames: u32,
}

/// Validated output of the execution stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoExecutorOutput {
    /// The scene sequence, in playback order.
    pub scenes: Vec<SceneSpec>,
}

/// The key message a scene of the given role must quote.
fn key_message_id_for(scene_type: SceneType) -> KeyMessageId {
    match scene_type {
        SceneType::Hook => KeyMessageId::Hook,
        SceneType::Problem => KeyMessageId::Problem,
        SceneType::Solution => KeyMessageId::Solution,
        SceneType::Proof => KeyMessageId::Proof,
        SceneType::Cta => KeyMessageId::Cta,
    }
}

impl VideoExecutorOutput {
    /// Check every cross-scene and cross-stage constraint.
    ///
    /// Constraints checked, in order: at least two scenes, positive
    /// durations, no consecutive scenes sharing a layout or a motion entry,
    /// every placed image id among the provided assets, total placements
    /// within the art direction's video-wide budget, and every headline
    /// equal to its role's key message verbatim.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(
        &self,
        strategy: &StrategyOutput,
        rules: &ImageUsageRules,
        provided_images: &[ImageAsset],
    ) -> Result<(), ValidationError> {
        if self.scenes.len() < 2 {
            return Err(ValidationError::new(ValidationErrorKind::TooFewScenes(
                self.scenes.len(),
            )));
        }

        let mut placements: u32 = 0;

        for (index, scene) in self.scenes.iter().enumerate() {
            if scene.duration_frames == 0 {
                return Err(ValidationError::new(ValidationErrorKind::ZeroDuration(
                    index,
                )));
            }

            if let Some(previous) = index.checked_sub(1).map(|p| &self.scenes[p]) {
                if previous.layout == scene.layout {
                    return Err(ValidationError::new(ValidationErrorKind::RepeatedLayout(
                        index - 1,
                        index,
                    )));
                }
                if previous.motion.entry == scene.motion.entry {
                    return Err(ValidationError::new(ValidationErrorKind::RepeatedEntry(
                        index - 1,
                        index,
                    )));
                }
            }

            for placement in &scene.images {
                if !provided_images.iter().any(|a| a.id == placement.image_id) {
                    return Err(ValidationError::new(ValidationErrorKind::UnknownImage {
                        scene: index,
                        id: placement.image_id.clone(),
                    }));
                }
            }
            placements += scene.images.len() as u32;

            let id = key_message_id_for(scene.scene_type);
            let Some(message) = strategy.message_for(id) else {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingKeyMessageForScene {
                        scene: index,
                        role: scene.scene_type.to_string(),
                    },
                ));
            };
            if scene.headline != message.message {
                return Err(ValidationError::new(
                    ValidationErrorKind::HeadlineMismatch {
                        scene: index,
                        id: id.to_string(),
                    },
                ));
            }
        }

        if placements > rules.max_images_per_video {
            return Err(ValidationError::new(
                ValidationErrorKind::ImageBudgetExceeded {
                    used: placements,
                    max: rules.max_images_per_video,
                },
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_core::ImageKind;

    fn strategy() -> StrategyOutput {
        StrategyOutput {
            core_promise: "Ship every sprint on time".to_string(),
            hook_intent: "name the pain".to_string(),
            emotional_arc: vec!["frustration".to_string(), "relief".to_string()],
            key_messages: vec![
                crate::marketing::KeyMessage {
                    id: KeyMessageId::Hook,
                    message: "Still chasing status updates?".to_string(),
                    intent: "provoke recognition".to_string(),
                    emotional_target: "frustration".to_string(),
                },
                crate::marketing::KeyMessage {
                    id: KeyMessageId::Problem,
                    message: "Your roadmap lives in five tools".to_string(),
                    intent: "name the pain".to_string(),
                    emotional_target: "overwhelm".to_string(),
                },
                crate::marketing::KeyMessage {
                    id: KeyMessageId::Solution,
                    message: "One board your whole team trusts".to_string(),
                    intent: "present the fix".to_string(),
                    emotional_target: "relief".to_string(),
                },
            ],
            audience_insight: "Tech leads distrust heavyweight tools".to_string(),
            differentiator: "Syncs with existing tools".to_string(),
        }
    }

    fn rules() -> ImageUsageRules {
        ImageUsageRules {
            max_images_per_video: 2,
            screenshot_treatment: ScreenshotTreatment::DeviceFrame,
            allow_decorative_photos: false,
        }
    }

    fn assets() -> Vec<ImageAsset> {
        vec![ImageAsset::new("board", ImageKind::Screenshot)]
    }

    fn scene(scene_type: SceneType, headline: &str, layout: SceneLayout, entry: EntryStyle) -> SceneSpec {
        SceneSpec {
            scene_type,
            headline: headline.to_string(),
            support_text: None,
            layout,
            background: SceneBackground {
                style: BackgroundStyle::Solid,
                color_refs: vec!["background".to_string()],
            },
            typography: SceneTypography {
                scale: TextScale::Standard,
                emphasis_words: vec![],
            },
            motion: SceneMotion {
                entry,
                intensity: MotionIntensity::Moderate,
            },
            images: vec![],
            duration_frames: 90,
        }
    }

    fn output() -> VideoExecutorOutput {
        VideoExecutorOutput {
            scenes: vec![
                scene(
                    SceneType::Hook,
                    "Still chasing status updates?",
                    SceneLayout::CenteredHero,
                    EntryStyle::SlideUp,
                ),
                scene(
                    SceneType::Problem,
                    "Your roadmap lives in five tools",
                    SceneLayout::CardStack,
                    EntryStyle::Fade,
                ),
                scene(
                    SceneType::Solution,
                    "One board your whole team trusts",
                    SceneLayout::DeviceFrame,
                    EntryStyle::ScaleIn,
                ),
            ],
        }
    }

    #[test]
    fn test_valid_output_passes() {
        assert!(output().validate(&strategy(), &rules(), &assets()).is_ok());
    }

    #[test]
    fn test_single_scene_fails() {
        let mut out = output();
        out.scenes.truncate(1);
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::TooFewScenes(1)));
    }

    #[test]
    fn test_zero_duration_fails() {
        let mut out = output();
        out.scenes[1].duration_frames = 0;
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::ZeroDuration(1)));
    }

    #[test]
    fn test_consecutive_layout_fails() {
        let mut out = output();
        out.scenes[1].layout = SceneLayout::CenteredHero;
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::RepeatedLayout(0, 1)));
    }

    #[test]
    fn test_consecutive_entry_fails() {
        let mut out = output();
        out.scenes[2].motion.entry = EntryStyle::Fade;
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::RepeatedEntry(1, 2)));
    }

    #[test]
    fn test_paraphrased_headline_fails() {
        let mut out = output();
        out.scenes[0].headline = "Tired of chasing status updates?".to_string();
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::HeadlineMismatch { scene: 0, .. }
        ));
    }

    #[test]
    fn test_scene_without_matching_key_message_fails() {
        let mut out = output();
        out.scenes[2].scene_type = SceneType::Cta;
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::MissingKeyMessageForScene { scene: 2, .. }
        ));
    }

    #[test]
    fn test_unknown_image_fails() {
        let mut out = output();
        out.scenes[0].images.push(ImagePlacement {
            image_id: "hero_photo".to_string(),
            position: ImagePosition::Backdrop,
            treatment: ScreenshotTreatment::FullBleed,
        });
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::UnknownImage { scene: 0, .. }
        ));
    }

    #[test]
    fn test_image_budget_is_video_wide() {
        let mut out = output();
        let placement = ImagePlacement {
            image_id: "board".to_string(),
            position: ImagePosition::Center,
            treatment: ScreenshotTreatment::DeviceFrame,
        };
        out.scenes[0].images.push(placement.clone());
        out.scenes[1].images.push(placement.clone());
        out.scenes[2].images.push(placement);
        let err = out.validate(&strategy(), &rules(), &assets()).unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::ImageBudgetExceeded { used: 3, max: 2 }
        ));
    }
}
