//! Stage 2 contract: art direction.
//!
//! The visual system for the whole video: design pack, palette, typography,
//! motion language, and the composition rules the execution stage must obey.
//! Derived once from the validated strategy plus product type and image
//! metadata; never re-derives message content.

use reelcraft_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// The named visual system families.
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
pub enum DesignPack {
    /// Whitespace, crisp cards, product-first.
    CleanSaas,
    /// Soft gradient washes, rounded shapes.
    SoftGradient,
    /// Dark backgrounds, high-contrast accents.
    DarkPremium,
    /// Light, typographic, editorial spacing.
    LightEditorial,
    /// Saturated color, oversized type.
    BoldImpact,
}

/// The six named color slots of the visual system.
///
/// Each slot holds a `#rrggbb`/`#rgb` hex literal or an `rgba(...)` string;
/// scene backgrounds reference slots by name rather than repeating values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Scene background.
    pub background: String,
    /// Card and panel surfaces.
    pub surface: String,
    /// Primary brand color.
    pub primary: String,
    /// Accent for emphasis moments.
    pub accent: String,
    /// Headline text.
    pub text_primary: String,
    /// Supporting text.
    pub text_secondary: String,
}

impl Palette {
    fn slots(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("text_primary", &self.text_primary),
            ("text_secondary", &self.text_secondary),
        ]
    }
}

/// How font weights are distributed across a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeightStrategy {
    /// One weight everywhere.
    Uniform,
    /// Heavy headlines against light support text.
    HighContrast,
    /// Weight steps down with hierarchy.
    Progressive,
}

/// How type size develops across the scene sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SizeProgression {
    /// Same scale every scene.
    Consistent,
    /// Grows toward the call to action.
    Escalating,
    /// Biggest on the hook, settling after.
    HeroFirst,
}

/// Typography rules for the whole video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Typography {
    /// Font family name.
    pub font_family: String,
    /// Weight distribution.
    pub weight_strategy: WeightStrategy,
    /// Size development across scenes.
    pub size_progression: SizeProgression,
}

/// Overall motion energy of the visual system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MotionIntensity {
    /// Barely-there movement.
    Subtle,
    /// Noticeable but restrained.
    Moderate,
    /// Constant, energetic movement.
    Dynamic,
}

/// How elements enter a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntryStyle {
    /// Opacity ramp.
    Fade,
    /// Rise from below.
    SlideUp,
    /// Enter from the right edge.
    SlideLeft,
    /// Grow from slightly small.
    ScaleIn,
    /// Sharpen from a blur.
    BlurIn,
    /// Revealed by a moving mask.
    MaskWipe,
}

/// Pacing of motion across a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rhythm {
    /// Even pacing throughout.
    Steady,
    /// Quickens toward the end.
    Accelerating,
    /// Short bursts with holds between.
    Punchy,
}

/// What elements do once they have entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HoldStyle {
    /// Elements rest still.
    StaticHold,
    /// Slow positional drift.
    Drift,
    /// Gentle scale oscillation.
    Breathe,
}

/// The motion language for the whole video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionSpec {
    /// Overall energy.
    pub intensity: MotionIntensity,
    /// Default entry treatment.
    pub entry: EntryStyle,
    /// Pacing within scenes.
    pub rhythm: Rhythm,
    /// Behavior after entry.
    pub hold: HoldStyle,
}

/// Composition constraints the execution stage must obey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionRules {
    /// Minimum visual elements per scene, at least 1.
    pub min_elements_per_scene: u32,
    /// Whether every scene needs a texture layer.
    pub texture_required: bool,
    /// Whether plain single-color slides are acceptable.
    pub flat_slides_allowed: bool,
    /// Whether decorative accent shapes are part of the system.
    pub accent_shapes: bool,
}

/// How product screenshots are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScreenshotTreatment {
    /// Inside a device mockup.
    DeviceFrame,
    /// On a floating, shadowed card.
    FloatingCard,
    /// Edge to edge.
    FullBleed,
}

/// How caller-provided images may be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageUsageRules {
    /// Image placements allowed across the whole video, not per scene.
    pub max_images_per_video: u32,
    /// Default framing for screenshots.
    pub screenshot_treatment: ScreenshotTreatment,
    /// Whether decorative photos may appear beyond product imagery.
    pub allow_decorative_photos: bool,
}

/// Validated output of the art-direction stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtDirectionOutput {
    /// The visual system family.
    pub design_pack: DesignPack,
    /// The six color slots.
    pub palette: Palette,
    /// Typography rules.
    pub typography: Typography,
    /// Motion language.
    pub motion: MotionSpec,
    /// Composition constraints.
    pub composition_rules: CompositionRules,
    /// Image usage constraints.
    pub image_usage_rules: ImageUsageRules,
    /// Element tags the execution stage must not use.
    pub forbidden_elements: Vec<String>,
    /// Element tags every scene should include.
    pub required_elements: Vec<String>,
}

impl ArtDirectionOutput {
    /// Check every constraint serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: a palette slot that is not a
    /// hex or rgba color literal, an empty font family, or composition
    /// rules requiring zero elements per scene.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (slot, value) in self.palette.slots() {
            if !is_color_literal(value) {
                return Err(ValidationError::new(ValidationErrorKind::InvalidColor {
                    slot: slot.to_string(),
                    value: value.to_string(),
                }));
            }
        }

        if self.typography.font_family.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyField(
                "typography.font_family".to_string(),
            )));
        }

        if self.composition_rules.min_elements_per_scene == 0 {
            return Err(ValidationError::new(ValidationErrorKind::ZeroMinElements));
        }

        Ok(())
    }
}

/// Whether a string is a `#rgb`/`#rrggbb` hex literal or an `rgba(...)` call.
fn is_color_literal(value: &str) -> bool {
    if let Some(digits) = value.strip_prefix('#') {
        return matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    }
    value.starts_with("rgba(") && value.ends_with(')')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn art_direction() -> ArtDirectionOutput {
        ArtDirectionOutput {
            design_pack: DesignPack::CleanSaas,
            palette: Palette {
                background: "#f7f8fa".to_string(),
                surface: "#ffffff".to_string(),
                primary: "#2456e6".to_string(),
                accent: "#ff5a5f".to_string(),
                text_primary: "#101418".to_string(),
                text_secondary: "rgba(16, 20, 24, 0.64)".to_string(),
            },
            typography: Typography {
                font_family: "Inter".to_string(),
                weight_strategy: WeightStrategy::HighContrast,
                size_progression: SizeProgression::HeroFirst,
            },
            motion: MotionSpec {
                intensity: MotionIntensity::Moderate,
                entry: EntryStyle::SlideUp,
                rhythm: Rhythm::Steady,
                hold: HoldStyle::Drift,
            },
            composition_rules: CompositionRules {
                min_elements_per_scene: 2,
                texture_required: false,
                flat_slides_allowed: false,
                accent_shapes: true,
            },
            image_usage_rules: ImageUsageRules {
                max_images_per_video: 3,
                screenshot_treatment: ScreenshotTreatment::DeviceFrame,
                allow_decorative_photos: false,
            },
            forbidden_elements: vec!["stock_photos".to_string()],
            required_elements: vec!["logo".to_string()],
        }
    }

    #[test]
    fn test_valid_art_direction_passes() {
        assert!(art_direction().validate().is_ok());
    }

    #[test]
    fn test_bad_palette_color_fails() {
        let mut art = art_direction();
        art.palette.accent = "coral".to_string();
        let err = art.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::InvalidColor { .. }));
    }

    #[test]
    fn test_zero_min_elements_fails() {
        let mut art = art_direction();
        art.composition_rules.min_elements_per_scene = 0;
        let err = art.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::ZeroMinElements));
    }

    #[test]
    fn test_unknown_design_pack_fails_decoding() {
        assert!(serde_json::from_str::<DesignPack>("\"vaporwave\"").is_err());
    }

    #[test]
    fn test_color_literal_forms() {
        assert!(is_color_literal("#fff"));
        assert!(is_color_literal("#2456e6"));
        assert!(is_color_literal("rgba(0, 0, 0, 0.5)"));
        assert!(!is_color_literal("#22"));
        assert!(!is_color_literal("blue"));
        assert!(!is_color_literal("rgb(0, 0, 0)"));
    }
}
