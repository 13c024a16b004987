//! Effect selection engine for the Reelcraft video plan generator.
//!
//! This crate maps scene context (narrative role, tone, brand style,
//! available media) to concrete visual treatments. It holds a static catalog
//! of effect metadata and a weighted scoring function with deterministic
//! tie-breaking; everything is a pure function of its input plus the
//! immutable registry, so concurrent use needs no synchronization.
//!
//! The engine runs independently of the creative pipeline and can be
//! exercised standalone:
//!
//! ```
//! use reelcraft_core::{BrandStyle, EmotionalTone, SceneType};
//! use reelcraft_effects::{EffectContext, EffectIntensity, select_effects};
//!
//! let context = EffectContext {
//!     role: SceneType::Hook,
//!     tone: EmotionalTone::Professional,
//!     brand_style: BrandStyle::Modern,
//!     intensity: EffectIntensity::Medium,
//!     has_images: false,
//!     has_screenshot: false,
//! };
//!
//! let selection = select_effects(&context);
//! assert!(selection.image_reveal.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metadata;
mod profiles;
mod registry;
mod selector;

pub use metadata::{ContentType, EffectCategory, EffectId, EffectIntensity, EffectMetadata};
pub use profiles::{ScenePriorityProfile, profile_for};
pub use registry::{find_effect, registry};
pub use selector::{
    EffectContext, EffectSelection, SceneEffects, score_effect, select_all_effects,
    select_effects, select_image_reveal,
};
