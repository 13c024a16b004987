//! Three-stage creative pipeline orchestrator for Reelcraft.
//!
//! This crate turns a short natural-language product description into a
//! structured video plan by orchestrating three sequential calls to an
//! external text-completion service, each constrained to a narrow
//! responsibility:
//!
//! 1. **Marketing**: core promise, emotional arc, key messages.
//! 2. **Art direction**: design pack, palette, typography, motion rules.
//! 3. **Execution**: concrete scene specifications.
//!
//! Data flows strictly forward: each stage consumes the *validated* output
//! of the stages before it and may never rewrite an earlier decision. A
//! stage that fails extraction, decoding, or validation stops the pipeline
//! immediately with a stage-tagged error; no stage is retried and no
//! placeholder content is substituted.
//!
//! # Example
//!
//! ```rust,ignore
//! use reelcraft_pipeline::{PipelineOrchestrator, PipelineRequest};
//! use reelcraft_core::ProductType;
//!
//! # async fn example(driver: impl reelcraft_interface::CompletionDriver) {
//! let orchestrator = PipelineOrchestrator::new(driver);
//! let request = PipelineRequest::new("task manager for tech teams", ProductType::Saas);
//! let plan = orchestrator.execute(&request).await.unwrap();
//! println!("{} scenes", plan.execution.scenes.len());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod art_direction;
mod config;
mod execution;
mod extraction;
mod marketing;
mod orchestrator;
mod prompt;
mod request;
mod runner;

pub use art_direction::{
    ArtDirectionOutput, CompositionRules, DesignPack, EntryStyle, HoldStyle, ImageUsageRules,
    MotionIntensity, MotionSpec, Palette, Rhythm, ScreenshotTreatment, SizeProgression,
    Typography, WeightStrategy,
};
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use execution::{
    BackgroundStyle, ImagePlacement, ImagePosition, SceneBackground, SceneLayout, SceneMotion,
    SceneSpec, SceneTypography, TextScale, VideoExecutorOutput,
};
pub use extraction::{extract_json, parse_stage};
pub use marketing::{KeyMessage, KeyMessageId, StrategyOutput};
pub use orchestrator::PipelineOrchestrator;
pub use prompt::{
    build_art_direction_message, build_execution_message, build_marketing_message, system_prompt,
};
pub use request::{PipelineOutput, PipelineRequest};
