//! Core data types for the Reelcraft video plan generator.
//!
//! This crate provides the foundation data types shared across the Reelcraft
//! workspace: the completion-service boundary types, the closed creative
//! vocabulary (tones, brand styles, scene roles), and product/image metadata.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;
mod product;
mod request;
mod scene;
mod stage;
mod telemetry;
mod tone;

pub use output::Output;
pub use product::{ImageAsset, ImageKind, ProductType};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError,
    CompletionResponse,
};
pub use scene::SceneType;
pub use stage::PipelineStage;
pub use telemetry::init_telemetry;
pub use tone::{BrandStyle, EmotionalTone};
