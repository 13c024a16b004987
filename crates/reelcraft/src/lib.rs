//! Reelcraft - product video plan generation.
//!
//! Reelcraft turns a short natural-language product description into a
//! structured video plan: a marketing strategy, an art direction, and a
//! scene-by-scene execution spec, produced by three sequential calls to an
//! external text-completion service. A separate effect selection engine
//! maps scene context to concrete visual treatments.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reelcraft::{PipelineOrchestrator, PipelineRequest, ProductType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = my_driver();
//!     let orchestrator = PipelineOrchestrator::new(driver);
//!
//!     let request = PipelineRequest::new("task manager for tech teams", ProductType::Saas);
//!     let plan = orchestrator.execute(&request).await?;
//!     println!("{} scenes", plan.execution.scenes.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Reelcraft is organized as a workspace with focused crates:
//!
//! - `reelcraft_core` - Core data types (requests, tones, scene roles)
//! - `reelcraft_error` - Error types
//! - `reelcraft_interface` - CompletionDriver trait and execution records
//! - `reelcraft_pipeline` - The three-stage creative pipeline
//! - `reelcraft_effects` - Effect metadata registry and selection engine
//!
//! This crate (`reelcraft`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use reelcraft_core::*;
pub use reelcraft_effects::*;
pub use reelcraft_error::*;
pub use reelcraft_interface::*;
pub use reelcraft_pipeline::*;
