//! Error types for the Reelcraft video plan generator.
//!
//! This crate provides the foundation error types used throughout the
//! Reelcraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The three failure modes of a generation stage (extraction, validation,
//! transport) collapse at the orchestrator boundary into a single
//! [`PipelineError`] tagged with the stage that failed.
//!
//! # Examples
//!
//! ```
//! use reelcraft_error::{ReelcraftResult, TransportError};
//!
//! fn call_service() -> ReelcraftResult<String> {
//!     Err(TransportError::new("Connection refused"))?
//! }
//!
//! match call_service() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extraction;
mod pipeline;
mod transport;
mod validation;

pub use error::{ReelcraftError, ReelcraftErrorKind, ReelcraftResult};
pub use extraction::ExtractionError;
pub use pipeline::PipelineError;
pub use transport::TransportError;
pub use validation::{ValidationError, ValidationErrorKind};
