//! Trait definitions for completion-service backends.

use async_trait::async_trait;
use reelcraft_core::{CompletionRequest, CompletionResponse};
use reelcraft_error::ReelcraftResult;

/// Core trait that all completion-service backends must implement.
///
/// This is the only interface the pipeline holds on the external service.
/// Authentication, rate limiting, retry, and timeout policy belong to the
/// implementation; the pipeline treats any failure of [`generate`] like a
/// validation failure for the calling stage.
///
/// [`generate`]: CompletionDriver::generate
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate model output for a single stage request.
    async fn generate(&self, req: &CompletionRequest) -> ReelcraftResult<CompletionResponse>;

    /// Provider name (e.g., "anthropic", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}
