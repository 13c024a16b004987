//! Pipeline entry and exit types.

use reelcraft_core::{ImageAsset, ProductType};
use reelcraft_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

use crate::art_direction::ArtDirectionOutput;
use crate::execution::VideoExecutorOutput;
use crate::marketing::StrategyOutput;

/// A single pipeline invocation: what to advertise and with what assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Natural-language product description from the caller.
    pub user_prompt: String,
    /// The kind of product being advertised.
    pub product_type: ProductType,
    /// Caller-provided images the execution stage may place.
    #[serde(default)]
    pub provided_images: Vec<ImageAsset>,
}

impl PipelineRequest {
    /// Create a request with no provided images.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelcraft_core::ProductType;
    /// use reelcraft_pipeline::PipelineRequest;
    ///
    /// let request = PipelineRequest::new("task manager for tech teams", ProductType::Saas);
    /// assert!(request.provided_images.is_empty());
    /// ```
    pub fn new(user_prompt: impl Into<String>, product_type: ProductType) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            product_type,
            provided_images: Vec::new(),
        }
    }

    /// Attach caller-provided images.
    pub fn with_images(mut self, images: Vec<ImageAsset>) -> Self {
        self.provided_images = images;
        self
    }

    /// Check the request before any stage runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is empty or whitespace-only, or if
    /// two provided images share an id.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_prompt.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::InvalidRequest(
                "user_prompt is empty".to_string(),
            )));
        }

        for (index, image) in self.provided_images.iter().enumerate() {
            if self.provided_images[..index]
                .iter()
                .any(|other| other.id == image.id)
            {
                return Err(ValidationError::new(ValidationErrorKind::InvalidRequest(
                    format!("duplicate image id '{}'", image.id),
                )));
            }
        }

        Ok(())
    }
}

/// The validated outputs of all three stages, in production order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Stage 1: marketing strategy.
    pub strategy: StrategyOutput,
    /// Stage 2: art direction.
    pub art_direction: ArtDirectionOutput,
    /// Stage 3: scene specifications.
    pub execution: VideoExecutorOutput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_core::ImageKind;

    #[test]
    fn test_empty_prompt_fails() {
        let request = PipelineRequest::new("   ", ProductType::Saas);
        let err = request.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::InvalidRequest(_)));
    }

    #[test]
    fn test_duplicate_image_id_fails() {
        let request = PipelineRequest::new("task manager", ProductType::Saas).with_images(vec![
            ImageAsset::new("board", ImageKind::Screenshot),
            ImageAsset::new("board", ImageKind::Photo),
        ]);
        let err = request.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::InvalidRequest(_)));
    }

    #[test]
    fn test_plain_request_passes() {
        let request = PipelineRequest::new("task manager", ProductType::Saas);
        assert!(request.validate().is_ok());
    }
}
