//! Prompt construction for the three stages.
//!
//! System prompts are fixed per stage and live in the bundled
//! `templates.toml`, parsed once at first use. User messages are built by
//! pure functions from the stage-input structs; no stage ever sees an
//! earlier stage's raw response, only its validated output re-serialized.
//!
//! Image handling differs by stage: the art-direction message carries
//! metadata only (id, kind, description), while the execution message
//! carries the full asset list including the opaque `reference` payload.

use std::sync::LazyLock;

use reelcraft_core::{ImageAsset, PipelineStage, ProductType};
use serde::Deserialize;

use crate::art_direction::ArtDirectionOutput;
use crate::marketing::StrategyOutput;
use crate::request::PipelineRequest;

/// One fixed system prompt per stage, from the bundled templates.
#[derive(Debug, Deserialize)]
struct StageTemplates {
    marketing: String,
    art_direction: String,
    execution: String,
}

static TEMPLATES: LazyLock<StageTemplates> = LazyLock::new(|| {
    const BUNDLED: &str = include_str!("templates.toml");
    match toml::from_str(BUNDLED) {
        Ok(templates) => templates,
        Err(e) => panic!("bundled templates.toml is malformed: {e}"),
    }
});

/// The fixed system prompt for a stage.
pub fn system_prompt(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Marketing => &TEMPLATES.marketing,
        PipelineStage::ArtDirection => &TEMPLATES.art_direction,
        PipelineStage::Execution => &TEMPLATES.execution,
    }
}

/// Serialize a stage input for embedding in a user message.
fn embed_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Image metadata lines for the art-direction message.
///
/// Deliberately omits `reference`: stage 2 decides how images are used,
/// not what they contain.
fn image_metadata_block(images: &[ImageAsset]) -> String {
    if images.is_empty() {
        return "No images were provided.".to_string();
    }

    let mut block = String::from("Provided images (metadata only):\n");
    for image in images {
        let description = image.description.as_deref().unwrap_or("no description");
        block.push_str(&format!(
            "- id: {}, kind: {}, description: {}\n",
            image.id, image.kind, description
        ));
    }
    block
}

/// Build the stage 1 user message from the caller's request.
pub fn build_marketing_message(request: &PipelineRequest) -> String {
    format!(
        "Product type: {}\n\nProduct description:\n{}",
        request.product_type,
        request.user_prompt.trim()
    )
}

/// Build the stage 2 user message from the validated strategy.
pub fn build_art_direction_message(
    strategy: &StrategyOutput,
    product_type: ProductType,
    images: &[ImageAsset],
) -> String {
    format!(
        "Product type: {}\n\nValidated marketing strategy:\n{}\n\n{}",
        product_type,
        embed_json(strategy),
        image_metadata_block(images)
    )
}

/// Build the stage 3 user message from both validated outputs.
pub fn build_execution_message(
    strategy: &StrategyOutput,
    art_direction: &ArtDirectionOutput,
    images: &[ImageAsset],
) -> String {
    let image_block = if images.is_empty() {
        "No images were provided.".to_string()
    } else {
        format!("Provided images:\n{}", embed_json(&images))
    };

    format!(
        "Validated marketing strategy:\n{}\n\nValidated art direction:\n{}\n\n{}",
        embed_json(strategy),
        embed_json(art_direction),
        image_block
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_core::ImageKind;

    #[test]
    fn test_templates_parse_and_differ() {
        let marketing = system_prompt(PipelineStage::Marketing);
        let art = system_prompt(PipelineStage::ArtDirection);
        let execution = system_prompt(PipelineStage::Execution);
        assert!(marketing.contains("core_promise"));
        assert!(art.contains("design_pack"));
        assert!(execution.contains("duration_frames"));
        assert_ne!(marketing, art);
        assert_ne!(art, execution);
    }

    #[test]
    fn test_marketing_message_carries_prompt() {
        let request = PipelineRequest::new("task manager for tech teams", ProductType::Saas);
        let message = build_marketing_message(&request);
        assert!(message.contains("task manager for tech teams"));
        assert!(message.contains("saas"));
    }

    #[test]
    fn test_art_direction_message_omits_references() {
        let strategy = serde_json::from_str::<StrategyOutput>(
            r#"{
                "core_promise": "Ship faster",
                "hook_intent": "pain",
                "emotional_arc": ["frustration"],
                "key_messages": [],
                "audience_insight": "tech leads",
                "differentiator": "syncs"
            }"#,
        )
        .unwrap();
        let images = vec![
            ImageAsset::new("board", ImageKind::Screenshot)
                .with_description("kanban board")
                .with_reference("https://example.com/board.png"),
        ];

        let message = build_art_direction_message(&strategy, ProductType::Saas, &images);
        assert!(message.contains("kanban board"));
        assert!(!message.contains("example.com"));
    }

    #[test]
    fn test_execution_message_carries_references() {
        let strategy = serde_json::from_str::<StrategyOutput>(
            r#"{
                "core_promise": "Ship faster",
                "hook_intent": "pain",
                "emotional_arc": ["frustration"],
                "key_messages": [],
                "audience_insight": "tech leads",
                "differentiator": "syncs"
            }"#,
        )
        .unwrap();
        let art = crate::art_direction::tests::art_direction();
        let images =
            vec![ImageAsset::new("board", ImageKind::Screenshot)
                .with_reference("https://example.com/board.png")];

        let message = build_execution_message(&strategy, &art, &images);
        assert!(message.contains("example.com"));
        assert!(message.contains("clean_saas"));
    }
}
