//! Stage 1 contract: marketing strategy.

use reelcraft_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// The narrative slot a key message fills.
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
pub enum KeyMessageId {
    /// Opening attention grab.
    Hook,
    /// The pain point.
    Problem,
    /// The product as the answer.
    Solution,
    /// Supporting evidence.
    Proof,
    /// Call to action.
    Cta,
}

/// One message of the narrative arc.
///
/// Owned exclusively by [`StrategyOutput`]; immutable once validated. The
/// execution stage must reuse `message` verbatim as the scene headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyMessage {
    /// Which narrative slot this message fills.
    pub id: KeyMessageId,
    /// The copy itself, reused verbatim downstream.
    pub message: String,
    /// What the message is meant to accomplish.
    pub intent: String,
    /// The feeling the message should land.
    pub emotional_target: String,
}

/// Validated output of the marketing stage.
///
/// Produced once per request from the user's product description; later
/// stages consume it but never rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyOutput {
    /// The single promise the video makes.
    pub core_promise: String,
    /// How the hook earns attention (curiosity, surprise, pain).
    pub hook_intent: String,
    /// Ordered emotional beats across the video, at least one.
    pub emotional_arc: Vec<String>,
    /// The messages themselves; at least hook, problem, and solution.
    pub key_messages: Vec<KeyMessage>,
    /// Who the video speaks to and what they already believe.
    pub audience_insight: String,
    /// Why this product over the alternatives.
    pub differentiator: String,
}

impl StrategyOutput {
    /// The key message filling a given narrative slot, if present.
    pub fn message_for(&self, id: KeyMessageId) -> Option<&KeyMessage> {
        self.key_messages.iter().find(|message| message.id == id)
    }

    /// Check every constraint serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: empty required fields, an
    /// empty emotional arc, fewer than three key messages, duplicate ids,
    /// or a missing hook/problem/solution message.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("core_promise", &self.core_promise),
            ("hook_intent", &self.hook_intent),
            ("audience_insight", &self.audience_insight),
            ("differentiator", &self.differentiator),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyField(
                    name.to_string(),
                )));
            }
        }

        if self.emotional_arc.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyEmotionalArc));
        }

        if self.key_messages.len() < 3 {
            return Err(ValidationError::new(
                ValidationErrorKind::TooFewKeyMessages(self.key_messages.len()),
            ));
        }

        for (index, message) in self.key_messages.iter().enumerate() {
            if message.message.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyField(
                    format!("key_messages[{index}].message"),
                )));
            }
            if self.key_messages[..index].iter().any(|m| m.id == message.id) {
                return Err(ValidationError::new(
                    ValidationErrorKind::DuplicateKeyMessage(message.id.to_string()),
                ));
            }
        }

        for required in [KeyMessageId::Hook, KeyMessageId::Problem, KeyMessageId::Solution] {
            if self.message_for(required).is_none() {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingKeyMessage(required.to_string()),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> StrategyOutput {
        StrategyOutput {
            core_promise: "Ship every sprint on time".to_string(),
            hook_intent: "name the pain".to_string(),
            emotional_arc: vec![
                "frustration".to_string(),
                "relief".to_string(),
                "confidence".to_string(),
            ],
            key_messages: vec![
                KeyMessage {
                    id: KeyMessageId::Hook,
                    message: "Still chasing status updates?".to_string(),
                    intent: "provoke recognition".to_string(),
                    emotional_target: "frustration".to_string(),
                },
                KeyMessage {
                    id: KeyMessageId::Problem,
                    message: "Your roadmap lives in five tools".to_string(),
                    intent: "name the pain".to_string(),
                    emotional_target: "overwhelm".to_string(),
                },
                KeyMessage {
                    id: KeyMessageId::Solution,
                    message: "One board your whole team trusts".to_string(),
                    intent: "present the fix".to_string(),
                    emotional_target: "relief".to_string(),
                },
            ],
            audience_insight: "Tech leads distrust heavyweight project tools".to_string(),
            differentiator: "Syncs with the tools engineers already use".to_string(),
        }
    }

    #[test]
    fn test_valid_strategy_passes() {
        assert!(strategy().validate().is_ok());
    }

    #[test]
    fn test_too_few_key_messages_fails() {
        let mut s = strategy();
        s.key_messages.pop();
        let err = s.validate().unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::TooFewKeyMessages(2)
        ));
    }

    #[test]
    fn test_missing_required_id_fails() {
        let mut s = strategy();
        s.key_messages[2].id = KeyMessageId::Cta;
        let err = s.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::MissingKeyMessage(_)));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let mut s = strategy();
        s.key_messages.push(KeyMessage {
            id: KeyMessageId::Hook,
            message: "Second hook".to_string(),
            intent: "duplicate".to_string(),
            emotional_target: "confusion".to_string(),
        });
        let err = s.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::DuplicateKeyMessage(_)));
    }

    #[test]
    fn test_empty_arc_fails() {
        let mut s = strategy();
        s.emotional_arc.clear();
        let err = s.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::EmptyEmotionalArc));
    }

    #[test]
    fn test_missing_field_fails_decoding() {
        // core_promise removed entirely
        let json = r#"{
            "hook_intent": "x",
            "emotional_arc": ["a"],
            "key_messages": [],
            "audience_insight": "x",
            "differentiator": "x"
        }"#;
        assert!(serde_json::from_str::<StrategyOutput>(json).is_err());
    }

    #[test]
    fn test_unknown_enum_value_fails_decoding() {
        let json = r#"{
            "id": "tagline",
            "message": "x",
            "intent": "x",
            "emotional_target": "x"
        }"#;
        assert!(serde_json::from_str::<KeyMessage>(json).is_err());
    }
}
