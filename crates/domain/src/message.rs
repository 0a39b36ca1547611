//! Chat message vocabulary for the archaeological assistant.
//!
//! Rendering dispatches on the closed [`MessageBody`] enum; each variant
//! maps to one bubble component in the player UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional annotations attached to artifact/location/note messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub title: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub artifact_id: Option<String>,
    pub sketches: Vec<String>,
}

/// Closed set of message kinds shown in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageBody {
    User {
        content: String,
    },
    Assistant {
        content: String,
    },
    Artifact {
        content: String,
        metadata: MessageMetadata,
    },
    Location {
        content: String,
        metadata: MessageMetadata,
    },
    /// Ceremonial parchment banner (the welcome message).
    Scroll {
        content: String,
    },
    /// Field-journal style note.
    Note {
        content: String,
        metadata: MessageMetadata,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub body: MessageBody,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(body: MessageBody, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            body,
            sent_at,
        }
    }

    pub fn user(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self::new(
            MessageBody::User {
                content: content.into(),
            },
            sent_at,
        )
    }

    pub fn assistant(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self::new(
            MessageBody::Assistant {
                content: content.into(),
            },
            sent_at,
        )
    }

    pub fn scroll(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self::new(
            MessageBody::Scroll {
                content: content.into(),
            },
            sent_at,
        )
    }

    pub fn note(
        content: impl Into<String>,
        metadata: MessageMetadata,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            MessageBody::Note {
                content: content.into(),
                metadata,
            },
            sent_at,
        )
    }

    pub fn content(&self) -> &str {
        match &self.body {
            MessageBody::User { content }
            | MessageBody::Assistant { content }
            | MessageBody::Artifact { content, .. }
            | MessageBody::Location { content, .. }
            | MessageBody::Scroll { content }
            | MessageBody::Note { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_serializes_with_type_tag() {
        let body = MessageBody::Scroll {
            content: "Bienvenue".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["type"], "scroll");
        assert_eq!(json["content"], "Bienvenue");
    }

    #[test]
    fn test_content_reaches_through_variants() {
        let now = Utc::now();
        assert_eq!(ChatMessage::user("q", now).content(), "q");
        assert_eq!(ChatMessage::assistant("a", now).content(), "a");
    }

    #[test]
    fn test_note_carries_location_metadata() {
        let metadata = MessageMetadata {
            location: Some("Complexe du temple oriental".to_string()),
            ..MessageMetadata::default()
        };
        let message = ChatMessage::note("Notes de terrain", metadata, Utc::now());
        let json = serde_json::to_value(&message.body).expect("serialize");
        assert_eq!(json["type"], "note");
        assert_eq!(json["metadata"]["location"], "Complexe du temple oriental");
    }
}
