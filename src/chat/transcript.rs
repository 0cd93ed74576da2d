//! Transcript types for the chat engine.

use super::display::RagDisplayStats;
use serde::Serialize;
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One immutable transcript entry. The transcript is append-only: entries are
/// never mutated or removed within a session.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Derived display stats; present only on answers from the RAG pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag: Option<RagDisplayStats>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            rag: None,
        }
    }

    pub fn assistant(content: impl Into<String>, rag: Option<RagDisplayStats>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            rag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_message_carries_no_stats() {
        let msg = ChatMessage::user("hej");
        assert_eq!(msg.role, Role::User);
        assert!(msg.rag.is_none());
    }
}
