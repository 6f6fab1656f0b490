//! Session state for an ongoing conversation.
//!
//! A session owns the transcript and the slots collected so far. It lives
//! in memory only; nothing survives a process restart.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use casita_core::{ChatMessage, Role, SlotSet};

/// The complete state of one conversation.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub id: Uuid,
    /// Optional human-readable name for the session.
    pub name: Option<String>,
    /// Everything said so far, both sides.
    pub messages: Vec<ChatMessage>,
    /// Slot values carried forward between turns.
    pub known_slots: SlotSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Start a fresh session with an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: None,
            messages: Vec::new(),
            known_slots: SlotSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Name the session.
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Append one message to the transcript.
    pub fn add_message(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage { role, content });
        self.updated_at = Utc::now();
    }

    /// Total messages in the transcript, both sides counted.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Number of user turns so far.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .count()
    }

    /// Whether nothing has been said yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Forget the transcript and any collected slots.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.known_slots = SlotSet::new();
        self.updated_at = Utc::now();
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_core::Slot;

    #[test]
    fn test_new_session_is_empty() {
        let session = ConversationSession::new().with_name("Test".to_string());
        assert!(session.is_empty());
        assert!(session.known_slots.is_empty());
        assert_eq!(session.name.as_deref(), Some("Test"));
    }

    #[test]
    fn test_transcript_and_turn_counts() {
        let mut session = ConversationSession::new();

        session.add_message(Role::User, "a 3 bedroom house".to_string());
        session.add_message(Role::Assistant, "Could you tell me more?".to_string());
        session.add_message(Role::User, "1500 sqft".to_string());

        assert_eq!(session.message_count(), 3);
        assert_eq!(session.turn_count(), 2);
        assert!(!session.is_empty());
    }

    #[test]
    fn test_clear_forgets_slots() {
        let mut session = ConversationSession::new();
        session.known_slots.insert(Slot::Rooms, 3);
        session.add_message(Role::User, "a 3 bedroom house".to_string());

        session.clear();

        assert!(session.is_empty());
        assert!(session.known_slots.is_empty());
    }
}
