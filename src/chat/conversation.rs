//! Conversation log
//!
//! Ordered, append-only list of role-tagged messages. Every append yields a
//! fresh snapshot; snapshots handed out earlier never change.

use std::sync::Arc;

use serde::Serialize;

/// Greeting shown before the first turn
pub const GREETING: &str = "🎀 校園/社團活動幫手已就緒！請先貼上 Gemini API Key，再提出你的需求～";

/// Sender of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Label shown above the message body
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Model => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One role-tagged message, also the wire shape of a request content entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    /// Parts joined by newlines, as displayed
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct ConversationStore {
    messages: Arc<Vec<Message>>,
}

impl ConversationStore {
    /// Store holding only the greeting
    pub fn seeded() -> Self {
        Self {
            messages: Arc::new(vec![Message::model(GREETING)]),
        }
    }

    /// Add a message at the end and return the new snapshot
    pub fn append(&mut self, message: Message) -> Arc<Vec<Message>> {
        Arc::make_mut(&mut self.messages).push(message);
        Arc::clone(&self.messages)
    }

    pub fn snapshot(&self) -> Arc<Vec<Message>> {
        Arc::clone(&self.messages)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; the greeting is present from construction
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::seeded()
    }
}
