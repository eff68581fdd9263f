//! Chat session
//!
//! Conversation log, the controller that turns drafts into Gemini requests,
//! response handling, canned quick-prompts and the message list widget.

pub mod chat_events;
pub mod chat_render;
pub mod chat_state;
pub mod conversation;
pub mod quick_prompts;

pub use chat_state::{ChatController, PendingKind, Submit};
pub use conversation::{ConversationStore, Message, Role};
