//! Messages exchanged with the AI worker thread

use super::provider::{AiError, AsyncAiProvider};
use crate::chat::conversation::Message;

/// Request sent from the main thread to the worker
#[derive(Debug)]
pub enum AiRequest {
    /// Run one generateContent call
    Generate {
        /// Client built from the credential current at dispatch time
        client: AsyncAiProvider,
        model: String,
        contents: Vec<Message>,
        /// Used to drop responses that arrive for an older request
        request_id: u64,
    },
}

/// Response sent from the worker back to the main thread
#[derive(Debug)]
pub enum AiResponse {
    /// Call finished; `text` is the concatenated reply, possibly empty
    Complete { text: String, request_id: u64 },
    /// Call failed with a transport, API or parse error
    Failed { error: AiError, request_id: u64 },
    /// Worker thread panicked; no further responses will follow
    WorkerCrashed(String),
}
