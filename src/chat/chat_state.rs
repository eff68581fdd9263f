//! Chat controller state
//!
//! Owns the conversation and the request lifecycle. At most one request is in
//! flight; `loading` is the only guard.

use std::sync::mpsc::{Receiver, Sender};

use super::conversation::{ConversationStore, Message};
use crate::ai::provider::{AsyncAiProvider, make_client};
use crate::ai::request::{AiRequest, AiResponse};
use crate::config::ai_types::DEFAULT_MODEL;
use crate::prompt::build_system_prompt;
use crate::settings::Settings;

/// Error line text when sending without a usable key
pub const SEND_NEEDS_KEY: &str = "請先輸入有效的 Gemini API Key";

/// Error line text when checking the connection without a usable key
pub const PING_NEEDS_KEY: &str = "請先貼 Gemini API Key";

/// Model used by the connectivity check, whatever the configured model is
pub const PING_MODEL: &str = DEFAULT_MODEL;

pub const PING_TEXT: &str = "hi";

/// Stored in place of an empty reply
pub const NO_CONTENT: &str = "[No content]";

pub const WORKER_DISCONNECTED: &str = "AI worker disconnected unexpectedly";

/// What the in-flight request was started by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Send,
    Ping,
}

/// Outcome of a submit or connectivity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Blank text; nothing changed
    Ignored,
    /// A request is already in flight; nothing changed
    Busy,
    /// No client; only the error line changed
    NotConfigured,
    /// Request dispatched
    Sent,
}

/// Drives the conversation and talks to the AI worker
#[derive(Debug)]
pub struct ChatController {
    pub conversation: ConversationStore,
    pub loading: bool,
    pub last_error: Option<String>,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<AiRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<AiResponse>>,
    /// Incremented for every dispatched request
    pub request_id: u64,
    pub pending: Option<PendingKind>,
    client: Option<AsyncAiProvider>,
    base_url: String,
}

impl ChatController {
    /// Create a controller with a seeded conversation
    ///
    /// A client is built right away when `api_key` is usable.
    pub fn new(api_key: &str, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            conversation: ConversationStore::seeded(),
            loading: false,
            last_error: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            pending: None,
            client: make_client(api_key, &base_url),
            base_url,
        }
    }

    /// Set the communication channels for the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Rebuild the client after the credential was edited
    pub fn update_credential(&mut self, api_key: &str) {
        self.client = make_client(api_key, &self.base_url);

        #[cfg(debug_assertions)]
        log::debug!("Credential updated, client present: {}", self.client.is_some());
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Submit a draft
    ///
    /// On `Submit::Sent` the user message is already in the conversation and
    /// the caller clears the draft; on any other outcome the draft is kept.
    pub fn submit(&mut self, text: &str, settings: &Settings) -> Submit {
        let text = text.trim();
        if text.is_empty() {
            return Submit::Ignored;
        }
        if self.loading {
            return Submit::Busy;
        }
        let Some(client) = self.client.clone() else {
            self.last_error = Some(SEND_NEEDS_KEY.to_string());
            return Submit::NotConfigured;
        };

        self.start_request(PendingKind::Send);
        self.conversation.append(Message::user(text));

        let contents = vec![
            Message::model(build_system_prompt(settings)),
            Message::user(text),
        ];
        self.dispatch(client, settings.effective_model().to_string(), contents);
        Submit::Sent
    }

    /// Send a fixed greeting to the baseline model to verify the key works
    ///
    /// Never appends a user message.
    pub fn check_connection(&mut self) -> Submit {
        if self.loading {
            return Submit::Busy;
        }
        let Some(client) = self.client.clone() else {
            self.last_error = Some(PING_NEEDS_KEY.to_string());
            return Submit::NotConfigured;
        };

        self.start_request(PendingKind::Ping);
        self.dispatch(client, PING_MODEL.to_string(), vec![Message::user(PING_TEXT)]);
        Submit::Sent
    }

    /// Enter the sending state and invalidate older request ids
    fn start_request(&mut self, kind: PendingKind) {
        self.last_error = None;
        self.loading = true;
        self.pending = Some(kind);
        self.request_id = self.request_id.wrapping_add(1);
    }

    fn dispatch(&mut self, client: AsyncAiProvider, model: String, contents: Vec<Message>) {
        let request = AiRequest::Generate {
            client,
            model,
            contents,
            request_id: self.request_id,
        };

        log::info!(
            "Dispatching request {} ({:?})",
            self.request_id,
            self.pending
        );

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };
        if !sent {
            log::error!("AI worker unavailable, request {} dropped", self.request_id);
            self.fail_request(WORKER_DISCONNECTED);
        }
    }

    /// Leave the sending state with a reply
    pub(crate) fn complete_request(&mut self, text: &str) {
        let kind = self.finish();
        let body = match kind {
            PendingKind::Send if text.is_empty() => NO_CONTENT.to_string(),
            PendingKind::Send => text.to_string(),
            PendingKind::Ping => format!("✅ 連線成功：{}", text),
        };
        self.conversation.append(Message::model(body));
    }

    /// Leave the sending state with an error
    pub(crate) fn fail_request(&mut self, message: &str) {
        let kind = self.finish();
        self.last_error = Some(message.to_string());
        let body = match kind {
            PendingKind::Send => format!("⚠ {}", message),
            PendingKind::Ping => format!("❌ 連線失敗：{}", message),
        };
        self.conversation.append(Message::model(body));
    }

    fn finish(&mut self) -> PendingKind {
        self.loading = false;
        self.pending.take().unwrap_or(PendingKind::Send)
    }
}
