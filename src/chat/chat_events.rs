//! Response channel polling
//!
//! Drains worker responses without blocking and folds them into the
//! conversation.

use std::sync::mpsc::TryRecvError;

use super::chat_state::{ChatController, WORKER_DISCONNECTED};
use crate::ai::request::AiResponse;

/// Poll the response channel for incoming AI responses
///
/// Called once per event loop iteration. Uses try_recv() for non-blocking
/// polling. Returns true if any state changed (responses received or
/// disconnected).
pub fn poll_response_channel(chat: &mut ChatController) -> bool {
    let Some(rx) = chat.response_rx.as_ref() else {
        return false;
    };

    let mut responses = Vec::new();
    let mut disconnected = false;

    loop {
        match rx.try_recv() {
            Ok(response) => responses.push(response),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                disconnected = true;
                break;
            }
        }
    }

    let had_responses = !responses.is_empty();

    for response in responses {
        process_response(chat, response);
    }

    if disconnected && chat.loading {
        log::error!("AI worker channel closed with request {} in flight", chat.request_id);
        chat.fail_request(WORKER_DISCONNECTED);
    }

    had_responses || disconnected
}

fn process_response(chat: &mut ChatController, response: AiResponse) {
    let current_request_id = chat.current_request_id();

    match response {
        AiResponse::Complete { text, request_id } => {
            if request_id != current_request_id || !chat.loading {
                log::debug!(
                    "Ignoring stale completion from request {} (current: {})",
                    request_id,
                    current_request_id
                );
                return;
            }
            chat.complete_request(&text);
        }
        AiResponse::Failed { error, request_id } => {
            if request_id != current_request_id || !chat.loading {
                log::debug!(
                    "Ignoring stale failure from request {} (current: {})",
                    request_id,
                    current_request_id
                );
                return;
            }
            chat.fail_request(error.message());
        }
        AiResponse::WorkerCrashed(message) => {
            if chat.loading {
                chat.fail_request(&message);
            } else {
                chat.last_error = Some(message);
            }
        }
    }
}
