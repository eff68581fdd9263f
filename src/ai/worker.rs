//! AI Worker Thread
//!
//! Handles AI requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, makes HTTP calls to Gemini,
//! and sends each reply back to the main thread.
//!
//! Uses a tokio runtime for async HTTP. Includes panic handling so a crash
//! inside the worker never prints over the terminal UI.

use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use super::request::{AiRequest, AiResponse};

/// Spawn the AI worker thread
///
/// Creates a background thread with a tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Makes async HTTP calls with the client carried by each request
/// 3. Sends one response per request back via the response channel
///
/// The thread exits when the request channel is closed.
pub fn spawn_worker(request_rx: Receiver<AiRequest>, response_tx: Sender<AiResponse>) {
    thread::spawn(move || {
        // The default panic hook prints to stderr which corrupts the TUI
        let prev_hook = install_crash_hook(response_tx.clone());

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(request_rx, response_tx));
        }));

        panic::set_hook(Box::new(move |info| prev_hook(info)));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("AI worker thread panicked: {}", panic_msg);
        }
    });
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Report panics on the calling thread as `WorkerCrashed`
///
/// Panics on any other thread go to the previously installed hook, so the
/// terminal-restore hook still runs for the UI thread. Returns that hook.
fn install_crash_hook(response_tx: Sender<AiResponse>) -> Arc<PanicHook> {
    let worker_id = thread::current().id();
    let prev_hook: Arc<PanicHook> = Arc::from(panic::take_hook());
    let chained = Arc::clone(&prev_hook);

    panic::set_hook(Box::new(move |panic_info| {
        if thread::current().id() != worker_id {
            chained(panic_info);
            return;
        }

        let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic in AI worker".to_string()
        };

        log::error!(
            "AI worker panic: {} at {:?}",
            panic_msg,
            panic_info.location()
        );

        let _ = response_tx.send(AiResponse::WorkerCrashed(format!(
            "AI worker crashed: {}",
            panic_msg
        )));
    }));

    prev_hook
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Requests run one after another; the controller never has more than one
/// in flight.
async fn worker_loop(request_rx: Receiver<AiRequest>, response_tx: Sender<AiResponse>) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(request).await;
        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("AI worker loop finished");
}

async fn handle_request(request: AiRequest) -> AiResponse {
    match request {
        AiRequest::Generate {
            client,
            model,
            contents,
            request_id,
        } => {
            #[cfg(debug_assertions)]
            log::debug!("Request {} dispatched to {}", request_id, client.provider_name());

            match client.generate_content(&model, &contents).await {
                Ok(text) => {
                    log::info!("Request {} completed ({} chars)", request_id, text.len());
                    AiResponse::Complete { text, request_id }
                }
                Err(error) => {
                    log::warn!("Request {} failed: {}", request_id, error);
                    AiResponse::Failed { error, request_id }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
