//! Tests for AI worker thread

use super::*;
use crate::ai::provider::{AiError, make_client};
use crate::chat::conversation::Message;
use crate::test_utils::test_helpers::spawn_mock_server;
use std::panic;
use std::sync::mpsc;
use std::time::Duration;

fn generate_request(base_url: &str, request_id: u64) -> AiRequest {
    AiRequest::Generate {
        client: make_client("AIzaTest", base_url).unwrap(),
        model: "gemini-2.0-flash".to_string(),
        contents: vec![Message::user("hi")],
        request_id,
    }
}

#[test]
fn test_worker_returns_completion() {
    let (base_url, server) = spawn_mock_server(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"pong"}]}}]}"#,
    );
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(request_rx, response_tx);

    request_tx.send(generate_request(&base_url, 7)).unwrap();

    let response = response_rx.recv_timeout(Duration::from_secs(10)).unwrap();
    match response {
        AiResponse::Complete { text, request_id } => {
            assert_eq!(text, "pong");
            assert_eq!(request_id, 7);
        }
        other => panic!("Expected Complete response, got {:?}", other),
    }
    server.join().unwrap();
}

#[test]
fn test_worker_reports_api_failure() {
    let (base_url, server) =
        spawn_mock_server(400, r#"{"error":{"message":"API key not valid."}}"#);
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(request_rx, response_tx);

    request_tx.send(generate_request(&base_url, 3)).unwrap();

    let response = response_rx.recv_timeout(Duration::from_secs(10)).unwrap();
    match response {
        AiResponse::Failed { error, request_id } => {
            assert_eq!(request_id, 3);
            assert!(matches!(error, AiError::Api { code: 400, .. }));
            assert_eq!(error.message(), "API key not valid.");
        }
        other => panic!("Expected Failed response, got {:?}", other),
    }
    server.join().unwrap();
}

#[test]
fn test_worker_loop_exits_when_request_channel_closes() {
    let (request_tx, request_rx) = mpsc::channel::<AiRequest>();
    let (response_tx, response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(worker_loop(request_rx, response_tx));
    });

    drop(request_tx);
    handle.join().unwrap();

    // No responses and the sender side is gone
    assert!(matches!(
        response_rx.try_recv(),
        Err(mpsc::TryRecvError::Disconnected)
    ));
}

#[test]
fn test_crash_hook_ignores_panics_on_other_threads() {
    let (response_tx, response_rx) = mpsc::channel();
    let prev_hook = install_crash_hook(response_tx);

    let joined = std::thread::spawn(|| panic!("ui thread panic")).join();
    panic::set_hook(Box::new(move |info| prev_hook(info)));

    assert!(joined.is_err());
    assert!(matches!(
        response_rx.try_recv(),
        Err(mpsc::TryRecvError::Empty)
    ));
}
