//! Tests for chat_render

use super::*;
use crate::chat::conversation::GREETING;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(chat: &ChatController, scroll: &mut ScrollState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_messages(chat, scroll, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_greeting_rendered_with_assistant_label() {
    let chat = ChatController::new("", "http://127.0.0.1:9");
    let output = render_to_string(&chat, &mut ScrollState::new(), 100, 8);

    assert!(output.contains("Assistant"));
    assert!(output.contains("校園/社團活動幫手已就緒"));
    assert_eq!(chat.conversation.last().unwrap().text(), GREETING);
}

#[test]
fn test_user_and_model_labels() {
    let mut chat = ChatController::new("", "http://127.0.0.1:9");
    chat.conversation.append(Message::user("問題"));
    chat.conversation.append(Message::model("回答"));

    let lines = build_lines(&chat);
    let labels: Vec<String> = lines
        .iter()
        .filter(|l| l.spans.len() == 1)
        .map(|l| l.spans[0].content.to_string())
        .filter(|c| c == "You" || c == "Assistant")
        .collect();

    assert_eq!(labels, vec!["Assistant", "You", "Assistant"]);
}

#[test]
fn test_loading_placeholder_after_last_message() {
    let mut chat = ChatController::new("", "http://127.0.0.1:9");
    chat.loading = true;

    let lines = build_lines(&chat);
    assert_eq!(lines.last().unwrap().spans[0].content, THINKING);

    let output = render_to_string(&chat, &mut ScrollState::new(), 100, 10);
    assert!(output.contains(THINKING));
}

#[test]
fn test_no_placeholder_when_idle() {
    let chat = ChatController::new("", "http://127.0.0.1:9");
    let lines = build_lines(&chat);
    assert!(lines.iter().all(|l| l.spans.iter().all(|s| s.content != THINKING)));
}

#[test]
fn test_multiline_message_split_into_lines() {
    let mut chat = ChatController::new("", "http://127.0.0.1:9");
    chat.conversation.append(Message::model("一\n二\n三"));

    let lines = build_lines(&chat);
    // greeting: label + body + blank, reply: label + 3 lines + blank
    assert_eq!(lines.len(), 3 + 5);
}

#[test]
fn test_wrapped_height_counts_wrapped_rows() {
    let lines = vec![Line::from("a".repeat(25)), Line::default(), Line::from("abc")];
    assert_eq!(wrapped_height(&lines, 10), 3 + 1 + 1);
    assert_eq!(wrapped_height(&lines, 0), 25 + 1 + 3);
}

#[test]
fn test_view_follows_tail_as_messages_arrive() {
    let mut chat = ChatController::new("", "http://127.0.0.1:9");
    for i in 0..20 {
        chat.conversation.append(Message::user(format!("message {}", i)));
    }
    let mut scroll = ScrollState::new();

    let output = render_to_string(&chat, &mut scroll, 40, 10);

    assert!(scroll.offset > 0);
    assert_eq!(scroll.offset, scroll.max_offset);
    assert!(output.contains("message 19"));
    assert!(!output.contains("message 0 "));
}

#[test]
fn test_scrolled_up_view_shows_hint_and_stays_put() {
    let mut chat = ChatController::new("", "http://127.0.0.1:9");
    for i in 0..20 {
        chat.conversation.append(Message::user(format!("message {}", i)));
    }
    let mut scroll = ScrollState::new();
    render_to_string(&chat, &mut scroll, 40, 10);
    scroll.page_up();
    let offset = scroll.offset;

    chat.conversation.append(Message::model("new reply"));
    let output = render_to_string(&chat, &mut scroll, 40, 10);

    assert_eq!(scroll.offset, offset);
    assert!(output.contains("PageDown"));
}

#[test]
fn test_quick_prompt_bar_lists_shortcuts() {
    let backend = TestBackend::new(200, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_quick_prompt_bar(f, area);
        })
        .unwrap();
    let output = terminal.backend().to_string();

    assert!(output.contains("Alt+1"));
    assert!(output.contains("Alt+3"));
    assert!(output.contains("幫我找本週末台北"));
}
