use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::chat::quick_prompts::quick_prompt_for_digit;

/// Keys that work regardless of focus; returns true when consumed
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.check_connection();
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            true
        }
        KeyCode::PageUp => {
            app.chat_scroll.page_up();
            true
        }
        KeyCode::PageDown => {
            app.chat_scroll.page_down();
            true
        }
        KeyCode::Char(digit) if key.modifiers.contains(KeyModifiers::ALT) => {
            match quick_prompt_for_digit(digit) {
                Some(prompt) => {
                    app.submit_text(prompt);
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
