use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

/// Draft composer
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text("輸入你的需求，例如：幫我想一個迎新活動");
        textarea.set_placeholder_style(theme::input::PLACEHOLDER);

        Self { textarea }
    }

    /// Draft text with lines joined by newlines
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_is_blank() {
        let input = InputState::new();
        assert!(input.is_blank());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_text_joins_lines() {
        let mut input = InputState::new();
        input.insert_str("第一行\n第二行");
        assert_eq!(input.text(), "第一行\n第二行");
        assert!(!input.is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut input = InputState::new();
        input.insert_str("   \n  ");
        assert!(input.is_blank());
    }

    #[test]
    fn test_clear_empties_draft() {
        let mut input = InputState::new();
        input.insert_str("hello\nworld");
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.text(), "");
    }
}
