use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::InputState;
use crate::theme;

/// Render the composer; `can_send` decides how the send hint is drawn
pub fn render_field(
    input: &mut InputState,
    focused: bool,
    can_send: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };
    let send_style = if can_send {
        theme::input::SEND_ENABLED
    } else {
        theme::input::SEND_DISABLED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 訊息 ")
        .title_top(Line::from(Span::styled(" Enter 送出 ", send_style)).alignment(Alignment::Right))
        .border_style(Style::default().fg(border_color));

    input.textarea.set_block(block);
    if focused {
        input.textarea.set_cursor_style(theme::input::CURSOR);
    } else {
        input.textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&input.textarea, area);
}

/// Single line under the composer; blank when there is no error
pub fn render_error_line(error: Option<&str>, frame: &mut Frame, area: Rect) {
    let line = match error {
        Some(message) => Line::from(Span::styled(format!(" ⚠ {}", message), theme::input::ERROR)),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
