//! Message list rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::chat_state::ChatController;
use super::conversation::{Message, Role};
use super::quick_prompts::{QUICK_PROMPTS, short_label};
use crate::scroll::ScrollState;
use crate::theme;

pub const THINKING: &str = "思考中…";

fn label_line(role: Role) -> Line<'static> {
    let style = match role {
        Role::User => theme::chat::USER_LABEL,
        Role::Model => theme::chat::MODEL_LABEL,
    };
    Line::from(Span::styled(role.display_name(), style))
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &Message) {
    let text_color = match message.role {
        Role::User => theme::chat::USER_TEXT,
        Role::Model => theme::chat::MODEL_TEXT,
    };

    lines.push(label_line(message.role));
    for text_line in message.text().lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(text_color),
        )));
    }
    lines.push(Line::default());
}

/// Every message as label + body + blank separator, then the loading placeholder
pub fn build_lines(chat: &ChatController) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in chat.conversation.iter() {
        push_message(&mut lines, message);
    }

    if chat.loading {
        lines.push(label_line(Role::Model));
        lines.push(Line::from(Span::styled(THINKING, theme::chat::THINKING)));
    }

    lines
}

/// Rows the lines occupy once wrapped to `width` columns
pub fn wrapped_height(lines: &[Line], width: u16) -> u32 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1) as u32)
        .sum()
}

pub fn render_messages(
    chat: &ChatController,
    scroll: &mut ScrollState,
    frame: &mut Frame,
    area: Rect,
) {
    let lines = build_lines(chat);

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    scroll.update_bounds(wrapped_height(&lines, inner_width), inner_height);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" 💬 對話 ", theme::chat::TITLE))
        .border_style(Style::default().fg(theme::chat::BORDER));

    if !scroll.follow_tail {
        block = block.title_bottom(
            Line::from(Span::styled(
                " PageDown ↓ ",
                Style::default().fg(theme::chat::SCROLL_HINT),
            ))
            .alignment(Alignment::Right),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll.offset, 0));

    frame.render_widget(paragraph, area);
}

/// One-line bar listing the quick-prompt shortcuts
pub fn render_quick_prompt_bar(frame: &mut Frame, area: Rect) {
    const KEYS: [&str; 3] = ["Alt+1", "Alt+2", "Alt+3"];

    let hints: Vec<(&'static str, &'static str)> = KEYS
        .iter()
        .zip(QUICK_PROMPTS.iter())
        .map(|(key, prompt)| (*key, short_label(prompt)))
        .collect();
    let line = theme::border_hints::build_hints(&hints, theme::chat::QUICK_PROMPT);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "chat_render_tests.rs"]
mod chat_render_tests;
