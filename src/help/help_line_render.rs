use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.focus {
        Focus::Settings => {
            hints!["Tab" => "Composer", "↑/↓" => "Field", "←/→" => "Choose", "Space" => "Toggle", "Ctrl+U" => "Clear", "Ctrl+T" => "Test Key", "Ctrl+C" => "Quit"]
        }
        Focus::Composer if app.chat.loading => {
            hints!["Tab" => "Settings", "PgUp/PgDn" => "Scroll", "Ctrl+C" => "Quit"]
        }
        Focus::Composer => {
            hints!["Enter" => "Send", "Alt+Enter" => "Newline", "Alt+1..3" => "Quick Prompt", "PgUp/PgDn" => "Scroll", "Tab" => "Settings", "Ctrl+T" => "Test Key", "Ctrl+C" => "Quit"]
        }
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
