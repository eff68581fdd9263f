use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::settings_state::{
    AUDIENCE_CATALOGUE, PLATFORM_CATALOGUE, Settings, SettingsField, SettingsPanel,
};
use crate::config::ai_types::DEFAULT_MODEL;
use crate::theme;

/// Longest run of mask dots shown for the credential
const MAX_MASK_LEN: usize = 16;

/// Credential as shown on screen; never reveals the key itself
pub fn mask_api_key(api_key: &str) -> String {
    let len = api_key.trim().chars().count();
    "•".repeat(len.min(MAX_MASK_LEN))
}

fn placeholder(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(theme::settings::PLACEHOLDER))
}

fn value(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(theme::settings::VALUE))
}

fn text_value(text: &str, empty: &str) -> Vec<Span<'static>> {
    if text.is_empty() {
        vec![placeholder(empty.to_string())]
    } else {
        vec![value(text.to_string())]
    }
}

fn chips(
    catalogue: &[&'static str],
    is_active: impl Fn(&str) -> bool,
    cursor: Option<usize>,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(catalogue.len() * 2);
    for (i, tag) in catalogue.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let mut style = if is_active(tag) {
            theme::settings::CHIP_ACTIVE
        } else {
            theme::settings::CHIP_INACTIVE
        };
        if cursor == Some(i) {
            style = style.add_modifier(theme::settings::CHIP_CURSOR);
        }
        spans.push(Span::styled(format!(" {} ", tag), style));
    }
    spans
}

fn value_spans(
    field: SettingsField,
    settings: &Settings,
    tag_cursor: Option<usize>,
) -> Vec<Span<'static>> {
    match field {
        SettingsField::Model => text_value(&settings.model, DEFAULT_MODEL),
        SettingsField::ApiKey => {
            if settings.is_configured() {
                vec![value(mask_api_key(&settings.api_key))]
            } else {
                vec![Span::styled(
                    "未設定（貼上或輸入 Key）",
                    Style::default().fg(theme::settings::KEY_MISSING),
                )]
            }
        }
        SettingsField::RememberKey => {
            let mark = if settings.remember_key { "[x]" } else { "[ ]" };
            vec![value(mark)]
        }
        SettingsField::Budget => match settings.budget_max {
            Some(budget) => vec![value(format!("NT$ {}", budget))],
            None => vec![placeholder("不限")],
        },
        SettingsField::Audiences => chips(
            &AUDIENCE_CATALOGUE,
            |tag| settings.has_audience(tag),
            tag_cursor,
        ),
        SettingsField::Tone => vec![value(format!("◀ {} ▶", settings.tone.label()))],
        SettingsField::Platforms => chips(
            &PLATFORM_CATALOGUE,
            |tag| settings.has_platform(tag),
            tag_cursor,
        ),
        SettingsField::Hashtags => text_value(&settings.hashtags, "（無）"),
        SettingsField::Cta => text_value(&settings.cta, "（無）"),
    }
}

/// One line per settings row
pub fn build_lines(settings: &Settings, panel: &SettingsPanel, focused: bool) -> Vec<Line<'static>> {
    let selected = panel.selected_field();

    SettingsField::ALL
        .iter()
        .map(|&field| {
            let is_selected = focused && field == selected;
            let marker = if is_selected { "› " } else { "  " };
            let tag_cursor = is_selected.then(|| panel.tag_cursor());

            let mut spans = vec![
                Span::styled(marker, theme::settings::TITLE),
                Span::styled(
                    format!("{}：", field.label()),
                    Style::default().fg(theme::settings::LABEL),
                ),
            ];
            spans.extend(value_spans(field, settings, tag_cursor));

            let line = Line::from(spans);
            if is_selected {
                line.style(theme::settings::SELECTED_ROW)
            } else {
                line
            }
        })
        .collect()
}

pub fn render_panel(
    settings: &Settings,
    panel: &SettingsPanel,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused {
        theme::settings::BORDER_FOCUSED
    } else {
        theme::settings::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" 🎀 活動設定 ", theme::settings::TITLE))
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(build_lines(settings, panel, focused)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "settings_render_tests.rs"]
mod settings_render_tests;
