//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Blossom - pink accents on a dark plum background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(253, 242, 248);
    pub const TEXT_DIM: Color = Color::Rgb(120, 92, 108);
    pub const TEXT_MUTED: Color = Color::Rgb(170, 140, 156);

    pub const BG_DARK: Color = Color::Rgb(38, 18, 30);
    pub const BG_SURFACE: Color = Color::Rgb(52, 26, 42);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(74, 0, 30);

    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const PINK_SOFT: Color = Color::Rgb(251, 207, 232);
    pub const ROSE: Color = Color::Rgb(255, 228, 230);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(239, 68, 68);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Settings panel styles
pub mod settings {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::PINK;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);

    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const VALUE: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const SELECTED_ROW: Style = Style::new().bg(palette::BG_HIGHLIGHT);

    // Tag chips (audiences, platforms)
    pub const CHIP_ACTIVE: Style = Style::new()
        .fg(Color::Rgb(255, 255, 255))
        .bg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const CHIP_INACTIVE: Style = Style::new().fg(palette::PINK_SOFT);
    pub const CHIP_CURSOR: Modifier = Modifier::UNDERLINED;

    pub const KEY_MISSING: Color = palette::WARNING;
}

/// Message list styles
pub mod chat {
    use super::*;

    pub const BORDER: Color = palette::PINK_SOFT;
    pub const TITLE: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);

    pub const USER_LABEL: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const MODEL_LABEL: Style = Style::new()
        .fg(palette::ROSE)
        .add_modifier(Modifier::BOLD);
    pub const USER_TEXT: Color = palette::PINK_SOFT;
    pub const MODEL_TEXT: Color = palette::TEXT;

    pub const THINKING: Style = Style::new()
        .fg(palette::WARNING)
        .add_modifier(Modifier::ITALIC);

    pub const SCROLL_HINT: Color = palette::TEXT_DIM;
    pub const QUICK_PROMPT: Color = palette::PINK_SOFT;
}

/// Composer styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::PINK;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;

    pub const SEND_ENABLED: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const SEND_DISABLED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .add_modifier(Modifier::DIM);

    pub const PLACEHOLDER: Style = Style::new().fg(palette::TEXT_DIM);

    pub const ERROR: Style = Style::new()
        .fg(palette::ERROR)
        .add_modifier(Modifier::BOLD);

    pub const CURSOR: Style = palette::CURSOR;
}

/// Bottom help line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Border hint utilities - for building styled keyboard shortcuts on borders
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Build a single hint with key in full color and description dimmed
    pub fn hint(key: &'static str, desc: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(key, Style::new().fg(color)),
            Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ),
        ]
    }

    /// Build a separator dot in dimmed color
    pub fn separator(color: Color) -> Span<'static> {
        Span::styled("• ", Style::new().fg(color).add_modifier(Modifier::DIM))
    }

    /// Build a line with multiple hints separated by dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator(color));
            }
            spans.extend(hint(key, desc, color));
        }
        Line::from(spans)
    }
}
