//! Settings panel key handling
//!
//! Translates key presses on the focused panel row into settings edits and
//! keeps the remembered API key in step with the credential field.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::key_store::{self, KeyStore};
use super::settings_state::{AUDIENCE_CATALOGUE, PLATFORM_CATALOGUE, Settings, SettingsField, SettingsPanel};

/// What a key press did to the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    /// Key not handled by the panel
    Unhandled,
    /// Selection moved or key ignored; settings unchanged
    None,
    /// A campaign or model setting changed
    Changed,
    /// The credential changed; the completion client must be rebuilt
    CredentialChanged,
}

/// Handle a key press while the settings panel has focus
pub fn handle_settings_key(
    key: KeyEvent,
    panel: &mut SettingsPanel,
    settings: &mut Settings,
    store: &mut dyn KeyStore,
) -> SettingsChange {
    match key.code {
        KeyCode::Up => {
            panel.select_previous();
            return SettingsChange::None;
        }
        KeyCode::Down => {
            panel.select_next();
            return SettingsChange::None;
        }
        _ => {}
    }

    let field = panel.selected_field();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            return clear_text_field(field, settings, store);
        }
        return SettingsChange::Unhandled;
    }

    match field {
        SettingsField::Model | SettingsField::ApiKey | SettingsField::Hashtags | SettingsField::Cta => {
            edit_text_field(key, field, settings, store)
        }
        SettingsField::RememberKey => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let remember = !settings.remember_key;
                key_store::set_remember_key(settings, remember, store);
                SettingsChange::Changed
            }
            _ => SettingsChange::Unhandled,
        },
        SettingsField::Budget => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                settings.push_budget_digit(c.to_digit(10).unwrap_or(0));
                SettingsChange::Changed
            }
            KeyCode::Backspace => {
                settings.pop_budget_digit();
                SettingsChange::Changed
            }
            KeyCode::Char(_) => SettingsChange::None,
            _ => SettingsChange::Unhandled,
        },
        SettingsField::Tone => match key.code {
            KeyCode::Left => {
                settings.tone = settings.tone.previous();
                SettingsChange::Changed
            }
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                settings.tone = settings.tone.next();
                SettingsChange::Changed
            }
            _ => SettingsChange::Unhandled,
        },
        SettingsField::Audiences | SettingsField::Platforms => match key.code {
            KeyCode::Left => {
                panel.tag_previous();
                SettingsChange::None
            }
            KeyCode::Right => {
                panel.tag_next();
                SettingsChange::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let cursor = panel.tag_cursor();
                if field == SettingsField::Audiences {
                    settings.toggle_audience(AUDIENCE_CATALOGUE[cursor]);
                } else {
                    settings.toggle_platform(PLATFORM_CATALOGUE[cursor]);
                }
                SettingsChange::Changed
            }
            _ => SettingsChange::Unhandled,
        },
    }
}

/// Insert pasted text into the selected text row
///
/// Line breaks are dropped since every text row is single-line.
pub fn paste_into_field(
    text: &str,
    panel: &SettingsPanel,
    settings: &mut Settings,
    store: &mut dyn KeyStore,
) -> SettingsChange {
    let field = panel.selected_field();
    let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();

    let Some(target) = text_field_mut(field, settings) else {
        return SettingsChange::None;
    };
    target.push_str(&cleaned);
    after_text_edit(field, settings, store)
}

fn edit_text_field(
    key: KeyEvent,
    field: SettingsField,
    settings: &mut Settings,
    store: &mut dyn KeyStore,
) -> SettingsChange {
    let Some(target) = text_field_mut(field, settings) else {
        return SettingsChange::Unhandled;
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => target.push(c),
        KeyCode::Backspace => {
            if target.pop().is_none() {
                return SettingsChange::None;
            }
        }
        _ => return SettingsChange::Unhandled,
    }

    after_text_edit(field, settings, store)
}

fn clear_text_field(
    field: SettingsField,
    settings: &mut Settings,
    store: &mut dyn KeyStore,
) -> SettingsChange {
    if field == SettingsField::Budget {
        settings.budget_max = None;
        return SettingsChange::Changed;
    }
    let Some(target) = text_field_mut(field, settings) else {
        return SettingsChange::None;
    };
    target.clear();
    after_text_edit(field, settings, store)
}

fn after_text_edit(
    field: SettingsField,
    settings: &mut Settings,
    store: &mut dyn KeyStore,
) -> SettingsChange {
    if field == SettingsField::ApiKey {
        key_store::sync_api_key(settings, store);
        SettingsChange::CredentialChanged
    } else {
        SettingsChange::Changed
    }
}

fn text_field_mut(field: SettingsField, settings: &mut Settings) -> Option<&mut String> {
    match field {
        SettingsField::Model => Some(&mut settings.model),
        SettingsField::ApiKey => Some(&mut settings.api_key),
        SettingsField::Hashtags => Some(&mut settings.hashtags),
        SettingsField::Cta => Some(&mut settings.cta),
        _ => None,
    }
}
