//! Tests for settings panel key handling

use super::key_store::API_KEY_ENTRY;
use super::settings_events::{SettingsChange, handle_settings_key, paste_into_field};
use super::*;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn select(panel: &mut SettingsPanel, field: SettingsField) {
    while panel.selected_field() != field {
        panel.select_next();
    }
}

#[test]
fn test_typing_into_api_key_remembers_it() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::ApiKey);

    let change = handle_settings_key(key(KeyCode::Char('A')), &mut panel, &mut settings, &mut store);
    handle_settings_key(key(KeyCode::Char('I')), &mut panel, &mut settings, &mut store);

    assert_eq!(change, SettingsChange::CredentialChanged);
    assert_eq!(settings.api_key, "AI");
    assert_eq!(store.read(API_KEY_ENTRY).unwrap(), Some("AI".to_string()));
}

#[test]
fn test_api_key_not_written_when_not_remembering() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings {
        remember_key: false,
        ..Settings::default()
    };
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::ApiKey);

    handle_settings_key(key(KeyCode::Char('x')), &mut panel, &mut settings, &mut store);

    assert_eq!(settings.api_key, "x");
    assert_eq!(store.read(API_KEY_ENTRY).unwrap(), None);
}

#[test]
fn test_paste_api_key_strips_newlines() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::ApiKey);

    let change = paste_into_field("AIzaKey\n", &panel, &mut settings, &mut store);

    assert_eq!(change, SettingsChange::CredentialChanged);
    assert_eq!(settings.api_key, "AIzaKey");
}

#[test]
fn test_paste_on_tag_row_is_ignored() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::Audiences);

    let change = paste_into_field("hello", &panel, &mut settings, &mut store);
    assert_eq!(change, SettingsChange::None);
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_ctrl_u_clears_hashtags() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::Hashtags);

    let change = handle_settings_key(
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        &mut panel,
        &mut settings,
        &mut store,
    );

    assert_eq!(change, SettingsChange::Changed);
    assert!(settings.hashtags.is_empty());
}

#[test]
fn test_space_toggles_remember_key() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings {
        api_key: "abc".to_string(),
        ..Settings::default()
    };
    let mut store = MemoryKeyStore::new();
    store.write(API_KEY_ENTRY, "abc").unwrap();
    select(&mut panel, SettingsField::RememberKey);

    handle_settings_key(key(KeyCode::Char(' ')), &mut panel, &mut settings, &mut store);
    assert!(!settings.remember_key);
    assert_eq!(store.read(API_KEY_ENTRY).unwrap(), None);

    handle_settings_key(key(KeyCode::Char(' ')), &mut panel, &mut settings, &mut store);
    assert!(settings.remember_key);
    assert_eq!(store.read(API_KEY_ENTRY).unwrap(), Some("abc".to_string()));
}

#[test]
fn test_budget_accepts_digits_only() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::Budget);

    for c in ['3', 'x', '0', '-', '0'] {
        handle_settings_key(key(KeyCode::Char(c)), &mut panel, &mut settings, &mut store);
    }
    assert_eq!(settings.budget_max, Some(300));

    handle_settings_key(
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        &mut panel,
        &mut settings,
        &mut store,
    );
    assert_eq!(settings.budget_max, None);
}

#[test]
fn test_audience_row_toggles_tag_under_cursor() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::Audiences);

    // Cursor on 新生
    handle_settings_key(key(KeyCode::Right), &mut panel, &mut settings, &mut store);
    handle_settings_key(key(KeyCode::Enter), &mut panel, &mut settings, &mut store);
    assert!(settings.has_audience("新生"));

    handle_settings_key(key(KeyCode::Enter), &mut panel, &mut settings, &mut store);
    assert!(!settings.has_audience("新生"));
}

#[test]
fn test_tone_row_cycles() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();
    select(&mut panel, SettingsField::Tone);

    handle_settings_key(key(KeyCode::Right), &mut panel, &mut settings, &mut store);
    assert_eq!(settings.tone, Tone::Professional);
    handle_settings_key(key(KeyCode::Left), &mut panel, &mut settings, &mut store);
    handle_settings_key(key(KeyCode::Left), &mut panel, &mut settings, &mut store);
    assert_eq!(settings.tone, Tone::Heartfelt);
}

#[test]
fn test_arrow_keys_move_selection() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings::default();
    let mut store = MemoryKeyStore::new();

    let change = handle_settings_key(key(KeyCode::Down), &mut panel, &mut settings, &mut store);
    assert_eq!(change, SettingsChange::None);
    assert_eq!(panel.selected_field(), SettingsField::ApiKey);
}

#[test]
fn test_backspace_on_empty_model_is_noop() {
    let mut panel = SettingsPanel::new();
    let mut settings = Settings {
        model: String::new(),
        ..Settings::default()
    };
    let mut store = MemoryKeyStore::new();

    let change = handle_settings_key(key(KeyCode::Backspace), &mut panel, &mut settings, &mut store);
    assert_eq!(change, SettingsChange::None);
}
