use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::chat::Submit;
use crate::chat::chat_events::poll_response_channel;
use crate::settings::settings_events::{self, SettingsChange};

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if poll_response_channel(&mut self.chat) {
            self.chat_scroll.jump_to_bottom();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        match self.focus {
            Focus::Settings => {
                let change = settings_events::paste_into_field(
                    &text,
                    &self.panel,
                    &mut self.settings,
                    self.key_store.as_mut(),
                );
                self.apply_settings_change(change);
            }
            Focus::Composer => self.input.insert_str(&text),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::Settings => {
                let change = settings_events::handle_settings_key(
                    key,
                    &mut self.panel,
                    &mut self.settings,
                    self.key_store.as_mut(),
                );
                self.apply_settings_change(change);
            }
            Focus::Composer => self.handle_composer_key(key),
        }
    }

    fn handle_composer_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            if key.modifiers.contains(KeyModifiers::ALT) {
                self.input.textarea.insert_newline();
            } else {
                self.send_draft();
            }
            return;
        }

        self.input.textarea.input(key);
    }

    fn apply_settings_change(&mut self, change: SettingsChange) {
        if change == SettingsChange::CredentialChanged {
            self.chat.update_credential(&self.settings.api_key);
        }
    }

    /// Submit the composer draft
    pub fn send_draft(&mut self) -> Submit {
        let draft = self.input.text();
        self.submit_text(&draft)
    }

    /// Submit text on behalf of the user; the draft is cleared once it was sent
    pub fn submit_text(&mut self, text: &str) -> Submit {
        let outcome = self.chat.submit(text, &self.settings);

        #[cfg(debug_assertions)]
        log::debug!("Submit outcome: {:?}", outcome);

        if outcome == Submit::Sent {
            self.input.clear();
            self.chat_scroll.jump_to_bottom();
        }
        outcome
    }

    pub fn check_connection(&mut self) -> Submit {
        let outcome = self.chat.check_connection();
        if outcome == Submit::Sent {
            self.chat_scroll.jump_to_bottom();
        }
        outcome
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
