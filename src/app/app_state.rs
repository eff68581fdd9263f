use crate::chat::ChatController;
use crate::input::InputState;
use crate::scroll::ScrollState;
use crate::settings::{KeyStore, Settings, SettingsField, SettingsPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Settings,
    Composer,
}

pub struct App {
    pub settings: Settings,
    pub panel: SettingsPanel,
    pub key_store: Box<dyn KeyStore>,
    pub chat: ChatController,
    pub input: InputState,
    pub focus: Focus,
    pub chat_scroll: ScrollState,
    pub should_quit: bool,
}

impl App {
    /// Build the session from already-hydrated settings
    ///
    /// Without a usable key the settings panel starts focused on the key row.
    pub fn new(settings: Settings, base_url: String, key_store: Box<dyn KeyStore>) -> Self {
        let chat = ChatController::new(&settings.api_key, base_url);

        let mut panel = SettingsPanel::new();
        let focus = if chat.is_configured() {
            Focus::Composer
        } else {
            while panel.selected_field() != SettingsField::ApiKey {
                panel.select_next();
            }
            Focus::Settings
        };

        Self {
            settings,
            panel,
            key_store,
            chat,
            input: InputState::new(),
            focus,
            chat_scroll: ScrollState::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the send action is currently available
    pub fn can_send(&self) -> bool {
        !self.chat.loading && !self.input.is_blank() && self.chat.is_configured()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Settings => Focus::Composer,
            Focus::Composer => Focus::Settings,
        };
    }
}
