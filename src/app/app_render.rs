use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::{App, Focus};
use crate::chat::chat_render;
use crate::help::help_line_render;
use crate::input::input_render;
use crate::settings::settings_render;

/// Panel rows plus borders
const SETTINGS_HEIGHT: u16 = 11;
const COMPOSER_HEIGHT: u16 = 4;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [settings_area, messages_area, quick_area, composer_area, error_area, help_area] =
            Layout::vertical([
                Constraint::Length(SETTINGS_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(COMPOSER_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        settings_render::render_panel(
            &self.settings,
            &self.panel,
            self.focus == Focus::Settings,
            frame,
            settings_area,
        );

        chat_render::render_messages(&self.chat, &mut self.chat_scroll, frame, messages_area);
        chat_render::render_quick_prompt_bar(frame, quick_area);

        let can_send = self.can_send();
        input_render::render_field(
            &mut self.input,
            self.focus == Focus::Composer,
            can_send,
            frame,
            composer_area,
        );
        input_render::render_error_line(self.chat.last_error.as_deref(), frame, error_area);

        help_line_render::render_line(self, frame, help_area);
    }
}
