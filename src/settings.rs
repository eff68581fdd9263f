//! Campaign settings
//!
//! Holds the user-adjustable campaign parameters and connection settings,
//! the panel used to edit them, and the local store that remembers the API key.

pub mod key_store;
pub mod settings_events;
pub mod settings_render;
pub mod settings_state;

pub use key_store::{FileKeyStore, KeyStore, MemoryKeyStore};
pub use settings_state::{AUDIENCE_CATALOGUE, PLATFORM_CATALOGUE, Settings, SettingsField, SettingsPanel, Tone};


#[cfg(test)]
mod settings_events_tests;
