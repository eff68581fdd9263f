//! campus-helper library - terminal chat helper for campus and club event marketing
//!
//! This library exposes the core functionality of campus-helper for the binary
//! and for testing purposes.

pub mod ai;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod prompt;
pub mod scroll;
pub mod settings;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use settings::Settings;
