use thiserror::Error;

use crate::settings::key_store::KeyStoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to set up terminal: {0}")]
    Terminal(std::io::Error),

    #[error("Key store unavailable: {0}")]
    KeyStore(#[from] KeyStoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
