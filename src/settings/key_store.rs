//! API key persistence behind a small key-value store

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings_state::Settings;

/// Storage key holding the raw API key
pub const API_KEY_ENTRY: &str = "gemini_api_key";

const DATA_DIR: &str = "campus-helper";

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Key store I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Plain string key-value storage that outlives the session
pub trait KeyStore {
    fn read(&self, key: &str) -> Result<Option<String>, KeyStoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError>;
    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError>;
}

/// One file per key under the user's data directory.
///
/// No encryption and no expiry; values stay until removed.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    dir: PathBuf,
}

impl FileKeyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `<data_dir>/campus-helper`
    pub fn default_location() -> Result<Self, KeyStoreError> {
        dirs::data_dir()
            .map(|p| Self::new(p.join(DATA_DIR)))
            .ok_or(KeyStoreError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyStore for FileKeyStore {
    fn read(&self, key: &str) -> Result<Option<String>, KeyStoreError> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        fs::write(&path, value)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, used when no data directory exists and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn read(&self, key: &str) -> Result<Option<String>, KeyStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Load the remembered key into `settings`, once at startup.
///
/// An empty stored value is ignored, leaving any configured key in place.
pub fn hydrate_api_key(settings: &mut Settings, store: &dyn KeyStore) {
    match store.read(API_KEY_ENTRY) {
        Ok(Some(saved)) if !saved.is_empty() => settings.api_key = saved,
        Ok(_) => {}
        Err(e) => log::error!("Failed to read remembered API key: {}", e),
    }
}

/// Mirror an edited key to storage when remembering is on
pub fn sync_api_key(settings: &Settings, store: &mut dyn KeyStore) {
    if !settings.remember_key {
        return;
    }
    if let Err(e) = store.write(API_KEY_ENTRY, &settings.api_key) {
        log::error!("Failed to remember API key: {}", e);
    }
}

/// Apply a change of the remember flag to storage
pub fn set_remember_key(settings: &mut Settings, remember: bool, store: &mut dyn KeyStore) {
    settings.remember_key = remember;

    let result = if !remember {
        store.remove(API_KEY_ENTRY)
    } else if !settings.api_key.is_empty() {
        store.write(API_KEY_ENTRY, &settings.api_key)
    } else {
        Ok(())
    };

    if let Err(e) = result {
        log::error!("Failed to update remembered API key: {}", e);
    }
}
