//! Persistent key-value slot for the theme preference.
//! Browser builds use `localStorage` (see `platform::web`); native builds keep a JSON file.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store. Shared between "page loads" in tests by passing `&MemoryStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::PreferenceStore;
    use crate::error::{Result, ThemeError};
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    const APP_DIR: &str = "todo-frontend";
    const FILE_NAME: &str = "preferences.json";

    /// Flat JSON object of string keys to string values. Read-modify-write on every set.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config_dir>/todo-frontend/preferences.json`.
        pub fn open_default() -> Result<Self> {
            let dir = dirs::config_dir().ok_or(ThemeError::StorageUnavailable)?;
            Ok(Self::at(dir.join(APP_DIR).join(FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>> {
            match std::fs::read_to_string(&self.path) {
                Ok(s) if s.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(s) => Ok(serde_json::from_str(&s)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.load()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            let mut entries = self.load()?;
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            tracing::debug!(path = %self.path.display(), key, "preference written");
            Ok(())
        }
    }
}
