//! Persistence for the one setting the UI remembers: the API base URL.

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Get/set access to the persisted API base URL.
///
/// No shape checks happen here. A malformed URL is stored as typed and only
/// fails later, when a request is built from it.
pub trait ConfigStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, url: &str) -> Result<(), StoreError>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for Box<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&mut self, url: &str) -> Result<(), StoreError> {
        (**self).set(url)
    }
}

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Stored {
    #[serde(rename = "apiBaseUrl", default, skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
}

/// Keeps the base URL in a small JSON file so it survives restarts.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    current: Option<String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; it is
    /// created on the first `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let current = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<Stored>(&contents)?.api_base_url,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, current })
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self) -> Option<String> {
        self.current.clone()
    }

    fn set(&mut self, url: &str) -> Result<(), StoreError> {
        let stored = Stored {
            api_base_url: Some(url.to_string()),
        };
        // Blocking, but tiny. Callers hold the store lock only for this call.
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        self.current = stored.api_base_url;
        Ok(())
    }
}

/// Process-local store, forgotten on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    current: Option<String>,
}

impl MemoryStore {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            current: Some(url.into()),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.current.clone()
    }

    fn set(&mut self, url: &str) -> Result<(), StoreError> {
        self.current = Some(url.to_string());
        Ok(())
    }
}
