//! JSON-file preference backend

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use super::PreferenceBackend;
use crate::error::{Result, ThemeError};

type Entries = BTreeMap<String, String>;

/// Stores preferences as a JSON object of string values in one file.
///
/// A missing file is an empty store. Writes go to a sibling temp file that
/// is then renamed over the original, so readers never see a partial file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Storage {
            path: self.path.clone(),
            source,
        }
    }

    async fn load(&self) -> Result<Entries> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(self.storage_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|source| ThemeError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Load for modification; a corrupt file is replaced rather than kept
    async fn load_for_update(&self) -> Result<Entries> {
        match self.load().await {
            Err(ThemeError::Corrupt { path, source }) => {
                tracing::warn!(
                    "FileBackend: discarding malformed preference file {}: {}",
                    path.display(),
                    source
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn store(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| ThemeError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.storage_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.storage_error(e))
    }
}

impl PreferenceBackend for FileBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_update().await?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_update().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.store(&entries).await
    }
}
