//! In-process preference backend

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::PreferenceBackend;
use crate::error::{Result, ThemeError};

/// Volatile key/value store for tests and ephemeral sessions.
///
/// [`set_unavailable`](Self::set_unavailable) makes every operation fail,
/// which stands in for an unreachable device store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<String, String>>,
    unavailable: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.write().unwrap().insert(key.into(), value.into());
        self
    }

    /// Raw stored value, bypassing availability
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self, op: &str) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ThemeError::Unavailable(format!("{op} rejected")));
        }
        Ok(())
    }
}

impl PreferenceBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.check("read")?;
        Ok(self.entry(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.check("write")?;
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.check("remove")?;
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}
