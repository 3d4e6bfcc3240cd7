//! Persisted theme preference
//!
//! [`PreferenceBackend`] is the raw async key/value store. [`PreferenceStore`]
//! layers the theme-mode contract on top of it: one fixed key, strict
//! `"light"`/`"dark"` values, and failures that are logged and reported as an
//! outcome instead of propagating.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::mode::ThemeMode;

/// Key the theme mode is stored under unless configured otherwise
pub const DEFAULT_PREFERENCE_KEY: &str = "@theme_mode";

/// Durable string key/value storage.
///
/// A missing key is `Ok(None)`, never an error.
pub trait PreferenceBackend: Send + Sync {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn write(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

impl<B: PreferenceBackend> PreferenceBackend for Arc<B> {
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send {
        (**self).remove(key)
    }
}

/// Best-effort persistence for a single theme mode value
pub struct PreferenceStore<B> {
    backend: B,
    key: String,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_PREFERENCE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The persisted mode, or `None` if absent, unrecognized, or unreadable
    pub async fn get(&self) -> Option<ThemeMode> {
        match self.backend.read(&self.key).await {
            Ok(None) => None,
            Ok(Some(raw)) => {
                let mode = ThemeMode::parse(&raw);
                if mode.is_none() {
                    tracing::warn!(
                        "PreferenceStore: ignoring unrecognized value {:?} under {}",
                        raw,
                        self.key
                    );
                }
                mode
            }
            Err(e) => {
                tracing::warn!("PreferenceStore: failed to read {}: {}", self.key, e);
                None
            }
        }
    }

    /// Persist `mode`. A failure is logged and returned, never raised.
    pub async fn set(&self, mode: ThemeMode) -> Result<()> {
        let outcome = self.backend.write(&self.key, mode.as_str()).await;
        if let Err(ref e) = outcome {
            tracing::warn!("PreferenceStore: failed to save {} = {}: {}", self.key, mode, e);
        }
        outcome
    }

    /// Remove the persisted mode. A failure is logged and returned, never raised.
    pub async fn clear(&self) -> Result<()> {
        let outcome = self.backend.remove(&self.key).await;
        if let Err(ref e) = outcome {
            tracing::warn!("PreferenceStore: failed to clear {}: {}", self.key, e);
        }
        outcome
    }
}

impl<B> std::fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let store = PreferenceStore::new(MemoryBackend::new());
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = PreferenceStore::new(MemoryBackend::new());
        store.set(ThemeMode::Dark).await.unwrap();
        assert_eq!(store.get().await, Some(ThemeMode::Dark));
        assert_eq!(
            store.backend().entry(DEFAULT_PREFERENCE_KEY).as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_corrupt_value_is_absent() {
        let backend = MemoryBackend::new().with_entry(DEFAULT_PREFERENCE_KEY, "purple");
        let store = PreferenceStore::new(backend);
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_failures_are_outcomes() {
        let backend = Arc::new(MemoryBackend::new().with_entry(DEFAULT_PREFERENCE_KEY, "dark"));
        let store = PreferenceStore::new(backend.clone());

        backend.set_unavailable(true);
        assert_eq!(store.get().await, None);
        assert!(store.set(ThemeMode::Light).await.is_err());
        assert!(store.clear().await.is_err());

        // A failed call leaves later calls unaffected
        backend.set_unavailable(false);
        assert_eq!(store.get().await, Some(ThemeMode::Dark));
        store.clear().await.unwrap();
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_custom_key() {
        let backend = Arc::new(MemoryBackend::new());
        let store = PreferenceStore::with_key(backend.clone(), "app.theme");
        store.set(ThemeMode::Light).await.unwrap();
        assert_eq!(backend.entry("app.theme").as_deref(), Some("light"));
        assert_eq!(backend.entry(DEFAULT_PREFERENCE_KEY), None);
    }
}
