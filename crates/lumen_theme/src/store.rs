//! Authoritative theme store
//!
//! [`ThemeStore`] owns the canonical theme state (mode, derived theme,
//! initialization flag). It is the only writer of the persisted preference
//! and of its [`ModeMirror`].
//!
//! Every mutation follows the same order:
//!
//! 1. canonical state is committed (visible to readers immediately)
//! 2. the preference is persisted, best-effort
//! 3. the mirror is updated
//!
//! A persistence failure is logged and never rolls back step 1.

use std::future::Future;
use std::sync::{Arc, RwLock};

use crate::error::{Result, ThemeError};
use crate::factory::{DesignTokens, TokenFactory};
use crate::mirror::{MirrorWriter, ModeMirror};
use crate::mode::ThemeMode;
use crate::storage::{PreferenceBackend, PreferenceStore};

/// A consistent copy of the canonical theme state
#[derive(Clone, Debug)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub theme: Arc<DesignTokens>,
    pub is_dark: bool,
    pub is_initialized: bool,
}

struct CanonicalState {
    mode: ThemeMode,
    is_initialized: bool,
}

/// Owner of the canonical theme state.
///
/// Reads are synchronous and never wait on storage I/O.
pub struct ThemeStore<B> {
    state: RwLock<CanonicalState>,
    light: Arc<DesignTokens>,
    dark: Arc<DesignTokens>,
    preferences: PreferenceStore<B>,
    mirror: MirrorWriter,
}

impl<B: PreferenceBackend> ThemeStore<B> {
    /// Create a store that owns `mirror`, using the built-in palettes.
    ///
    /// Fails with [`ThemeError::MirrorOwned`] if another store already owns it.
    pub fn new(preferences: PreferenceStore<B>, mirror: &ModeMirror) -> Result<Self> {
        Self::with_factory(preferences, mirror, &TokenFactory::default())
    }

    /// Create a store that owns the process-wide mirror
    pub fn with_global_mirror(preferences: PreferenceStore<B>) -> Result<Self> {
        Self::new(preferences, ModeMirror::global())
    }

    /// Create a store deriving its themes from `factory`
    pub fn with_factory(
        preferences: PreferenceStore<B>,
        mirror: &ModeMirror,
        factory: &TokenFactory,
    ) -> Result<Self> {
        let mirror = mirror.claim_writer().ok_or(ThemeError::MirrorOwned)?;

        // Inputs are static per mode, so both themes are derived once up front
        let light = Arc::new(factory.derive_checked(ThemeMode::Light));
        let dark = Arc::new(factory.derive_checked(ThemeMode::Dark));

        Ok(Self {
            state: RwLock::new(CanonicalState {
                mode: ThemeMode::default(),
                is_initialized: false,
            }),
            light,
            dark,
            preferences,
            mirror,
        })
    }

    /// Start from `mode` instead of `light` when nothing is persisted.
    ///
    /// The mirror follows immediately so the two never disagree.
    pub fn with_default_mode(self, mode: ThemeMode) -> Self {
        self.state.write().unwrap().mode = mode;
        self.mirror.write(mode);
        self
    }

    // ========== Reads ==========

    pub fn mode(&self) -> ThemeMode {
        self.state.read().unwrap().mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().unwrap().is_initialized
    }

    /// Derived theme for the current mode
    pub fn theme(&self) -> Arc<DesignTokens> {
        self.theme_for(self.mode())
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        let state = self.state.read().unwrap();
        ThemeSnapshot {
            mode: state.mode,
            theme: self.theme_for(state.mode),
            is_dark: state.mode.is_dark(),
            is_initialized: state.is_initialized,
        }
    }

    /// Read handle on the mirror this store writes
    pub fn mirror(&self) -> ModeMirror {
        self.mirror.mirror()
    }

    pub fn preferences(&self) -> &PreferenceStore<B> {
        &self.preferences
    }

    fn theme_for(&self, mode: ThemeMode) -> Arc<DesignTokens> {
        match mode {
            ThemeMode::Light => self.light.clone(),
            ThemeMode::Dark => self.dark.clone(),
        }
    }

    // ========== Lifecycle ==========

    /// Hydrate from the persisted preference.
    ///
    /// Always leaves the store initialized. With nothing usable persisted the
    /// current mode is kept. Not guarded against re-entry; call once at startup.
    pub async fn initialize(&self) {
        match self.preferences.get().await {
            Some(mode) => {
                {
                    let mut state = self.state.write().unwrap();
                    state.mode = mode;
                    state.is_initialized = true;
                }
                tracing::debug!("ThemeStore::initialize - restored {}", mode);
            }
            None => {
                self.state.write().unwrap().is_initialized = true;
                tracing::debug!("ThemeStore::initialize - no stored preference, keeping {}", self.mode());
            }
        }
        self.sync_mirror();
    }

    // ========== Mutations ==========

    /// Switch to `mode`.
    ///
    /// Canonical state changes before this returns; the returned future
    /// persists the preference and then updates the mirror. Dropping the
    /// future unpolled leaves the mirror behind until the next settled call.
    #[must_use = "the mirror is only updated once the returned future completes"]
    pub fn set_theme_mode(&self, mode: ThemeMode) -> impl Future<Output = ()> + Send + '_ {
        self.commit(|_| mode);
        self.settle(mode)
    }

    /// Flip between light and dark, resolving to the new mode.
    ///
    /// The flip is committed before this returns, like [`set_theme_mode`](Self::set_theme_mode).
    #[must_use = "the mirror is only updated once the returned future completes"]
    pub fn toggle_theme(&self) -> impl Future<Output = ThemeMode> + Send + '_ {
        let next = self.commit(ThemeMode::toggle);
        let settle = self.settle(next);
        async move {
            settle.await;
            next
        }
    }

    /// Forget the persisted preference. The in-memory mode is unchanged.
    pub async fn clear_preference(&self) {
        // Outcome already logged by the preference store
        let _ = self.preferences.clear().await;
    }

    fn commit(&self, choose: impl FnOnce(ThemeMode) -> ThemeMode) -> ThemeMode {
        let mut state = self.state.write().unwrap();
        let previous = state.mode;
        state.mode = choose(previous);
        tracing::debug!("ThemeStore: {} -> {}", previous, state.mode);
        state.mode
    }

    fn settle(&self, mode: ThemeMode) -> impl Future<Output = ()> + Send + '_ {
        async move {
            // Outcome already logged by the preference store
            let _ = self.preferences.set(mode).await;
            self.sync_mirror();
        }
    }

    /// Mirror the canonical mode as it is now, not as it was when a call began
    fn sync_mirror(&self) {
        self.mirror.write(self.mode());
    }
}

impl<B> std::fmt::Debug for ThemeStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap();
        f.debug_struct("ThemeStore")
            .field("mode", &state.mode)
            .field("is_initialized", &state.is_initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, DEFAULT_PREFERENCE_KEY};

    fn store_with(backend: Arc<MemoryBackend>) -> ThemeStore<Arc<MemoryBackend>> {
        ThemeStore::new(PreferenceStore::new(backend), &ModeMirror::new()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let store = store_with(Arc::new(MemoryBackend::new()));
        let snap = store.snapshot();
        assert_eq!(snap.mode, ThemeMode::Light);
        assert!(!snap.is_dark);
        assert!(!snap.is_initialized);
        assert_eq!(snap.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_second_store_on_same_mirror_is_rejected() {
        let mirror = ModeMirror::new();
        let _owner = ThemeStore::new(PreferenceStore::new(MemoryBackend::new()), &mirror).unwrap();
        let second = ThemeStore::new(PreferenceStore::new(MemoryBackend::new()), &mirror);
        assert!(matches!(second, Err(ThemeError::MirrorOwned)));
    }

    #[tokio::test]
    async fn test_set_commits_before_io() {
        let backend = Arc::new(MemoryBackend::new());
        let store = store_with(backend.clone());
        let mirror = store.mirror();

        let pending = store.set_theme_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(store.is_dark());
        assert_eq!(store.theme().mode, ThemeMode::Dark);
        assert_eq!(backend.entry(DEFAULT_PREFERENCE_KEY), None);
        assert_eq!(mirror.read(), ThemeMode::Light);

        pending.await;
        assert_eq!(backend.entry(DEFAULT_PREFERENCE_KEY).as_deref(), Some("dark"));
        assert_eq!(mirror.read(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_change() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_unavailable(true);
        let store = store_with(backend.clone());

        store.set_theme_mode(ThemeMode::Dark).await;

        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.mirror().read(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores() {
        let store = store_with(Arc::new(MemoryBackend::new()));
        assert_eq!(store.toggle_theme().await, ThemeMode::Dark);
        assert_eq!(store.toggle_theme().await, ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.mirror().read(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_clear_preference_keeps_mode() {
        let backend = Arc::new(MemoryBackend::new());
        let store = store_with(backend.clone());
        store.set_theme_mode(ThemeMode::Dark).await;

        store.clear_preference().await;

        assert_eq!(backend.entry(DEFAULT_PREFERENCE_KEY), None);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_out_of_order_settle_keeps_mirror_in_step() {
        let backend = Arc::new(MemoryBackend::new());
        let store = store_with(backend.clone());

        let to_dark = store.set_theme_mode(ThemeMode::Dark);
        let to_light = store.set_theme_mode(ThemeMode::Light);
        to_light.await;
        to_dark.await;

        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.mirror().read(), store.mode());
        // Durable state follows whichever write landed last
        assert_eq!(backend.entry(DEFAULT_PREFERENCE_KEY).as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_initialize_between_set_and_await() {
        let backend = Arc::new(MemoryBackend::new().with_entry(DEFAULT_PREFERENCE_KEY, "light"));
        let store = store_with(backend);

        let pending = store.set_theme_mode(ThemeMode::Dark);
        store.initialize().await;
        pending.await;

        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.mirror().read(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_dropped_set_is_caught_up_by_next_call() {
        let store = store_with(Arc::new(MemoryBackend::new()));

        drop(store.set_theme_mode(ThemeMode::Dark));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.mirror().read(), ThemeMode::Light);

        store.set_theme_mode(ThemeMode::Dark).await;
        assert_eq!(store.mirror().read(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_default_mode_applies_until_hydrated() {
        let backend = Arc::new(MemoryBackend::new().with_entry(DEFAULT_PREFERENCE_KEY, "light"));
        let store = store_with(backend).with_default_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.mirror().read(), ThemeMode::Dark);

        store.initialize().await;
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.mirror().read(), ThemeMode::Light);
    }
}
