//! Consumer-facing token access
//!
//! Components that hold no reference to the [`ThemeStore`](crate::ThemeStore)
//! read tokens through a [`TokenAccessor`]: it follows a [`ModeMirror`] and
//! re-derives only when the mirrored mode changes.
//!
//! ```ignore
//! let tokens = TokenAccessor::global().current_tokens();
//! let padding = tokens.spacing.md;
//! let background = tokens.colors.background_primary;
//! ```

use std::sync::{Arc, Mutex};

use crate::factory::{DesignTokens, TokenFactory};
use crate::mirror::ModeMirror;
use crate::mode::ThemeMode;

struct CachedTokens {
    observed: ThemeMode,
    tokens: Arc<DesignTokens>,
}

/// Derives and caches the token set for the mirrored mode.
///
/// Clones share one cache.
#[derive(Clone)]
pub struct TokenAccessor {
    mirror: ModeMirror,
    factory: TokenFactory,
    cache: Arc<Mutex<Option<CachedTokens>>>,
}

impl TokenAccessor {
    /// Follow `mirror` with the built-in palettes
    pub fn new(mirror: ModeMirror) -> Self {
        Self::with_factory(mirror, TokenFactory::default())
    }

    pub fn with_factory(mirror: ModeMirror, factory: TokenFactory) -> Self {
        Self {
            mirror,
            factory,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Follow the process-wide mirror
    pub fn global() -> Self {
        Self::new(ModeMirror::global().clone())
    }

    /// The mirrored mode
    pub fn mode(&self) -> ThemeMode {
        self.mirror.read()
    }

    /// Complete tokens for the mirrored mode.
    ///
    /// Never partial: a defective derivation is replaced by the light one.
    pub fn current_tokens(&self) -> Arc<DesignTokens> {
        let observed = self.mirror.read();
        let mut cache = self.cache.lock().unwrap();

        if let Some(cached) = cache.as_ref().filter(|c| c.observed == observed) {
            return cached.tokens.clone();
        }

        tracing::debug!("TokenAccessor: deriving tokens for {}", observed);
        let tokens = Arc::new(self.factory.derive_checked(observed));
        *cache = Some(CachedTokens {
            observed,
            tokens: tokens.clone(),
        });
        tokens
    }
}

impl std::fmt::Debug for TokenAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAccessor")
            .field("mirror", &self.mirror)
            .finish_non_exhaustive()
    }
}

/// Memoized styles built from the current tokens.
///
/// The builder runs again only when the accessor hands out a different
/// token set, i.e. after a mode change.
///
/// ```ignore
/// struct CardStyle { background: Color, padding: f32 }
///
/// let styles = ThemedStyles::new(TokenAccessor::global(), |t: &DesignTokens| CardStyle {
///     background: t.colors.surface,
///     padding: t.spacing.card_padding,
/// });
/// let card = styles.get();
/// ```
pub struct ThemedStyles<T, F> {
    accessor: TokenAccessor,
    build: F,
    cache: Mutex<Option<(Arc<DesignTokens>, Arc<T>)>>,
}

impl<T, F> ThemedStyles<T, F>
where
    F: Fn(&DesignTokens) -> T,
{
    pub fn new(accessor: TokenAccessor, build: F) -> Self {
        Self {
            accessor,
            build,
            cache: Mutex::new(None),
        }
    }

    pub fn get(&self) -> Arc<T> {
        let tokens = self.accessor.current_tokens();
        let mut cache = self.cache.lock().unwrap();

        if let Some((built_from, styles)) = cache.as_ref() {
            if Arc::ptr_eq(built_from, &tokens) {
                return styles.clone();
            }
        }

        let styles = Arc::new((self.build)(&tokens));
        *cache = Some((tokens, styles.clone()));
        styles
    }
}
