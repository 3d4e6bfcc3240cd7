//! Lumen Theme State
//!
//! Light/dark theme mode management with a persisted user preference and
//! derived design tokens.
//!
//! # Overview
//!
//! - **Theme store**: the single source of truth for the current mode
//! - **Persistence**: best-effort, asynchronous, never blocks a mode switch
//! - **Mode mirror**: a read-only projection for components outside the store
//! - **Token factory**: mode -> complete design token set, with a guaranteed
//!   light fallback
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumen_theme::{ThemeConfig, ThemeMode, ThemeStore, TokenAccessor};
//!
//! let config = ThemeConfig::load_from_dir(Path::new("."))?;
//! let store = ThemeStore::with_global_mirror(config.preference_store())?;
//!
//! // At startup
//! store.initialize().await;
//!
//! // From a settings screen
//! store.set_theme_mode(ThemeMode::Dark).await;
//!
//! // Anywhere else
//! let tokens = TokenAccessor::global().current_tokens();
//! let card_border = tokens.borders.card.color;
//! ```
//!
//! # Ordering
//!
//! A mode change is visible on the store as soon as
//! [`ThemeStore::set_theme_mode`] returns. The preference write and the mirror
//! update happen when the returned future runs, in that order. Storage
//! failures are logged through `tracing` and never surface to callers.

pub mod accessor;
pub mod color;
pub mod config;
pub mod error;
pub mod factory;
pub mod mirror;
pub mod mode;
pub mod storage;
pub mod store;
pub mod tokens;
pub mod validate;

// Re-export commonly used types
pub use accessor::{ThemedStyles, TokenAccessor};
pub use color::Color;
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use factory::{create_design_tokens, DesignTokens, TokenFactory};
pub use mirror::{ModeListener, ModeMirror, MirrorWriter, Subscription};
pub use mode::ThemeMode;
pub use storage::{
    FileBackend, MemoryBackend, PreferenceBackend, PreferenceStore, DEFAULT_PREFERENCE_KEY,
};
pub use store::{ThemeSnapshot, ThemeStore};
pub use tokens::*;
pub use validate::{is_complete, normalize_mode, validate, TokenDefect, TokenSection};
