//! Mode mirror: a read-only projection of the current theme mode
//!
//! Decoupled components that only need the mode read it from a
//! [`ModeMirror`] instead of holding the full [`ThemeStore`](crate::ThemeStore).
//!
//! The mirror has exactly one writer. [`ModeMirror::claim_writer`] hands out
//! a [`MirrorWriter`] at most once, and `MirrorWriter::write` is only visible
//! inside this crate, so the owning store is the only thing that can move it.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock, Weak};

use crate::mode::ThemeMode;

/// Process-wide mirror, created on first access
static GLOBAL_MIRROR: OnceLock<ModeMirror> = OnceLock::new();

/// Callback invoked with the new mode after a change
pub type ModeListener = Arc<dyn Fn(ThemeMode) + Send + Sync>;

struct MirrorCell {
    mode: RwLock<ThemeMode>,
    listeners: Mutex<FxHashMap<u64, ModeListener>>,
    next_listener: AtomicU64,
    writer_claimed: AtomicBool,
}

impl MirrorCell {
    fn remove_listener(&self, id: u64) {
        self.listeners.lock().unwrap().remove(&id);
    }
}

/// Read handle on the mirrored mode. Cheap to clone.
#[derive(Clone)]
pub struct ModeMirror {
    cell: Arc<MirrorCell>,
}

impl ModeMirror {
    /// A fresh mirror holding `light`
    pub fn new() -> Self {
        Self {
            cell: Arc::new(MirrorCell {
                mode: RwLock::new(ThemeMode::default()),
                listeners: Mutex::new(FxHashMap::default()),
                next_listener: AtomicU64::new(0),
                writer_claimed: AtomicBool::new(false),
            }),
        }
    }

    /// The process-wide mirror
    pub fn global() -> &'static ModeMirror {
        GLOBAL_MIRROR.get_or_init(ModeMirror::new)
    }

    /// Current mode
    pub fn read(&self) -> ThemeMode {
        *self.cell.mode.read().unwrap()
    }

    /// Register a listener for mode changes.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let id = self.cell.next_listener.fetch_add(1, Ordering::Relaxed);
        self.cell
            .listeners
            .lock()
            .unwrap()
            .insert(id, Arc::new(listener));

        Subscription {
            cell: Arc::downgrade(&self.cell),
            id,
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.cell.listeners.lock().unwrap().len()
    }

    /// Take the single writer for this mirror.
    ///
    /// Returns `None` if the writer has already been claimed.
    pub fn claim_writer(&self) -> Option<MirrorWriter> {
        self.cell
            .writer_claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| MirrorWriter {
                cell: self.cell.clone(),
            })
    }

    /// True if both handles observe the same mirror
    pub fn same_mirror(&self, other: &ModeMirror) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Default for ModeMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModeMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeMirror")
            .field("mode", &self.read())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// The only handle able to change a mirror's mode
pub struct MirrorWriter {
    cell: Arc<MirrorCell>,
}

impl MirrorWriter {
    /// Store `mode`; listeners run only if it differs from the current mode
    pub(crate) fn write(&self, mode: ThemeMode) {
        {
            let mut current = self.cell.mode.write().unwrap();
            if *current == mode {
                return;
            }
            tracing::debug!("ModeMirror::write - {} -> {}", *current, mode);
            *current = mode;
        }

        // Snapshot so listeners may subscribe/unsubscribe re-entrantly
        let listeners: Vec<ModeListener> = self
            .cell
            .listeners
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(mode);
        }
    }

    /// A read handle on the mirror this writer owns
    pub fn mirror(&self) -> ModeMirror {
        ModeMirror {
            cell: self.cell.clone(),
        }
    }
}

/// Keeps a mirror listener registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    cell: Weak<MirrorCell>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.upgrade() {
            cell.remove_listener(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light() {
        assert_eq!(ModeMirror::new().read(), ThemeMode::Light);
    }

    #[test]
    fn test_single_writer() {
        let mirror = ModeMirror::new();
        let writer = mirror.claim_writer();
        assert!(writer.is_some());
        assert!(mirror.claim_writer().is_none());
        assert!(mirror.clone().claim_writer().is_none());
        assert!(writer.unwrap().mirror().same_mirror(&mirror));
    }

    #[test]
    fn test_write_notifies_on_change_only() {
        let mirror = ModeMirror::new();
        let writer = mirror.claim_writer().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = mirror.subscribe(move |mode| sink.lock().unwrap().push(mode));

        writer.write(ThemeMode::Dark);
        writer.write(ThemeMode::Dark);
        writer.write(ThemeMode::Light);

        assert_eq!(mirror.read(), ThemeMode::Light);
        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_unsubscribe_detaches() {
        let mirror = ModeMirror::new();
        let writer = mirror.claim_writer().unwrap();
        let hits = Arc::new(AtomicU64::new(0));
        let counter = hits.clone();
        let sub = mirror.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(mirror.listener_count(), 1);

        writer.write(ThemeMode::Dark);
        sub.unsubscribe();
        writer.write(ThemeMode::Light);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(mirror.listener_count(), 0);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(ModeMirror::global().same_mirror(ModeMirror::global()));
    }
}
