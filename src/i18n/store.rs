//! Observable language selection.
//!
//! The store holds the active language and notifies subscribers on every
//! change. Persistence is not baked in: it is one listener, registered at
//! startup via [`register_persistence`], that mirrors each selection into a
//! single file. On startup the store restores the last persisted selection
//! and falls back to the canonical language.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::i18n::Language;

type Listener = Box<dyn Fn(Language) + Send + Sync>;

pub struct LanguageStore {
    current: RwLock<Language>,
    listeners: RwLock<Vec<Listener>>,
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        Self {
            current: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Build a store initialized from the persisted selection, if any.
    /// An unreadable file or an unknown code falls back to the canonical
    /// language.
    pub fn restore(path: &Path) -> Self {
        let initial = std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| Language::from_code(contents.trim()).ok())
            .unwrap_or_else(Language::canonical);

        debug!("Restored language selection: {}", initial.code());
        Self::new(initial)
    }

    /// The active language.
    pub fn get(&self) -> Language {
        *self.current.read().expect("language store lock poisoned")
    }

    /// Switch the active language and notify every subscriber.
    pub fn set(&self, language: Language) {
        *self.current.write().expect("language store lock poisoned") = language;

        let listeners = self.listeners.read().expect("language store lock poisoned");
        for listener in listeners.iter() {
            listener(language);
        }
    }

    /// Register a listener called with every subsequent selection.
    pub fn subscribe(&self, listener: impl Fn(Language) + Send + Sync + 'static) {
        self.listeners
            .write()
            .expect("language store lock poisoned")
            .push(Box::new(listener));
    }
}

/// Mirror every selection change into `path`. Registered once at startup;
/// the store itself stays persistence-free.
pub fn register_persistence(store: &LanguageStore, path: PathBuf) {
    store.subscribe(move |language| {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = std::fs::write(&path, language.code()) {
            warn!("Failed to persist language selection: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    // ==================== State Tests ====================

    #[test]
    fn test_new_store_holds_initial_language() {
        let store = LanguageStore::new(Language::NORWEGIAN);
        assert_eq!(store.get(), Language::NORWEGIAN);
    }

    #[test]
    fn test_set_updates_current() {
        let store = LanguageStore::new(Language::NORWEGIAN);
        store.set(Language::ENGLISH);
        assert_eq!(store.get(), Language::ENGLISH);
    }

    // ==================== Subscription Tests ====================

    #[test]
    fn test_subscribers_notified_on_every_change() {
        let store = LanguageStore::new(Language::NORWEGIAN);
        let notified = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&notified);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set(Language::ENGLISH);
        store.set(Language::NORWEGIAN);
        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscriber_sees_new_language() {
        let store = LanguageStore::new(Language::NORWEGIAN);
        let seen = Arc::new(RwLock::new(None));

        let seen_clone = Arc::clone(&seen);
        store.subscribe(move |language| {
            *seen_clone.write().unwrap() = Some(language);
        });

        store.set(Language::ENGLISH);
        assert_eq!(*seen.read().unwrap(), Some(Language::ENGLISH));
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_restore_defaults_to_canonical_when_file_missing() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = LanguageStore::restore(&temp_dir.path().join("language"));
        assert_eq!(store.get(), Language::canonical());
    }

    #[test]
    fn test_restore_ignores_garbage_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("language");
        std::fs::write(&path, "klingon").expect("write");

        let store = LanguageStore::restore(&path);
        assert_eq!(store.get(), Language::canonical());
    }

    #[test]
    fn test_set_then_restore_roundtrip() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("language");

        let store = LanguageStore::restore(&path);
        register_persistence(&store, path.clone());
        store.set(Language::ENGLISH);

        let restored = LanguageStore::restore(&path);
        assert_eq!(restored.get(), Language::ENGLISH);
    }

    #[test]
    fn test_restore_trims_whitespace() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("language");
        std::fs::write(&path, "en\n").expect("write");

        let store = LanguageStore::restore(&path);
        assert_eq!(store.get(), Language::ENGLISH);
    }

    #[test]
    fn test_persistence_creates_parent_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("nested").join("language");

        let store = LanguageStore::new(Language::NORWEGIAN);
        register_persistence(&store, path.clone());
        store.set(Language::ENGLISH);

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "en");
    }
}
