//! The "recently viewed" list and its persistence port.
//!
//! Storage is best-effort: a full or disabled medium must never surface an
//! error to navigation code, so read failures yield an empty list and write
//! failures are logged at `warn` and swallowed.

use crate::record::PageRecord;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the recency list.
pub const RECENT_CAP: usize = 5;

/// Persistence port for the recency list.
///
/// Implementations read and rewrite the list wholesale; there is no partial
/// update. Execution is single-threaded, so no locking is involved, and
/// concurrent writers (other processes) race last-writer-wins by design.
pub trait RecentStore {
    /// The saved list, or empty when nothing is stored or the stored data
    /// is unreadable. Never errors.
    fn load(&self) -> Vec<PageRecord>;

    /// Saves the list. Best-effort; failures are swallowed.
    fn save(&self, entries: &[PageRecord]);
}

/// JSON-file store, by default under the platform data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location, e.g. `~/.local/share/vinedocs/recent.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("vinedocs").join("recent.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentStore for JsonFileStore {
    fn load(&self) -> Vec<PageRecord> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            // Missing file is the normal first-run state.
            return vec![];
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable recency list at {}: {}",
                    self.path.display(),
                    e
                );
                vec![]
            }
        }
    }

    fn save(&self, entries: &[PageRecord]) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create {}: {}", parent.display(), e);
            return;
        }
        match serde_json::to_string(entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!(
                        "Failed to save recency list to {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
            Err(e) => tracing::warn!("Failed to serialize recency list: {}", e),
        }
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<PageRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecentStore for MemoryStore {
    fn load(&self) -> Vec<PageRecord> {
        self.entries.borrow().clone()
    }

    fn save(&self, entries: &[PageRecord]) {
        *self.entries.borrow_mut() = entries.to_vec();
    }
}

/// Ordered most-recent-first visit list, capped at [`RECENT_CAP`].
///
/// Every visit removes any existing entry with the same href, prepends the
/// record, truncates, and saves through the store.
pub struct RecentList<S: RecentStore> {
    store: S,
    entries: Vec<PageRecord>,
}

impl<S: RecentStore> RecentList<S> {
    /// Loads the saved list from the store.
    pub fn load(store: S) -> Self {
        let mut entries = store.load();
        entries.truncate(RECENT_CAP);
        Self { store, entries }
    }

    /// Records a navigation to `record` and saves the updated list.
    pub fn record_visit(&mut self, record: &PageRecord) {
        self.entries.retain(|entry| entry.href != record.href);
        self.entries.insert(0, record.clone());
        self.entries.truncate(RECENT_CAP);
        self.store.save(&self.entries);
    }

    /// Current entries, most recent first.
    pub fn entries(&self) -> &[PageRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
