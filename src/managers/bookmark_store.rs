//! Bookmark store for Pfoteneis.
//!
//! Implements `BookmarkStoreTrait` — the single source of truth for the
//! bookmarked location set, persisted as one JSON document in a durable
//! slot and rehydrated through the icon registry.
//!
//! The store is constructed once at application start and handed to
//! consumers by reference. All operations run on the application's sole
//! logic thread; the only suspension point is the synchronous slot I/O.
//! Concurrent application instances sharing a slot are not coordinated
//! (last writer wins).

use std::sync::Arc;

use crate::services::icon_registry::IconRegistry;
use crate::storage::slot::{BookmarkSlot, FileSlot};
use crate::types::errors::BookmarkStoreError;
use crate::types::location::{Location, RawLocation};

/// Trait defining bookmark store operations.
///
/// No method fails: every storage problem is logged and recovered to a
/// well-defined empty-or-unchanged state, and bookmarking degrades to
/// in-memory-only for the session when the slot is unavailable.
pub trait BookmarkStoreTrait {
    /// Loads the persisted set, replacing the in-memory state.
    ///
    /// An empty or absent slot yields an empty set. Unparseable slot
    /// contents are discarded (the slot is cleared) and also yield an empty
    /// set. Returns the loaded entries.
    fn load(&mut self) -> &[Location];
    /// Inserts a location unless an entry with the same `id` already exists
    /// (idempotent; the existing entry is never updated). Locations without
    /// an `id` are rejected.
    fn add(&mut self, location: Location);
    /// Removes the entry with this `id`, if present.
    fn remove(&mut self, id: &str);
    /// Whether an entry with this `id` is bookmarked. Conservatively `false`
    /// until `load` has completed.
    fn is_bookmarked(&self, id: &str) -> bool;
    /// Current contents in insertion order.
    fn list(&self) -> &[Location];
}

/// Bookmark store backed by a durable slot.
pub struct BookmarkStore {
    slot: Box<dyn BookmarkSlot>,
    icons: Arc<IconRegistry>,
    entries: Vec<Location>,
    loaded: bool,
}

impl BookmarkStore {
    /// Creates a store over the given slot. Call
    /// [`load`](BookmarkStoreTrait::load) once before treating query results
    /// as authoritative.
    pub fn new(slot: Box<dyn BookmarkSlot>, icons: Arc<IconRegistry>) -> Self {
        Self {
            slot,
            icons,
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Creates a store over the platform default slot location.
    pub fn at_default_location(icons: Arc<IconRegistry>) -> Self {
        Self::new(Box::new(FileSlot::at_default_location()), icons)
    }

    /// Reads and rehydrates the slot contents.
    fn read_slot(&self) -> Result<Vec<Location>, BookmarkStoreError> {
        let payload = self
            .slot
            .read()
            .map_err(|e| BookmarkStoreError::StorageUnavailable(e.to_string()))?;
        let Some(payload) = payload else {
            return Ok(Vec::new());
        };
        let raw: Vec<RawLocation> = serde_json::from_str(&payload)
            .map_err(|e| BookmarkStoreError::CorruptedData(e.to_string()))?;
        Ok(raw
            .into_iter()
            .map(|loc| loc.rehydrate(&self.icons))
            .collect())
    }

    /// Serializes the full current set and writes it to the slot.
    fn persist(&self) -> Result<(), BookmarkStoreError> {
        let raw: Vec<RawLocation> = self
            .entries
            .iter()
            .map(|loc| loc.to_raw(&self.icons))
            .collect();
        let payload = serde_json::to_string_pretty(&raw)
            .map_err(|e| BookmarkStoreError::CorruptedData(e.to_string()))?;
        self.slot
            .write(&payload)
            .map_err(|e| BookmarkStoreError::StorageUnavailable(e.to_string()))
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn load(&mut self) -> &[Location] {
        match self.read_slot() {
            Ok(entries) => self.entries = entries,
            Err(err @ BookmarkStoreError::CorruptedData(_)) => {
                log::warn!("discarding bookmark slot: {}", err);
                if let Err(e) = self.slot.clear() {
                    log::warn!("failed to clear corrupted bookmark slot: {}", e);
                }
                self.entries = Vec::new();
            }
            Err(err) => {
                log::warn!("bookmark storage unavailable, continuing in memory: {}", err);
                self.entries = Vec::new();
            }
        }
        self.loaded = true;
        &self.entries
    }

    fn add(&mut self, location: Location) {
        if location.id.is_empty() {
            log::debug!("rejected bookmark without id: {}", location.name);
            return;
        }
        if self.entries.iter().any(|loc| loc.id == location.id) {
            return;
        }
        self.entries.push(location);
        if let Err(err) = self.persist() {
            log::warn!("bookmark not persisted, continuing in memory: {}", err);
        }
    }

    fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|loc| loc.id != id);
        if self.entries.len() == before {
            return;
        }
        if let Err(err) = self.persist() {
            log::warn!("bookmark removal not persisted, continuing in memory: {}", err);
        }
    }

    fn is_bookmarked(&self, id: &str) -> bool {
        self.loaded && self.entries.iter().any(|loc| loc.id == id)
    }

    fn list(&self) -> &[Location] {
        &self.entries
    }
}
