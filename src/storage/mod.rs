//! Pfoteneis storage layer.
//!
//! Provides the durable slot primitive backing the bookmark store.
//!
//! # Usage
//!
//! ```no_run
//! use pfoteneis::storage::{BookmarkSlot, FileSlot};
//!
//! // Slot at the platform default location
//! let slot = FileSlot::at_default_location();
//!
//! // Or at an explicit path (tests, demos)
//! let slot = FileSlot::new("/tmp/bookmarks.json");
//! let contents = slot.read().expect("storage available");
//! ```

pub mod slot;

pub use slot::{BookmarkSlot, FileSlot, MemorySlot, BOOKMARKS_FILE_NAME};
