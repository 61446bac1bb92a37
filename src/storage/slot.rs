//! Durable slot primitives for the bookmark set.
//!
//! A slot is a single named unit of local persistent storage holding one
//! JSON document. [`FileSlot`] is the production implementation, storing the
//! document as a file under the platform config directory; [`MemorySlot`]
//! backs tests and sessions without durable storage.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::platform;

/// File name of the bookmark slot inside the platform config directory.
pub const BOOKMARKS_FILE_NAME: &str = "bookmarks.json";

/// A single named unit of local persistent key-value storage.
///
/// All operations are synchronous and local. Concurrent application
/// instances writing the same slot are not coordinated: the last writer
/// wins, and earlier in-memory state in other instances goes stale until
/// they reload.
pub trait BookmarkSlot {
    /// Reads the slot contents. `Ok(None)` means the slot is empty or absent.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replaces the slot contents.
    fn write(&self, payload: &str) -> io::Result<()>;

    /// Deletes the slot contents. Clearing an absent slot is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// Slot stored as a single file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the slot at the platform default location
    /// (`<config dir>/bookmarks.json`).
    pub fn at_default_location() -> Self {
        Self::new(platform::get_config_dir().join(BOOKMARKS_FILE_NAME))
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Slot held in memory. Contents are lost when the slot is dropped.
#[derive(Default)]
pub struct MemorySlot {
    contents: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, payload: &str) -> io::Result<()> {
        *self.contents.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.contents.borrow_mut() = None;
        Ok(())
    }
}
