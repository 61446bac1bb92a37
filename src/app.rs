//! App core for Pfoteneis.
//!
//! Composition root: constructs the icon registry, bookmark store, and
//! location source once at application start and hands them to consumers by
//! reference. There is exactly one bookmark store per running instance.

use std::sync::Arc;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::icon_registry::IconRegistry;
#[cfg(feature = "network")]
use crate::services::location_source::RemoteLocationSource;
use crate::storage::slot::FileSlot;

/// Central application struct holding the shared components.
pub struct App {
    pub icons: Arc<IconRegistry>,
    pub bookmarks: BookmarkStore,
    #[cfg(feature = "network")]
    pub locations: RemoteLocationSource,
}

impl App {
    /// Creates a new App.
    ///
    /// If `bookmarks_path_override` is `Some`, the bookmark slot lives at
    /// that path; otherwise at the platform default location.
    pub fn new(bookmarks_path_override: Option<String>) -> Self {
        let icons = Arc::new(IconRegistry::new());
        let bookmarks = match bookmarks_path_override {
            Some(path) => {
                BookmarkStore::new(Box::new(FileSlot::new(path)), icons.clone())
            }
            None => BookmarkStore::at_default_location(icons.clone()),
        };

        Self {
            icons,
            bookmarks,
            #[cfg(feature = "network")]
            locations: RemoteLocationSource::with_default_url(),
        }
    }

    /// Startup sequence: loads the persisted bookmark set. Until this has
    /// run, bookmark queries conservatively report nothing bookmarked.
    pub fn startup(&mut self) {
        let count = self.bookmarks.load().len();
        log::info!("loaded {} bookmarked location(s)", count);
    }
}
