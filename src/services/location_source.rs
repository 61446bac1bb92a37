//! Location data sources.
//!
//! The directory's venue listing comes from an external collaborator that
//! returns the raw record shape (icons as name strings). Consumers rehydrate
//! a fetched batch through the icon registry before display.

use crate::services::icon_registry::IconRegistry;
use crate::types::errors::SourceError;
use crate::types::location::{Location, RawLocation};

/// Default remote data set for the directory.
#[cfg(feature = "network")]
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/JanTristanH/eis-f-r-pfoten-data/refs/heads/main/data.json";

/// Trait defining a source of location records.
pub trait LocationSource {
    /// Fetches the full listing. May fail, may be slow; icons always arrive
    /// as name strings.
    fn fetch_locations(&self) -> Result<Vec<RawLocation>, SourceError>;
}

/// Converts a fetched batch into render-ready records.
pub fn rehydrate_all(raw: Vec<RawLocation>, icons: &IconRegistry) -> Vec<Location> {
    raw.into_iter().map(|loc| loc.rehydrate(icons)).collect()
}

/// Fixed in-process source, for tests and offline use.
pub struct StaticLocationSource {
    records: Vec<RawLocation>,
}

impl StaticLocationSource {
    /// Creates a source serving the given records.
    pub fn new(records: Vec<RawLocation>) -> Self {
        Self { records }
    }
}

impl LocationSource for StaticLocationSource {
    fn fetch_locations(&self) -> Result<Vec<RawLocation>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Source backed by an HTTP endpoint serving the listing as a JSON array.
#[cfg(feature = "network")]
pub struct RemoteLocationSource {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl RemoteLocationSource {
    /// Creates a source reading from the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Creates a source reading the default data set.
    pub fn with_default_url() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }

    /// Returns the URL this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "network")]
impl LocationSource for RemoteLocationSource {
    fn fetch_locations(&self) -> Result<Vec<RawLocation>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| SourceError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status().as_u16()));
        }

        response
            .json::<Vec<RawLocation>>()
            .map_err(|e| SourceError::ParseError(e.to_string()))
    }
}
