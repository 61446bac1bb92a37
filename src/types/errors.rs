use std::fmt;

// === BookmarkStoreError ===

/// Errors related to bookmark persistence.
///
/// These never escape the store's public API; every failure path is logged
/// and recovered to a well-defined empty-or-unchanged state.
#[derive(Debug)]
pub enum BookmarkStoreError {
    /// The durable slot could not be read or written.
    StorageUnavailable(String),
    /// The durable slot held data that could not be parsed.
    CorruptedData(String),
}

impl fmt::Display for BookmarkStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkStoreError::StorageUnavailable(msg) => {
                write!(f, "Bookmark storage unavailable: {}", msg)
            }
            BookmarkStoreError::CorruptedData(msg) => {
                write!(f, "Corrupted bookmark data: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkStoreError {}

// === SourceError ===

/// Errors related to fetching the location data set.
#[derive(Debug)]
pub enum SourceError {
    /// A network error occurred while contacting the data source.
    NetworkError(String),
    /// The data source answered with a non-success HTTP status.
    BadStatus(u16),
    /// The fetched payload could not be parsed.
    ParseError(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NetworkError(msg) => write!(f, "Location fetch network error: {}", msg),
            SourceError::BadStatus(status) => {
                write!(f, "Location fetch failed with HTTP status: {}", status)
            }
            SourceError::ParseError(msg) => write!(f, "Location data parse error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}
