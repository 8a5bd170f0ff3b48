use std::fmt;

/// Errors surfaced to the caller of a route or of the acquisition
/// pipeline. Every failure aborts the whole request; nothing here is
/// ever downgraded to an empty result.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    /// Inventory store unreachable or unwritable.
    StoreInit(String),
    /// Upstream listing source unavailable or unparsable.
    Fetch(String),
    /// Map artifact could not be rendered or written (includes
    /// geocoding failures for an address-biased request).
    ArtifactWrite(String),
    /// A selected listing could not be projected for display
    /// (e.g. malformed timestamp).
    Projection(String),
    /// Store query failed after a successful setup.
    Db(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not Found"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::StoreInit(msg) => write!(f, "Store init error: {msg}"),
            AppError::Fetch(msg) => write!(f, "Fetch error: {msg}"),
            AppError::ArtifactWrite(msg) => write!(f, "Artifact write error: {msg}"),
            AppError::Projection(msg) => write!(f, "Projection error: {msg}"),
            AppError::Db(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
