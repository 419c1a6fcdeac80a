//! Error types for the sync engine

use thiserror::Error;

use wolfram_models::ResourceType;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Sync engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed to execute a request. The boxed source is
    /// whatever the data-source implementation reported.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unknown resource type in query: {0}")]
    UnknownResourceType(String),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),
}

impl Error {
    /// Wrap a transport-level failure.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Transport(Box::new(source))
    }
}

/// Pairs the resource type that was being synced with the error that broke
/// it, so one type's failure can be reported without aborting the batch.
#[derive(Error, Debug)]
#[error("Failed to sync {resource_type}: {source}")]
pub struct ResourceSyncError {
    pub resource_type: ResourceType,
    #[source]
    pub source: Error,
}
