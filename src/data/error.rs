//! Error type definition.

use thiserror::Error;

/// Error type for loading transcript data and configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open {0}")]
    Io(String, #[source] std::io::Error),
    #[error("could not parse JSON from {0}")]
    Json(String, #[source] serde_json::Error),
    #[error("problem with reference data")]
    ReferenceError(#[from] crate::reference::Error),
    #[error("duplicate transcript accession {0}")]
    DuplicateTranscript(String),
}
