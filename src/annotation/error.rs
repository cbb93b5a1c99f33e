//! Error type definition.

use thiserror::Error;

/// Error type for annotation of variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("problem with reference data")]
    ReferenceError(#[from] crate::reference::Error),
    #[error("sequence operation failed")]
    SequenceOperationFailed(#[from] crate::sequences::Error),
    #[error("variant {0} does not overlap the extended region of transcript {1}")]
    VariantNotInTranscriptRegion(String, String),
    #[error("transcript {0} has no sequence but the variant affects its CDS")]
    MissingTranscriptSequence(String),
}
