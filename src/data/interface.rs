//! Definition of the interface for looking up transcripts.

use std::sync::Arc;

use crate::reference::{ReferenceDictionary, TranscriptModel};

/// Interval-indexed store of transcript models.
///
/// Implementations must be usable from several threads at once.
pub trait TranscriptSource: Send + Sync {
    /// Dictionary that all returned transcripts refer to.
    fn ref_dict(&self) -> &Arc<ReferenceDictionary>;

    /// Transcripts on contig `chr` whose region overlaps `[begin, end)` on the forward strand.
    ///
    /// The result is ordered by transcript accession.
    fn get_tx_for_region(&self, chr: usize, begin: i32, end: i32) -> Vec<Arc<TranscriptModel>>;

    /// Transcript with the given accession, if known.
    fn get_tx(&self, accession: &str) -> Option<Arc<TranscriptModel>>;
}
