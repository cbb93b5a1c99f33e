//! Reference data: contigs, strand-aware coordinates, transcripts, and variants.

mod dict;
mod error;
mod interval;
mod position;
mod transcript;
mod variant;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dict::{ReferenceDictionary, ReferenceDictionaryBuilder};
pub use error::Error;
pub use interval::GenomeInterval;
pub use position::{GenomePosition, Strand};
pub use transcript::{TranscriptModel, TranscriptRecord, TxLocation};
pub use variant::{
    is_symbolic_allele, ConfidenceInterval, GenomeVariant, SimpleKind, StructuralVariant,
    SvKind, VariantDescription,
};
