//! HGVS-style notation for nucleotide (`c.`/`n.`) and protein (`p.`) changes.
//!
//! The data structures describe a change relative to one transcript; rendering lives in the
//! `display` module.

mod display;

pub use display::AaCode;

use crate::{
    reference::{Strand, TranscriptModel, TxLocation},
    sequences::revcomp,
};

/// Specifies whether the CDS position is relative to the CDS start or CDS end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CdsFrom {
    Start,
    End,
}

/// Position in `c.` or `n.` numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CdsPos {
    /// Base position; there is no position 0.
    pub base: i32,
    /// Optional intronic offset.
    pub offset: Option<i32>,
    /// Whether counting starts at the CDS start or after the CDS end (`*`).
    pub cds_from: CdsFrom,
}

impl CdsPos {
    /// Position of transcript offset `tx_pos` (may lie outside the transcript) with the
    /// intronic `offset`.
    pub fn from_tx(tx: &TranscriptModel, tx_pos: i32, offset: i32) -> Self {
        let offset = if offset == 0 { None } else { Some(offset) };
        let (base, cds_from) = match tx.cds_range() {
            Some((start, _)) if tx_pos < start => (tx_pos - start, CdsFrom::Start),
            Some((_, end)) if tx_pos >= end => (tx_pos - end + 1, CdsFrom::End),
            Some((start, _)) => (tx_pos - start + 1, CdsFrom::Start),
            None if tx_pos < 0 => (tx_pos, CdsFrom::Start),
            None if tx_pos >= tx.tx_len() => (tx_pos - tx.tx_len() + 1, CdsFrom::End),
            None => (tx_pos + 1, CdsFrom::Start),
        };
        Self {
            base,
            offset,
            cds_from,
        }
    }

    /// Position of the forward-strand base `base`.
    pub fn from_genome_base(tx: &TranscriptModel, base: i32) -> Self {
        let (tx_pos, offset) = tx_coordinate(tx, base);
        Self::from_tx(tx, tx_pos, offset)
    }
}

/// Transcript offset and intronic offset of a forward-strand base.
///
/// Bases outside the transcript are extrapolated beyond its 5' or 3' end.
pub fn tx_coordinate(tx: &TranscriptModel, base: i32) -> (i32, i32) {
    match tx.locate(base) {
        TxLocation::Upstream { distance } => (-distance, 0),
        TxLocation::Downstream { distance } => (tx.tx_len() - 1 + distance, 0),
        TxLocation::Exonic { tx_pos, .. } => (tx_pos, 0),
        TxLocation::Intronic { tx_pos, offset, .. } => (tx_pos, offset),
    }
}

/// Interval of `c.` or `n.` positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CdsInterval {
    pub begin: CdsPos,
    pub end: CdsPos,
}

/// Edit of nucleic acids, alleles in transcript orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NaEdit {
    /// Substitution (one base) or deletion-insertion.
    RefAlt {
        reference: String,
        alternative: String,
    },
    /// Deletion of one or more bases.
    Del { reference: String },
    /// Insertion of one or more bases.
    Ins { alternative: String },
    /// Duplication of the reference bases.
    Dup { reference: String },
    /// Inversion of the reference bases.
    Inv,
}

/// Numbering scheme of a nucleotide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NaCoordinates {
    /// `c.` numbering on coding transcripts.
    Coding,
    /// `n.` numbering on non-coding transcripts.
    NonCoding,
}

/// Nucleotide change relative to a transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaChange {
    pub coordinates: NaCoordinates,
    pub loc: CdsInterval,
    pub edit: NaEdit,
}

/// Uncertain change through extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UncertainLengthChange {
    None,
    Unknown,
    Known(i32),
}

/// Protein position; `aa` is in 1-letter code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtPos {
    pub aa: String,
    pub number: i32,
}

/// Protein position interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtInterval {
    pub begin: ProtPos,
    pub end: ProtPos,
}

/// Protein edit; amino acids are in 1-letter code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProteinEdit {
    /// Frameshift, `length` counts to the new stop codon.
    Fs {
        alternative: Option<String>,
        length: UncertainLengthChange,
    },
    /// Extension through loss of the stop codon.
    Ext {
        /// Amino acid replacing the stop codon.
        aa_ext: Option<String>,
        /// Amino acid ending the extension, usually `*`.
        ext_aa: Option<String>,
        change: UncertainLengthChange,
    },
    Subst {
        alternative: String,
    },
    /// `delins`
    DelIns {
        alternative: String,
    },
    /// `ins`
    Ins {
        alternative: String,
    },
    /// `del`
    Del,
    /// `dup`
    Dup,
    /// `=`
    Ident,
}

/// Protein change with location or special value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtLocEdit {
    Ordinary {
        loc: ProtInterval,
        edit: ProteinEdit,
    },
    /// `=`
    NoChange,
    /// `0`
    NoProtein,
    /// `?`
    Unknown,
    /// `Met1?`
    InitiationUncertain,
}

/// Interval of the forward-strand bases `[begin, end)` in transcript numbering.
///
/// For `begin == end` the interval consists of the two bases flanking the insertion point.
pub fn na_interval(tx: &TranscriptModel, begin: i32, end: i32) -> CdsInterval {
    let (first, last) = match (tx.strand(), begin == end) {
        (Strand::Forward, true) => (begin - 1, begin),
        (Strand::Reverse, true) => (begin, begin - 1),
        (Strand::Forward, false) => (begin, end - 1),
        (Strand::Reverse, false) => (end - 1, begin),
    };
    CdsInterval {
        begin: CdsPos::from_genome_base(tx, first),
        end: CdsPos::from_genome_base(tx, last),
    }
}

fn coordinates(tx: &TranscriptModel) -> NaCoordinates {
    if tx.is_coding() {
        NaCoordinates::Coding
    } else {
        NaCoordinates::NonCoding
    }
}

/// Nucleotide change for replacing the forward-strand bases `[begin, end)` by
/// `alternative`, alleles given on the forward strand.
///
/// Insertions that repeat the preceding transcript bases are described as duplications.
pub fn na_change(
    tx: &TranscriptModel,
    begin: i32,
    end: i32,
    reference: &str,
    alternative: &str,
) -> NaChange {
    let (reference, alternative) = match tx.strand() {
        Strand::Forward => (reference.to_string(), alternative.to_string()),
        Strand::Reverse => (revcomp(reference), revcomp(alternative)),
    };

    if begin == end {
        if let Some(dup) = duplication(tx, begin, &alternative) {
            return dup;
        }
        return NaChange {
            coordinates: coordinates(tx),
            loc: na_interval(tx, begin, end),
            edit: NaEdit::Ins { alternative },
        };
    }

    let edit = if alternative.is_empty() {
        NaEdit::Del { reference }
    } else {
        NaEdit::RefAlt {
            reference,
            alternative,
        }
    };
    NaChange {
        coordinates: coordinates(tx),
        loc: na_interval(tx, begin, end),
        edit,
    }
}

/// Inversion of the forward-strand bases `[begin, end)`.
pub fn na_inversion(tx: &TranscriptModel, begin: i32, end: i32) -> NaChange {
    NaChange {
        coordinates: coordinates(tx),
        loc: na_interval(tx, begin, end),
        edit: NaEdit::Inv,
    }
}

/// Describe insertion of `alternative` (transcript orientation) at forward boundary `pos` as
/// a duplication if it repeats the transcript bases before it.
fn duplication(tx: &TranscriptModel, pos: i32, alternative: &str) -> Option<NaChange> {
    let seq = tx.sequence()?;
    // transcript base 5' of the insertion point
    let before = match tx.strand() {
        Strand::Forward => pos - 1,
        Strand::Reverse => pos,
    };
    let junction = tx.genome_base_to_tx(before)? + 1;
    let len = alternative.len() as i32;
    if alternative.is_empty() || junction < len {
        return None;
    }
    let preceding = seq.get((junction - len) as usize..junction as usize)?;
    if !preceding.eq_ignore_ascii_case(alternative) {
        return None;
    }
    let first = tx.tx_to_genome_base(junction - len)?;
    let last = tx.tx_to_genome_base(junction - 1)?;
    log::trace!("insertion of {} at {} is a duplication", alternative, pos);
    Some(NaChange {
        coordinates: coordinates(tx),
        loc: CdsInterval {
            begin: CdsPos::from_genome_base(tx, first),
            end: CdsPos::from_genome_base(tx, last),
        },
        edit: NaEdit::Dup {
            reference: preceding.to_string(),
        },
    })
}
