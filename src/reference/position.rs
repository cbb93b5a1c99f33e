//! Strand-aware positions on a contig.

use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use super::ReferenceDictionary;

/// Strand of a position, interval, or transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// The opposite strand.
    pub fn opposite(&self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
        }
    }

    pub fn is_forward(&self) -> bool {
        *self == Strand::Forward
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Assert that two dictionaries are the same instance.
///
/// Comparing coordinates from different dictionaries is a programming error.
pub(crate) fn assert_same_dict(lhs: &Arc<ReferenceDictionary>, rhs: &Arc<ReferenceDictionary>) {
    assert!(
        Arc::ptr_eq(lhs, rhs),
        "coordinates from different reference dictionaries cannot be combined"
    );
}

/// A zero-based offset on a contig strand.
///
/// The offset denotes the boundary before the base with the same zero-based index on the
/// position's strand; it is in `[0, contig length]`.  Switching strands maps offset `p` to
/// `length - p`.
#[derive(Clone)]
pub struct GenomePosition {
    ref_dict: Arc<ReferenceDictionary>,
    strand: Strand,
    chr: usize,
    pos: i32,
    chr_len: i32,
}

impl GenomePosition {
    /// Construct a new position.
    ///
    /// # Panics
    ///
    /// Panics if `chr` is not in `ref_dict` or `pos` is outside of `[0, contig length]`.
    pub fn new(ref_dict: Arc<ReferenceDictionary>, strand: Strand, chr: usize, pos: i32) -> Self {
        let chr_len = ref_dict
            .contig_length(chr)
            .unwrap_or_else(|e| panic!("cannot construct position: {}", e));
        assert!(
            (0..=chr_len).contains(&pos),
            "position {} out of range [0, {}] on contig {}",
            pos,
            chr_len,
            chr
        );
        Self {
            ref_dict,
            strand,
            chr,
            pos,
            chr_len,
        }
    }

    pub fn ref_dict(&self) -> &Arc<ReferenceDictionary> {
        &self.ref_dict
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn chr(&self) -> usize {
        self.chr
    }

    pub fn pos(&self) -> i32 {
        self.pos
    }

    /// Length of the position's contig.
    pub fn chr_len(&self) -> i32 {
        self.chr_len
    }

    /// Canonical name of the position's contig.
    pub fn chr_name(&self) -> &str {
        self.ref_dict
            .contig_name(self.chr)
            .expect("contig was checked on construction")
    }

    /// Return the same position on the given strand.
    pub fn with_strand(&self, strand: Strand) -> Self {
        if strand == self.strand {
            self.clone()
        } else {
            Self {
                strand,
                pos: self.chr_len - self.pos,
                ..self.clone()
            }
        }
    }

    /// Return the position shifted by `delta` bases in the direction of the strand.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of range.
    pub fn shifted(&self, delta: i32) -> Self {
        Self::new(self.ref_dict.clone(), self.strand, self.chr, self.pos + delta)
    }

    /// Signed distance `self - other` after projecting `other` to this position's strand.
    ///
    /// # Panics
    ///
    /// Panics if the positions are on different contigs or dictionaries.
    pub fn difference_to(&self, other: &GenomePosition) -> i32 {
        self.assert_comparable(other);
        self.pos - other.with_strand(self.strand).pos
    }

    /// Zero-based index on the forward strand of the base starting at this boundary.
    pub fn forward_base(&self) -> i32 {
        match self.strand {
            Strand::Forward => self.pos,
            Strand::Reverse => self.chr_len - self.pos - 1,
        }
    }

    pub fn is_lt(&self, other: &GenomePosition) -> bool {
        self.difference_to(other) < 0
    }

    pub fn is_leq(&self, other: &GenomePosition) -> bool {
        self.difference_to(other) <= 0
    }

    pub fn is_gt(&self, other: &GenomePosition) -> bool {
        self.difference_to(other) > 0
    }

    pub fn is_geq(&self, other: &GenomePosition) -> bool {
        self.difference_to(other) >= 0
    }

    fn assert_comparable(&self, other: &GenomePosition) {
        assert_same_dict(&self.ref_dict, &other.ref_dict);
        assert_eq!(
            self.chr, other.chr,
            "positions on different contigs are not comparable"
        );
    }
}

impl PartialEq for GenomePosition {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ref_dict, &other.ref_dict)
            && self.chr == other.chr
            && self.strand == other.strand
            && self.pos == other.pos
    }
}

impl Eq for GenomePosition {}

impl std::fmt::Debug for GenomePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenomePosition")
            .field("strand", &self.strand)
            .field("chr", &self.chr)
            .field("pos", &self.pos)
            .finish()
    }
}

impl Display for GenomePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}({})", self.chr_name(), self.pos, self.strand)
    }
}
