//! Strand-aware half-open intervals on a contig.

use std::{fmt::Display, sync::Arc};

use super::{position::assert_same_dict, GenomePosition, ReferenceDictionary, Strand};

/// Half-open interval `[begin, end)` on one strand of a contig.
///
/// Zero-length intervals denote insertion points between two bases.
#[derive(Clone)]
pub struct GenomeInterval {
    ref_dict: Arc<ReferenceDictionary>,
    strand: Strand,
    chr: usize,
    begin: i32,
    end: i32,
    chr_len: i32,
}

impl GenomeInterval {
    /// Construct interval starting at `start` with the given `length`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative or the interval does not fit on the contig.
    pub fn new(start: &GenomePosition, length: i32) -> Self {
        assert!(length >= 0, "interval length must not be negative");
        let end = start.pos() + length;
        assert!(
            end <= start.chr_len(),
            "interval end {} beyond contig length {}",
            end,
            start.chr_len()
        );
        Self {
            ref_dict: start.ref_dict().clone(),
            strand: start.strand(),
            chr: start.chr(),
            begin: start.pos(),
            end,
            chr_len: start.chr_len(),
        }
    }

    /// Construct interval from begin and end offsets on the given strand.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end` or the offsets are out of range.
    pub fn from_offsets(
        ref_dict: Arc<ReferenceDictionary>,
        strand: Strand,
        chr: usize,
        begin: i32,
        end: i32,
    ) -> Self {
        let start = GenomePosition::new(ref_dict, strand, chr, begin);
        Self::new(&start, end - begin)
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

    pub fn begin(&self) -> i32 {
        self.begin
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn length(&self) -> i32 {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Boundary position at the start of the interval.
    pub fn start_pos(&self) -> GenomePosition {
        GenomePosition::new(self.ref_dict.clone(), self.strand, self.chr, self.begin)
    }

    /// Boundary position at the end of the interval.
    pub fn end_pos(&self) -> GenomePosition {
        GenomePosition::new(self.ref_dict.clone(), self.strand, self.chr, self.end)
    }

    /// Return the same interval on the given strand.
    pub fn with_strand(&self, strand: Strand) -> Self {
        if strand == self.strand {
            self.clone()
        } else {
            Self {
                strand,
                begin: self.chr_len - self.end,
                end: self.chr_len - self.begin,
                ..self.clone()
            }
        }
    }

    /// Whether the base starting at boundary `pos` lies in the interval.
    pub fn contains_pos(&self, pos: &GenomePosition) -> bool {
        assert_same_dict(&self.ref_dict, pos.ref_dict());
        if pos.chr() != self.chr {
            return false;
        }
        let base = if pos.strand() == self.strand {
            pos.pos()
        } else {
            self.chr_len - pos.pos() - 1
        };
        self.begin <= base && base < self.end
    }

    /// Whether `other` lies completely within this interval.
    pub fn contains(&self, other: &GenomeInterval) -> bool {
        assert_same_dict(&self.ref_dict, &other.ref_dict);
        if other.chr != self.chr {
            return false;
        }
        let other = other.with_strand(self.strand);
        self.begin <= other.begin && other.end <= self.end
    }

    /// Whether the intervals share at least one base.
    ///
    /// Zero-length intervals hold no base and never overlap; see [`Self::touches_boundary`].
    pub fn overlaps_with(&self, other: &GenomeInterval) -> bool {
        assert_same_dict(&self.ref_dict, &other.ref_dict);
        if other.chr != self.chr || self.is_empty() || other.is_empty() {
            return false;
        }
        let other = other.with_strand(self.strand);
        self.begin < other.end && other.begin < self.end
    }

    /// Whether the boundary `pos` lies in the closed interval `[begin, end]`.
    ///
    /// This is the overlap test used for zero-length intervals (insertion points).
    pub fn touches_boundary(&self, pos: &GenomePosition) -> bool {
        assert_same_dict(&self.ref_dict, pos.ref_dict());
        if pos.chr() != self.chr {
            return false;
        }
        let pos = pos.with_strand(self.strand).pos();
        self.begin <= pos && pos <= self.end
    }

    /// Intersection of two intervals, or `None` if they do not overlap.
    pub fn intersection(&self, other: &GenomeInterval) -> Option<GenomeInterval> {
        if !self.overlaps_with(other) {
            return None;
        }
        let other = other.with_strand(self.strand);
        Some(Self {
            begin: self.begin.max(other.begin),
            end: self.end.min(other.end),
            ..self.clone()
        })
    }

    /// Interval grown by `left` and `right` bases, clamped to the contig.
    pub fn with_more_padding(&self, left: i32, right: i32) -> Self {
        Self {
            begin: (self.begin - left).max(0),
            end: (self.end + right).min(self.chr_len),
            ..self.clone()
        }
    }
}

impl PartialEq for GenomeInterval {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ref_dict, &other.ref_dict)
            && self.chr == other.chr
            && self.strand == other.strand
            && self.begin == other.begin
            && self.end == other.end
    }
}

impl Eq for GenomeInterval {}

impl std::fmt::Debug for GenomeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenomeInterval")
            .field("strand", &self.strand)
            .field("chr", &self.chr)
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl Display for GenomeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.ref_dict.contig_name(self.chr).unwrap_or("?");
        write!(f, "{}:{}-{}({})", name, self.begin, self.end, self.strand)
    }
}
