//! Transcript models and projection between genome and transcript coordinates.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Error, GenomeInterval, GenomePosition, ReferenceDictionary, Strand};

/// Serialized form of a transcript, as stored in a transcript database.
///
/// All genomic coordinates are zero-based, half-open and on the forward strand.  The CDS
/// offsets are relative to the transcript's 5' end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Transcript accession, e.g., `NM_000059.3`.
    pub accession: String,
    /// HGNC gene symbol.
    pub gene_symbol: String,
    /// Gene identifier, e.g., `HGNC:1101`.
    #[serde(default)]
    pub gene_id: String,
    /// Contig name or alias.
    pub contig: String,
    pub strand: Strand,
    /// Exons in ascending genomic order.
    pub exons: Vec<(i32, i32)>,
    /// First CDS base in transcript coordinates.
    #[serde(default)]
    pub cds_start: Option<i32>,
    /// End of the CDS (exclusive, stop codon included) in transcript coordinates.
    #[serde(default)]
    pub cds_end: Option<i32>,
    /// Transcript sequence in transcript orientation.
    #[serde(default)]
    pub sequence: Option<String>,
    /// Protein sequence in 1-letter code.
    #[serde(default)]
    pub protein: Option<String>,
}

/// Location of a single genomic base relative to a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxLocation {
    /// 5' of the transcript; `distance` is 1 for the base adjacent to the transcript.
    Upstream { distance: i32 },
    /// 3' of the transcript; `distance` is 1 for the base adjacent to the transcript.
    Downstream { distance: i32 },
    /// Within exon `exon_no` (0-based, transcript order) at transcript offset `tx_pos`.
    Exonic { exon_no: usize, tx_pos: i32 },
    /// Within intron `intron_no` (0-based, transcript order).
    ///
    /// `tx_pos` is the transcript offset of the closest exonic base and `offset` the signed
    /// distance to it in transcript direction; ties are resolved towards the upstream exon.
    Intronic {
        intron_no: usize,
        tx_pos: i32,
        offset: i32,
    },
}

/// Immutable model of a transcript on the reference.
///
/// Regions are kept on the forward strand in genomic order; [`TranscriptModel::exon_in_tx_order`]
/// and the projection functions walk them in transcript 5' to 3' order.
#[derive(Debug, Clone)]
pub struct TranscriptModel {
    accession: String,
    gene_symbol: String,
    gene_id: String,
    strand: Strand,
    tx_region: GenomeInterval,
    exon_regions: Vec<GenomeInterval>,
    cds: Option<(i32, i32)>,
    sequence: Option<String>,
    protein: Option<String>,
    /// Forward exon bounds, genomic order.
    exons: Vec<(i32, i32)>,
    /// Transcript offset of each exon's first base, transcript order.
    exon_tx_starts: Vec<i32>,
    tx_len: i32,
}

impl TranscriptModel {
    /// Build a model from its record, validating it against `ref_dict`.
    pub fn from_record(
        ref_dict: Arc<ReferenceDictionary>,
        record: TranscriptRecord,
    ) -> Result<Self, Error> {
        let invalid = |msg: String| Error::InvalidTranscript(record.accession.clone(), msg);

        let chr = ref_dict.contig_id(&record.contig)?;
        let chr_len = ref_dict.contig_length(chr)?;

        if record.exons.is_empty() {
            return Err(invalid("transcript has no exons".to_string()));
        }
        for (i, &(begin, end)) in record.exons.iter().enumerate() {
            if begin >= end || begin < 0 || end > chr_len {
                return Err(invalid(format!("invalid exon {}-{}", begin, end)));
            }
            if i > 0 && record.exons[i - 1].1 > begin {
                return Err(invalid(format!(
                    "exons not sorted or overlapping at {}-{}",
                    begin, end
                )));
            }
        }

        let tx_len: i32 = record.exons.iter().map(|(b, e)| e - b).sum();
        let cds = match (record.cds_start, record.cds_end) {
            (Some(start), Some(end)) if 0 <= start && start < end && end <= tx_len => {
                Some((start, end))
            }
            (None, None) => None,
            (start, end) => {
                return Err(invalid(format!(
                    "invalid CDS offsets {:?}-{:?} for transcript length {}",
                    start, end, tx_len
                )))
            }
        };
        if let Some(seq) = &record.sequence {
            if seq.len() != tx_len as usize {
                return Err(invalid(format!(
                    "sequence length {} does not match exon length {}",
                    seq.len(),
                    tx_len
                )));
            }
        }

        let mut exon_tx_starts = Vec::with_capacity(record.exons.len());
        let mut offset = 0;
        let tx_order: Box<dyn Iterator<Item = &(i32, i32)>> = match record.strand {
            Strand::Forward => Box::new(record.exons.iter()),
            Strand::Reverse => Box::new(record.exons.iter().rev()),
        };
        for (begin, end) in tx_order {
            exon_tx_starts.push(offset);
            offset += end - begin;
        }

        let tx_begin = record.exons[0].0;
        let tx_end = record.exons[record.exons.len() - 1].1;
        let tx_region =
            GenomeInterval::from_offsets(ref_dict.clone(), Strand::Forward, chr, tx_begin, tx_end);
        let exon_regions = record
            .exons
            .iter()
            .map(|&(b, e)| GenomeInterval::from_offsets(ref_dict.clone(), Strand::Forward, chr, b, e))
            .collect();

        log::trace!(
            "loaded transcript {} with {} exons",
            record.accession,
            record.exons.len()
        );

        Ok(Self {
            accession: record.accession,
            gene_symbol: record.gene_symbol,
            gene_id: record.gene_id,
            strand: record.strand,
            tx_region,
            exon_regions,
            cds,
            sequence: record.sequence,
            protein: record.protein,
            exons: record.exons,
            exon_tx_starts,
            tx_len,
        })
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }

    pub fn gene_symbol(&self) -> &str {
        &self.gene_symbol
    }

    pub fn gene_id(&self) -> &str {
        &self.gene_id
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn chr(&self) -> usize {
        self.tx_region.chr()
    }

    /// Whole-transcript region on the forward strand.
    pub fn tx_region(&self) -> &GenomeInterval {
        &self.tx_region
    }

    /// Exon regions on the forward strand, in genomic order.
    pub fn exon_regions(&self) -> &[GenomeInterval] {
        &self.exon_regions
    }

    /// CDS start and end (exclusive) in transcript coordinates.
    pub fn cds_range(&self) -> Option<(i32, i32)> {
        self.cds
    }

    pub fn is_coding(&self) -> bool {
        self.cds.is_some()
    }

    /// Transcript sequence in transcript orientation.
    pub fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref()
    }

    pub fn protein(&self) -> Option<&str> {
        self.protein.as_deref()
    }

    /// Number of transcribed bases.
    pub fn tx_len(&self) -> i32 {
        self.tx_len
    }

    pub fn exon_count(&self) -> usize {
        self.exons.len()
    }

    /// Forward exon bounds in genomic order.
    pub(crate) fn exons_fwd(&self) -> &[(i32, i32)] {
        &self.exons
    }

    /// Forward bounds of the exon with transcript-order rank `rank`.
    pub fn exon_in_tx_order(&self, rank: usize) -> (i32, i32) {
        self.exons[self.fwd_index(rank)]
    }

    /// Map transcript-order rank to genomic-order index (works for exons).
    fn fwd_index(&self, rank: usize) -> usize {
        match self.strand {
            Strand::Forward => rank,
            Strand::Reverse => self.exons.len() - 1 - rank,
        }
    }

    /// Introns as `(rank, begin, end)` in forward coordinates, genomic order.
    ///
    /// `rank` is the 0-based intron number in transcript order.
    pub(crate) fn introns_fwd(&self) -> impl Iterator<Item = (usize, i32, i32)> + '_ {
        let n = self.exons.len();
        self.exons.windows(2).enumerate().map(move |(i, w)| {
            let rank = match self.strand {
                Strand::Forward => i,
                Strand::Reverse => n - 2 - i,
            };
            (rank, w[0].1, w[1].0)
        })
    }

    /// Transcript offset of the forward-strand base `base`, if it is exonic.
    pub fn genome_base_to_tx(&self, base: i32) -> Option<i32> {
        let idx = self
            .exons
            .iter()
            .position(|&(b, e)| b <= base && base < e)?;
        let (b, e) = self.exons[idx];
        let rank = self.fwd_index(idx);
        Some(match self.strand {
            Strand::Forward => self.exon_tx_starts[rank] + (base - b),
            Strand::Reverse => self.exon_tx_starts[rank] + (e - 1 - base),
        })
    }

    /// Transcript offset of the base starting at `pos`, or `None` if not exonic.
    pub fn genome_pos_to_tx(&self, pos: &GenomePosition) -> Option<i32> {
        if pos.chr() != self.chr() {
            return None;
        }
        self.genome_base_to_tx(pos.forward_base())
    }

    /// Forward-strand base of transcript offset `tx_pos`.
    pub fn tx_to_genome_base(&self, tx_pos: i32) -> Option<i32> {
        if !(0..self.tx_len).contains(&tx_pos) {
            return None;
        }
        let rank = self
            .exon_tx_starts
            .iter()
            .rposition(|&start| start <= tx_pos)?;
        let (b, e) = self.exon_in_tx_order(rank);
        let delta = tx_pos - self.exon_tx_starts[rank];
        Some(match self.strand {
            Strand::Forward => b + delta,
            Strand::Reverse => e - 1 - delta,
        })
    }

    /// Locate the forward-strand base `base` relative to the transcript.
    pub fn locate(&self, base: i32) -> TxLocation {
        let begin = self.tx_region.begin();
        let end = self.tx_region.end();
        if base < begin {
            let distance = begin - base;
            return match self.strand {
                Strand::Forward => TxLocation::Upstream { distance },
                Strand::Reverse => TxLocation::Downstream { distance },
            };
        }
        if base >= end {
            let distance = base - end + 1;
            return match self.strand {
                Strand::Forward => TxLocation::Downstream { distance },
                Strand::Reverse => TxLocation::Upstream { distance },
            };
        }
        if let Some(tx_pos) = self.genome_base_to_tx(base) {
            let idx = self
                .exons
                .iter()
                .position(|&(b, e)| b <= base && base < e)
                .unwrap_or_default();
            return TxLocation::Exonic {
                exon_no: self.fwd_index(idx),
                tx_pos,
            };
        }

        // intronic; `left_end` is the end of the exon before the intron in genomic order
        let (intron_no, left_end, right_begin) = self
            .introns_fwd()
            .find(|&(_, a, b)| a <= base && base < b)
            .unwrap_or((0, base, base + 1));
        let dist_left = base - left_end + 1;
        let dist_right = right_begin - base;
        let (anchor, offset) = match self.strand {
            Strand::Forward if dist_left <= dist_right => (left_end - 1, dist_left),
            Strand::Forward => (right_begin, -dist_right),
            Strand::Reverse if dist_right <= dist_left => (right_begin, dist_right),
            Strand::Reverse => (left_end - 1, -dist_left),
        };
        TxLocation::Intronic {
            intron_no,
            tx_pos: self.genome_base_to_tx(anchor).unwrap_or_default(),
            offset,
        }
    }

    /// Forward-strand region covered by the CDS, if coding.
    pub fn cds_region_fwd(&self) -> Option<(i32, i32)> {
        let (start, end) = self.cds?;
        let first = self.tx_to_genome_base(start)?;
        let last = self.tx_to_genome_base(end - 1)?;
        Some((first.min(last), first.max(last) + 1))
    }

    /// Whether the transcript offset falls into the CDS.
    pub fn is_cds_tx_pos(&self, tx_pos: i32) -> bool {
        matches!(self.cds, Some((start, end)) if start <= tx_pos && tx_pos < end)
    }
}

impl PartialEq for TranscriptModel {
    fn eq(&self, other: &Self) -> bool {
        self.accession == other.accession
            && self.tx_region == other.tx_region
            && self.strand == other.strand
            && self.exons == other.exons
            && self.cds == other.cds
    }
}

impl Eq for TranscriptModel {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{TranscriptModel, TranscriptRecord, TxLocation};
    use crate::reference::{
        test_helpers::{ref_dict, tx_minus, tx_minus_record, tx_plus},
        Error, GenomePosition, Strand,
    };

    #[rstest]
    #[case(50, Some(0))]
    #[case(100, Some(50))]
    #[case(149, Some(99))]
    #[case(150, None)]
    #[case(200, Some(100))]
    #[case(399, Some(249))]
    #[case(400, None)]
    #[case(10, None)]
    fn project_forward(#[case] base: i32, #[case] tx_pos: Option<i32>) {
        let tx = tx_plus();

        assert_eq!(tx.genome_base_to_tx(base), tx_pos);
        if let Some(tx_pos) = tx_pos {
            assert_eq!(tx.tx_to_genome_base(tx_pos), Some(base));
        }
    }

    #[rstest]
    #[case(1399, Some(0))]
    #[case(1300, Some(99))]
    #[case(1299, None)]
    #[case(1199, Some(100))]
    #[case(1100, Some(199))]
    #[case(1049, Some(200))]
    #[case(1000, Some(249))]
    #[case(999, None)]
    fn project_reverse(#[case] base: i32, #[case] tx_pos: Option<i32>) {
        let tx = tx_minus();

        assert_eq!(tx.genome_base_to_tx(base), tx_pos);
        if let Some(tx_pos) = tx_pos {
            assert_eq!(tx.tx_to_genome_base(tx_pos), Some(base));
        }
    }

    #[test]
    fn project_reverse_strand_position() {
        let tx = tx_minus();
        // base 1399 on the forward strand starts at offset 8600 on the reverse strand
        let pos = GenomePosition::new(ref_dict(), Strand::Reverse, 1, 8_600);

        assert_eq!(tx.genome_pos_to_tx(&pos), Some(0));
    }

    #[test]
    fn exon_order() {
        let tx = tx_minus();

        assert_eq!(tx.exon_in_tx_order(0), (1300, 1400));
        assert_eq!(tx.exon_in_tx_order(2), (1000, 1050));
        assert_eq!(
            tx.introns_fwd().collect::<Vec<_>>(),
            vec![(1, 1050, 1100), (0, 1200, 1300)]
        );
    }

    #[rstest]
    #[case(10, TxLocation::Upstream { distance: 40 })]
    #[case(49, TxLocation::Upstream { distance: 1 })]
    #[case(450, TxLocation::Downstream { distance: 51 })]
    #[case(100, TxLocation::Exonic { exon_no: 0, tx_pos: 50 })]
    #[case(360, TxLocation::Exonic { exon_no: 2, tx_pos: 210 })]
    #[case(160, TxLocation::Intronic { intron_no: 0, tx_pos: 99, offset: 11 })]
    #[case(190, TxLocation::Intronic { intron_no: 0, tx_pos: 100, offset: -10 })]
    #[case(300, TxLocation::Intronic { intron_no: 1, tx_pos: 199, offset: 1 })]
    fn locate_forward(#[case] base: i32, #[case] expected: TxLocation) {
        assert_eq!(tx_plus().locate(base), expected);
    }

    #[rstest]
    #[case(1450, TxLocation::Upstream { distance: 51 })]
    #[case(990, TxLocation::Downstream { distance: 10 })]
    #[case(1250, TxLocation::Intronic { intron_no: 0, tx_pos: 99, offset: 50 })]
    #[case(1201, TxLocation::Intronic { intron_no: 0, tx_pos: 100, offset: -2 })]
    #[case(1099, TxLocation::Intronic { intron_no: 1, tx_pos: 199, offset: 1 })]
    #[case(1150, TxLocation::Exonic { exon_no: 1, tx_pos: 149 })]
    fn locate_reverse(#[case] base: i32, #[case] expected: TxLocation) {
        assert_eq!(tx_minus().locate(base), expected);
    }

    #[test]
    fn cds_region() {
        assert_eq!(tx_plus().cds_region_fwd(), Some((70, 380)));
        assert_eq!(tx_minus().cds_region_fwd(), Some((1020, 1380)));
    }

    #[test]
    fn invalid_records() {
        let mut record = tx_minus_record();
        record.exons = vec![(1100, 1200), (1000, 1050)];
        assert!(matches!(
            TranscriptModel::from_record(ref_dict(), record),
            Err(Error::InvalidTranscript(..))
        ));

        let mut record = tx_minus_record();
        record.cds_end = None;
        assert!(matches!(
            TranscriptModel::from_record(ref_dict(), record),
            Err(Error::InvalidTranscript(..))
        ));

        let mut record = tx_minus_record();
        record.contig = "chrUn".to_string();
        assert_eq!(
            TranscriptModel::from_record(ref_dict(), record),
            Err(Error::UnknownContigName("chrUn".to_string()))
        );
    }

    #[test]
    fn record_from_json() -> Result<(), anyhow::Error> {
        let json = r#"{
            "accession": "NR_000001.1",
            "gene_symbol": "NCRNA",
            "contig": "chr1",
            "strand": "-",
            "exons": [[500, 600], [700, 800]]
        }"#;
        let record: TranscriptRecord = serde_json::from_str(json)?;
        let tx = TranscriptModel::from_record(ref_dict(), record)?;

        assert_eq!(tx.tx_len(), 200);
        assert!(!tx.is_coding());
        assert_eq!(tx.tx_to_genome_base(0), Some(799));

        Ok(())
    }
}
