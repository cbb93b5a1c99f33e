//! Shared fixtures for tests: a small reference and two synthetic transcripts.
//!
//! `TX_PLUS` lies on the forward strand with exons `[50,150)`, `[200,300)`, `[350,400)`;
//! `TX_MINUS` on the reverse strand with exons `[1000,1050)`, `[1100,1200)`, `[1300,1400)`.
//! Both carry the same 250 bp transcript sequence: a 20 bp 5' UTR, a 210 bp CDS from offset
//! 20 to 230 and a 20 bp 3' UTR.

use std::sync::Arc;

use super::{ReferenceDictionary, ReferenceDictionaryBuilder, Strand, TranscriptModel, TranscriptRecord};

lazy_static::lazy_static! {
    static ref REF_DICT: Arc<ReferenceDictionary> = Arc::new(
        ReferenceDictionaryBuilder::new()
            .put_contig(1, "1", 10_000)
            .put_alias("chr1", 1)
            .put_contig(2, "2", 5_000)
            .put_alias("chr2", 2)
            .build()
    );
}

/// The shared test dictionary; contig `1` has 10,000 bases, contig `2` has 5,000.
pub fn ref_dict() -> Arc<ReferenceDictionary> {
    REF_DICT.clone()
}

const UTR: &str = "GCGCGCGCGCGCGCGCGCGC";
const CODONS: [&str; 4] = ["GCT", "CTG", "AAA", "TGG"];

/// Transcript sequence; codon `i` (0-based) of the CDS for `0 < i < 69` is `CODONS[i % 4]`.
pub fn tx_sequence() -> String {
    let mut seq = String::from(UTR);
    seq.push_str("ATG");
    for i in 1..=68 {
        seq.push_str(CODONS[i % 4]);
    }
    seq.push_str("TAA");
    seq.push_str(UTR);
    seq
}

pub fn tx_plus_record() -> TranscriptRecord {
    TranscriptRecord {
        accession: "NM_000001.1".to_string(),
        gene_symbol: "PLUS".to_string(),
        gene_id: "HGNC:1".to_string(),
        contig: "1".to_string(),
        strand: Strand::Forward,
        exons: vec![(50, 150), (200, 300), (350, 400)],
        cds_start: Some(20),
        cds_end: Some(230),
        sequence: Some(tx_sequence()),
        protein: None,
    }
}

pub fn tx_minus_record() -> TranscriptRecord {
    TranscriptRecord {
        accession: "NM_000002.1".to_string(),
        gene_symbol: "MINUS".to_string(),
        gene_id: "HGNC:2".to_string(),
        contig: "chr1".to_string(),
        strand: Strand::Reverse,
        exons: vec![(1000, 1050), (1100, 1200), (1300, 1400)],
        cds_start: Some(20),
        cds_end: Some(230),
        sequence: Some(tx_sequence()),
        protein: None,
    }
}

pub fn tx_plus() -> Arc<TranscriptModel> {
    Arc::new(
        TranscriptModel::from_record(ref_dict(), tx_plus_record())
            .expect("fixture transcript is valid"),
    )
}

pub fn tx_minus() -> Arc<TranscriptModel> {
    Arc::new(
        TranscriptModel::from_record(ref_dict(), tx_minus_record())
            .expect("fixture transcript is valid"),
    )
}

/// Non-coding forward-strand transcript with exons `[2000,2100)` and `[2200,2300)`.
pub fn tx_noncoding() -> Arc<TranscriptModel> {
    let record = TranscriptRecord {
        accession: "NR_000003.1".to_string(),
        gene_symbol: "NCRNA".to_string(),
        gene_id: "HGNC:3".to_string(),
        contig: "1".to_string(),
        strand: Strand::Forward,
        exons: vec![(2000, 2100), (2200, 2300)],
        cds_start: None,
        cds_end: None,
        sequence: None,
        protein: None,
    };
    Arc::new(TranscriptModel::from_record(ref_dict(), record).expect("fixture transcript is valid"))
}
