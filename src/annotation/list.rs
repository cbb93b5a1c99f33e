//! Annotations of one variant and their severity-ordered collection.

use std::{cmp::Ordering, collections::BTreeSet, sync::Arc};

use super::{PutativeImpact, VariantEffect};
use crate::{
    config::AminoAcidCode,
    hgvs::{AaCode, NaChange, ProtLocEdit},
    reference::TranscriptModel,
};

/// Part of the transcript hit by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TxRegion {
    Cds,
    #[strum(serialize = "5_prime_UTR")]
    FivePrimeUtr,
    #[strum(serialize = "3_prime_UTR")]
    ThreePrimeUtr,
    NonCodingExon,
    Intron,
}

/// Kind of feature counted by [`AnnotationLocation::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RankType {
    Exon,
    Intron,
}

/// Exon or intron hit by a variant, counted in transcript order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationLocation {
    pub rank_type: RankType,
    /// 0-based rank of the exon or intron.
    pub rank: usize,
    /// Number of exons or introns of the transcript.
    pub total: usize,
    pub region: TxRegion,
}

impl std::fmt::Display for AnnotationLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{} ({})",
            self.rank_type,
            self.rank + 1,
            self.total,
            self.region
        )
    }
}

/// Result of annotating a variant with respect to one transcript.
///
/// Intergenic annotations have no transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    transcript: Option<Arc<TranscriptModel>>,
    effects: BTreeSet<VariantEffect>,
    location: Option<AnnotationLocation>,
    nt_change: Option<NaChange>,
    protein_change: Option<ProtLocEdit>,
}

impl Annotation {
    pub fn new(
        transcript: Option<Arc<TranscriptModel>>,
        effects: BTreeSet<VariantEffect>,
        location: Option<AnnotationLocation>,
        nt_change: Option<NaChange>,
        protein_change: Option<ProtLocEdit>,
    ) -> Self {
        Self {
            transcript,
            effects,
            location,
            nt_change,
            protein_change,
        }
    }

    /// Annotation for a variant that is not near any transcript.
    pub fn intergenic() -> Self {
        Self::new(
            None,
            BTreeSet::from([VariantEffect::IntergenicVariant]),
            None,
            None,
            None,
        )
    }

    pub fn transcript(&self) -> Option<&Arc<TranscriptModel>> {
        self.transcript.as_ref()
    }

    /// Effects, most severe first.
    pub fn effects(&self) -> &BTreeSet<VariantEffect> {
        &self.effects
    }

    pub fn most_severe_effect(&self) -> Option<VariantEffect> {
        self.effects.first().copied()
    }

    pub fn putative_impact(&self) -> Option<PutativeImpact> {
        self.most_severe_effect().map(|e| e.impact())
    }

    pub fn location(&self) -> Option<&AnnotationLocation> {
        self.location.as_ref()
    }

    pub fn nt_change(&self) -> Option<&NaChange> {
        self.nt_change.as_ref()
    }

    pub fn protein_change(&self) -> Option<&ProtLocEdit> {
        self.protein_change.as_ref()
    }

    /// Nucleotide change, e.g., `c.31A>T`.
    pub fn nt_notation(&self) -> Option<String> {
        self.nt_change.as_ref().map(|c| c.to_string())
    }

    /// Protein change, e.g., `p.Lys11Ter`.
    pub fn protein_notation(&self, code: AminoAcidCode) -> Option<String> {
        self.protein_change
            .as_ref()
            .map(|p| format!("p.{}", AaCode(p, code)))
    }

    /// Full notation, e.g., `NM_000001.1:c.31A>T:p.Lys11Ter`.
    pub fn hgvs(&self, code: AminoAcidCode) -> Option<String> {
        let tx = self.transcript.as_ref()?;
        let nt = self.nt_notation()?;
        Some(match self.protein_notation(code) {
            Some(p) => format!("{}:{}:{}", tx.accession(), nt, p),
            None => format!("{}:{}", tx.accession(), nt),
        })
    }

    fn sort_key(&self) -> (usize, &str, &str) {
        let rank = self
            .most_severe_effect()
            .map(|e| e.rank())
            .unwrap_or(usize::MAX);
        match &self.transcript {
            Some(tx) => (rank, tx.accession(), tx.gene_symbol()),
            None => (rank, "", ""),
        }
    }
}

impl PartialOrd for Annotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Annotation {
    /// Most severe first, then by transcript accession and gene symbol.
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.effects.iter().cmp(other.effects.iter()))
            .then_with(|| self.nt_notation().cmp(&other.nt_notation()))
            .then_with(|| {
                let lhs = self.protein_notation(AminoAcidCode::OneLetter);
                lhs.cmp(&other.protein_notation(AminoAcidCode::OneLetter))
            })
    }
}

/// Annotations of one variant, sorted most severe first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationList {
    entries: Vec<Annotation>,
}

impl AnnotationList {
    /// The list without annotations.
    pub const EMPTY: AnnotationList = AnnotationList {
        entries: Vec::new(),
    };

    pub fn new(mut entries: Vec<Annotation>) -> Self {
        entries.sort();
        Self { entries }
    }

    pub fn highest_impact_annotation(&self) -> Option<&Annotation> {
        self.entries.first()
    }

    pub fn highest_impact_effect(&self) -> Option<VariantEffect> {
        self.highest_impact_annotation()
            .and_then(|a| a.most_severe_effect())
    }

    /// Keep only the highest-impact annotation.
    pub fn truncate_to_highest_impact(mut self) -> Self {
        self.entries.truncate(1);
        self
    }

    pub fn entries(&self) -> &[Annotation] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for AnnotationList {
    type Item = Annotation;
    type IntoIter = std::vec::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationList {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
