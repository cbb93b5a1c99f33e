//! Variant effects (Sequence Ontology terms) and their severity order.

use std::cmp::Ordering;

use strum::IntoEnumIterator;

/// Putative impact level.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Deserialize,
    serde::Serialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PutativeImpact {
    High,
    Moderate,
    Low,
    Modifier,
}

/// Consequence of a variant on a transcript.
///
/// Variants sort by [`VariantEffect::rank`], most severe first; the declaration order carries
/// no meaning.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Deserialize,
    serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VariantEffect {
    // high impact
    TranscriptAblation,
    ExonLossVariant,
    Translocation,
    Inversion,
    FrameshiftVariant,
    StopGained,
    StopLost,
    StartLost,
    SpliceAcceptorVariant,
    SpliceDonorVariant,
    // moderate impact
    MissenseVariant,
    DisruptiveInframeInsertion,
    DisruptiveInframeDeletion,
    ConservativeInframeInsertion,
    ConservativeInframeDeletion,
    #[strum(serialize = "5_prime_UTR_truncation")]
    #[serde(rename = "5_prime_UTR_truncation")]
    FivePrimeUtrTruncation,
    #[strum(serialize = "3_prime_UTR_truncation")]
    #[serde(rename = "3_prime_UTR_truncation")]
    ThreePrimeUtrTruncation,
    CodingSequenceVariant,
    SpliceRegionVariant,
    // low impact
    StopRetainedVariant,
    StartRetainedVariant,
    SynonymousVariant,
    // modifier
    #[strum(serialize = "5_prime_UTR_variant")]
    #[serde(rename = "5_prime_UTR_variant")]
    FivePrimeUtrVariant,
    #[strum(serialize = "3_prime_UTR_variant")]
    #[serde(rename = "3_prime_UTR_variant")]
    ThreePrimeUtrVariant,
    NonCodingTranscriptExonVariant,
    IntronVariant,
    NonCodingTranscriptIntronVariant,
    UpstreamGeneVariant,
    DownstreamGeneVariant,
    IntergenicVariant,
}

impl VariantEffect {
    /// Severity rank; smaller is more severe.
    pub fn rank(&self) -> usize {
        match self {
            VariantEffect::TranscriptAblation => 0,
            VariantEffect::ExonLossVariant => 1,
            VariantEffect::Translocation => 2,
            VariantEffect::Inversion => 3,
            VariantEffect::FrameshiftVariant => 4,
            VariantEffect::StopGained => 5,
            VariantEffect::StopLost => 6,
            VariantEffect::StartLost => 7,
            VariantEffect::SpliceAcceptorVariant => 8,
            VariantEffect::SpliceDonorVariant => 9,
            VariantEffect::MissenseVariant => 10,
            VariantEffect::DisruptiveInframeInsertion => 11,
            VariantEffect::DisruptiveInframeDeletion => 12,
            VariantEffect::ConservativeInframeInsertion => 13,
            VariantEffect::ConservativeInframeDeletion => 14,
            VariantEffect::FivePrimeUtrTruncation => 15,
            VariantEffect::ThreePrimeUtrTruncation => 16,
            VariantEffect::CodingSequenceVariant => 17,
            VariantEffect::SpliceRegionVariant => 18,
            VariantEffect::StopRetainedVariant => 19,
            VariantEffect::StartRetainedVariant => 20,
            VariantEffect::SynonymousVariant => 21,
            VariantEffect::FivePrimeUtrVariant => 22,
            VariantEffect::ThreePrimeUtrVariant => 23,
            VariantEffect::NonCodingTranscriptExonVariant => 24,
            VariantEffect::IntronVariant => 25,
            VariantEffect::NonCodingTranscriptIntronVariant => 26,
            VariantEffect::UpstreamGeneVariant => 27,
            VariantEffect::DownstreamGeneVariant => 28,
            VariantEffect::IntergenicVariant => 29,
        }
    }

    /// All effects, most severe first.
    pub fn all_by_severity() -> Vec<Self> {
        let mut result: Vec<_> = Self::iter().collect();
        result.sort();
        result
    }

    pub fn impact(&self) -> PutativeImpact {
        PutativeImpact::from(*self)
    }

    /// Whether the effect implies a change of the encoded protein that can be described.
    pub fn is_coding(&self) -> bool {
        matches!(
            self,
            VariantEffect::FrameshiftVariant
                | VariantEffect::StopGained
                | VariantEffect::StopLost
                | VariantEffect::StartLost
                | VariantEffect::MissenseVariant
                | VariantEffect::DisruptiveInframeInsertion
                | VariantEffect::DisruptiveInframeDeletion
                | VariantEffect::ConservativeInframeInsertion
                | VariantEffect::ConservativeInframeDeletion
                | VariantEffect::StopRetainedVariant
                | VariantEffect::StartRetainedVariant
                | VariantEffect::SynonymousVariant
        )
    }
}

impl PartialOrd for VariantEffect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariantEffect {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl From<VariantEffect> for PutativeImpact {
    fn from(val: VariantEffect) -> Self {
        match val {
            VariantEffect::TranscriptAblation
            | VariantEffect::ExonLossVariant
            | VariantEffect::Translocation
            | VariantEffect::Inversion
            | VariantEffect::FrameshiftVariant
            | VariantEffect::StopGained
            | VariantEffect::StopLost
            | VariantEffect::StartLost
            | VariantEffect::SpliceAcceptorVariant
            | VariantEffect::SpliceDonorVariant => PutativeImpact::High,
            VariantEffect::MissenseVariant
            | VariantEffect::DisruptiveInframeInsertion
            | VariantEffect::DisruptiveInframeDeletion
            | VariantEffect::ConservativeInframeInsertion
            | VariantEffect::ConservativeInframeDeletion
            | VariantEffect::FivePrimeUtrTruncation
            | VariantEffect::ThreePrimeUtrTruncation
            | VariantEffect::CodingSequenceVariant
            | VariantEffect::SpliceRegionVariant => PutativeImpact::Moderate,
            VariantEffect::StopRetainedVariant
            | VariantEffect::StartRetainedVariant
            | VariantEffect::SynonymousVariant => PutativeImpact::Low,
            VariantEffect::FivePrimeUtrVariant
            | VariantEffect::ThreePrimeUtrVariant
            | VariantEffect::NonCodingTranscriptExonVariant
            | VariantEffect::IntronVariant
            | VariantEffect::NonCodingTranscriptIntronVariant
            | VariantEffect::UpstreamGeneVariant
            | VariantEffect::DownstreamGeneVariant
            | VariantEffect::IntergenicVariant => PutativeImpact::Modifier,
        }
    }
}

#[cfg(test)]
mod test {
    use std::{collections::BTreeSet, str::FromStr};

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ranks_form_total_order() {
        let ranks: BTreeSet<_> = VariantEffect::iter().map(|e| e.rank()).collect();

        assert_eq!(ranks.len(), VariantEffect::iter().count());
        assert_eq!(ranks.iter().copied().max(), Some(ranks.len() - 1));
    }

    #[test]
    fn impact_follows_rank() {
        let impacts: Vec<_> = VariantEffect::all_by_severity()
            .iter()
            .map(|e| e.impact())
            .collect();
        let mut sorted = impacts.clone();
        sorted.sort();

        assert_eq!(impacts, sorted);
    }

    #[test]
    fn severity_order() {
        assert!(VariantEffect::TranscriptAblation < VariantEffect::ExonLossVariant);
        assert!(VariantEffect::FrameshiftVariant < VariantEffect::MissenseVariant);
        assert!(VariantEffect::SpliceRegionVariant < VariantEffect::SynonymousVariant);
        assert!(VariantEffect::UpstreamGeneVariant < VariantEffect::IntergenicVariant);

        let set: BTreeSet<_> = [
            VariantEffect::IntronVariant,
            VariantEffect::SpliceRegionVariant,
            VariantEffect::SpliceDonorVariant,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.first(), Some(&VariantEffect::SpliceDonorVariant));
    }

    #[test]
    fn sequence_ontology_terms() -> Result<(), anyhow::Error> {
        assert_eq!(
            format!("{}", VariantEffect::FivePrimeUtrVariant),
            "5_prime_UTR_variant"
        );
        assert_eq!(format!("{}", VariantEffect::StopGained), "stop_gained");
        assert_eq!(
            VariantEffect::from_str("splice_region_variant")?,
            VariantEffect::SpliceRegionVariant
        );
        assert_eq!(
            serde_json::to_string(&VariantEffect::ThreePrimeUtrTruncation)?,
            "\"3_prime_UTR_truncation\""
        );
        assert_eq!(
            serde_json::from_str::<VariantEffect>("\"missense_variant\"")?,
            VariantEffect::MissenseVariant
        );

        // display and serde agree for every term
        for effect in VariantEffect::iter() {
            assert_eq!(
                serde_json::to_string(&effect)?,
                format!("\"{}\"", effect)
            );
        }

        Ok(())
    }

    #[test]
    fn putative_impact_display() {
        assert_eq!(format!("{}", PutativeImpact::High), "HIGH");
        assert_eq!(format!("{}", PutativeImpact::Modifier), "MODIFIER");
        assert_eq!(
            VariantEffect::FrameshiftVariant.impact(),
            PutativeImpact::High
        );
        assert_eq!(
            VariantEffect::SynonymousVariant.impact(),
            PutativeImpact::Low
        );
    }
}
