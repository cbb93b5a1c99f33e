//! Region and splice-site arithmetic shared by the builders.
//!
//! All coordinates are zero-based, half-open, and on the forward strand.  An empty interval
//! `[p, p)` is the insertion point between bases `p - 1` and `p`.

use std::collections::BTreeSet;

use crate::{
    annotation::{AnnotationLocation, RankType, TxRegion, VariantEffect},
    config::Config,
    hgvs::ProtLocEdit,
    reference::{Strand, TranscriptModel, TxLocation},
};

/// Whether `[begin, end)` hits `[x, y)`.
///
/// An insertion point hits the interval only when it lies strictly inside, i.e., when it
/// separates two of its bases.
pub(super) fn hits(begin: i32, end: i32, x: i32, y: i32) -> bool {
    if begin == end {
        x < begin && begin < y
    } else {
        begin < y && x < end
    }
}

/// Splice donor/acceptor or splice region effects of `[begin, end)`.
///
/// A donor or acceptor site takes precedence over the splice region of the same exon/intron
/// boundary.
pub(super) fn splice_effects(
    config: &Config,
    tx: &TranscriptModel,
    begin: i32,
    end: i32,
) -> BTreeSet<VariantEffect> {
    let site = config.splice_site_bases;
    let exon_bases = config.splice_region_exon_bases;
    let intron_bases = config.splice_region_intron_bases;

    let mut result = BTreeSet::new();
    for (_, a, b) in tx.introns_fwd() {
        let five_prime = hits(begin, end, a, (a + site).min(b));
        let three_prime = hits(begin, end, (b - site).max(a), b);
        let (five_prime_site, three_prime_site) = match tx.strand() {
            Strand::Forward => (
                VariantEffect::SpliceDonorVariant,
                VariantEffect::SpliceAcceptorVariant,
            ),
            Strand::Reverse => (
                VariantEffect::SpliceAcceptorVariant,
                VariantEffect::SpliceDonorVariant,
            ),
        };

        if five_prime {
            result.insert(five_prime_site);
        } else if hits(begin, end, a - exon_bases, a + intron_bases) {
            result.insert(VariantEffect::SpliceRegionVariant);
        }
        if three_prime {
            result.insert(three_prime_site);
        } else if hits(begin, end, b - intron_bases, b + exon_bases) {
            result.insert(VariantEffect::SpliceRegionVariant);
        }
    }
    result
}

/// Whether the transcript lies 3' of `[begin, end)` on its own strand.
pub(super) fn is_upstream(tx: &TranscriptModel, begin: i32, end: i32) -> bool {
    let before = begin < tx.tx_region().begin() || end <= tx.tx_region().begin();
    before == tx.strand().is_forward()
}

/// Upstream or downstream effect for `[begin, end)` lying outside the transcript.
pub(super) fn flank_effect(tx: &TranscriptModel, begin: i32, end: i32) -> VariantEffect {
    if is_upstream(tx, begin, end) {
        VariantEffect::UpstreamGeneVariant
    } else {
        VariantEffect::DownstreamGeneVariant
    }
}

/// Whether `[begin, end)` lies completely outside of the transcript.
///
/// Insertions at the first or last boundary of the transcript count as outside.
pub(super) fn is_outside(tx: &TranscriptModel, begin: i32, end: i32) -> bool {
    end <= tx.tx_region().begin() || begin >= tx.tx_region().end()
}

/// Genomic-order index of the exon containing `[begin, end)`.
///
/// Insertion points on an exon boundary belong to the exon, except at the transcript ends.
pub(super) fn containing_exon(tx: &TranscriptModel, begin: i32, end: i32) -> Option<usize> {
    if begin == end {
        if is_outside(tx, begin, end) {
            return None;
        }
        tx.exons_fwd()
            .iter()
            .position(|&(s, e)| s <= begin && begin <= e)
    } else {
        tx.exons_fwd()
            .iter()
            .position(|&(s, e)| s <= begin && end <= e)
    }
}

/// Transcript offset in front of which bases inserted at `pos` end up.
///
/// `pos` must lie in or on the boundary of exon `exon_idx` (genomic order).
pub(super) fn tx_junction(tx: &TranscriptModel, pos: i32, exon_idx: usize) -> Option<i32> {
    let (s, _) = *tx.exons_fwd().get(exon_idx)?;
    match tx.strand() {
        Strand::Forward if pos > s => tx.genome_base_to_tx(pos - 1).map(|t| t + 1),
        Strand::Forward => tx.genome_base_to_tx(pos),
        Strand::Reverse if pos > s => tx.genome_base_to_tx(pos - 1),
        Strand::Reverse => tx.genome_base_to_tx(pos).map(|t| t + 1),
    }
}

/// Transcript interval `[tb, te)` of the exonic bases `[begin, end)`.
pub(super) fn tx_interval(tx: &TranscriptModel, begin: i32, end: i32) -> Option<(i32, i32)> {
    let first = tx.genome_base_to_tx(begin)?;
    let last = tx.genome_base_to_tx(end - 1)?;
    Some((first.min(last), first.max(last) + 1))
}

/// Transcript region of the transcript offset `tx_pos` (exonic).
pub(super) fn exonic_region(tx: &TranscriptModel, tx_pos: i32) -> TxRegion {
    match tx.cds_range() {
        None => TxRegion::NonCodingExon,
        Some((start, _)) if tx_pos < start => TxRegion::FivePrimeUtr,
        Some((_, end)) if tx_pos >= end => TxRegion::ThreePrimeUtr,
        Some(_) => TxRegion::Cds,
    }
}

/// Exon or intron hit by the 5'-most base of `[begin, end)`, `None` outside the transcript.
///
/// For insertions, the exonic flank of the insertion point is preferred.
pub(super) fn location(tx: &TranscriptModel, begin: i32, end: i32) -> Option<AnnotationLocation> {
    if is_outside(tx, begin, end) {
        return None;
    }
    let candidates = match (tx.strand(), begin == end) {
        (Strand::Forward, true) => [begin - 1, begin],
        (Strand::Reverse, true) => [begin, begin - 1],
        (Strand::Forward, false) => [begin.max(tx.tx_region().begin()); 2],
        (Strand::Reverse, false) => [(end - 1).min(tx.tx_region().end() - 1); 2],
    };
    let located: Vec<_> = candidates.iter().map(|&base| tx.locate(base)).collect();
    let best = located
        .iter()
        .find(|loc| matches!(loc, TxLocation::Exonic { .. }))
        .or_else(|| {
            located
                .iter()
                .find(|loc| matches!(loc, TxLocation::Intronic { .. }))
        })?;

    let exon_count = tx.exon_count();
    match *best {
        TxLocation::Exonic { exon_no, tx_pos } => Some(AnnotationLocation {
            rank_type: RankType::Exon,
            rank: exon_no,
            total: exon_count,
            region: exonic_region(tx, tx_pos),
        }),
        TxLocation::Intronic { intron_no, .. } => Some(AnnotationLocation {
            rank_type: RankType::Intron,
            rank: intron_no,
            total: exon_count - 1,
            region: TxRegion::Intron,
        }),
        _ => None,
    }
}

fn intron_effect(tx: &TranscriptModel) -> VariantEffect {
    if tx.is_coding() {
        VariantEffect::IntronVariant
    } else {
        VariantEffect::NonCodingTranscriptIntronVariant
    }
}

/// Granularity of effects for changes spanning several transcript features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SpanMode {
    /// Small variants: the exact protein change is unknown, report the affected parts.
    Small,
    /// Structural deletions: count deleted coding bases, UTR bases are truncated.
    Structural,
}

/// Effects of removing/replacing `[begin, end)` (non-empty) where the change is not confined
/// to one exon.
///
/// Transcript ablation and exon loss are determined against `[contain_begin, contain_end)`,
/// which is the outer interval for structural variants.
pub(super) fn span_effects(
    config: &Config,
    tx: &TranscriptModel,
    (begin, end): (i32, i32),
    (contain_begin, contain_end): (i32, i32),
    mode: SpanMode,
) -> (BTreeSet<VariantEffect>, Option<ProtLocEdit>) {
    let tx_begin = tx.tx_region().begin();
    let tx_end = tx.tx_region().end();
    let mut effects = BTreeSet::new();

    if contain_begin <= tx_begin && tx_end <= contain_end {
        log::trace!("{} is ablated", tx.accession());
        effects.insert(VariantEffect::TranscriptAblation);
        let protein = tx.is_coding().then_some(ProtLocEdit::NoProtein);
        return (effects, protein);
    }
    if tx
        .exons_fwd()
        .iter()
        .any(|&(s, e)| contain_begin <= s && e <= contain_end)
    {
        effects.insert(VariantEffect::ExonLossVariant);
    }

    effects.extend(splice_effects(config, tx, begin, end));
    if tx.introns_fwd().any(|(_, a, b)| hits(begin, end, a, b)) {
        effects.insert(intron_effect(tx));
    }
    if begin < tx_begin {
        effects.insert(flank_effect(tx, begin, tx_begin));
    }
    if end > tx_end {
        effects.insert(flank_effect(tx, tx_end, end));
    }

    let (utr_before, utr_after) = match tx.strand() {
        Strand::Forward => (TxRegion::FivePrimeUtr, TxRegion::ThreePrimeUtr),
        Strand::Reverse => (TxRegion::ThreePrimeUtr, TxRegion::FivePrimeUtr),
    };
    let mut coding_bases = 0;
    // transcript offset of the 5'-most removed coding base
    let mut first_coding: Option<i32> = None;
    let mut utrs = BTreeSet::new();
    for &(s, e) in tx.exons_fwd() {
        let (os, oe) = (s.max(begin), e.min(end));
        if os >= oe {
            continue;
        }
        match tx.cds_region_fwd() {
            None => {
                effects.insert(VariantEffect::NonCodingTranscriptExonVariant);
            }
            Some((cds_begin, cds_end)) => {
                let (cs, ce) = (os.max(cds_begin), oe.min(cds_end));
                if cs < ce {
                    coding_bases += ce - cs;
                    let first = [cs, ce - 1]
                        .into_iter()
                        .filter_map(|base| tx.genome_base_to_tx(base))
                        .min();
                    first_coding = match (first_coding, first) {
                        (Some(x), Some(y)) => Some(x.min(y)),
                        (x, y) => x.or(y),
                    };
                }
                if os < cds_begin {
                    utrs.insert(utr_before);
                }
                if oe > cds_end {
                    utrs.insert(utr_after);
                }
            }
        }
    }

    for utr in utrs {
        effects.insert(match (utr, mode) {
            (TxRegion::FivePrimeUtr, SpanMode::Small) => VariantEffect::FivePrimeUtrVariant,
            (TxRegion::FivePrimeUtr, SpanMode::Structural) => VariantEffect::FivePrimeUtrTruncation,
            (_, SpanMode::Small) => VariantEffect::ThreePrimeUtrVariant,
            (_, SpanMode::Structural) => VariantEffect::ThreePrimeUtrTruncation,
        });
    }

    let codon_hit = |first_tx: i32| {
        (first_tx..first_tx + 3)
            .filter_map(|t| tx.tx_to_genome_base(t))
            .any(|base| begin <= base && base < end)
    };
    let mut protein = None;
    if let Some((cds_start, cds_end)) = tx.cds_range() {
        if coding_bases > 0 {
            let codon_aligned = first_coding.is_some_and(|t| (t - cds_start) % 3 == 0);
            effects.insert(match mode {
                SpanMode::Small => VariantEffect::CodingSequenceVariant,
                SpanMode::Structural if coding_bases % 3 != 0 => VariantEffect::FrameshiftVariant,
                SpanMode::Structural if codon_aligned => VariantEffect::ConservativeInframeDeletion,
                SpanMode::Structural => VariantEffect::DisruptiveInframeDeletion,
            });
            if codon_hit(cds_end - 3) {
                effects.insert(VariantEffect::StopLost);
            }
        }
        if coding_bases > 0
            || effects.contains(&VariantEffect::SpliceDonorVariant)
            || effects.contains(&VariantEffect::SpliceAcceptorVariant)
        {
            protein = Some(ProtLocEdit::Unknown);
        }
        if coding_bases > 0 && codon_hit(cds_start) {
            effects.insert(VariantEffect::StartLost);
            protein = Some(ProtLocEdit::InitiationUncertain);
        }
    }

    (effects, protein)
}

/// Effects of inserting unknown sequence at `pos` inside the transcript.
///
/// Exonic insertions into the CDS are reported as `coding_sequence_variant`.
pub(super) fn point_effects(config: &Config, tx: &TranscriptModel, pos: i32) -> BTreeSet<VariantEffect> {
    if is_outside(tx, pos, pos) {
        return BTreeSet::from([flank_effect(tx, pos, pos)]);
    }

    let mut effects = splice_effects(config, tx, pos, pos);
    match containing_exon(tx, pos, pos).and_then(|idx| tx_junction(tx, pos, idx)) {
        Some(junction) => {
            effects.insert(match tx.cds_range() {
                None => VariantEffect::NonCodingTranscriptExonVariant,
                Some((start, _)) if junction <= start => VariantEffect::FivePrimeUtrVariant,
                Some((_, end)) if junction >= end => VariantEffect::ThreePrimeUtrVariant,
                Some(_) => VariantEffect::CodingSequenceVariant,
            });
        }
        None => {
            effects.insert(intron_effect(tx));
        }
    }
    effects
}

/// Effects of a breakpoint known to lie somewhere in `[begin, end)`.
///
/// An empty interval is a precise breakpoint and is handled by [`point_effects`].
pub(super) fn breakpoint_effects(
    config: &Config,
    tx: &TranscriptModel,
    begin: i32,
    end: i32,
) -> BTreeSet<VariantEffect> {
    if begin == end {
        return point_effects(config, tx, begin);
    }
    if is_outside(tx, begin, end) {
        return BTreeSet::from([flank_effect(tx, begin, end)]);
    }

    let tx_begin = tx.tx_region().begin();
    let tx_end = tx.tx_region().end();
    let mut effects = splice_effects(config, tx, begin, end);
    if tx.introns_fwd().any(|(_, a, b)| hits(begin, end, a, b)) {
        effects.insert(intron_effect(tx));
    }
    if begin < tx_begin {
        effects.insert(flank_effect(tx, begin, tx_begin));
    }
    if end > tx_end {
        effects.insert(flank_effect(tx, tx_end, end));
    }

    let (utr_before, utr_after) = match tx.strand() {
        Strand::Forward => (
            VariantEffect::FivePrimeUtrVariant,
            VariantEffect::ThreePrimeUtrVariant,
        ),
        Strand::Reverse => (
            VariantEffect::ThreePrimeUtrVariant,
            VariantEffect::FivePrimeUtrVariant,
        ),
    };
    for &(s, e) in tx.exons_fwd() {
        let (os, oe) = (s.max(begin), e.min(end));
        if os >= oe {
            continue;
        }
        match tx.cds_region_fwd() {
            None => {
                effects.insert(VariantEffect::NonCodingTranscriptExonVariant);
            }
            Some((cds_begin, cds_end)) => {
                if os < cds_begin {
                    effects.insert(utr_before);
                }
                if oe > cds_end {
                    effects.insert(utr_after);
                }
                if os.max(cds_begin) < oe.min(cds_end) {
                    effects.insert(VariantEffect::CodingSequenceVariant);
                }
            }
        }
    }
    effects
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{
        breakpoint_effects, containing_exon, hits, location, point_effects, span_effects,
        splice_effects, tx_junction, SpanMode,
    };
    use crate::{
        annotation::{RankType, TxRegion, VariantEffect},
        config::Config,
        hgvs::ProtLocEdit,
        reference::test_helpers::{tx_minus, tx_plus},
    };

    #[rstest]
    #[case(5, 5, 0, 10, true)]
    #[case(0, 0, 0, 10, false)]
    #[case(10, 10, 0, 10, false)]
    #[case(9, 10, 0, 10, true)]
    #[case(10, 12, 0, 10, false)]
    fn hits_cases(
        #[case] begin: i32,
        #[case] end: i32,
        #[case] x: i32,
        #[case] y: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(hits(begin, end, x, y), expected);
    }

    #[rstest]
    #[case(150, 151, &[VariantEffect::SpliceDonorVariant])]
    #[case(151, 152, &[VariantEffect::SpliceDonorVariant])]
    #[case(152, 153, &[VariantEffect::SpliceRegionVariant])]
    #[case(157, 158, &[VariantEffect::SpliceRegionVariant])]
    #[case(158, 159, &[])]
    #[case(147, 148, &[VariantEffect::SpliceRegionVariant])]
    #[case(146, 147, &[])]
    #[case(198, 199, &[VariantEffect::SpliceAcceptorVariant])]
    #[case(192, 193, &[VariantEffect::SpliceRegionVariant])]
    #[case(202, 203, &[VariantEffect::SpliceRegionVariant])]
    #[case(175, 175, &[])]
    #[case(150, 150, &[VariantEffect::SpliceRegionVariant])]
    #[case(151, 151, &[VariantEffect::SpliceDonorVariant])]
    // donor at the exon 1 boundary, only the region at the exon 2 boundary
    #[case(149, 195, &[VariantEffect::SpliceDonorVariant, VariantEffect::SpliceRegionVariant])]
    fn splice_forward(#[case] begin: i32, #[case] end: i32, #[case] expected: &[VariantEffect]) {
        assert_eq!(
            splice_effects(&Config::default(), &tx_plus(), begin, end),
            expected.iter().copied().collect::<BTreeSet<_>>()
        );
    }

    #[rstest]
    // intron [1200, 1300) is the first intron in transcript order; donor at its high end
    #[case(1299, 1300, &[VariantEffect::SpliceDonorVariant])]
    #[case(1200, 1201, &[VariantEffect::SpliceAcceptorVariant])]
    #[case(1300, 1301, &[VariantEffect::SpliceRegionVariant])]
    #[case(1250, 1251, &[])]
    #[case(1205, 1299, &[VariantEffect::SpliceDonorVariant, VariantEffect::SpliceRegionVariant])]
    fn splice_reverse(#[case] begin: i32, #[case] end: i32, #[case] expected: &[VariantEffect]) {
        assert_eq!(
            splice_effects(&Config::default(), &tx_minus(), begin, end),
            expected.iter().copied().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn junctions() {
        let plus = tx_plus();
        assert_eq!(containing_exon(&plus, 101, 101), Some(0));
        assert_eq!(containing_exon(&plus, 50, 50), None);
        assert_eq!(containing_exon(&plus, 150, 150), Some(0));
        assert_eq!(containing_exon(&plus, 175, 175), None);
        assert_eq!(tx_junction(&plus, 101, 0), Some(51));
        assert_eq!(tx_junction(&plus, 150, 0), Some(100));
        assert_eq!(tx_junction(&plus, 200, 1), Some(100));

        let minus = tx_minus();
        // forward bases 1378 and 1379 are transcript bases 21 and 20
        assert_eq!(tx_junction(&minus, 1379, 2), Some(21));
        assert_eq!(tx_junction(&minus, 1300, 2), Some(100));
        assert_eq!(tx_junction(&minus, 1200, 1), Some(100));
    }

    #[test]
    fn locations() {
        let plus = tx_plus();
        let loc = location(&plus, 100, 101).unwrap();
        assert_eq!(
            (loc.rank_type, loc.rank, loc.total, loc.region),
            (RankType::Exon, 0, 3, TxRegion::Cds)
        );
        let loc = location(&plus, 160, 161).unwrap();
        assert_eq!(
            (loc.rank_type, loc.rank, loc.total, loc.region),
            (RankType::Intron, 0, 2, TxRegion::Intron)
        );
        assert_eq!(location(&plus, 10, 11), None);

        let minus = tx_minus();
        let loc = location(&minus, 1390, 1391).unwrap();
        assert_eq!(
            (loc.rank_type, loc.rank, loc.region),
            (RankType::Exon, 0, TxRegion::FivePrimeUtr)
        );
    }

    #[test]
    fn insertion_points() {
        let config = Config::default();
        let plus = tx_plus();

        assert_eq!(
            point_effects(&config, &plus, 101),
            BTreeSet::from([VariantEffect::CodingSequenceVariant])
        );
        assert_eq!(
            point_effects(&config, &plus, 175),
            BTreeSet::from([VariantEffect::IntronVariant])
        );
        assert_eq!(
            point_effects(&config, &plus, 60),
            BTreeSet::from([VariantEffect::FivePrimeUtrVariant])
        );
        assert_eq!(
            point_effects(&config, &plus, 30),
            BTreeSet::from([VariantEffect::UpstreamGeneVariant])
        );
        assert_eq!(
            point_effects(&config, &tx_minus(), 30),
            BTreeSet::from([VariantEffect::DownstreamGeneVariant])
        );
    }

    #[test]
    fn breakpoint_windows() {
        let config = Config::default();
        let plus = tx_plus();

        assert_eq!(
            breakpoint_effects(&config, &plus, 165, 165),
            BTreeSet::from([VariantEffect::IntronVariant])
        );
        // reaches back over the end of exon 1 and forward into the region before exon 2
        assert_eq!(
            breakpoint_effects(&config, &plus, 135, 195),
            BTreeSet::from([
                VariantEffect::SpliceDonorVariant,
                VariantEffect::CodingSequenceVariant,
                VariantEffect::SpliceRegionVariant,
                VariantEffect::IntronVariant,
            ])
        );
        assert_eq!(
            breakpoint_effects(&config, &plus, 40, 60),
            BTreeSet::from([
                VariantEffect::FivePrimeUtrVariant,
                VariantEffect::UpstreamGeneVariant,
            ])
        );
        assert_eq!(
            breakpoint_effects(&config, &plus, 10, 20),
            BTreeSet::from([VariantEffect::UpstreamGeneVariant])
        );
    }

    #[rstest]
    // first removed coding base is c.79, the first base of codon 27
    #[case(148, 201, VariantEffect::ConservativeInframeDeletion)]
    #[case(149, 202, VariantEffect::DisruptiveInframeDeletion)]
    #[case(147, 201, VariantEffect::FrameshiftVariant)]
    fn structural_deletion_frame(
        #[case] begin: i32,
        #[case] end: i32,
        #[case] expected: VariantEffect,
    ) {
        let (effects, protein) = span_effects(
            &Config::default(),
            &tx_plus(),
            (begin, end),
            (begin, end),
            SpanMode::Structural,
        );

        assert_eq!(
            effects,
            BTreeSet::from([
                expected,
                VariantEffect::SpliceAcceptorVariant,
                VariantEffect::SpliceDonorVariant,
                VariantEffect::IntronVariant,
            ])
        );
        assert_eq!(protein, Some(ProtLocEdit::Unknown));
    }
}
