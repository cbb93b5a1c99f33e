//! Annotation of small variants: SNVs, MNVs, insertions, deletions and block substitutions.

use std::{collections::BTreeSet, sync::Arc};

use super::{
    coding,
    common::{self, SpanMode},
};
use crate::{
    annotation::{Annotation, Error, VariantEffect},
    config::Config,
    hgvs::{na_change, ProtLocEdit},
    reference::{GenomeVariant, Strand, TranscriptModel},
    sequences::revcomp,
};

pub(super) fn build(
    config: &Config,
    variant: &GenomeVariant,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    let variant = variant.with_strand(Strand::Forward);
    let begin = variant.pos().pos();
    let end = begin + variant.reference().len() as i32;
    let (reference, alternative) = (variant.reference(), variant.alternative());
    let nt_change = Some(na_change(tx, begin, end, reference, alternative));
    let location = common::location(tx, begin, end);

    if common::is_outside(tx, begin, end) {
        return Ok(Annotation::new(
            Some(tx.clone()),
            BTreeSet::from([common::flank_effect(tx, begin, end)]),
            None,
            nt_change,
            None,
        ));
    }

    let (effects, protein) = match common::containing_exon(tx, begin, end) {
        Some(idx) => {
            let interval = if begin == end {
                common::tx_junction(tx, begin, idx).map(|j| (j, j))
            } else {
                common::tx_interval(tx, begin, end)
            };
            let (tb, te) = interval.ok_or_else(|| {
                Error::VariantNotInTranscriptRegion(
                    format!("{}:{}", variant.pos().chr_name(), begin),
                    tx.accession().to_string(),
                )
            })?;
            let (ref_tx, alt_tx) = match tx.strand() {
                Strand::Forward => (reference.to_string(), alternative.to_string()),
                Strand::Reverse => (revcomp(reference), revcomp(alternative)),
            };
            let change = coding::annotate_exonic(tx, tb, te, Some(&ref_tx), &alt_tx)?;
            let mut effects = change.effects;
            effects.extend(common::splice_effects(config, tx, begin, end));
            (effects, change.protein)
        }
        None if begin == end => {
            let effects = common::point_effects(config, tx, begin);
            let splice_site = effects.contains(&VariantEffect::SpliceDonorVariant)
                || effects.contains(&VariantEffect::SpliceAcceptorVariant);
            let protein = (tx.is_coding() && splice_site).then_some(ProtLocEdit::Unknown);
            (effects, protein)
        }
        None => common::span_effects(config, tx, (begin, end), (begin, end), SpanMode::Small),
    };

    Ok(Annotation::new(
        Some(tx.clone()),
        effects,
        location,
        nt_change,
        protein,
    ))
}
