//! Annotation of structural variants.
//!
//! Structural variants are always described on the forward strand.

use std::{collections::BTreeSet, sync::Arc};

use super::{
    coding,
    common::{self, SpanMode},
};
use crate::{
    annotation::{Annotation, Error, VariantEffect},
    config::Config,
    hgvs::{na_change, na_inversion, ProtLocEdit},
    reference::{is_symbolic_allele, Strand, TranscriptModel, VariantDescription},
    sequences::revcomp,
};

fn not_in_region(variant: &VariantDescription, tx: &TranscriptModel) -> Error {
    Error::VariantNotInTranscriptRegion(variant.to_string(), tx.accession().to_string())
}

/// Effects that make the protein product unpredictable.
fn disrupts_protein(tx: &TranscriptModel, effects: &BTreeSet<VariantEffect>) -> Option<ProtLocEdit> {
    let disruptive = effects.iter().any(|e| {
        matches!(
            e,
            VariantEffect::Inversion
                | VariantEffect::Translocation
                | VariantEffect::CodingSequenceVariant
                | VariantEffect::SpliceDonorVariant
                | VariantEffect::SpliceAcceptorVariant
        )
    });
    (tx.is_coding() && disruptive).then_some(ProtLocEdit::Unknown)
}

fn flank_only(tx: &Arc<TranscriptModel>, effect: VariantEffect) -> Annotation {
    Annotation::new(Some(tx.clone()), BTreeSet::from([effect]), None, None, None)
}

pub(super) fn build_deletion(
    config: &Config,
    variant: &VariantDescription,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    let mid = variant.mid_interval();
    let outer = variant.outer_interval();
    let contain = (outer.begin(), outer.end());
    let (begin, end) = if mid.is_empty() {
        contain
    } else {
        (mid.begin(), mid.end())
    };
    let tx_begin = tx.tx_region().begin();
    let tx_end = tx.tx_region().end();

    if common::is_outside(tx, contain.0, contain.1) {
        return Ok(flank_only(tx, common::flank_effect(tx, contain.0, contain.1)));
    }
    if begin == end {
        let effects = common::point_effects(config, tx, begin);
        let protein = disrupts_protein(tx, &effects);
        return Ok(Annotation::new(
            Some(tx.clone()),
            effects,
            common::location(tx, begin, end),
            None,
            protein,
        ));
    }

    let nt_change = Some(na_change(tx, begin, end, "", ""));
    let ablated = contain.0 <= tx_begin && tx_end <= contain.1;
    let (mut effects, protein) = match common::containing_exon(tx, begin, end) {
        Some(_) if !ablated => {
            let (tb, te) =
                common::tx_interval(tx, begin, end).ok_or_else(|| not_in_region(variant, tx))?;
            let change = coding::annotate_exonic(tx, tb, te, None, "")?;
            let mut effects = change.effects;
            effects.extend(common::splice_effects(config, tx, begin, end));
            (effects, change.protein)
        }
        _ => common::span_effects(config, tx, (begin, end), contain, SpanMode::Structural),
    };
    if !ablated
        && tx
            .exons_fwd()
            .iter()
            .any(|&(s, e)| contain.0 <= s && e <= contain.1)
    {
        effects.insert(VariantEffect::ExonLossVariant);
    }

    Ok(Annotation::new(
        Some(tx.clone()),
        effects,
        common::location(tx, begin, end),
        nt_change,
        protein,
    ))
}

/// Insertions of symbolic alleles are annotated by the position of the insertion only; precise
/// literal exonic insertions get the full sequence analysis.  Imprecise insertions are
/// classified by everything their confidence interval reaches.
pub(super) fn build_insertion(
    config: &Config,
    variant: &VariantDescription,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    let sv = variant.structural().ok_or_else(|| not_in_region(variant, tx))?;
    let pos = variant.pos();
    let window = sv.outer_interval1();
    let (wb, we) = (window.begin(), window.end());
    if common::is_outside(tx, wb, we) {
        return Ok(flank_only(tx, common::flank_effect(tx, wb, we)));
    }

    let alternative = variant.alternative();
    let literal = !alternative.is_empty()
        && !is_symbolic_allele(alternative)
        && alternative.bytes().all(|b| b"ACGTNacgtn".contains(&b));
    let exon = common::containing_exon(tx, pos, pos);
    let (effects, protein, nt_change) = match (exon, literal && window.is_empty()) {
        (Some(idx), true) => {
            let junction =
                common::tx_junction(tx, pos, idx).ok_or_else(|| not_in_region(variant, tx))?;
            let alt_tx = match tx.strand() {
                Strand::Forward => alternative.to_string(),
                Strand::Reverse => revcomp(alternative),
            };
            let change = coding::annotate_exonic(tx, junction, junction, None, &alt_tx)?;
            let mut effects = change.effects;
            effects.extend(common::splice_effects(config, tx, pos, pos));
            (
                effects,
                change.protein,
                Some(na_change(tx, pos, pos, "", alternative)),
            )
        }
        _ => {
            let effects = common::breakpoint_effects(config, tx, wb, we);
            let protein = disrupts_protein(tx, &effects);
            (effects, protein, None)
        }
    };

    Ok(Annotation::new(
        Some(tx.clone()),
        effects,
        common::location(tx, pos, pos),
        nt_change,
        protein,
    ))
}

pub(super) fn build_inversion(
    config: &Config,
    variant: &VariantDescription,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    let sv = variant.structural().ok_or_else(|| not_in_region(variant, tx))?;
    let mid = variant.mid_interval();
    let outer = variant.outer_interval();
    let (begin, end) = (mid.begin(), mid.end());

    let mut effects = BTreeSet::new();
    for window in [sv.outer_interval1(), sv.outer_interval2()] {
        let (wb, we) = (window.begin(), window.end());
        if !common::is_outside(tx, wb, we) {
            effects.extend(common::breakpoint_effects(config, tx, wb, we));
        }
    }
    if tx
        .exons_fwd()
        .iter()
        .any(|&(s, e)| common::hits(outer.begin(), outer.end(), s, e))
    {
        effects.insert(VariantEffect::Inversion);
    }
    if effects.is_empty() {
        effects.insert(common::flank_effect(tx, outer.begin(), outer.end()));
    }

    let protein = disrupts_protein(tx, &effects);
    let nt_change = (!mid.is_empty()).then(|| na_inversion(tx, begin, end));
    Ok(Annotation::new(
        Some(tx.clone()),
        effects,
        common::location(tx, begin, end),
        nt_change,
        protein,
    ))
}

/// Only the breakpoints on the contig of `tx` are considered, each with its confidence
/// interval.
pub(super) fn build_translocation(
    config: &Config,
    variant: &VariantDescription,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    let sv = variant.structural().ok_or_else(|| not_in_region(variant, tx))?;
    let breakpoints: Vec<(i32, i32, i32)> = [
        (sv.pos(), sv.outer_interval1()),
        (sv.pos2(), sv.outer_interval2()),
    ]
    .into_iter()
    .filter(|(pos, _)| pos.chr() == tx.chr())
    .map(|(pos, window)| (pos.forward_base(), window.begin(), window.end()))
    .collect();
    let &(_, first_begin, first_end) =
        breakpoints.first().ok_or_else(|| not_in_region(variant, tx))?;

    let mut effects = BTreeSet::new();
    let mut location = None;
    for &(breakpoint, wb, we) in &breakpoints {
        if !common::is_outside(tx, wb, we) {
            effects.extend(common::breakpoint_effects(config, tx, wb, we));
            effects.insert(VariantEffect::Translocation);
            location = location.or_else(|| common::location(tx, breakpoint, breakpoint));
        }
    }
    if effects.is_empty() {
        effects.insert(common::flank_effect(tx, first_begin, first_end));
    }

    let protein = disrupts_protein(tx, &effects);
    Ok(Annotation::new(
        Some(tx.clone()),
        effects,
        location,
        None,
        protein,
    ))
}
