//! Effects of changes confined to one exon on the transcript and its protein product.
//!
//! Offsets are transcript offsets (0-based, half-open) and alleles are in transcript
//! orientation.

use std::collections::BTreeSet;

use crate::{
    annotation::{Error, VariantEffect},
    hgvs::{ProtInterval, ProtLocEdit, ProtPos, ProteinEdit, UncertainLengthChange},
    reference::TranscriptModel,
    sequences::{translate_cds, translate_codon, trim_common_prefixes, trim_common_suffixes},
};

/// Effects and protein change of an exonic change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExonicChange {
    pub effects: BTreeSet<VariantEffect>,
    pub protein: Option<ProtLocEdit>,
}

impl ExonicChange {
    fn new(effects: &[VariantEffect], protein: Option<ProtLocEdit>) -> Self {
        Self {
            effects: effects.iter().copied().collect(),
            protein,
        }
    }
}

/// Position of the amino acid with 0-based index `idx` in `protein`.
fn prot_pos(protein: &str, idx: usize) -> ProtPos {
    ProtPos {
        aa: protein.get(idx..idx + 1).unwrap_or("X").to_string(),
        number: idx as i32 + 1,
    }
}

/// Edit of the amino acids with 0-based indices `first..=last`.
fn prot_edit(protein: &str, first: usize, last: usize, edit: ProteinEdit) -> ProtLocEdit {
    ProtLocEdit::Ordinary {
        loc: ProtInterval {
            begin: prot_pos(protein, first),
            end: prot_pos(protein, last),
        },
        edit,
    }
}

/// Translate `seq` up to and including the first stop codon.
fn translate_to_stop(seq: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(seq.len() / 3);
    for codon in seq.as_bytes().chunks_exact(3) {
        let aa = translate_codon(codon)?;
        result.push(char::from(aa));
        if aa == b'*' {
            break;
        }
    }
    Ok(result)
}

/// Stop codon at index `stop_idx` of `ref_aa` no longer terminates `alt_aa`.
fn extension(ref_aa: &str, alt_aa: &str, stop_idx: usize) -> ProtLocEdit {
    let change = match alt_aa.rfind('*') {
        Some(new_stop) if alt_aa.ends_with('*') && new_stop > stop_idx => {
            UncertainLengthChange::Known((new_stop - stop_idx) as i32)
        }
        _ => UncertainLengthChange::Unknown,
    };
    prot_edit(
        ref_aa,
        stop_idx,
        stop_idx,
        ProteinEdit::Ext {
            aa_ext: alt_aa.get(stop_idx..stop_idx + 1).map(str::to_string),
            ext_aa: Some("*".to_string()),
            change,
        },
    )
}

/// Annotate replacing transcript bases `[tb, te)` by `alternative`.
///
/// `reference` is compared against the transcript sequence if given; a mismatch is logged
/// and the transcript sequence is used.
pub(super) fn annotate_exonic(
    tx: &TranscriptModel,
    tb: i32,
    te: i32,
    reference: Option<&str>,
    alternative: &str,
) -> Result<ExonicChange, Error> {
    let Some((cs, ce)) = tx.cds_range() else {
        return Ok(ExonicChange::new(
            &[VariantEffect::NonCodingTranscriptExonVariant],
            None,
        ));
    };
    if te <= cs {
        return Ok(ExonicChange::new(&[VariantEffect::FivePrimeUtrVariant], None));
    }
    if tb >= ce {
        return Ok(ExonicChange::new(&[VariantEffect::ThreePrimeUtrVariant], None));
    }

    let seq = tx
        .sequence()
        .ok_or_else(|| Error::MissingTranscriptSequence(tx.accession().to_string()))?
        .to_ascii_uppercase();
    let (tb_u, te_u, cs_u, ce_u) = (tb as usize, te as usize, cs as usize, ce as usize);
    if let Some(reference) = reference {
        let observed = &seq[tb_u..te_u];
        if !observed.eq_ignore_ascii_case(reference) {
            log::warn!(
                "reference allele {} does not match {} at transcript offset {} ({})",
                reference,
                tx.accession(),
                tb,
                observed
            );
        }
    }
    let alternative = alternative.to_ascii_uppercase();
    let alt_seq = format!("{}{}{}", &seq[..tb_u], alternative, &seq[te_u..]);
    let ref_aa = translate_cds(&seq[cs_u..ce_u])?;
    let alt_aa = translate_to_stop(alt_seq.get(cs_u..).unwrap_or_default())?;
    let insertion = tb == te;

    let start_hit = if insertion {
        cs < tb && tb < cs + 3
    } else {
        tb < cs + 3 && te > cs
    };
    if start_hit && (tb < cs || !alt_aa.starts_with('M')) {
        let mut effects = vec![VariantEffect::StartLost];
        if tb < cs {
            effects.push(VariantEffect::FivePrimeUtrVariant);
        }
        return Ok(ExonicChange::new(
            &effects,
            Some(ProtLocEdit::InitiationUncertain),
        ));
    }

    let stop_idx = ref_aa.find('*').unwrap_or(ref_aa.len());
    if te > ce {
        return Ok(if alt_aa.get(stop_idx..stop_idx + 1) == Some("*") {
            ExonicChange::new(
                &[
                    VariantEffect::StopRetainedVariant,
                    VariantEffect::ThreePrimeUtrVariant,
                ],
                Some(prot_edit(&ref_aa, stop_idx, stop_idx, ProteinEdit::Ident)),
            )
        } else {
            ExonicChange::new(
                &[VariantEffect::StopLost, VariantEffect::ThreePrimeUtrVariant],
                Some(extension(&ref_aa, &alt_aa, stop_idx)),
            )
        });
    }

    let delta = alternative.len() as i32 - (te - tb);
    if delta % 3 != 0 {
        Ok(frameshift(&ref_aa, &alt_aa))
    } else {
        let cds = &seq[cs_u..ce_u];
        in_frame(
            cds,
            &ref_aa,
            &alt_aa,
            (tb - cs) as usize,
            (te - cs) as usize,
            &alternative,
        )
    }
}

/// Frameshift; the protein change is described at the first changed amino acid.
fn frameshift(ref_aa: &str, alt_aa: &str) -> ExonicChange {
    let k = ref_aa
        .bytes()
        .zip(alt_aa.bytes())
        .take_while(|(r, a)| r == a)
        .count();
    let (Some(r), Some(a)) = (ref_aa.get(k..k + 1), alt_aa.get(k..k + 1)) else {
        return ExonicChange::new(
            &[VariantEffect::FrameshiftVariant],
            Some(ProtLocEdit::Unknown),
        );
    };

    if r == "*" {
        ExonicChange::new(
            &[VariantEffect::FrameshiftVariant, VariantEffect::StopLost],
            Some(extension(ref_aa, alt_aa, k)),
        )
    } else if a == "*" {
        ExonicChange::new(
            &[VariantEffect::FrameshiftVariant, VariantEffect::StopGained],
            Some(prot_edit(
                ref_aa,
                k,
                k,
                ProteinEdit::Subst {
                    alternative: "*".to_string(),
                },
            )),
        )
    } else {
        let length = if alt_aa.ends_with('*') {
            UncertainLengthChange::Known((alt_aa.len() - k) as i32)
        } else {
            UncertainLengthChange::Unknown
        };
        ExonicChange::new(
            &[VariantEffect::FrameshiftVariant],
            Some(prot_edit(
                ref_aa,
                k,
                k,
                ProteinEdit::Fs {
                    alternative: Some(a.to_string()),
                    length,
                },
            )),
        )
    }
}

/// In-frame change of CDS offsets `[vb, ve)`, analyzed on the affected codons.
fn in_frame(
    cds: &str,
    ref_aa: &str,
    alt_aa: &str,
    vb: usize,
    ve: usize,
    alternative: &str,
) -> Result<ExonicChange, Error> {
    let ws = vb - vb % 3;
    let we = ve.div_ceil(3).saturating_mul(3).min(cds.len());
    let ref_win = translate_cds(&cds[ws..we])?;
    let alt_win = translate_cds(&format!(
        "{}{}{}",
        &cds[ws..vb],
        alternative,
        &cds[ve..we]
    ))?;
    let first = ws / 3;
    let ref_stop = ref_win.find('*');

    if ref_stop.is_some() && !alt_win.contains('*') {
        let stop_idx = first + ref_stop.unwrap_or_default();
        return Ok(ExonicChange::new(
            &[VariantEffect::StopLost],
            Some(extension(ref_aa, alt_aa, stop_idx)),
        ));
    }
    if let Some(alt_stop) = alt_win.find('*').filter(|&i| ref_stop != Some(i)) {
        let (p, _, _) = trim_common_prefixes(&ref_win, &alt_win);
        let protein = if p >= alt_stop || ref_win.len() <= p {
            prot_edit(
                ref_aa,
                first + p,
                first + p,
                ProteinEdit::Subst {
                    alternative: "*".to_string(),
                },
            )
        } else {
            prot_edit(
                ref_aa,
                first + p,
                first + ref_win.len() - 1,
                ProteinEdit::DelIns {
                    alternative: alt_win[p..=alt_stop].to_string(),
                },
            )
        };
        return Ok(ExonicChange::new(&[VariantEffect::StopGained], Some(protein)));
    }
    if ref_win == alt_win {
        let effect = if ref_stop.is_some() {
            VariantEffect::StopRetainedVariant
        } else if first == 0 {
            VariantEffect::StartRetainedVariant
        } else {
            VariantEffect::SynonymousVariant
        };
        return Ok(ExonicChange::new(
            &[effect],
            Some(prot_edit(ref_aa, first, first, ProteinEdit::Ident)),
        ));
    }

    let ref_len = ve - vb;
    let aligned = vb % 3 == 0 && ve % 3 == 0;
    let effect = if ref_len == alternative.len() {
        VariantEffect::MissenseVariant
    } else if ref_len < alternative.len() {
        if aligned {
            VariantEffect::ConservativeInframeInsertion
        } else {
            VariantEffect::DisruptiveInframeInsertion
        }
    } else if aligned {
        VariantEffect::ConservativeInframeDeletion
    } else {
        VariantEffect::DisruptiveInframeDeletion
    };

    let (p, r, a) = trim_common_prefixes(&ref_win, &alt_win);
    let (_, r, a) = trim_common_suffixes(&r, &a);
    let idx = first + p;
    let protein = match (r.len(), a.len()) {
        (1, 1) => prot_edit(ref_aa, idx, idx, ProteinEdit::Subst { alternative: a }),
        (0, n) if n > 0 && idx > 0 => {
            if idx >= n && ref_aa.get(idx - n..idx) == Some(a.as_str()) {
                prot_edit(ref_aa, idx - n, idx - 1, ProteinEdit::Dup)
            } else {
                prot_edit(ref_aa, idx - 1, idx, ProteinEdit::Ins { alternative: a })
            }
        }
        (m, 0) if m > 0 => prot_edit(ref_aa, idx, idx + m - 1, ProteinEdit::Del),
        (m, _) => prot_edit(
            ref_aa,
            idx,
            idx + m.max(1) - 1,
            ProteinEdit::DelIns { alternative: a },
        ),
    };
    Ok(ExonicChange::new(&[effect], Some(protein)))
}
