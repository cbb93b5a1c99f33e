//! Construction of [`Annotation`]s for one variant and one transcript.
//!
//! Builders work on forward-strand coordinates throughout; alleles are reverse-complemented
//! where the transcript sequence is consulted.

mod coding;
mod common;
mod simple;
mod sv;

use std::sync::Arc;

use crate::{
    annotation::{Annotation, Error},
    config::Config,
    reference::{GenomeInterval, Strand, TranscriptModel, VariantDescription},
};

/// Whether `interval` hits the transcript region padded by the upstream/downstream length.
fn near_transcript(config: &Config, tx: &TranscriptModel, interval: &GenomeInterval) -> bool {
    let padding = config.upstream_downstream_length;
    let region = tx.tx_region().with_more_padding(padding, padding);
    if interval.is_empty() {
        region.touches_boundary(&interval.start_pos())
    } else {
        region.overlaps_with(interval)
    }
}

/// Whether `variant` lies on the contig of `tx` and within the configured
/// upstream/downstream distance of it.
pub fn overlaps_extended_region(
    config: &Config,
    variant: &VariantDescription,
    tx: &TranscriptModel,
) -> bool {
    match variant {
        VariantDescription::Simple(v) => {
            near_transcript(config, tx, &v.interval().with_strand(Strand::Forward))
        }
        VariantDescription::SvTranslocation(sv) => {
            near_transcript(config, tx, &variant.outer_interval())
                || near_transcript(config, tx, &sv.outer_interval2())
        }
        _ => near_transcript(config, tx, &variant.outer_interval()),
    }
}

/// Annotate `variant` with respect to `tx`.
///
/// Fails with [`Error::VariantNotInTranscriptRegion`] if the variant is not near the
/// transcript, see [`overlaps_extended_region`].
pub fn build_annotation(
    config: &Config,
    variant: &VariantDescription,
    tx: &Arc<TranscriptModel>,
) -> Result<Annotation, Error> {
    if !overlaps_extended_region(config, variant, tx) {
        return Err(Error::VariantNotInTranscriptRegion(
            variant.to_string(),
            tx.accession().to_string(),
        ));
    }

    let annotation = match variant {
        VariantDescription::Simple(v) => simple::build(config, v, tx)?,
        VariantDescription::SvDeletion(_) => sv::build_deletion(config, variant, tx)?,
        VariantDescription::SvInsertion(_) => sv::build_insertion(config, variant, tx)?,
        VariantDescription::SvInversion(_) => sv::build_inversion(config, variant, tx)?,
        VariantDescription::SvTranslocation(_) => sv::build_translocation(config, variant, tx)?,
    };
    log::trace!(
        "{} on {}: {:?}",
        variant,
        tx.accession(),
        annotation.effects()
    );
    Ok(annotation)
}
