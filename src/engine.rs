//! Annotation of variants against all transcripts they may affect.

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    annotation::{
        builders::{build_annotation, overlaps_extended_region},
        Annotation, AnnotationList, Error,
    },
    config::{Config, ReportMode},
    data::TranscriptSource,
    reference::{Strand, TranscriptModel, VariantDescription},
};

/// Entry point for annotating variants.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: Config,
}

impl Annotator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Annotate `variant` with respect to the candidate `transcripts`.
    ///
    /// Candidates outside the extended transcript region are skipped; if none remains, the
    /// result holds a single intergenic annotation.
    ///
    /// # Panics
    ///
    /// Panics if the variant and a candidate transcript use different reference
    /// dictionaries.
    pub fn annotate(
        &self,
        variant: &VariantDescription,
        transcripts: &[Arc<TranscriptModel>],
    ) -> Result<AnnotationList, Error> {
        let candidates: Vec<&Arc<TranscriptModel>> = transcripts
            .iter()
            .filter(|tx| {
                let keep = overlaps_extended_region(&self.config, variant, tx);
                if !keep {
                    log::debug!("skipping {} for {}", tx.accession(), variant);
                }
                keep
            })
            .collect();

        let annotations = if self.config.parallel {
            candidates
                .par_iter()
                .map(|tx| build_annotation(&self.config, variant, tx))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            candidates
                .iter()
                .map(|tx| build_annotation(&self.config, variant, tx))
                .collect::<Result<Vec<_>, _>>()?
        };

        let list = if annotations.is_empty() {
            AnnotationList::new(vec![Annotation::intergenic()])
        } else {
            AnnotationList::new(annotations)
        };
        Ok(match self.config.report {
            ReportMode::AllTranscripts => list,
            ReportMode::HighestImpactOnly => list.truncate_to_highest_impact(),
        })
    }

    /// Annotate `variant` with the transcripts that `source` returns for its extended region.
    pub fn annotate_with_source<S: TranscriptSource + ?Sized>(
        &self,
        variant: &VariantDescription,
        source: &S,
    ) -> Result<AnnotationList, Error> {
        let padding = self.config.upstream_downstream_length;
        let mut intervals = vec![variant.outer_interval()];
        if let VariantDescription::SvTranslocation(sv) = variant {
            intervals.push(sv.outer_interval2());
        }

        let mut transcripts: Vec<Arc<TranscriptModel>> = Vec::new();
        for interval in intervals {
            let interval = interval.with_strand(Strand::Forward);
            for tx in source.get_tx_for_region(
                interval.chr(),
                interval.begin() - padding,
                interval.end() + padding,
            ) {
                if !transcripts.iter().any(|t| t.accession() == tx.accession()) {
                    transcripts.push(tx);
                }
            }
        }
        log::trace!("{} candidate transcripts for {}", transcripts.len(), variant);

        self.annotate(variant, &transcripts)
    }

    /// HGVS notation of each annotation in `list` that has one, using the configured amino
    /// acid code.
    pub fn hgvs_notations(&self, list: &AnnotationList) -> Vec<String> {
        list.iter()
            .filter_map(|annotation| annotation.hgvs(self.config.amino_acid_code))
            .collect()
    }
}
