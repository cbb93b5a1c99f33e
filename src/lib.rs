//! Functional annotation of genomic variants with respect to reference transcripts.
//!
//! Variants are described by [`reference::VariantDescription`], transcripts by
//! [`reference::TranscriptModel`] (usually served from a [`data::TranscriptDb`]), and the
//! [`engine::Annotator`] computes an [`annotation::AnnotationList`] with sequence ontology
//! effects and HGVS descriptions for each transcript.

pub mod annotation;
pub mod config;
pub mod data;
pub mod engine;
pub mod hgvs;
pub mod reference;
pub mod sequences;
