//! Functional annotation of variants with respect to transcripts.

pub mod builders;
pub mod effect;
mod error;
mod list;

pub use crate::annotation::effect::{PutativeImpact, VariantEffect};
pub use crate::annotation::error::Error;
pub use crate::annotation::list::{
    Annotation, AnnotationList, AnnotationLocation, RankType, TxRegion,
};
