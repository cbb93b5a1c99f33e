//! Error type definition.

use thiserror::Error;

/// Error type for reference data and variant descriptions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown contig name: {0}")]
    UnknownContigName(String),
    #[error("unknown contig id: {0}")]
    UnknownContigId(usize),
    #[error("position {1} is out of range for contig {0} of length {2}")]
    PositionOutOfRange(String, i32, i32),
    #[error("malformed allele string: {0:?}")]
    MalformedAllele(String),
    #[error("symbolic allele {0:?} is not allowed for simple variants")]
    UnexpectedSymbolicAllele(String),
    #[error("if alternative allele {1:?} is symbolic, reference must be \"N\" but is {0:?}")]
    SymbolicAltRequiresN(String, String),
    #[error("breakpoint {0} must be on the forward strand")]
    NotForwardStrand(String),
    #[error("breakpoints of linear structural variant must be on the same contig: {0} vs. {1}")]
    BreakpointsOnDifferentContigs(String, String),
    #[error("cannot change strand of {0} (yet)")]
    UnsupportedStrandChange(String),
    #[error("invalid transcript record {0}: {1}")]
    InvalidTranscript(String, String),
}
