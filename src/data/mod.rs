//! Loading and lookup of transcript models.

mod error;
pub mod interface;
pub mod json;

pub use crate::data::error::Error;
pub use crate::data::interface::TranscriptSource;
pub use crate::data::json::TranscriptDb;
