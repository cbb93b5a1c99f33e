//! Mapping between contig identifiers, canonical names, and lengths.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Error;

/// Immutable information about the contigs of a genome build.
///
/// A dictionary is built once through [`ReferenceDictionaryBuilder`] and then shared read-only
/// (usually behind an `Arc`) by all coordinate objects.  Positions from different dictionary
/// instances must never be compared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferenceDictionary {
    /// Contig name or alias to numeric id.
    contig_name_to_id: FxHashMap<String, usize>,
    /// Numeric id to canonical contig name, in insertion order.
    contig_id_to_name: IndexMap<usize, String>,
    /// Numeric id to contig length.
    contig_id_to_length: IndexMap<usize, i32>,
}

impl ReferenceDictionary {
    /// Numeric id of the contig with the given name or alias.
    pub fn contig_id(&self, name: &str) -> Result<usize, Error> {
        self.contig_name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownContigName(name.to_string()))
    }

    /// Canonical name of the contig with the given id.
    pub fn contig_name(&self, id: usize) -> Result<&str, Error> {
        self.contig_id_to_name
            .get(&id)
            .map(String::as_str)
            .ok_or(Error::UnknownContigId(id))
    }

    /// Length of the contig with the given id.
    pub fn contig_length(&self, id: usize) -> Result<i32, Error> {
        self.contig_id_to_length
            .get(&id)
            .copied()
            .ok_or(Error::UnknownContigId(id))
    }

    /// Iterate over `(id, canonical name)` in insertion order.
    pub fn contigs(&self) -> impl Iterator<Item = (usize, &str)> {
        self.contig_id_to_name
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.contig_id_to_name.is_empty()
    }
}

/// Builder for [`ReferenceDictionary`].
#[derive(Debug, Default)]
pub struct ReferenceDictionaryBuilder {
    inner: ReferenceDictionary,
}

impl ReferenceDictionaryBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Register a contig with its canonical name and length.
    ///
    /// The canonical name is also registered as an alias of itself.
    pub fn put_contig(mut self, id: usize, name: &str, length: i32) -> Self {
        self.inner.contig_name_to_id.insert(name.to_string(), id);
        self.inner.contig_id_to_name.insert(id, name.to_string());
        self.inner.contig_id_to_length.insert(id, length);
        self
    }

    /// Register an alias (e.g., `"chr1"` for `"1"`) for an existing contig id.
    pub fn put_alias(mut self, alias: &str, id: usize) -> Self {
        self.inner.contig_name_to_id.insert(alias.to_string(), id);
        self
    }

    pub fn build(self) -> ReferenceDictionary {
        self.inner
    }
}
