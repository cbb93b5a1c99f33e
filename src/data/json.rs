//! In-memory transcript database loaded from (optionally gzip-compressed) JSON.

use std::{io::Read, path::Path, sync::Arc, time::Instant};

use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use rustc_hash::FxHashMap;

use super::{Error, TranscriptSource};
use crate::reference::{
    ReferenceDictionary, ReferenceDictionaryBuilder, TranscriptModel, TranscriptRecord,
};

/// Data structures for (de-)serialization as found in the JSON files.
pub mod models {
    use serde::{Deserialize, Serialize};

    use crate::reference::TranscriptRecord;

    /// One contig of the genome build.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct Contig {
        /// Numeric identifier.
        pub id: usize,
        /// Canonical name, e.g., `1`.
        pub name: String,
        pub length: i32,
        /// Further names, e.g., `chr1`.
        #[serde(default)]
        pub aliases: Vec<String>,
    }

    /// Top-level container.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
    pub struct Container {
        pub contigs: Vec<Contig>,
        pub transcripts: Vec<TranscriptRecord>,
    }
}

/// Type alias for interval trees; the payload is the index into `TranscriptDb::transcripts`.
type IntervalTree = ArrayBackedIntervalTree<i32, usize>;

/// Transcript models with an interval tree per contig.
pub struct TranscriptDb {
    ref_dict: Arc<ReferenceDictionary>,
    transcripts: Vec<Arc<TranscriptModel>>,
    /// Index into `transcripts` by accession.
    by_accession: FxHashMap<String, usize>,
    /// Interval tree for each contig id.
    interval_trees: FxHashMap<usize, IntervalTree>,
}

impl TranscriptDb {
    /// Validate `records` against `ref_dict` and index them.
    pub fn new(
        ref_dict: Arc<ReferenceDictionary>,
        records: Vec<TranscriptRecord>,
    ) -> Result<Self, Error> {
        let start = Instant::now();
        let mut transcripts = Vec::with_capacity(records.len());
        let mut by_accession = FxHashMap::default();
        for record in records {
            let tx = TranscriptModel::from_record(ref_dict.clone(), record)?;
            if by_accession
                .insert(tx.accession().to_string(), transcripts.len())
                .is_some()
            {
                return Err(Error::DuplicateTranscript(tx.accession().to_string()));
            }
            transcripts.push(Arc::new(tx));
        }

        let interval_trees = Self::build_interval_trees(&transcripts);
        log::debug!(
            "indexed {} transcripts on {} contigs in {:?}",
            transcripts.len(),
            interval_trees.len(),
            start.elapsed()
        );

        Ok(Self {
            ref_dict,
            transcripts,
            by_accession,
            interval_trees,
        })
    }

    /// Build the reference dictionary from the container's contigs, then index its transcripts.
    pub fn from_container(container: models::Container) -> Result<Self, Error> {
        let mut builder = ReferenceDictionaryBuilder::new();
        for contig in &container.contigs {
            builder = builder.put_contig(contig.id, &contig.name, contig.length);
            for alias in &contig.aliases {
                builder = builder.put_alias(alias, contig.id);
            }
        }
        Self::new(Arc::new(builder.build()), container.transcripts)
    }

    /// Read a JSON container from `reader`; `label` names the source in errors.
    pub fn from_reader<R: Read>(reader: R, label: &str) -> Result<Self, Error> {
        let container: models::Container =
            serde_json::from_reader(reader).map_err(|e| Error::Json(label.to_string(), e))?;
        log::debug!(
            "read {} contigs and {} transcripts from {}",
            container.contigs.len(),
            container.transcripts.len(),
            label
        );
        Self::from_container(container)
    }

    /// Load from a JSON file; files ending in `.gz` are decompressed on the fly.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let label = path.as_ref().display().to_string();
        log::debug!("Loading transcripts from {:?}", path.as_ref());
        let start = Instant::now();
        let reader = std::io::BufReader::new(
            std::fs::File::open(path.as_ref()).map_err(|e| Error::Io(label.clone(), e))?,
        );
        let result = if label.ends_with(".gz") {
            Self::from_reader(flate2::bufread::GzDecoder::new(reader), &label)?
        } else {
            Self::from_reader(reader, &label)?
        };
        log::debug!("loading {} took {:?}", label, start.elapsed());
        Ok(result)
    }

    pub fn transcripts(&self) -> &[Arc<TranscriptModel>] {
        &self.transcripts
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    fn build_interval_trees(transcripts: &[Arc<TranscriptModel>]) -> FxHashMap<usize, IntervalTree> {
        let mut result: FxHashMap<usize, IntervalTree> = FxHashMap::default();
        for (idx, tx) in transcripts.iter().enumerate() {
            let region = tx.tx_region();
            result
                .entry(tx.chr())
                .or_insert_with(IntervalTree::new)
                .insert(region.begin()..region.end(), idx);
        }
        for tree in result.values_mut() {
            tree.index();
        }
        result
    }
}

impl TranscriptSource for TranscriptDb {
    fn ref_dict(&self) -> &Arc<ReferenceDictionary> {
        &self.ref_dict
    }

    fn get_tx_for_region(&self, chr: usize, begin: i32, end: i32) -> Vec<Arc<TranscriptModel>> {
        let Some(tree) = self.interval_trees.get(&chr) else {
            return Vec::new();
        };
        // insertion points query their two flanking bases
        let query = if begin == end {
            (begin - 1)..(end + 1)
        } else {
            begin..end
        };
        let mut result: Vec<_> = tree
            .find(query)
            .iter()
            .filter_map(|entry| self.transcripts.get(*entry.data()).cloned())
            .collect();
        result.sort_by(|a, b| a.accession().cmp(b.accession()));
        result
    }

    fn get_tx(&self, accession: &str) -> Option<Arc<TranscriptModel>> {
        self.by_accession
            .get(accession)
            .and_then(|idx| self.transcripts.get(*idx))
            .cloned()
    }
}
