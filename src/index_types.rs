use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::kmer::SuccessorMap;

/// Successor maps for every sequence of a line-delimited file.
///
/// Sequences are keyed by their 1-based line number, so iteration follows file order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SequenceKmerIndex {
    /// The k-mer length every map in this index was built with.
    pub k: usize,
    pub sequences: BTreeMap<usize, SuccessorMap>,
}

impl SequenceKmerIndex {
    pub fn new(k: usize) -> Self {
        SequenceKmerIndex {
            k,
            sequences: BTreeMap::new(),
        }
    }

    /// Records the successor map for line `seq_num`.
    /// An existing entry for the same line is overwritten.
    pub fn add_sequence(&mut self, seq_num: usize, successors: SuccessorMap) {
        self.sequences.insert(seq_num, successors);
    }

    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Total number of k-mer keys, summed over all sequences (not deduplicated).
    pub fn total_kmers(&self) -> usize {
        self.sequences.values().map(|successors| successors.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &SuccessorMap)> {
        self.sequences.iter()
    }
}
