// K-mer successor extraction

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::KmerSuccessorError;

/// Maps each observed k-mer to the distinct k-mers that start one position after it.
/// Ordered so reports and exports are identical across runs.
pub type SuccessorMap = BTreeMap<String, BTreeSet<String>>;

/// Byte offsets of every character boundary in `sequence`, including the end.
/// Windows are measured in characters so any alphabet slices cleanly.
fn char_boundaries(sequence: &str) -> Vec<usize> {
    sequence
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(sequence.len()))
        .collect()
}

/// Builds the successor map of every k-length window in `sequence`.
///
/// Windows start at positions `0..len - k`, so the final k-mer of the sequence
/// is only a key if it also occurs earlier. `len == k` yields an empty map.
/// Returns `InvalidInput` when the sequence is shorter than `k`.
pub fn find_successors(sequence: &str, k: usize) -> Result<SuccessorMap, KmerSuccessorError> {
    let bounds = char_boundaries(sequence);
    let length = bounds.len() - 1;
    if length < k {
        return Err(KmerSuccessorError::InvalidInput { length, k });
    }

    let mut successors = SuccessorMap::new();
    for i in 0..length - k {
        let kmer = &sequence[bounds[i]..bounds[i + k]];
        let next_kmers = successors.entry(kmer.to_string()).or_default();
        // Only record a successor that is a full k characters long.
        if let Some(&next_end) = bounds.get(i + 1 + k) {
            next_kmers.insert(sequence[bounds[i + 1]..next_end].to_string());
        }
    }
    Ok(successors)
}

/// True when every k-mer has exactly one distinct successor.
/// An empty map counts as deterministic.
pub fn is_deterministic(successors: &SuccessorMap) -> bool {
    successors.values().all(|next_kmers| next_kmers.len() == 1)
}
