use log::{debug, info};
use std::path::Path;

use crate::{
    errors::KmerSuccessorError, index_types::SequenceKmerIndex, kmer::find_successors,
    utils::read_sequence_lines,
};

/// Builds a successor map for every line of `path`, keyed by 1-based line number.
///
/// Lines end at `\n`, `\r\n` or a lone `\r` and are trimmed before extraction. A line shorter than `k` aborts the scan
/// with `InvalidInput`.
pub fn scan_file(path: &Path, k: usize) -> Result<SequenceKmerIndex, KmerSuccessorError> {
    info!("Scanning sequences from {:?} with k={}", path, k);
    let lines = read_sequence_lines(path)?;

    let mut index = SequenceKmerIndex::new(k);
    for (line_idx, sequence) in lines.iter().enumerate() {
        let seq_num = line_idx + 1;
        let successors = find_successors(sequence, k)?;
        debug!("Sequence {}: {} distinct k-mers", seq_num, successors.len());
        index.add_sequence(seq_num, successors);
    }

    info!(
        "Finished scanning {:?}: {} sequences, {} k-mers",
        path,
        index.num_sequences(),
        index.total_kmers()
    );
    Ok(index)
}
