use log::{debug, info};
use std::path::Path;

use crate::{
    errors::KmerSuccessorError,
    kmer::{find_successors, is_deterministic},
    utils::read_sequence_lines,
};

/// Smallest k at which every k-mer of `sequence` has exactly one successor.
///
/// The search has no upper bound. It ends either at a deterministic k or with
/// `InvalidInput` once k exceeds the sequence length.
pub fn smallest_deterministic_k(sequence: &str) -> Result<usize, KmerSuccessorError> {
    let mut k = 1;
    loop {
        let successors = find_successors(sequence, k)?;
        if is_deterministic(&successors) {
            return Ok(k);
        }
        k += 1;
    }
}

/// Runs `smallest_deterministic_k` over every trimmed line of `path`.
///
/// Only the result for the last line is returned; an empty file yields 1.
pub fn find_smallest_k(path: &Path) -> Result<usize, KmerSuccessorError> {
    info!("Searching for the smallest deterministic k in {:?}", path);
    let lines = read_sequence_lines(path)?;

    let mut smallest_k = 1;
    for (line_idx, sequence) in lines.iter().enumerate() {
        smallest_k = smallest_deterministic_k(sequence)?;
        debug!("Sequence {}: smallest k is {}", line_idx + 1, smallest_k);
    }

    info!("Smallest k for {:?}: {}", path, smallest_k);
    Ok(smallest_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_sequences(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_smallest_deterministic_k() {
        assert_eq!(smallest_deterministic_k("ACGT").unwrap(), 1);
        assert_eq!(smallest_deterministic_k("AAAA").unwrap(), 1);
        assert_eq!(smallest_deterministic_k("ATGTCTGTCTGAA").unwrap(), 7);
        // A single character has no windows at k=1.
        assert_eq!(smallest_deterministic_k("A").unwrap(), 1);
    }

    #[test]
    fn test_smallest_deterministic_k_empty_sequence() {
        let err = smallest_deterministic_k("").unwrap_err();
        assert_eq!(err.to_string(), "Sequence length is shorter than k.");
    }

    #[test]
    fn test_find_smallest_k_single_line() {
        let file = write_sequences("ACGT\n");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 1);
    }

    #[test]
    fn test_find_smallest_k_last_line_wins() {
        let file = write_sequences("ATGTCTGTCTGAA\nACGT\n");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 1);

        let file = write_sequences("ACGT\nATGTCTGTCTGAA\n");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 7);
    }

    #[test]
    fn test_find_smallest_k_carriage_return_lines() {
        let file = write_sequences("ACGT\rATGTCTGTCTGAA\r");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 7);

        let file = write_sequences("ATGTCTGTCTGAA\rACGT\r");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 1);
    }

    #[test]
    fn test_find_smallest_k_empty_file() {
        let file = write_sequences("");
        assert_eq!(find_smallest_k(file.path()).unwrap(), 1);
    }

    #[test]
    fn test_find_smallest_k_blank_line() {
        let file = write_sequences("ACGT\n\nACGT\n");
        let err = find_smallest_k(file.path()).unwrap_err();
        assert!(matches!(
            err,
            KmerSuccessorError::InvalidInput { length: 0, k: 1 }
        ));
    }

    #[test]
    fn test_find_smallest_k_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = find_smallest_k(&temp_dir.path().join("nonexistent_file.txt")).unwrap_err();
        assert_eq!(err.to_string(), "File not found.");
    }
}
