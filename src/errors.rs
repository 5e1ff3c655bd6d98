use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KmerSuccessorError {
    /// The sequence has fewer characters than the requested k-mer length.
    #[error("Sequence length is shorter than k.")]
    InvalidInput { length: usize, k: usize },

    /// Raised for any path that cannot be opened, not only missing ones.
    #[error("File not found.")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
