use anyhow::Result;
use log::info;
use std::{io::Write, path::Path};

use crate::utils::write_successor_map;

use super::{scan::scan_file, smallest_k::find_smallest_k, write_index_json};

/// Prints a successor block per sequence in `path`, followed by the smallest k.
///
/// The whole file is scanned before anything is printed, so a line rejected by
/// `scan_file` leaves no partial report behind. The smallest-k search runs
/// afterwards and can still fail once the blocks are on `out`.
pub fn run_file<W: Write>(
    path: &Path,
    k: usize,
    output_json: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    info!("Processing sequence file {:?} with k={}", path, k);

    let index = scan_file(path, k)?;
    for (seq_num, successors) in index.iter() {
        writeln!(out, "Sequence {}:", seq_num)?;
        write_successor_map(out, successors, "  ")?;
    }

    let smallest_k = find_smallest_k(path)?;
    writeln!(out, "The smallest value of k is: {}", smallest_k)?;

    if let Some(json_path) = output_json {
        write_index_json(json_path, &index)?;
    }
    Ok(())
}
