use anyhow::Result;
use log::info;
use std::{io::Write, path::Path};

use crate::{
    index_types::SequenceKmerIndex, kmer::find_successors, utils::write_successor_map,
};

use super::write_index_json;

/// Prints the successor map of a single sequence given on the command line.
pub fn run_sequence<W: Write>(
    sequence: &str,
    k: usize,
    output_json: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    info!("Extracting {}-mers from a sequence of length {}", k, sequence.chars().count());

    let successors = find_successors(sequence, k)?;
    write_successor_map(out, &successors, "")?;

    if let Some(json_path) = output_json {
        let mut index = SequenceKmerIndex::new(k);
        index.add_sequence(1, successors);
        write_index_json(json_path, &index)?;
    }
    Ok(())
}
