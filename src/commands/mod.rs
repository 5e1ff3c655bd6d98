pub mod file;
pub mod scan;
pub mod sequence;
pub mod smallest_k;

use crate::{
    cli::{Cli, InputSource},
    index_types::SequenceKmerIndex,
    utils::{get_output_writer, log_level_from_verbosity},
};
use anyhow::{Context, Result};
use log::info;
use std::{
    io::{self, Write},
    path::Path,
};

pub const MISSING_INPUT_PROMPT: &str =
    "Please provide either a DNA sequence (-s) or a filename (-f).";

pub fn dispatch_command(cli: Cli) -> Result<()> {
    // Setup logging based on verbosity
    env_logger::Builder::new()
        .filter_level(log_level_from_verbosity(cli.verbose))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let output_json = cli.output_json.as_deref();

    match cli.input_source() {
        Some(InputSource::Sequence(sequence)) => {
            sequence::run_sequence(sequence, cli.k, output_json, &mut out)
        }
        Some(InputSource::File(path)) => file::run_file(path, cli.k, output_json, &mut out),
        None => {
            writeln!(out, "{}", MISSING_INPUT_PROMPT)?;
            Ok(())
        }
    }
}

/// Serializes `index` as pretty JSON, compressed according to the extension of `path`.
pub fn write_index_json(path: &Path, index: &SequenceKmerIndex) -> Result<()> {
    let mut writer = get_output_writer(path)
        .with_context(|| format!("Failed to create output JSON file: {:?}", path))?;
    serde_json::to_writer_pretty(&mut writer, index)
        .with_context(|| format!("Failed to write successor index JSON to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output JSON file: {:?}", path))?;

    info!(
        "Wrote {} sequences ({} k-mers) to {:?}",
        index.num_sequences(),
        index.total_kmers(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::find_successors;
    use serde_json::Value as JsonValue;
    use tempfile::TempDir;

    #[test]
    fn test_write_index_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.json");

        let mut index = SequenceKmerIndex::new(2);
        index.add_sequence(1, find_successors("ACGTA", 2).unwrap());
        write_index_json(&path, &index).unwrap();

        let json: JsonValue =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["k"], 2);
        assert_eq!(json["sequences"]["1"]["AC"], serde_json::json!(["CG"]));
        assert_eq!(json["sequences"]["1"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_write_index_json_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.json");
        let second = temp_dir.path().join("second.json");

        let build = || {
            let mut index = SequenceKmerIndex::new(1);
            index.add_sequence(1, find_successors("TGATGCTGGTGA", 1).unwrap());
            index
        };
        write_index_json(&first, &build()).unwrap();
        write_index_json(&second, &build()).unwrap();

        let first_bytes = std::fs::read(&first).unwrap();
        assert_eq!(first_bytes, std::fs::read(&second).unwrap());

        let json: JsonValue = serde_json::from_slice(&first_bytes).unwrap();
        let kmers: Vec<&String> = json["sequences"]["1"].as_object().unwrap().keys().collect();
        assert_eq!(kmers, vec!["A", "C", "G", "T"]);
        assert_eq!(json["sequences"]["1"]["G"], serde_json::json!(["A", "C", "G", "T"]));
    }
}
