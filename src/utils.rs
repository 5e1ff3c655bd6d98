use flate2::{Compression as GzCompression, read::MultiGzDecoder, write::GzEncoder};
use log::{debug, info};
use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};
use xz2::{read::XzDecoder, write::XzEncoder};
use zstd::{stream::read::Decoder as ZstdDecoder, stream::write::Encoder as ZstdEncoder};

use crate::{errors::KmerSuccessorError, kmer::SuccessorMap};

/// Maps a `-v` count to the log level used by the CLI.
pub fn log_level_from_verbosity(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// Helper function to get file extension as lowercase string
fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Opens a sequence file for reading, handling decompression based on file extension.
/// Supported extensions: .gz, .xz, .zst.
///
/// Any failure to open the path is reported as `FileNotFound`.
pub fn get_input_reader(path: &Path) -> Result<Box<dyn BufRead>, KmerSuccessorError> {
    let file = File::open(path).map_err(|e| {
        debug!("Failed to open input file {:?}: {}", path, e);
        KmerSuccessorError::FileNotFound(path.to_path_buf())
    })?;
    let extension = get_extension(path);

    match extension.as_deref() {
        Some("gz") => {
            info!("Reading GZipped file: {:?}", path);
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
        }
        Some("xz") => {
            info!("Reading XZ compressed file: {:?}", path);
            Ok(Box::new(BufReader::new(XzDecoder::new(file))))
        }
        Some("zst") | Some("zstd") => {
            info!("Reading Zstandard compressed file: {:?}", path);
            let decoder = ZstdDecoder::new(file)?;
            Ok(Box::new(BufReader::new(decoder)))
        }
        _ => {
            debug!("Reading uncompressed file: {:?}", path);
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Splits `text` into lines ending in `\n`, `\r\n` or a lone `\r`.
/// Terminators are dropped and a trailing terminator does not add an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator_len..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Reads every line of a sequence file, trimmed of surrounding whitespace.
pub fn read_sequence_lines(path: &Path) -> Result<Vec<String>, KmerSuccessorError> {
    let mut text = String::new();
    get_input_reader(path)?.read_to_string(&mut text)?;
    Ok(split_lines(&text)
        .into_iter()
        .map(|line| line.trim().to_string())
        .collect())
}

/// Opens a file for writing, handling compression based on file extension.
/// Supported extensions: .gz, .xz, .zst.
pub fn get_output_writer(path: &Path) -> Result<Box<dyn Write>, KmerSuccessorError> {
    let file = File::create(path)?;
    let extension = get_extension(path);

    match extension.as_deref() {
        Some("gz") => {
            info!("Writing GZipped file: {:?}", path);
            let encoder = GzEncoder::new(file, GzCompression::default());
            Ok(Box::new(BufWriter::new(encoder)))
        }
        Some("xz") => {
            info!("Writing XZ compressed file: {:?}", path);
            let encoder = XzEncoder::new(file, 6);
            Ok(Box::new(BufWriter::new(encoder)))
        }
        Some("zst") | Some("zstd") => {
            info!("Writing Zstandard compressed file: {:?}", path);
            // auto_finish writes the frame epilogue on drop.
            let encoder = ZstdEncoder::new(file, 0)?.auto_finish();
            Ok(Box::new(BufWriter::new(encoder)))
        }
        _ => {
            debug!("Writing uncompressed file: {:?}", path);
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Renders a successor set as `{A, B}`, `{}` when empty.
pub fn format_successor_set(next_kmers: &BTreeSet<String>) -> String {
    let members: Vec<&str> = next_kmers.iter().map(String::as_str).collect();
    format!("{{{}}}", members.join(", "))
}

/// Writes one `{kmer}: {successors}` line per k-mer, sorted by k-mer.
/// `indent` is prepended to every line.
pub fn write_successor_map<W: Write>(
    writer: &mut W,
    successors: &SuccessorMap,
    indent: &str,
) -> io::Result<()> {
    for (kmer, next_kmers) in successors {
        writeln!(writer, "{}{}: {}", indent, kmer, format_successor_set(next_kmers))?;
    }
    Ok(())
}
