use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, long_about = None)]
#[clap(about = "Identify k-mers and their subsequent k-mers from DNA sequences")]
pub struct Cli {
    #[clap(short, long, help = "DNA sequence")]
    pub sequence: Option<String>,

    #[clap(
        short,
        long,
        help = "Path to the file containing DNA sequences, one per line. Supports .gz, .xz, .zst compression."
    )]
    pub filename: Option<String>,

    #[clap(short = 'k', default_value_t = 2, help = "Length of the k-mers")]
    pub k: usize,

    #[clap(
        long,
        help = "Optional: Output file path for the successor index in JSON format. Supports .gz, .xz, .zst compression based on extension."
    )]
    pub output_json: Option<PathBuf>,

    #[clap(short, long, action = clap::ArgAction::Count, help = "Verbosity level (e.g., -v, -vv)")]
    pub verbose: u8,
}

/// What the CLI was asked to process.
#[derive(Debug, PartialEq)]
pub enum InputSource<'a> {
    Sequence(&'a str),
    File(&'a Path),
}

impl Cli {
    /// Resolves the input to process. Empty values count as absent and a
    /// sequence takes precedence over a filename.
    pub fn input_source(&self) -> Option<InputSource<'_>> {
        if let Some(sequence) = self.sequence.as_deref().filter(|s| !s.is_empty()) {
            return Some(InputSource::Sequence(sequence));
        }
        self.filename
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(|f| InputSource::File(Path::new(f)))
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
