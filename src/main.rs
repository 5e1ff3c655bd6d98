use anyhow::Result;
use kmer_successor::{cli, commands};
use log::error;

fn main() -> Result<()> {
    let cli = cli::parse_cli();

    if let Err(e) = commands::dispatch_command(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
