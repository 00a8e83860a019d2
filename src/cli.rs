use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Roll-by-roll line encodings, e.g. `X7/9-X-88/-6XXX81`
    pub lines: Vec<String>,

    /// File with one encoded line per row (blank rows skipped)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
