pub mod cli;
pub mod model;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Collect input ──────────────────────────────────────────────
    let mut encodings = args.lines;
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        encodings.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    // 2. ── Score ──────────────────────────────────────────────────────
    let mut scored = Vec::with_capacity(encodings.len());
    for encoding in &encodings {
        let line = processor::run(encoding)
            .with_context(|| format!("Scoring line `{encoding}`"))?;
        scored.push(line);
    }

    // 3. ── Write report ───────────────────────────────────────────────
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writer::json::emit(&scored, &mut out).with_context(|| "Writing JSON report")?;
    } else {
        writer::text::emit(&scored, &mut out).with_context(|| "Writing text report")?;
    }

    Ok(())
}
