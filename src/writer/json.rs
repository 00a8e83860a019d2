//! Machine-readable report: the scored lines as a JSON array, frame
//! variants tagged by kind.

use std::io::{self, Write};

use crate::model::ScoredLine;

pub fn emit(lines: &[ScoredLine], out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, lines).map_err(io::Error::from)?;
    writeln!(out)
}
