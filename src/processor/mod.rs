//! The functional core: lex the encoding, group rolls into frames,
//! resolve the bonus lookahead.
//!
//! Everything here is a pure computation over the input string; the
//! shell around it (CLI, writers) does all the I/O.

pub mod frame_parser;
pub mod lexer;
pub mod scorer;

use crate::model::ScoredLine;
use thiserror::Error;

/// Malformed-input failures. Offsets are character positions into the
/// encoding; every roll token is exactly one character, so they double
/// as roll indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized token `{token}` at offset {offset}")]
    UnrecognizedToken { token: char, offset: usize },

    #[error("spare marker at offset {offset} has no first roll to complete")]
    DanglingSpare { offset: usize },
}

/// Runs the full pipeline for one encoded line.
///
/// Fails fast on the first malformed token and returns no partial frame
/// sequence, so a failure is never mistaken for a legitimately scored
/// zero (the empty encoding is valid and scores 0 over 0 frames).
pub fn run(encoding: &str) -> Result<ScoredLine, ParseError> {
    let frames = frame_parser::parse(encoding)?;
    let total = scorer::score(&frames);

    Ok(ScoredLine {
        input: encoding.to_string(),
        total,
        frames,
    })
}
