//! Human-readable report: one block per scored line with the per-frame
//! breakdown next to each frame's contribution.

use std::io::{self, Write};

use crate::model::{ALL_PINS, Frame, ScoredLine};
use crate::processor::scorer;

pub fn emit(lines: &[ScoredLine], out: &mut impl Write) -> io::Result<()> {
    for line in lines {
        if line.input.is_empty() {
            writeln!(out, "(empty line)  total 0")?;
            continue;
        }

        writeln!(
            out,
            "{}  ({} frames)  total {}",
            line.input,
            line.frames.len(),
            line.total
        )?;

        for (index, frame) in line.frames.iter().enumerate() {
            writeln!(
                out,
                "  {:>2}. {:<20} +{}",
                index + 1,
                describe(frame),
                scorer::score_frame(&line.frames, index)
            )?;
        }
    }

    Ok(())
}

fn describe(frame: &Frame) -> String {
    match frame {
        Frame::Strike => "strike".to_string(),
        Frame::Spare { first_roll } => {
            format!("spare ({first_roll} then {})", ALL_PINS - first_roll)
        }
        Frame::Open {
            first_roll,
            second_roll: Some(second),
        } => format!("open ({first_roll} and {second})"),
        Frame::Open {
            first_roll,
            second_roll: None,
        } => format!("open ({first_roll}, unfinished)"),
    }
}
