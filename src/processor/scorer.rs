//! Scores a parsed frame sequence.
//!
//! Lookahead goes by index into the materialized sequence; a lookup past
//! the end answers 0 at any depth, so an in-progress line scores without
//! special cases. Only the first ten frames contribute to the total:
//! records after them hold the tenth frame's bonus rolls and count
//! solely as lookahead targets (a perfect game parses to twelve Strike
//! frames, the last two of which only feed the tenth frame's bonus).

use crate::model::{ALL_PINS, FRAMES_PER_GAME, Frame};

/// Total score of the line. In [0, 300] for any valid line.
pub fn score(frames: &[Frame]) -> u32 {
    (0..frames.len())
        .map(|index| score_frame(frames, index))
        .sum()
}

/// Contribution of the frame at `index` to the line's total.
///
/// 0 for any index past the end of the sequence, and for any frame at
/// ordinal position ten or later — those pins already reached the total
/// through an earlier frame's lookahead.
pub fn score_frame(frames: &[Frame], index: usize) -> u32 {
    if index >= FRAMES_PER_GAME {
        return 0;
    }
    let frame = match frames.get(index) {
        Some(frame) => *frame,
        None => return 0,
    };

    match frame {
        Frame::Strike => u32::from(ALL_PINS) + strike_bonus(frames, index),
        Frame::Spare { .. } => u32::from(ALL_PINS) + first_roll_at(frames, index + 1),
        Frame::Open {
            first_roll,
            second_roll,
        } => u32::from(first_roll) + u32::from(second_roll.unwrap_or(0)),
    }
}

/// The two rolls after a strike: the next frame's first roll, then its
/// second roll if it has one, else the frame after that's first roll
/// (back-to-back strikes).
fn strike_bonus(frames: &[Frame], index: usize) -> u32 {
    let second = match frames.get(index + 1).and_then(Frame::second_roll) {
        Some(roll) => u32::from(roll),
        None => first_roll_at(frames, index + 2),
    };

    first_roll_at(frames, index + 1) + second
}

/// First roll of the frame at `index`, or 0 past the end of the line.
fn first_roll_at(frames: &[Frame], index: usize) -> u32 {
    frames.get(index).map_or(0, |f| u32::from(f.first_roll()))
}
