// numeric constants that describe a regulation line
pub const ALL_PINS: u8 = 10;
pub const FRAMES_PER_GAME: usize = 10;

use serde::Serialize;

/// One parsed frame of a player's line.
///
/// The parser guarantees the variant invariants by construction: a
/// `Spare`'s two rolls sum to exactly 10, an `Open`'s to at most 9.
/// An `Open`'s `second_roll` is `Some(0)` for a recorded miss and `None`
/// only when the input ended before the frame got its second roll —
/// the two are different results and must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Frame {
    Strike,
    Spare {
        first_roll: u8,
    },
    Open {
        first_roll: u8,
        second_roll: Option<u8>,
    },
}

impl Frame {
    /// Pin count of the frame's first roll.
    pub fn first_roll(&self) -> u8 {
        match self {
            Frame::Strike => ALL_PINS,
            Frame::Spare { first_roll } => *first_roll,
            Frame::Open { first_roll, .. } => *first_roll,
        }
    }

    /// Pin count of the frame's second roll, if the frame has one.
    /// A strike ends its frame on the first roll; a spare's second roll
    /// is whatever the first left standing.
    pub fn second_roll(&self) -> Option<u8> {
        match self {
            Frame::Strike => None,
            Frame::Spare { first_roll } => Some(ALL_PINS - first_roll),
            Frame::Open { second_roll, .. } => *second_roll,
        }
    }
}

/// Fully processed output for one line, handed to `writer`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLine {
    pub input: String,
    pub total: u32,
    pub frames: Vec<Frame>,
}
