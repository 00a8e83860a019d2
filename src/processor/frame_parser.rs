//! Parser that consumes the lexer and groups rolls into `Frame`s.
//!
//! State machine: at most one pending first roll at a time.
//!
//! ```text
//! strike      → emit Strike; a strike ends its frame with its
//!               first roll, so there is no pending state to clear
//! spare       → must follow a pending roll; emit Spare, clear pending
//! miss / pins → close a pending frame as Open, otherwise become the
//!               pending first roll — unless this is the last token
//!               of the input, which is emitted straight away as a
//!               one-roll Open frame. The last-token check comes
//!               first so a trailing roll is never silently dropped
//!               when the line ends mid-frame.
//! ```
//!
//! Bonus rolls after a strike or spare in the tenth frame fall out of
//! the same transitions as ordinary trailing frame records; the scorer
//! decides what counts.

use std::iter::Peekable;

use super::ParseError;
use super::lexer::{Lexer, Token};
use crate::model::Frame;

/// Parse an encoded line into its ordered frame sequence.
///
/// Fails on the first malformed token; nothing parsed up to that point
/// is returned.
pub fn parse(encoding: &str) -> Result<Vec<Frame>, ParseError> {
    Parser::new(encoding).parse()
}

struct Parser<'a> {
    lex: Peekable<Lexer<'a>>,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lex: Lexer::new(src).peekable(),
            offset: 0,
        }
    }

    fn parse(&mut self) -> Result<Vec<Frame>, ParseError> {
        let mut frames = Vec::new();
        let mut pending: Option<u8> = None;

        while let Some(tok_res) = self.lex.next() {
            let offset = self.offset;
            self.offset += 1;

            match tok_res? {
                Token::Strike => frames.push(Frame::Strike),

                Token::Spare => match pending.take() {
                    Some(first_roll) => frames.push(Frame::Spare { first_roll }),
                    None => return Err(ParseError::DanglingSpare { offset }),
                },

                Token::Miss => match pending.take() {
                    Some(first_roll) => frames.push(Frame::Open {
                        first_roll,
                        second_roll: Some(0),
                    }),
                    None if self.at_end() => frames.push(Frame::Open {
                        first_roll: 0,
                        second_roll: None,
                    }),
                    None => pending = Some(0),
                },

                Token::Pins(count) => match pending.take() {
                    Some(first_roll) => frames.push(Frame::Open {
                        first_roll,
                        second_roll: Some(count),
                    }),
                    None if self.at_end() => frames.push(Frame::Open {
                        first_roll: count,
                        second_roll: None,
                    }),
                    None => pending = Some(count),
                },
            }
        }

        Ok(frames)
    }

    fn at_end(&mut self) -> bool {
        self.lex.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_grouping() {
        let test_cases = vec![
            ("", vec![]),
            ("X", vec![Frame::Strike]),
            (
                "73",
                vec![Frame::Open {
                    first_roll: 7,
                    second_roll: Some(3),
                }],
            ),
            // recorded miss, not a spare and not an unfinished frame
            (
                "7-",
                vec![Frame::Open {
                    first_roll: 7,
                    second_roll: Some(0),
                }],
            ),
            ("7/", vec![Frame::Spare { first_roll: 7 }]),
            ("-/", vec![Frame::Spare { first_roll: 0 }]),
            (
                "--",
                vec![Frame::Open {
                    first_roll: 0,
                    second_roll: Some(0),
                }],
            ),
            // input ends mid-frame: the trailing roll still comes out
            (
                "8",
                vec![Frame::Open {
                    first_roll: 8,
                    second_roll: None,
                }],
            ),
            (
                "X8",
                vec![
                    Frame::Strike,
                    Frame::Open {
                        first_roll: 8,
                        second_roll: None,
                    },
                ],
            ),
            (
                "-",
                vec![Frame::Open {
                    first_roll: 0,
                    second_roll: None,
                }],
            ),
        ];

        for (encoding, expected) in test_cases {
            assert_eq!(parse(encoding), Ok(expected), "frames for `{encoding}`");
        }
    }

    #[test]
    fn test_mixed_line() {
        let frames = parse("X7/9-X-88/-6XXX81").unwrap();

        assert_eq!(
            frames,
            vec![
                Frame::Strike,
                Frame::Spare { first_roll: 7 },
                Frame::Open {
                    first_roll: 9,
                    second_roll: Some(0),
                },
                Frame::Strike,
                Frame::Open {
                    first_roll: 0,
                    second_roll: Some(8),
                },
                Frame::Spare { first_roll: 8 },
                Frame::Open {
                    first_roll: 0,
                    second_roll: Some(6),
                },
                Frame::Strike,
                Frame::Strike,
                Frame::Strike,
                Frame::Open {
                    first_roll: 8,
                    second_roll: Some(1),
                },
            ]
        );
    }

    #[test]
    fn test_spare_must_follow_a_roll() {
        let test_cases = vec![
            ("/", ParseError::DanglingSpare { offset: 0 }),
            ("X/", ParseError::DanglingSpare { offset: 1 }),
            ("5//", ParseError::DanglingSpare { offset: 2 }),
        ];

        for (encoding, expected) in test_cases {
            assert_eq!(parse(encoding), Err(expected), "error for `{encoding}`");
        }
    }
}
