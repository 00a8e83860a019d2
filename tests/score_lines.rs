use std::fs;

use serde::Deserialize;
use tenpin_rust::processor;

#[derive(Deserialize)]
struct Case {
    line: String,
    total: u32,
    frames: usize,
}

#[test]
fn scores_recorded_lines() {
    let json = fs::read_to_string("tests/lines.json").unwrap();
    let cases: Vec<Case> = serde_json::from_str(&json).expect("valid fixture");

    for case in cases {
        let scored = processor::run(&case.line).expect("line parses");
        assert_eq!(scored.total, case.total, "total for `{}`", case.line);
        assert_eq!(
            scored.frames.len(),
            case.frames,
            "frame count for `{}`",
            case.line
        );
    }
}

#[test]
fn parse_failure_is_not_a_zero_score() {
    // an empty line is a valid 0; a bad token is an Err, never Ok(0)
    assert_eq!(processor::run("").unwrap().total, 0);
    assert!(processor::run("/").is_err());
    assert!(processor::run("abc").is_err());
}
