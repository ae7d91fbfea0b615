//! Fuzz target for the key decoder.
//!
//! Arbitrary bytes must never panic the parser, and every successful parse
//! must consume at least one byte and no more than it was given.

#![no_main]

use hayai::input::{InputParser, ParseError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parser = InputParser::new();
    let mut remaining = data;

    while !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((_key, consumed)) => {
                assert!(consumed > 0 && consumed <= remaining.len());
                remaining = &remaining[consumed..];
            }
            Err(ParseError::UnrecognizedSequence(seq)) => {
                assert!(!seq.is_empty() && seq.len() <= remaining.len());
                remaining = &remaining[seq.len()..];
            }
            Err(ParseError::InvalidUtf8) => remaining = &remaining[1..],
            Err(ParseError::Empty | ParseError::Incomplete) => break,
        }
    }
});
