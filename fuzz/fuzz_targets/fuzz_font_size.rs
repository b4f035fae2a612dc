//! Fuzz target for font size parsing.
//!
//! Tests that parse_font_size accepts arbitrary strings and always yields a
//! finite, non-negative size.

#![no_main]

use libfuzzer_sys::fuzz_target;
use theatre_text::parse_font_size;

fuzz_target!(|data: &str| {
    let size = parse_font_size(data);
    assert!(size.is_finite());
    assert!(size >= 0.0);
});
