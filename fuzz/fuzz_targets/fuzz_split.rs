//! Fuzz target for text segmentation.
//!
//! Every mode and unit must accept arbitrary text without panicking and
//! reproduce it exactly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use theatre_text::node::to_text;
use theatre_text::{SplitMode, SplitOptions, SplitUnit, split};

fuzz_target!(|data: &str| {
    for mode in [
        SplitMode::Ungrouped,
        SplitMode::Latin,
        SplitMode::Kinsoku,
        SplitMode::Korean,
    ] {
        for unit in [SplitUnit::Char, SplitUnit::Grapheme] {
            let nodes = split(data, &SplitOptions::new(mode).with_unit(unit));
            assert_eq!(to_text(&nodes), data);
        }
    }
});
