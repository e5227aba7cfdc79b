//! Fuzz target for the statistics engine.
//!
//! Tests that compute_stats handles arbitrary strings without panicking and
//! that its counts stay consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordmaster::compute_stats;

fuzz_target!(|data: &str| {
    let stats = compute_stats(data);
    assert!(stats.readability_score <= 100);
    assert!(stats.chars_without_spaces <= stats.chars_with_spaces);
    assert!(stats.long_sentence_count <= stats.sentence_count);
    assert_eq!(stats, compute_stats(data));
});
