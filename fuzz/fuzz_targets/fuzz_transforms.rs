//! Fuzz target for format, summarize and grammar checks.
//!
//! Formatting must be idempotent; the others must simply not panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wordmaster::{check_grammar, format_text, summarize_text};

fuzz_target!(|data: &str| {
    let once = format_text(data);
    assert_eq!(format_text(&once), once);

    let _ = summarize_text(data);
    let _ = check_grammar(data);
});
