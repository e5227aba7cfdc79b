//! Whole-text rewrites: formatting and summarizing.
//!
//! Both return a new `String`. Callers recompute stats on the result.

use super::tokenize::{is_space, is_terminator, split_sentences};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log};

/// Texts with this many sentences or fewer are not summarized.
pub const SUMMARY_MIN_SENTENCES: usize = 3;

/// Normalize whitespace and sentence capitalization.
///
/// - Runs of whitespace become one space; both ends are trimmed.
/// - A run of terminators (`.`, `!`, `?`) is followed by exactly one space,
///   unless it ends the text. `"a.b"` becomes `"A. B"`.
/// - The first character of the text and the first character after each
///   terminator run is upper-cased when it is a lowercase letter.
///
/// Formatting is idempotent.
#[must_use]
pub fn format_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut after_terminator = false;
    let mut capitalize_next = true;

    for c in text.chars() {
        if is_space(c) {
            pending_space = !out.is_empty();
            continue;
        }

        if is_terminator(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
            after_terminator = true;
            capitalize_next = false;
            continue;
        }

        if after_terminator {
            out.push(' ');
            after_terminator = false;
            capitalize_next = true;
        } else if pending_space {
            out.push(' ');
        }
        pending_space = false;

        if capitalize_next {
            push_capitalized(&mut out, c);
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }

    emit_log(
        LogLevel::Debug,
        &format!("formatted text: {} -> {} bytes", text.len(), out.len()),
    );
    emit_event(
        "text.formatted",
        &serde_json::json!({ "bytes": out.len() }).to_string(),
    );

    out
}

/// Upper-case `c` when it is lowercase and its mapping starts with a
/// non-lowercase character. The second condition keeps formatting stable
/// for the few lowercase letters with no distinct uppercase form.
fn push_capitalized(out: &mut String, c: char) {
    if c.is_lowercase() {
        let upper = c.to_uppercase();
        if upper.clone().next().is_some_and(|u| !u.is_lowercase()) {
            out.extend(upper);
            return;
        }
    }
    out.push(c);
}

/// Keep only the first and last sentence.
///
/// Produces `"{first}. {last}."` from the trimmed sentences, so
/// `"First. Second. Third. Fourth."` gives `"First. Fourth."` with a single
/// space even when the source sentences carried extra whitespace. Text with
/// [`SUMMARY_MIN_SENTENCES`] sentences or fewer is returned as
/// [`Error::AlreadyShort`], which is a status rather than a failure.
pub fn summarize_text(text: &str) -> Result<String> {
    let sentences = split_sentences(text);
    let count = sentences.len();

    if count <= SUMMARY_MIN_SENTENCES {
        emit_log(
            LogLevel::Info,
            &format!("text is already short ({count} sentences)"),
        );
        return Err(Error::AlreadyShort { sentences: count });
    }

    let (first, last) = (sentences[0], sentences[count - 1]);
    let summary = format!("{first}. {last}.");
    emit_log(
        LogLevel::Debug,
        &format!("summarized {count} sentences to 2"),
    );
    emit_event(
        "text.summarized",
        &serde_json::json!({ "sentences": count }).to_string(),
    );
    Ok(summary)
}
