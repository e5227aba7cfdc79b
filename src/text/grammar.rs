//! Pattern-based style hints.
//!
//! These are substring checks, not grammar analysis.

use std::fmt;

use crate::event::{LogLevel, emit_event, emit_log};

/// Lowercase substrings that hint at passive voice.
pub const PASSIVE_MARKERS: [&str; 7] = [
    " is ", " are ", " was ", " were ", " be ", " been ", " being ",
];

/// A style issue found by [`check_grammar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrammarIssue {
    /// Two consecutive spaces.
    DoubleSpace,
    /// Three consecutive exclamation marks.
    RepeatedExclamation,
    /// A passive-voice marker, such as `" was "`.
    PassiveVoice(&'static str),
}

impl GrammarIssue {
    /// User-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DoubleSpace => "Remove double spaces",
            Self::RepeatedExclamation => "Avoid multiple exclamation marks",
            Self::PassiveVoice(_) => "Consider using active voice",
        }
    }
}

impl fmt::Display for GrammarIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scan for style issues.
///
/// Issues come out in a fixed order: double space, repeated exclamation,
/// then one passive-voice issue per matching marker in
/// [`PASSIVE_MARKERS`] order. Several markers give several issues with the
/// same label.
#[must_use]
pub fn check_grammar(text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    if text.contains("  ") {
        issues.push(GrammarIssue::DoubleSpace);
    }
    if text.contains("!!!") {
        issues.push(GrammarIssue::RepeatedExclamation);
    }

    let lower = text.to_lowercase();
    issues.extend(
        PASSIVE_MARKERS
            .iter()
            .copied()
            .filter(|marker| lower.contains(marker))
            .map(GrammarIssue::PassiveVoice),
    );

    emit_log(
        LogLevel::Debug,
        &format!("grammar check found {} issues", issues.len()),
    );
    emit_event(
        "grammar.checked",
        &serde_json::json!({ "issues": issues.len() }).to_string(),
    );

    issues
}

/// Join issue labels for display, e.g. in a notification.
#[must_use]
pub fn summarize_issues(issues: &[GrammarIssue]) -> String {
    issues
        .iter()
        .map(GrammarIssue::label)
        .collect::<Vec<_>>()
        .join(", ")
}
