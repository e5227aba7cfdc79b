//! Statistics snapshot for a single text value.

use serde::{Deserialize, Serialize};

use crate::event::{LogLevel, emit_event, emit_log};
use crate::metrics::{self, format_minutes};
use crate::text;

/// Every statistic the engine derives from one text value.
///
/// A snapshot holds no state beyond what the text determines: computing it
/// twice from equal text yields equal snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Whitespace-delimited words.
    pub word_count: usize,
    /// Unicode scalar values, whitespace included.
    pub chars_with_spaces: usize,
    /// Unicode scalar values, whitespace excluded.
    pub chars_without_spaces: usize,
    /// Extended grapheme clusters.
    pub graphemes: usize,
    /// Non-empty sentences.
    pub sentence_count: usize,
    /// Paragraphs separated by blank lines.
    pub paragraph_count: usize,
    /// `ceil(words / 200)`.
    pub reading_minutes: usize,
    /// `ceil(words / 130)`.
    pub speaking_minutes: usize,
    /// Sentences with more than 20 words.
    pub long_sentence_count: usize,
    /// Heuristic score in `0..=100`.
    pub readability_score: u8,
}

impl StatsSnapshot {
    /// Reading time formatted as `"{m}m"`.
    #[must_use]
    pub fn reading_time(&self) -> String {
        format_minutes(self.reading_minutes)
    }

    /// Speaking time formatted as `"{m}m"`.
    #[must_use]
    pub fn speaking_time(&self) -> String {
        format_minutes(self.speaking_minutes)
    }

    /// True when the text had no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Compute all statistics for `text`.
#[must_use]
pub fn compute_stats(text: &str) -> StatsSnapshot {
    let word_count = text::count_words(text);
    let chars_without_spaces = text::count_chars_without_spaces(text);
    let sentence_count = text::count_sentences(text);

    let readability_score = if text::is_blank(text) {
        metrics::MAX_READABILITY
    } else {
        metrics::score(word_count, sentence_count, chars_without_spaces)
    };

    let stats = StatsSnapshot {
        word_count,
        chars_with_spaces: text::count_chars(text),
        chars_without_spaces,
        graphemes: text::count_graphemes(text),
        sentence_count,
        paragraph_count: text::count_paragraphs(text),
        reading_minutes: metrics::reading_minutes(word_count),
        speaking_minutes: metrics::speaking_minutes(word_count),
        long_sentence_count: metrics::count_long_sentences(text),
        readability_score,
    };

    emit_log(
        LogLevel::Debug,
        &format!(
            "computed stats: {} words, {} sentences, readability {}",
            stats.word_count, stats.sentence_count, stats.readability_score
        ),
    );
    emit_event(
        "stats.computed",
        &serde_json::json!({
            "words": stats.word_count,
            "chars": stats.chars_with_spaces,
        })
        .to_string(),
    );

    stats
}
