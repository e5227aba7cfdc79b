//! Reading time, speaking time, long sentences and readability.
//!
//! The readability score is a coarse heuristic loosely modelled on Flesch
//! Reading Ease. It is not the standard formula and should not be compared
//! against scores from other tools.

use crate::text::{
    count_chars_without_spaces, count_sentences, count_words, is_blank, naive_word_count,
    raw_sentences,
};

/// Average silent reading speed in words per minute.
pub const READING_WPM: usize = 200;

/// Average speaking speed in words per minute.
pub const SPEAKING_WPM: usize = 130;

/// Sentences with more words than this are long.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Score returned when there is nothing to score.
pub const MAX_READABILITY: u8 = 100;

/// Minutes needed to read `words` silently, rounded up.
#[must_use]
pub fn reading_minutes(words: usize) -> usize {
    words.div_ceil(READING_WPM)
}

/// Minutes needed to read `words` aloud, rounded up.
#[must_use]
pub fn speaking_minutes(words: usize) -> usize {
    words.div_ceil(SPEAKING_WPM)
}

/// Format a minute count the way the report shows it (`"3m"`).
#[must_use]
pub fn format_minutes(minutes: usize) -> String {
    format!("{minutes}m")
}

/// Reading time for a word count, e.g. `"2m"`.
#[must_use]
pub fn reading_time(words: usize) -> String {
    format_minutes(reading_minutes(words))
}

/// Speaking time for a word count, e.g. `"2m"`.
#[must_use]
pub fn speaking_time(words: usize) -> String {
    format_minutes(speaking_minutes(words))
}

/// Count sentences with more than [`LONG_SENTENCE_WORDS`] words.
///
/// Works on the raw boundary split, empty segments included. A blank segment
/// counts as one word, which can never cross the threshold, so the result
/// matches counting only non-empty sentences.
#[must_use]
pub fn count_long_sentences(text: &str) -> usize {
    raw_sentences(text)
        .filter(|sentence| naive_word_count(sentence) > LONG_SENTENCE_WORDS)
        .count()
}

/// Heuristic readability score in `0..=100`, higher is easier.
///
/// Blank text, or text without words or sentences, scores
/// [`MAX_READABILITY`].
#[must_use]
pub fn readability(text: &str) -> u8 {
    if is_blank(text) {
        return MAX_READABILITY;
    }
    score(
        count_words(text),
        count_sentences(text),
        count_chars_without_spaces(text),
    )
}

/// Readability from precomputed counts.
///
/// Averages are compared by cross-multiplying, so `words / sentences > 25`
/// becomes `words > 25 * sentences` and no division happens.
#[must_use]
pub fn score(words: usize, sentences: usize, chars_without_spaces: usize) -> u8 {
    if words == 0 || sentences == 0 {
        return MAX_READABILITY;
    }

    let mut score: i32 = i32::from(MAX_READABILITY);

    if words > 25 * sentences {
        score -= 30;
    } else if words > 20 * sentences {
        score -= 20;
    } else if words > 15 * sentences {
        score -= 10;
    }

    if chars_without_spaces > 6 * words {
        score -= 20;
    } else if chars_without_spaces > 5 * words {
        score -= 10;
    }

    score.clamp(0, i32::from(MAX_READABILITY)) as u8
}
