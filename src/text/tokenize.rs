//! Word, sentence and paragraph splitting.
//!
//! All splitting is naive on purpose: there is no locale-aware word breaking
//! and no abbreviation or decimal-number awareness. `"Dr. Smith paid 3.50"`
//! is three sentences.

use unicode_segmentation::UnicodeSegmentation;

/// Sentence boundary characters. A run of them is a single boundary.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Whitespace as matched by the ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`] in two places: U+0085 (NEL) is not
/// whitespace here and U+FEFF (BOM) is.
#[inline]
#[must_use]
pub fn is_space(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Check whether a character ends a sentence.
#[inline]
#[must_use]
pub fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Check if the text is empty or whitespace only.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Trim [`is_space`] whitespace from both ends.
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Iterate over whitespace-delimited tokens.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|w| !w.is_empty())
}

/// Count whitespace-delimited words. Whitespace-only text has zero words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Word count of a single segment as a bare whitespace split sees it.
///
/// A blank segment still yields one (empty) token, so this never returns 0.
#[must_use]
pub fn naive_word_count(segment: &str) -> usize {
    count_words(segment).max(1)
}

/// Split on runs of sentence terminators, keeping empty segments.
///
/// `"a.. b"` yields `["a", " b"]` and `"a."` yields `["a", ""]`.
pub fn raw_sentences(text: &str) -> impl Iterator<Item = &str> {
    RawSentences {
        rest: Some(text),
    }
}

struct RawSentences<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for RawSentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(is_terminator) {
            Some(start) => {
                let after = &rest[start..];
                let run = after
                    .find(|c: char| !is_terminator(c))
                    .unwrap_or(after.len());
                self.rest = Some(&after[run..]);
                Some(&rest[..start])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Split into non-empty sentences, trimmed, in order.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    raw_sentences(text)
        .map(trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count non-empty sentences.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    raw_sentences(text).filter(|s| !is_blank(s)).count()
}

/// Split into paragraphs: runs of non-blank lines separated by one or more
/// blank lines. Each paragraph keeps its inner single newlines.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut offset = 0usize;

    for line in text.split('\n') {
        let end = offset + line.len();
        if is_blank(line) {
            if let Some((start, stop)) = current.take() {
                paragraphs.push(&text[start..stop]);
            }
        } else {
            current = Some(match current {
                Some((start, _)) => (start, end),
                None => (offset, end),
            });
        }
        offset = end + 1;
    }
    if let Some((start, stop)) = current {
        paragraphs.push(&text[start..stop]);
    }

    paragraphs
}

/// Count paragraphs.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.split('\n') {
        let blank = is_blank(line);
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }
    count
}

/// Number of Unicode scalar values.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-whitespace Unicode scalar values.
#[must_use]
pub fn count_chars_without_spaces(text: &str) -> usize {
    text.chars().filter(|&c| !is_space(c)).count()
}

/// Number of extended grapheme clusters.
#[must_use]
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}
