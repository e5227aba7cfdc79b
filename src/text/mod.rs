//! Tokenizing, formatting and checking plain text.
//!
//! Everything here is a pure function over `&str`. Key entry points:
//!
//! - [`count_words`], [`split_sentences`], [`split_paragraphs`]: the
//!   tokenizer primitives every statistic is built on
//! - [`format_text`], [`summarize_text`]: rewrites that return new text
//! - [`check_grammar`]: substring-based style hints
//!
//! # Examples
//!
//! ## Counting
//!
//! ```
//! use wordmaster::text::{count_paragraphs, count_sentences, count_words};
//!
//! assert_eq!(count_words("a b  c"), 3);
//! assert_eq!(count_sentences("Hello. World!"), 2);
//! assert_eq!(count_paragraphs("a\n\nb\nc"), 2);
//! ```
//!
//! ## Formatting
//!
//! ```
//! use wordmaster::text::format_text;
//!
//! let formatted = format_text("  hello   world.how are you?");
//! assert_eq!(formatted, "Hello world. How are you?");
//! assert_eq!(format_text(&formatted), formatted);
//! ```

mod grammar;
mod tokenize;
mod transform;

pub use grammar::{GrammarIssue, PASSIVE_MARKERS, check_grammar, summarize_issues};
pub use tokenize::{
    SENTENCE_TERMINATORS, count_chars, count_chars_without_spaces, count_graphemes,
    count_paragraphs, count_sentences, count_words, is_blank, is_space, is_terminator,
    naive_word_count, raw_sentences, split_paragraphs, split_sentences, trim, words,
};
pub use transform::{SUMMARY_MIN_SENTENCES, format_text, summarize_text};
