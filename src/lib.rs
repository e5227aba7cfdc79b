//! `WordMaster` - real-time text statistics
//!
//! Word, character, sentence and paragraph counts, reading and speaking
//! time, and a heuristic readability score, all recomputed from scratch for
//! each text value. Also formatting, summarizing, style hints and a
//! plain-text report.
//!
//! ```
//! use wordmaster::compute_stats;
//!
//! let stats = compute_stats("The cat sat. The dog ran far away quickly today in the sun.");
//! assert_eq!(stats.word_count, 13);
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(stats.reading_time(), "1m");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Percent and score conversions are bounded
#![allow(clippy::cast_sign_loss)] // Ceilings of non-negative products
#![allow(clippy::cast_precision_loss)] // Word counts far below f64 precision limits
#![allow(clippy::module_name_repetitions)] // Allow text::TextStats etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every getter needs it
#![allow(clippy::float_cmp)] // Exact comparisons in tests are intentional

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod goal;
pub mod guidelines;
pub mod meters;
pub mod metrics;
pub mod report;
pub mod stats;
pub mod text;

// Re-export core types at crate root
pub use config::MeterConfig;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use stats::{StatsSnapshot, compute_stats};

// Re-export the engine operations
pub use metrics::{count_long_sentences, readability, reading_time, speaking_time};
pub use report::{Report, render_export, render_report};
pub use text::{
    GrammarIssue, check_grammar, count_paragraphs, count_sentences, count_words, format_text,
    split_paragraphs, split_sentences, summarize_text,
};

// Re-export collaborator helpers
pub use export::{EXPORT_FILE_NAME, STORAGE_KEY, SavedText, write_export};
pub use goal::{GoalBand, GoalProgress, WordGoal, goal_progress};
pub use guidelines::Platform;
pub use meters::{Meters, ReadabilityBand, VideoTarget, video_targets};
