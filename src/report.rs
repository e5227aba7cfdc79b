//! Plain-text analysis report.

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::stats::StatsSnapshot;

/// First line of every report.
pub const REPORT_TITLE: &str = "WORDMASTER PRO ANALYSIS";

/// Closing rule of every report.
pub const REPORT_RULE: &str = "====================";

/// Timestamp layout used in the `Generated:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A report for one text value and its snapshot.
///
/// `Display` renders the statistics block only. [`Report::export`] appends
/// the text itself, which is what export files contain.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    text: &'a str,
    stats: &'a StatsSnapshot,
    generated: String,
}

impl<'a> Report<'a> {
    /// Create a report generated at `timestamp`, shown in its own zone.
    pub fn new<Tz>(text: &'a str, stats: &'a StatsSnapshot, timestamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            text,
            stats,
            generated: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Report block, blank line, then the text.
    #[must_use]
    pub fn export(&self) -> String {
        format!("{self}\n\n{}", self.text)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "Generated: {}", self.generated)?;
        writeln!(f, "Words: {}", s.word_count)?;
        writeln!(f, "Characters (with spaces): {}", s.chars_with_spaces)?;
        writeln!(f, "Characters (without spaces): {}", s.chars_without_spaces)?;
        writeln!(f, "Sentences: {}", s.sentence_count)?;
        writeln!(f, "Paragraphs: {}", s.paragraph_count)?;
        writeln!(f, "Reading Time: {}", s.reading_time())?;
        writeln!(f, "Speaking Time: {}", s.speaking_time())?;
        writeln!(f, "Long Sentences: {}", s.long_sentence_count)?;
        writeln!(f, "Readability Score: {}/100", s.readability_score)?;
        write!(f, "{REPORT_RULE}")
    }
}

/// Render the statistics report for `text`.
///
/// Pure formatting: `stats` is expected to come from
/// [`compute_stats`](crate::compute_stats) on the same text and is not
/// re-checked.
#[must_use]
pub fn render_report<Tz>(text: &str, stats: &StatsSnapshot, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Report::new(text, stats, timestamp).to_string()
}

/// Render the report followed by the text, as written to export files.
#[must_use]
pub fn render_export<Tz>(text: &str, stats: &StatsSnapshot, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Report::new(text, stats, timestamp).export()
}
