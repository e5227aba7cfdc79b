//! Saved-text records and export files.
//!
//! These helpers sit outside the statistics engine: they do I/O and they
//! refuse blank text, which the engine itself never does.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::report::{render_export, render_report};
use crate::stats::compute_stats;
use crate::text::is_blank;

/// Key the saved-text record is stored under.
pub const STORAGE_KEY: &str = "wordmaster_saved_text";

/// Default file name for exports.
pub const EXPORT_FILE_NAME: &str = "wordmaster-text.txt";

/// A saved copy of the text with its rendered report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedText {
    pub text: String,
    /// Rendered report at save time.
    pub stats: String,
    pub timestamp: DateTime<Utc>,
    pub word_count: usize,
}

impl SavedText {
    /// Capture `text` as of `now`.
    ///
    /// The report shows `now` in its own zone; `timestamp` is stored as UTC.
    pub fn capture<Tz>(text: &str, now: &DateTime<Tz>) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if is_blank(text) {
            return Err(Error::EmptyText);
        }
        let stats = compute_stats(text);
        Ok(Self {
            text: text.to_string(),
            stats: render_report(text, &stats, now),
            timestamp: now.with_timezone(&Utc),
            word_count: stats.word_count,
        })
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the record to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        emit_log(
            LogLevel::Info,
            &format!("saved {} words to {}", self.word_count, path.display()),
        );
        Ok(())
    }

    /// Read a record written by [`SavedText::save`].
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Write the report and text to `path`, stamped with `now` in its own zone.
pub fn write_export<Tz>(path: &Path, text: &str, now: &DateTime<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if is_blank(text) {
        return Err(Error::EmptyText);
    }
    let stats = compute_stats(text);
    fs::write(path, render_export(text, &stats, now))?;
    emit_log(LogLevel::Info, &format!("exported to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_capture_rejects_blank() {
        assert!(matches!(SavedText::capture("  \n", &when()), Err(Error::EmptyText)));
    }

    #[test]
    fn test_capture_fields() {
        let saved = SavedText::capture("One two three.", &when()).unwrap();
        assert_eq!(saved.word_count, 3);
        assert!(saved.stats.contains("Words: 3"));
        assert!(saved.stats.contains("Generated: 2025-01-02 03:04:05"));
    }

    #[test]
    fn test_report_uses_local_zone_timestamp_stays_utc() {
        let local = when().with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        let saved = SavedText::capture("One two three.", &local).unwrap();
        assert!(saved.stats.contains("Generated: 2025-01-02 05:04:05"));
        assert_eq!(saved.timestamp, when());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        write_export(&path, "One two three.", &local).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Generated: 2025-01-02 05:04:05"));
    }

    #[test]
    fn test_json_keys() {
        let saved = SavedText::capture("One two three.", &when()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&saved.to_json().unwrap()).unwrap();
        assert_eq!(value["wordCount"], 3);
        assert_eq!(value["timestamp"], "2025-01-02T03:04:05Z");
        assert_eq!(value["text"], "One two three.");
        assert_eq!(SavedText::from_json(&saved.to_json().unwrap()).unwrap(), saved);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(SavedText::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let saved = SavedText::capture("Saved text here.", &when()).unwrap();
        saved.save(&path).unwrap();
        assert_eq!(SavedText::load(&path).unwrap(), saved);
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        write_export(&path, "Exported words.", &when()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("WORDMASTER PRO ANALYSIS\n"));
        assert!(content.ends_with("\n\nExported words."));

        let missing = dir.path().join("nope");
        assert!(matches!(write_export(&missing, " ", &when()), Err(Error::EmptyText)));
    }
}
