//! Progress meters and video timing targets derived from a snapshot.

use crate::config::MeterConfig;
use crate::stats::StatsSnapshot;

/// Coarse readability rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadabilityBand {
    /// Score of 70 or more.
    Easy,
    /// Score of 50 to 69.
    Moderate,
    /// Score below 50.
    Difficult,
}

impl ReadabilityBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Easy,
            50..=69 => Self::Moderate,
            _ => Self::Difficult,
        }
    }
}

/// Fill levels for each meter, as percentages in `0.0..=100.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Meters {
    pub chars: f64,
    pub chars_without_spaces: f64,
    pub speaking: f64,
    /// Share of sentences that are long.
    pub long_sentences: f64,
    pub readability: f64,
    pub readability_band: ReadabilityBand,
}

impl Meters {
    /// Compute all meters for a snapshot.
    #[must_use]
    pub fn from_stats(stats: &StatsSnapshot, config: &MeterConfig) -> Self {
        let long_sentences = if stats.sentence_count > 0 {
            percent(stats.long_sentence_count, stats.sentence_count)
        } else {
            0.0
        };

        Self {
            chars: percent(stats.chars_with_spaces, config.char_meter_max),
            chars_without_spaces: percent(stats.chars_without_spaces, config.char_meter_max),
            speaking: percent(stats.word_count, config.speaking_target_words),
            long_sentences,
            readability: f64::from(stats.readability_score),
            readability_band: ReadabilityBand::from_score(stats.readability_score),
        }
    }
}

/// `value / max` as a percentage capped at 100. A zero `max` counts as 1.
fn percent(value: usize, max: usize) -> f64 {
    (value as f64 / max.max(1) as f64 * 100.0).min(100.0)
}

/// Words needed to fill a video of a given length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoTarget {
    pub seconds: u32,
    /// Words needed at the configured speech rate, rounded up.
    pub needed: usize,
    /// Current words, capped at `needed`.
    pub current: usize,
    pub met: bool,
}

impl VideoTarget {
    /// `"{current}/{needed} words"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{} words", self.current, self.needed)
    }
}

/// Timing targets for each configured video length.
#[must_use]
pub fn video_targets(words: usize, config: &MeterConfig) -> Vec<VideoTarget> {
    config
        .video_seconds
        .iter()
        .map(|&seconds| {
            let needed = (f64::from(seconds) * config.video_words_per_second).ceil() as usize;
            VideoTarget {
                seconds,
                needed,
                current: words.min(needed),
                met: words >= needed,
            }
        })
        .collect()
}
