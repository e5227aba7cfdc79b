//! Scaling constants used by progress meters and goals.

/// Video lengths, in seconds, that the timing targets are computed for.
pub const DEFAULT_VIDEO_SECONDS: [u32; 3] = [15, 30, 60];

/// Constants for turning statistics into progress indicators.
///
/// None of these affect [`compute_stats`](crate::compute_stats). They only
/// scale the derived meters in [`crate::meters`] and [`crate::goal`].
#[derive(Clone, Debug, PartialEq)]
pub struct MeterConfig {
    /// Character count that fills the character meters.
    pub char_meter_max: usize,
    /// Word count that fills the speaking meter (about a five-minute talk).
    pub speaking_target_words: usize,
    /// Word goal used when none, or an invalid one, is given.
    pub default_goal: u32,
    /// Speech rate for video timing targets.
    pub video_words_per_second: f64,
    /// Video lengths to compute timing targets for.
    pub video_seconds: Vec<u32>,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            char_meter_max: 5000,
            speaking_target_words: 650,
            default_goal: 1000,
            video_words_per_second: 2.5,
            video_seconds: DEFAULT_VIDEO_SECONDS.to_vec(),
        }
    }
}

impl MeterConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default word goal.
    #[must_use]
    pub fn with_default_goal(mut self, goal: u32) -> Self {
        self.default_goal = goal.max(1);
        self
    }

    /// Override the character meter maximum.
    #[must_use]
    pub fn with_char_meter_max(mut self, max: usize) -> Self {
        self.char_meter_max = max.max(1);
        self
    }

    /// Override the video lengths.
    #[must_use]
    pub fn with_video_seconds(mut self, seconds: &[u32]) -> Self {
        self.video_seconds = seconds.to_vec();
        self
    }
}
