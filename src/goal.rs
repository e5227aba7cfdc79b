//! Word goals and progress toward them.

use std::fmt;

use crate::config::MeterConfig;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};

/// A positive target word count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordGoal(u64);

impl WordGoal {
    /// Create a goal, rejecting zero.
    pub fn new(words: u64) -> Result<Self> {
        if words == 0 {
            return Err(Error::InvalidGoal(words.to_string()));
        }
        Ok(Self(words))
    }

    /// Parse a goal from user input.
    ///
    /// Leading whitespace and a sign are allowed, then the leading decimal
    /// digits are read and anything after them is ignored, so `"750 words"`
    /// is 750. No digits, or a value of zero or less, is
    /// [`Error::InvalidGoal`]. Goals up to `u64::MAX` are accepted; longer
    /// digit runs are rejected as invalid too.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidGoal(input.to_string());

        let s = input.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let digits = &s[..digits_end];
        if digits.is_empty() || negative {
            return Err(invalid());
        }

        let words: u64 = digits.parse().map_err(|_| invalid())?;
        Self::new(words).map_err(|_| invalid())
    }

    /// Parse a goal, falling back to the configured default.
    #[must_use]
    pub fn parse_or_default(input: &str, config: &MeterConfig) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            emit_log(LogLevel::Warn, &format!("{err}; using default goal"));
            Self::from_config(config)
        })
    }

    /// The default goal from `config`.
    #[must_use]
    pub fn from_config(config: &MeterConfig) -> Self {
        Self(u64::from(config.default_goal.max(1)))
    }

    /// The target word count.
    #[must_use]
    pub fn words(self) -> u64 {
        self.0
    }
}

impl Default for WordGoal {
    fn default() -> Self {
        Self::from_config(&MeterConfig::default())
    }
}

impl fmt::Display for WordGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.0)
    }
}

/// How close the text is to its goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalBand {
    /// Below 75%.
    Started,
    /// 75% or more.
    Close,
    /// Goal met.
    Reached,
}

/// Progress of a word count toward a goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    pub words: usize,
    pub goal: WordGoal,
    /// Percentage of the goal, capped at 100.
    pub percent: f64,
    pub band: GoalBand,
}

impl GoalProgress {
    /// `"{words}/{goal} words"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{} words", self.words, self.goal.words())
    }
}

/// Compute progress of `words` toward `goal`.
#[must_use]
pub fn goal_progress(words: usize, goal: WordGoal) -> GoalProgress {
    let percent = (words as f64 / goal.words() as f64 * 100.0).min(100.0);
    let band = if percent >= 100.0 {
        GoalBand::Reached
    } else if percent >= 75.0 {
        GoalBand::Close
    } else {
        GoalBand::Started
    };
    GoalProgress {
        words,
        goal,
        percent,
        band,
    }
}
