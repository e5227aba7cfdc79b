//! Length guidelines for common publishing platforms.

use std::fmt;

/// A platform with published length guidelines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// General overview across platforms.
    #[default]
    All,
    YouTube,
    Twitter,
    Instagram,
}

impl Platform {
    /// All platforms, overview first.
    pub const ALL: [Self; 4] = [Self::All, Self::YouTube, Self::Twitter, Self::Instagram];

    /// Parse a platform name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" | "general" => Some(Self::All),
            "youtube" => Some(Self::YouTube),
            "twitter" | "x" => Some(Self::Twitter),
            "instagram" => Some(Self::Instagram),
            _ => None,
        }
    }

    /// Section title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "Word Count Guidelines",
            Self::YouTube => "YouTube Guidelines",
            Self::Twitter => "Twitter Guidelines",
            Self::Instagram => "Instagram Guidelines",
        }
    }

    /// Guideline lines, in display order.
    #[must_use]
    pub fn guidelines(self) -> &'static [&'static str] {
        match self {
            Self::All => &[
                "Twitter: 280 characters max",
                "Instagram Caption: 2,200 characters",
                "YouTube Description: 5,000 characters",
                "Blog Post: 1,500-2,500 words",
                "Email Subject: 50 characters optimal",
                "Meta Description: 155 characters",
            ],
            Self::YouTube => &[
                "Title: 60 characters max",
                "Description: 5,000 characters",
                "Tags: 500 characters total",
                "Video Script: 800-1,500 words",
            ],
            Self::Twitter => &[
                "Tweet: 280 characters max",
                "Thread: 2,500 characters per tweet",
                "Hashtags: 2-3 recommended",
                "Optimal tweet: 71-100 characters",
            ],
            Self::Instagram => &[
                "Caption: 2,200 characters max",
                "Bio: 150 characters",
                "Hashtags: 30 max per post",
                "Optimal caption: 138-150 characters",
            ],
        }
    }
}

impl fmt::Display for Platform {
    /// Title followed by one bulleted line per guideline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())?;
        for line in self.guidelines() {
            write!(f, "\n  - {line}")?;
        }
        Ok(())
    }
}
