//! Mood vocabulary shared by entries, filters and insights.
//!
//! # Responsibility
//! - Define the five self-reported mood values and their wire symbols.
//! - Map moods to numeric scores, category names and category groups.
//!
//! # Invariants
//! - Wire form is always the emoji symbol.
//! - Score ordering is great (5) > good > neutral > worried > sad (1).
//! - The unselected placeholder is never a `Mood`; it parses to `None`.
//! - Stored symbols outside the vocabulary are kept verbatim and read as
//!   neutral (score 3).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sentinel shown by the composer before a mood is picked.
pub const MOOD_PLACEHOLDER: &str = "...";

/// Self-reported emotional state attached to every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😊")]
    Great,
    #[serde(rename = "🙂")]
    Good,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😟")]
    Worried,
    #[serde(rename = "😢")]
    Sad,
}

/// Coarse grouping used for encouragement text and affirmation pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodGroup {
    Positive,
    Neutral,
    Challenging,
}

impl Mood {
    /// All moods, best first.
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Neutral,
        Mood::Worried,
        Mood::Sad,
    ];

    /// Emoji symbol used on the wire and in listings.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Great => "😊",
            Self::Good => "🙂",
            Self::Neutral => "😐",
            Self::Worried => "😟",
            Self::Sad => "😢",
        }
    }

    /// Human-readable category name used in insight text.
    pub fn category(self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Worried => "worried",
            Self::Sad => "sad",
        }
    }

    /// Numeric value for trend charts, 5 (great) down to 1 (sad).
    pub fn score(self) -> u8 {
        match self {
            Self::Great => 5,
            Self::Good => 4,
            Self::Neutral => 3,
            Self::Worried => 2,
            Self::Sad => 1,
        }
    }

    pub fn group(self) -> MoodGroup {
        match self {
            Self::Great | Self::Good => MoodGroup::Positive,
            Self::Neutral => MoodGroup::Neutral,
            Self::Worried | Self::Sad => MoodGroup::Challenging,
        }
    }

    /// Resolves an emoji symbol, returning `None` for unknown values.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.symbol() == symbol)
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Mood as found in a stored entry.
///
/// Entries written by other clients may carry a symbol this build does not
/// know. Such entries still load; the raw symbol is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredMood {
    Known(Mood),
    Unrecognized(String),
}

impl StoredMood {
    pub fn known(&self) -> Option<Mood> {
        match self {
            Self::Known(mood) => Some(*mood),
            Self::Unrecognized(_) => None,
        }
    }

    /// Mood used for scoring and grouping; unrecognized symbols count as neutral.
    pub fn resolved(&self) -> Mood {
        self.known().unwrap_or(Mood::Neutral)
    }

    pub fn score(&self) -> u8 {
        self.resolved().score()
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Known(mood) => mood.symbol(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Mood> for StoredMood {
    fn from(value: Mood) -> Self {
        Self::Known(value)
    }
}

impl PartialEq<Mood> for StoredMood {
    fn eq(&self, other: &Mood) -> bool {
        self.known() == Some(*other)
    }
}

impl Display for StoredMood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error for mood text that is neither a symbol, a category name nor the
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl Display for UnknownMood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown mood `{}`; expected one of great|good|neutral|worried|sad or its emoji",
            self.0
        )
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(mood) = Self::from_symbol(trimmed) {
            return Ok(mood);
        }
        let lowered = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.category() == lowered)
            .ok_or_else(|| UnknownMood(trimmed.to_string()))
    }
}

/// Parses composer input where the placeholder means "nothing selected yet".
///
/// Returns `Ok(None)` for the placeholder or blank input.
pub fn parse_mood_selection(value: &str) -> Result<Option<Mood>, UnknownMood> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == MOOD_PLACEHOLDER {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_mood_selection, Mood, MoodGroup, StoredMood};

    #[test]
    fn parses_symbols_and_category_names() {
        assert_eq!("😊".parse::<Mood>().unwrap(), Mood::Great);
        assert_eq!(" Worried ".parse::<Mood>().unwrap(), Mood::Worried);
        assert!("ecstatic".parse::<Mood>().is_err());
    }

    #[test]
    fn placeholder_is_not_a_mood() {
        assert_eq!(parse_mood_selection("...").unwrap(), None);
        assert_eq!(parse_mood_selection("").unwrap(), None);
        assert_eq!(parse_mood_selection("sad").unwrap(), Some(Mood::Sad));
    }

    #[test]
    fn scores_and_groups_follow_mood_order() {
        let scores: Vec<u8> = Mood::ALL.iter().map(|mood| mood.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
        assert_eq!(Mood::Good.group(), MoodGroup::Positive);
        assert_eq!(Mood::Neutral.group(), MoodGroup::Neutral);
        assert_eq!(Mood::Sad.group(), MoodGroup::Challenging);
    }

    #[test]
    fn serializes_as_symbol() {
        let json = serde_json::to_string(&Mood::Neutral).unwrap();
        assert_eq!(json, "\"😐\"");
    }

    #[test]
    fn unknown_stored_symbol_survives_and_scores_neutral() {
        let stored: StoredMood = serde_json::from_str("\"😡\"").unwrap();
        assert_eq!(stored, StoredMood::Unrecognized("😡".to_string()));
        assert_eq!(stored.score(), 3);
        assert_eq!(stored.resolved(), Mood::Neutral);
        assert_ne!(stored, Mood::Neutral);
        assert_eq!(serde_json::to_string(&stored).unwrap(), "\"😡\"");

        let known: StoredMood = serde_json::from_str("\"😟\"").unwrap();
        assert_eq!(known, Mood::Worried);
    }
}
