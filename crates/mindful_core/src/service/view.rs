//! View projector: filtered, newest-first entry listing.
//!
//! # Invariants
//! - Ordering key is `updated_at ?? created_at`, descending.
//! - Equal keys keep collection order (stable sort).
//! - An empty view always names why it is empty.

use crate::model::entry::JournalEntry;
use crate::model::mood::{Mood, UnknownMood};
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Mood filter selected in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    pub fn matches(self, entry: &JournalEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(mood) => entry.mood == mood,
        }
    }
}

impl FromStr for MoodFilter {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl Display for MoodFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(mood) => write!(f, "{mood}"),
        }
    }
}

/// Why a projected view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The journal has no entries at all.
    NoEntries,
    /// Entries exist but none match the active filter.
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoEntries => {
                "No entries to display. Start journaling to see your entries here."
            }
            Self::NoMatches => "No entries to display. Try changing the mood filter.",
        }
    }
}

/// Ordered entries ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub items: Vec<&'a JournalEntry>,
    pub empty_state: Option<EmptyState>,
}

/// Filters `entries` by `filter` and sorts by most recent activity.
pub fn project(entries: &[JournalEntry], filter: MoodFilter) -> EntryView<'_> {
    let mut items: Vec<&JournalEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect();
    items.sort_by_key(|entry| Reverse(entry.effective_timestamp()));

    let empty_state = if !items.is_empty() {
        None
    } else if entries.is_empty() {
        Some(EmptyState::NoEntries)
    } else {
        Some(EmptyState::NoMatches)
    };

    EntryView { items, empty_state }
}

#[cfg(test)]
mod tests {
    use super::{project, EmptyState, MoodFilter};
    use crate::model::entry::{EntryFields, EntryId, JournalEntry};
    use crate::model::mood::Mood;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, mood: Mood, hour: u32) -> JournalEntry {
        let fields = EntryFields::validate("t", "c", Some(mood)).unwrap();
        JournalEntry::new(
            EntryId::from_millis(id),
            fields,
            Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn filter_parses_all_and_moods() {
        assert_eq!("All".parse::<MoodFilter>().unwrap(), MoodFilter::All);
        assert_eq!(
            "😟".parse::<MoodFilter>().unwrap(),
            MoodFilter::Only(Mood::Worried)
        );
    }

    #[test]
    fn empty_states_are_distinguished() {
        assert_eq!(
            project(&[], MoodFilter::All).empty_state,
            Some(EmptyState::NoEntries)
        );

        let entries = vec![entry(1, Mood::Good, 8)];
        let view = project(&entries, MoodFilter::Only(Mood::Sad));
        assert!(view.items.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::NoMatches));
    }

    #[test]
    fn equal_timestamps_keep_collection_order() {
        let entries = vec![entry(1, Mood::Good, 8), entry(2, Mood::Sad, 8)];
        let view = project(&entries, MoodFilter::All);
        let ids: Vec<&str> = view.items.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
