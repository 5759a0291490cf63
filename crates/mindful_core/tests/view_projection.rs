use chrono::{DateTime, Duration, TimeZone, Utc};
use mindful_core::{project, EmptyState, EntryFields, EntryId, JournalEntry, Mood, MoodFilter};
use std::collections::HashSet;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
}

fn entry(id: i64, mood: Mood, created_offset_hours: i64) -> JournalEntry {
    let fields = EntryFields::validate("title", "content", Some(mood)).unwrap();
    JournalEntry::new(
        EntryId::from_millis(id),
        fields,
        base() + Duration::hours(created_offset_hours),
    )
}

fn ids(entries: &[&JournalEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.to_string()).collect()
}

#[test]
fn all_filter_keeps_every_entry_newest_first() {
    let entries = vec![
        entry(1, Mood::Good, 0),
        entry(2, Mood::Sad, 5),
        entry(3, Mood::Good, 2),
    ];

    let view = project(&entries, MoodFilter::All);

    assert_eq!(view.empty_state, None);
    assert_eq!(ids(&view.items), vec!["2", "3", "1"]);
    let projected: HashSet<&EntryId> = view.items.iter().map(|entry| &entry.id).collect();
    let source: HashSet<&EntryId> = entries.iter().map(|entry| &entry.id).collect();
    assert_eq!(projected, source);
}

#[test]
fn mood_filter_returns_exact_subset_in_same_order() {
    let entries = vec![
        entry(1, Mood::Good, 0),
        entry(2, Mood::Sad, 5),
        entry(3, Mood::Good, 2),
        entry(4, Mood::Great, 9),
    ];

    let view = project(&entries, MoodFilter::Only(Mood::Good));

    assert_eq!(ids(&view.items), vec!["3", "1"]);
    assert!(view.items.iter().all(|entry| entry.mood == Mood::Good));
}

#[test]
fn edit_time_takes_precedence_over_creation_time() {
    let mut edited = entry(1, Mood::Neutral, 0);
    edited.updated_at = Some(base() + Duration::hours(10));
    let newer_unedited = entry(2, Mood::Neutral, 6);
    // Created after entry 2, but its edit still precedes entry 1's edit.
    let mut edited_earlier = entry(3, Mood::Neutral, 8);
    edited_earlier.updated_at = Some(base() + Duration::hours(9));

    let entries = vec![newer_unedited, edited, edited_earlier];
    let view = project(&entries, MoodFilter::All);

    assert_eq!(ids(&view.items), vec!["1", "3", "2"]);
}

#[test]
fn empty_view_messages_differ() {
    let none = project(&[], MoodFilter::Only(Mood::Sad));
    assert_eq!(none.empty_state, Some(EmptyState::NoEntries));

    let entries = vec![entry(1, Mood::Good, 0)];
    let filtered = project(&entries, MoodFilter::Only(Mood::Sad));
    assert_eq!(filtered.empty_state, Some(EmptyState::NoMatches));

    assert!(EmptyState::NoMatches.message().contains("mood filter"));
    assert!(EmptyState::NoEntries.message().contains("Start journaling"));
}
