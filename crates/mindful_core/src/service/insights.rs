//! Weekly mood insights and the 7-day trend series.
//!
//! # Responsibility
//! - Select entries created in the trailing 7-day window.
//! - Pick the dominant mood and phrase the weekly narrative.
//! - Average mood scores per local calendar day for charting.
//!
//! # Invariants
//! - The window is `[now - 7 days, now]`, lower bound inclusive.
//! - Dominant-mood ties go to the mood seen first in collection order.
//! - Days without entries are `None`, never zero.
//! - "Now" is always a parameter; nothing here reads the wall clock.

use crate::model::entry::JournalEntry;
use crate::model::mood::{Mood, MoodGroup, StoredMood};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Length of the insight window and of the trend series.
pub const INSIGHT_WINDOW_DAYS: usize = 7;

/// Narrative used when no entries fall inside the window.
pub const NO_RECENT_ENTRIES_NARRATIVE: &str =
    "Start journaling to see your weekly mood insights here!";

/// Derived weekly summary.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsResult {
    /// Entries created inside the window.
    pub entry_count: usize,
    pub dominant_mood: Option<Mood>,
    /// Share of window entries with the dominant mood, rounded half up.
    pub dominant_mood_percentage: u8,
    pub narrative: String,
    /// Local calendar days covered by `daily_series`, oldest first.
    pub days: [NaiveDate; INSIGHT_WINDOW_DAYS],
    /// Average mood score per day, `None` for days without entries.
    pub daily_series: [Option<f64>; INSIGHT_WINDOW_DAYS],
}

/// Payload for the chart sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: [String; INSIGHT_WINDOW_DAYS],
    pub series: [Option<f64>; INSIGHT_WINDOW_DAYS],
}

impl InsightsResult {
    /// Short weekday labels paired with the daily averages.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.days.map(|day| day.format("%a").to_string()),
            series: self.daily_series,
        }
    }
}

/// Summarizes `entries` relative to `now`.
///
/// Calendar days are taken in `now`'s time zone, so callers pass a
/// `DateTime<Local>` in production and a fixed offset in tests.
pub fn summarize<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> InsightsResult {
    let now_utc = now.with_timezone(&Utc);
    let window_start = now_utc - Duration::days(INSIGHT_WINDOW_DAYS as i64);
    let recent: Vec<&JournalEntry> = entries
        .iter()
        .filter(|entry| entry.created_at >= window_start && entry.created_at <= now_utc)
        .collect();

    let today = now.date_naive();
    let days: [NaiveDate; INSIGHT_WINDOW_DAYS] = std::array::from_fn(|index| {
        today - Duration::days((INSIGHT_WINDOW_DAYS - 1 - index) as i64)
    });
    let zone = now.timezone();
    let daily_series = days.map(|day| {
        average_score(
            recent
                .iter()
                .filter(|entry| entry.created_at.with_timezone(&zone).date_naive() == day)
                .map(|entry| entry.mood.score()),
        )
    });

    let Some((dominant, dominant_count)) = dominant_mood(&recent) else {
        return InsightsResult {
            entry_count: 0,
            dominant_mood: None,
            dominant_mood_percentage: 0,
            narrative: NO_RECENT_ENTRIES_NARRATIVE.to_string(),
            days,
            daily_series,
        };
    };

    let percentage = rounded_percentage(dominant_count, recent.len());
    let narrative = format!(
        "This week, you've made {} journal entries. You've been feeling {} {}% of the time. {}",
        recent.len(),
        dominant.category(),
        percentage,
        encouragement(dominant.group())
    );

    InsightsResult {
        entry_count: recent.len(),
        dominant_mood: Some(dominant),
        dominant_mood_percentage: percentage,
        narrative,
        days,
        daily_series,
    }
}

/// Closing sentence of the weekly narrative.
pub fn encouragement(group: MoodGroup) -> &'static str {
    match group {
        MoodGroup::Positive => "Keep up the positive energy!",
        MoodGroup::Neutral => "Consider activities that bring you joy.",
        MoodGroup::Challenging => {
            "Remember to practice self-care and reach out for support when needed."
        }
    }
}

/// Most frequent mood and its count; the first mood to reach the maximum wins.
///
/// Symbols are counted as stored; an unrecognized winner reads as neutral.
fn dominant_mood(recent: &[&JournalEntry]) -> Option<(Mood, usize)> {
    // (symbol, count) in first-seen order.
    let mut counts: Vec<(&StoredMood, usize)> = Vec::new();
    for entry in recent {
        match counts.iter_mut().find(|(mood, _)| **mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((&entry.mood, 1)),
        }
    }

    let mut best: Option<(&StoredMood, usize)> = None;
    for (mood, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, count)| (mood.resolved(), count))
}

fn rounded_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (part * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

fn average_score(scores: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| {
        (sum + u32::from(score), count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(f64::from(sum) / f64::from(count))
    }
}

#[cfg(test)]
mod tests {
    use super::{dominant_mood, rounded_percentage};
    use crate::model::entry::{EntryFields, EntryId, JournalEntry};
    use crate::model::mood::Mood;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, mood: Mood) -> JournalEntry {
        let fields = EntryFields::validate("t", "c", Some(mood)).unwrap();
        JournalEntry::new(
            EntryId::from_millis(id),
            fields,
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(4, 4), 100);
    }

    #[test]
    fn later_mood_must_exceed_to_take_over() {
        let entries = [
            entry(1, Mood::Sad),
            entry(2, Mood::Good),
            entry(3, Mood::Good),
            entry(4, Mood::Sad),
        ];
        let refs: Vec<&JournalEntry> = entries.iter().collect();
        assert_eq!(dominant_mood(&refs), Some((Mood::Sad, 2)));
    }
}
