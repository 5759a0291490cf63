//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the single persisted record and its wire shape.
//! - Validate user input before it becomes an entry.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `title` and `content` are stored trimmed and never empty.
//! - `updated_at` is `None` until the first edit.
//! - Create and edit only ever store a known mood.

use crate::model::mood::{Mood, StoredMood};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable entry identifier derived from the creation instant.
///
/// Serialized as a bare string of epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Builds an id from an epoch-millisecond counter value.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Numeric value when the id follows the millisecond scheme.
    ///
    /// Imported snapshots may carry other id shapes; those return `None`.
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Input rejected before any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyTitle,
    EmptyContent,
    MoodNotSelected,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "entry title must not be empty"),
            Self::EmptyContent => write!(f, "entry content must not be empty"),
            Self::MoodNotSelected => write!(f, "a mood must be selected"),
        }
    }
}

impl Error for EntryValidationError {}

/// Validated user input for create/update.
///
/// Built only through [`EntryFields::validate`], so holding one proves the
/// trimmed title and content are non-empty and a mood was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

impl EntryFields {
    /// Trims and checks raw form input.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyContent` when the trimmed text is empty.
    /// - `MoodNotSelected` when `mood` is the placeholder (`None`).
    pub fn validate(
        title: &str,
        content: &str,
        mood: Option<Mood>,
    ) -> Result<Self, EntryValidationError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(EntryValidationError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(EntryValidationError::EmptyContent);
        }
        let mood = mood.ok_or(EntryValidationError::MoodNotSelected)?;

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            mood,
        })
    }
}

/// Canonical persisted journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub mood: StoredMood,
    /// Creation instant; serialized as `timestamp` to match the stored slot.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalEntry {
    /// Creates a never-edited entry from validated fields.
    pub fn new(id: EntryId, fields: EntryFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            mood: fields.mood.into(),
            created_at,
            updated_at: None,
        }
    }

    /// Overwrites editable fields, keeping `id` and `created_at`.
    pub fn apply_edit(&mut self, fields: EntryFields, updated_at: DateTime<Utc>) {
        self.title = fields.title;
        self.content = fields.content;
        self.mood = fields.mood.into();
        self.updated_at = Some(updated_at);
    }

    /// Most recent activity: `updated_at` when edited, else `created_at`.
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryFields, EntryValidationError};
    use crate::model::mood::Mood;

    #[test]
    fn validate_trims_input() {
        let fields = EntryFields::validate("  Walk ", "\tsunny\n", Some(Mood::Good)).unwrap();
        assert_eq!(fields.title, "Walk");
        assert_eq!(fields.content, "sunny");
    }

    #[test]
    fn validate_reports_first_failing_field() {
        assert_eq!(
            EntryFields::validate("   ", "body", Some(Mood::Good)).unwrap_err(),
            EntryValidationError::EmptyTitle
        );
        assert_eq!(
            EntryFields::validate("title", " ", Some(Mood::Good)).unwrap_err(),
            EntryValidationError::EmptyContent
        );
        assert_eq!(
            EntryFields::validate("title", "body", None).unwrap_err(),
            EntryValidationError::MoodNotSelected
        );
    }
}
