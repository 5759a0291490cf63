//! User-facing notices handed to the notification sink.

use crate::model::entry::EntryValidationError;
use crate::service::entry_store::StoreError;
use std::fmt::{Display, Formatter};

pub const ENTRY_SAVED: &str = "Entry saved successfully!";
pub const ENTRY_UPDATED: &str = "Entry updated successfully!";
pub const ENTRY_DELETED: &str = "Entry deleted.";
pub const ENTRIES_CLEARED: &str = "All entries cleared.";
pub const NOTHING_TO_CLEAR: &str = "No entries to clear.";
pub const ENTRIES_EXPORTED: &str = "Entries exported successfully!";
pub const NOTHING_TO_EXPORT: &str = "No entries to export.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// One message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&StoreError> for Notice {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::Validation(
                EntryValidationError::EmptyTitle | EntryValidationError::EmptyContent,
            ) => Self::error("Please add a title and content for your entry."),
            StoreError::Validation(EntryValidationError::MoodNotSelected) => {
                Self::error("Please select your mood.")
            }
            StoreError::NotFound(_) => Self::error("That entry no longer exists."),
            StoreError::Persistence(_) => {
                Self::error("Your journal could not be saved. Please try again.")
            }
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
