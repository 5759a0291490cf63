//! Core domain logic for Mindful Journal.
//! This crate is the single source of truth for journal invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::JournalConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryFields, EntryId, EntryValidationError, JournalEntry};
pub use model::mood::{
    parse_mood_selection, Mood, MoodGroup, StoredMood, UnknownMood, MOOD_PLACEHOLDER,
};
pub use repo::entry_snapshot::{EntrySnapshotRepository, ENTRY_STORAGE_KEY};
pub use repo::kv_store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use repo::{PersistenceError, PersistenceResult};
pub use service::composer::{EntryComposer, JOURNAL_PROMPTS};
pub use service::confirm::{ConfirmationGate, PendingAction};
pub use service::entry_store::{ClearOutcome, EntryStore, StoreError, StoreResult};
pub use service::export::{export_file_name, export_json, write_export, ExportError};
pub use service::insights::{summarize, ChartSeries, InsightsResult};
pub use service::notice::{Notice, Severity};
pub use service::view::{project, EmptyState, EntryView, MoodFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
