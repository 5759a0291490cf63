//! Whole-collection snapshot persistence under a fixed key.
//!
//! # Responsibility
//! - Encode the entry collection as a JSON array and store it in one slot.
//! - Decode the slot back into entries on startup.
//!
//! # Invariants
//! - Only the `journalEntries` key is touched.
//! - A missing slot is `Ok(None)`; a corrupt slot is `Err(Decode)`.

use super::kv_store::KeyValueStore;
use super::{PersistenceError, PersistenceResult};
use crate::model::entry::JournalEntry;
use log::debug;

/// Storage key holding the serialized collection.
pub const ENTRY_STORAGE_KEY: &str = "journalEntries";

/// Reads and writes entry snapshots through a key-value backend.
pub struct EntrySnapshotRepository<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> EntrySnapshotRepository<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Loads the last persisted snapshot.
    ///
    /// # Errors
    /// - `Decode` when the slot holds anything but a valid entry array.
    /// - Backend errors from the underlying store.
    pub fn load(&self) -> PersistenceResult<Option<Vec<JournalEntry>>> {
        let Some(blob) = self.store.get_item(ENTRY_STORAGE_KEY)? else {
            return Ok(None);
        };
        let entries: Vec<JournalEntry> =
            serde_json::from_str(&blob).map_err(PersistenceError::Decode)?;
        debug!(
            "event=snapshot_load module=repo status=ok entries={}",
            entries.len()
        );
        Ok(Some(entries))
    }

    /// Replaces the persisted snapshot with `entries`.
    pub fn save(&self, entries: &[JournalEntry]) -> PersistenceResult<()> {
        let blob = serde_json::to_string(entries).map_err(PersistenceError::Encode)?;
        self.store.set_item(ENTRY_STORAGE_KEY, &blob)?;
        debug!(
            "event=snapshot_save module=repo status=ok entries={} bytes={}",
            entries.len(),
            blob.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EntrySnapshotRepository, ENTRY_STORAGE_KEY};
    use crate::model::entry::{EntryFields, EntryId, JournalEntry};
    use crate::model::mood::Mood;
    use crate::repo::kv_store::{KeyValueStore, MemoryKeyValueStore};
    use crate::repo::PersistenceError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn missing_slot_loads_as_none() {
        let repo = EntrySnapshotRepository::new(MemoryKeyValueStore::new());
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_slot_is_a_decode_error() {
        let memory = MemoryKeyValueStore::new();
        memory.set_item(ENTRY_STORAGE_KEY, "{not json").unwrap();
        let repo = EntrySnapshotRepository::new(&memory);

        let err = repo.load().unwrap_err();
        assert!(matches!(err, PersistenceError::Decode(_)));
    }

    #[test]
    fn save_writes_wire_field_names() {
        let memory = MemoryKeyValueStore::new();
        let repo = EntrySnapshotRepository::new(&memory);
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let fields = EntryFields::validate("Morning", "Coffee", Some(Mood::Good)).unwrap();
        let entry = JournalEntry::new(EntryId::from_millis(1_714_555_800_000), fields, created_at);

        repo.save(std::slice::from_ref(&entry)).unwrap();

        let blob = memory.get_item(ENTRY_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(json[0]["id"], "1714555800000");
        assert_eq!(json[0]["mood"], "🙂");
        assert_eq!(json[0]["timestamp"], "2024-05-01T09:30:00Z");
        assert!(json[0].get("updatedAt").is_none());
    }

    #[test]
    fn load_accepts_browser_iso_timestamps() {
        let memory = MemoryKeyValueStore::new();
        memory
            .set_item(
                ENTRY_STORAGE_KEY,
                r#"[{"id":"1700000000000","title":"t","content":"c","mood":"😢",
                    "timestamp":"2023-11-14T22:13:20.000Z",
                    "updatedAt":"2023-11-15T08:00:00.000Z"}]"#,
            )
            .unwrap();
        let repo = EntrySnapshotRepository::new(&memory);

        let entries = repo.load().unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Mood::Sad);
        assert_eq!(
            entries[0].updated_at,
            Some(Utc.with_ymd_and_hms(2023, 11, 15, 8, 0, 0).unwrap())
        );
    }
}
