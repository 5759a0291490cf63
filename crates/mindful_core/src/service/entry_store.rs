//! Entry store: sole owner of the in-memory journal collection.
//!
//! # Responsibility
//! - Provide create/update/delete/clear/list over journal entries.
//! - Persist a full snapshot synchronously after every mutation.
//!
//! # Invariants
//! - Validation runs before any lookup or state change.
//! - A failed snapshot write leaves the in-memory collection untouched.
//! - Issued ids are strictly increasing for the lifetime of the store.
//! - Ids are unique in the collection; loaded duplicates keep the first copy.

use crate::clock::{Clock, SystemClock};
use crate::model::entry::{EntryFields, EntryId, EntryValidationError, JournalEntry};
use crate::model::mood::Mood;
use crate::repo::entry_snapshot::EntrySnapshotRepository;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::PersistenceError;
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Classified failure for every public store operation.
#[derive(Debug)]
pub enum StoreError {
    Validation(EntryValidationError),
    NotFound(EntryId),
    Persistence(PersistenceError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for StoreError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Result of [`EntryStore::clear_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The given number of entries were removed.
    Cleared(usize),
    /// Nothing to clear; informational, not an error.
    AlreadyEmpty,
}

/// In-memory journal collection backed by a snapshot repository.
pub struct EntryStore<K: KeyValueStore, C: Clock = SystemClock> {
    snapshots: EntrySnapshotRepository<K>,
    clock: C,
    entries: Vec<JournalEntry>,
    last_issued_millis: i64,
}

impl<K: KeyValueStore> EntryStore<K, SystemClock> {
    /// Opens a store over `backend` using wall-clock time.
    pub fn open(backend: K) -> Self {
        Self::open_with_clock(backend, SystemClock)
    }
}

impl<K: KeyValueStore, C: Clock> EntryStore<K, C> {
    /// Opens a store over `backend` and loads the persisted snapshot.
    pub fn open_with_clock(backend: K, clock: C) -> Self {
        let mut store = Self {
            snapshots: EntrySnapshotRepository::new(backend),
            clock,
            entries: Vec::new(),
            last_issued_millis: i64::MIN,
        };
        store.load();
        store
    }

    /// Replaces the in-memory collection with the persisted snapshot.
    ///
    /// Missing or unreadable snapshots yield an empty collection; the failure
    /// is logged and never surfaced. Later entries repeating an earlier id
    /// are dropped.
    pub fn load(&mut self) {
        self.entries = match self.snapshots.load() {
            Ok(Some(entries)) => without_duplicate_ids(entries),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback reason=unreadable_snapshot error={}",
                    err
                );
                Vec::new()
            }
        };
        let highest_loaded = self
            .entries
            .iter()
            .filter_map(|entry| entry.id.as_millis())
            .max()
            .unwrap_or(i64::MIN);
        self.last_issued_millis = self.last_issued_millis.max(highest_loaded);
        info!(
            "event=store_load module=store status=ok entries={}",
            self.entries.len()
        );
    }

    /// Validates input and appends a new entry.
    ///
    /// # Errors
    /// - `Validation` for empty title/content or an unselected mood.
    /// - `Persistence` when the snapshot write fails.
    pub fn create(
        &mut self,
        title: &str,
        content: &str,
        mood: Option<Mood>,
    ) -> StoreResult<EntryId> {
        let fields = EntryFields::validate(title, content, mood)?;
        let now = self.clock.now();
        let millis = now
            .timestamp_millis()
            .max(self.last_issued_millis.saturating_add(1));
        let id = EntryId::from_millis(millis);

        let mut next = self.entries.clone();
        next.push(JournalEntry::new(id.clone(), fields, now));
        self.commit(next, "entry_create")?;
        self.last_issued_millis = millis;
        Ok(id)
    }

    /// Overwrites title/content/mood of an existing entry.
    ///
    /// # Errors
    /// - `Validation` before the id is even looked up.
    /// - `NotFound` when `id` is not in the collection.
    /// - `Persistence` when the snapshot write fails.
    pub fn update(
        &mut self,
        id: &EntryId,
        title: &str,
        content: &str,
        mood: Option<Mood>,
    ) -> StoreResult<()> {
        let fields = EntryFields::validate(title, content, mood)?;
        let position = self.position(id)?;
        let now = self.clock.now();

        let mut next = self.entries.clone();
        if let Some(entry) = next.get_mut(position) {
            entry.apply_edit(fields, now);
        }
        self.commit(next, "entry_update")
    }

    /// Removes one entry.
    pub fn delete(&mut self, id: &EntryId) -> StoreResult<()> {
        let position = self.position(id)?;
        let mut next = self.entries.clone();
        next.remove(position);
        self.commit(next, "entry_delete")
    }

    /// Empties the collection.
    ///
    /// Returns [`ClearOutcome::AlreadyEmpty`] without writing when there is
    /// nothing to remove.
    pub fn clear_all(&mut self) -> StoreResult<ClearOutcome> {
        if self.entries.is_empty() {
            info!("event=entry_clear module=store status=noop");
            return Ok(ClearOutcome::AlreadyEmpty);
        }
        let removed = self.entries.len();
        self.commit(Vec::new(), "entry_clear")?;
        Ok(ClearOutcome::Cleared(removed))
    }

    /// Current collection; callers sort through the view projector.
    pub fn list(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &EntryId) -> StoreResult<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| {
                warn!("event=entry_lookup module=store status=error error_code=not_found");
                StoreError::NotFound(id.clone())
            })
    }

    fn commit(&mut self, next: Vec<JournalEntry>, event: &'static str) -> StoreResult<()> {
        if let Err(err) = self.snapshots.save(&next) {
            warn!(
                "event={} module=store status=error error_code=persist_failed error={}",
                event, err
            );
            return Err(err.into());
        }
        self.entries = next;
        info!(
            "event={} module=store status=ok entries={}",
            event,
            self.entries.len()
        );
        Ok(())
    }
}

fn without_duplicate_ids(entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
    let loaded = entries.len();
    let mut seen = HashSet::with_capacity(loaded);
    let unique: Vec<JournalEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();
    if unique.len() < loaded {
        warn!(
            "event=store_load module=store status=repaired reason=duplicate_ids dropped={}",
            loaded - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::{EntryStore, StoreError};
    use crate::clock::ManualClock;
    use crate::model::entry::EntryId;
    use crate::model::mood::Mood;
    use crate::repo::kv_store::MemoryKeyValueStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let mut store = EntryStore::open_with_clock(MemoryKeyValueStore::new(), &clock);

        let first = store.create("a", "b", Some(Mood::Good)).unwrap();
        let second = store.create("c", "d", Some(Mood::Good)).unwrap();

        assert_ne!(first, second);
        assert_eq!(second.as_millis(), first.as_millis().map(|value| value + 1));
    }

    #[test]
    fn validation_wins_over_not_found() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let err = store
            .update(&EntryId::from("missing"), "", "body", Some(Mood::Sad))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
