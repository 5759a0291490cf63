//! Single-action confirmation for destructive operations.
//!
//! A request only records what would happen; nothing touches the store until
//! `confirm` runs, and each request runs at most once.

use crate::clock::Clock;
use crate::model::entry::EntryId;
use crate::repo::kv_store::KeyValueStore;
use crate::service::entry_store::{ClearOutcome, EntryStore};
use crate::service::notice::{Notice, ENTRIES_CLEARED, ENTRY_DELETED, NOTHING_TO_CLEAR};
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Delete(EntryId),
    ClearAll,
}

impl PendingAction {
    /// Question shown by the confirmation prompt.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Delete(_) => "Are you sure you want to delete this entry?",
            Self::ClearAll => {
                "Are you sure you want to delete all journal entries? This cannot be undone."
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingAction>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending action and returns the prompt text.
    pub fn request(&mut self, action: PendingAction) -> &'static str {
        let prompt = action.prompt();
        self.pending = Some(action);
        prompt
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            info!("event=confirm module=confirm status=cancelled");
        }
    }

    /// Runs the pending action, if any.
    ///
    /// Returns `None` when nothing was pending.
    pub fn confirm<K: KeyValueStore, C: Clock>(
        &mut self,
        store: &mut EntryStore<K, C>,
    ) -> Option<Notice> {
        let action = self.pending.take()?;
        let notice = match action {
            PendingAction::Delete(id) => match store.delete(&id) {
                Ok(()) => Notice::success(ENTRY_DELETED),
                Err(err) => Notice::from(&err),
            },
            PendingAction::ClearAll => match store.clear_all() {
                Ok(ClearOutcome::Cleared(_)) => Notice::success(ENTRIES_CLEARED),
                Ok(ClearOutcome::AlreadyEmpty) => Notice::info(NOTHING_TO_CLEAR),
                Err(err) => Notice::from(&err),
            },
        };
        Some(notice)
    }
}
