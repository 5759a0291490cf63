//! Entry composer: draft form state and edit mode.
//!
//! # Responsibility
//! - Hold the title/content/mood being written and whether it edits an
//!   existing entry.
//! - Turn a submit into a store create or update plus a user notice.
//!
//! # Invariants
//! - A successful submit always resets the draft and leaves edit mode.
//! - A rejected submit keeps the draft so the user can fix it.

use crate::clock::Clock;
use crate::model::entry::{EntryId, JournalEntry};
use crate::model::mood::Mood;
use crate::repo::kv_store::KeyValueStore;
use crate::service::entry_store::EntryStore;
use crate::service::notice::{Notice, ENTRY_SAVED, ENTRY_UPDATED};

/// Writing prompts offered next to the editor.
pub const JOURNAL_PROMPTS: &[&str] = &[
    "What are three things you're grateful for today?",
    "What's something that made you smile recently?",
    "What's a challenge you're currently facing, and how might you approach it?",
    "How did you take care of yourself today?",
    "What's something you're looking forward to?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryComposer {
    pub title: String,
    pub content: String,
    mood: Option<Mood>,
    editing: Option<EntryId>,
}

impl EntryComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
    }

    /// Currently selected mood; `None` shows the placeholder.
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Id of the entry being edited, if any.
    pub fn editing(&self) -> Option<&EntryId> {
        self.editing.as_ref()
    }

    /// Prepends `prompt` and a blank line to the content.
    ///
    /// Returns the cursor position (in characters) just after the inserted
    /// prompt.
    pub fn apply_prompt(&mut self, prompt: &str) -> usize {
        self.content = format!("{prompt}\n\n{}", self.content);
        prompt.chars().count() + 2
    }

    /// Loads `entry` into the draft and switches to edit mode.
    ///
    /// An unrecognized stored mood leaves the mood unselected.
    pub fn begin_edit(&mut self, entry: &JournalEntry) {
        self.title = entry.title.clone();
        self.content = entry.content.clone();
        self.mood = entry.mood.known();
        self.editing = Some(entry.id.clone());
    }

    /// Clears the text fields and leaves edit mode. The mood stays selected.
    pub fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.editing = None;
    }

    /// Saves the draft through `store` and reports the outcome.
    pub fn submit<K: KeyValueStore, C: Clock>(&mut self, store: &mut EntryStore<K, C>) -> Notice {
        let result = match self.editing.as_ref() {
            Some(id) => store
                .update(id, &self.title, &self.content, self.mood)
                .map(|()| ENTRY_UPDATED),
            None => store
                .create(&self.title, &self.content, self.mood)
                .map(|_| ENTRY_SAVED),
        };

        match result {
            Ok(message) => {
                self.reset();
                Notice::success(message)
            }
            Err(err) => Notice::from(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EntryComposer;

    #[test]
    fn prompt_is_prepended_with_blank_line() {
        let mut composer = EntryComposer::new();
        composer.set_content("draft");

        let cursor = composer.apply_prompt("How are you?");

        assert_eq!(composer.content, "How are you?\n\ndraft");
        assert_eq!(cursor, "How are you?".len() + 2);
    }
}
