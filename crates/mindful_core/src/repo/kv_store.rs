//! Key-value slot backends.
//!
//! # Responsibility
//! - Provide `localStorage`-like get/set/remove over string keys.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set_item` replaces the whole value for a key.
//! - Missing keys read as `None`, never as an error.

use super::PersistenceResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;

/// String-keyed storage slot contract.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> PersistenceResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> PersistenceResult<()>;
    fn remove_item(&self, key: &str) -> PersistenceResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> PersistenceResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> PersistenceResult<()> {
        (**self).remove_item(key)
    }
}

/// SQLite-backed slot store over the `kv_store` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`], which guarantees
    /// the `kv_store` table exists.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get_item(&self, key: &str) -> PersistenceResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> PersistenceResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-local slot store for tests and embedding without a database.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> PersistenceResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
    use crate::db::open_db_in_memory;

    #[test]
    fn sqlite_store_upserts_and_removes() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteKeyValueStore::new(&conn);

        assert_eq!(store.get_item("slot").unwrap(), None);
        store.set_item("slot", "one").unwrap();
        store.set_item("slot", "two").unwrap();
        assert_eq!(store.get_item("slot").unwrap().as_deref(), Some("two"));

        store.remove_item("slot").unwrap();
        assert_eq!(store.get_item("slot").unwrap(), None);
    }

    #[test]
    fn memory_store_is_usable_through_a_reference() {
        let memory = MemoryKeyValueStore::new();
        let borrowed = &memory;
        borrowed.set_item("k", "v").unwrap();
        assert_eq!(memory.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
