//! Journal domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation next to the types it protects.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod entry;
pub mod mood;
