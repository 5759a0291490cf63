//! Core use-case services.
//!
//! # Responsibility
//! - Own the entry collection and orchestrate persistence.
//! - Derive listings, weekly insights and affirmations from it.
//! - Keep front ends decoupled from storage details.

pub mod affirmation;
pub mod composer;
pub mod confirm;
pub mod entry_store;
pub mod export;
pub mod insights;
pub mod notice;
pub mod view;
