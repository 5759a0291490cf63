//! JSON export of the full journal.
//!
//! # Invariants
//! - Export uses the same wire shape as the persisted slot.
//! - File names carry the export date: `mindful-journal-export-YYYY-MM-DD.json`.
//! - An empty journal is never exported.

use crate::model::entry::JournalEntry;
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const EXPORT_FILE_PREFIX: &str = "mindful-journal-export-";

#[derive(Debug)]
pub enum ExportError {
    NothingToExport,
    Encode(serde_json::Error),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToExport => write!(f, "no entries to export"),
            Self::Encode(err) => write!(f, "failed to encode export: {err}"),
            Self::Io(err) => write!(f, "failed to write export: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NothingToExport => None,
            Self::Encode(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Download name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON array of `entries`.
pub fn export_json(entries: &[JournalEntry]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(entries).map_err(ExportError::Encode)
}

/// Writes the export file into `dir` and returns its path.
///
/// # Errors
/// - `NothingToExport` when `entries` is empty; nothing is written.
/// - `Io` when the directory or file cannot be written.
pub fn write_export(
    dir: &Path,
    entries: &[JournalEntry],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let body = export_json(entries)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, body)?;
    info!(
        "event=export module=export status=ok entries={}",
        entries.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, write_export, ExportError};
    use chrono::NaiveDate;

    #[test]
    fn file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(
            export_file_name(date),
            "mindful-journal-export-2024-02-09.json"
        );
    }

    #[test]
    fn empty_journal_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        let err = write_export(dir.path(), &[], date).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
