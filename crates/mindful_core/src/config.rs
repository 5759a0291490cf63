//! Runtime configuration for front ends.
//!
//! # Responsibility
//! - Resolve where the journal database and logs live.
//! - Normalize the requested log level.
//!
//! # Invariants
//! - `data_dir` is always absolute once resolved.
//! - Precedence: explicit value, then `MINDFUL_JOURNAL_DIR`, then
//!   `$HOME/.mindful_journal`, then the system temp dir.

use crate::logging::{default_log_level, normalize_level};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MINDFUL_JOURNAL_DIR";
/// SQLite file holding the key-value slot table.
pub const DB_FILE_NAME: &str = "mindful_journal.sqlite3";
const DEFAULT_DIR_NAME: &str = ".mindful_journal";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    pub data_dir: PathBuf,
    pub log_level: &'static str,
}

impl JournalConfig {
    /// Resolves configuration from explicit values and the process environment.
    ///
    /// # Errors
    /// - Returns an error when `log_level` is unsupported.
    /// - Returns an error when a relative directory cannot be made absolute.
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<&str>) -> Result<Self, String> {
        Self::resolve_with(data_dir, log_level, |key| std::env::var(key).ok())
    }

    /// Same as [`JournalConfig::resolve`] with an injectable environment lookup.
    pub fn resolve_with(
        data_dir: Option<PathBuf>,
        log_level: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let log_level = match log_level {
            Some(level) => normalize_level(level)?,
            None => default_log_level(),
        };

        let non_empty = |value: String| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
        };
        let chosen = data_dir
            .or_else(|| env(DATA_DIR_ENV).and_then(non_empty))
            .or_else(|| {
                env("HOME")
                    .and_then(non_empty)
                    .map(|home| home.join(DEFAULT_DIR_NAME))
            })
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DIR_NAME));

        Ok(Self {
            data_dir: absolutize(&chosen)?,
            log_level,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| format!("cannot resolve data dir `{}`: {err}", path.display()))
}
