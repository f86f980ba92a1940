//! Persistence for the daily check-in key.
//!
//! The only state that outlives a session is the date of the last check-in.
//! It is a single scalar with last-write-wins semantics; there is no
//! transaction or locking. [`CheckInStore`] abstracts where it lives.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Date-key format, matching an ISO-8601 calendar date.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while reading or writing the check-in key.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("check-in store I/O failed: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The stored key is not a calendar date.
    #[error("invalid check-in date key: {value:?}")]
    InvalidDate {
        /// The raw stored value.
        value: String,
    },
}

/// Where the last check-in date is kept.
pub trait CheckInStore: fmt::Debug {
    /// Read the stored date key. `Ok(None)` means never checked in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store is unreadable or corrupt.
    fn load(&self) -> Result<Option<NaiveDate>, StoreError>;

    /// Overwrite the stored date key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    fn save(&mut self, date: NaiveDate) -> Result<(), StoreError>;
}

/// In-process store. Forgets everything when the session ends.
#[derive(Debug, Clone, Default)]
pub struct MemoryCheckInStore {
    date: Option<NaiveDate>,
}

impl MemoryCheckInStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self { date: None }
    }

    /// Create a store pre-seeded with a date key.
    pub const fn with_date(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }
}

impl CheckInStore for MemoryCheckInStore {
    fn load(&self) -> Result<Option<NaiveDate>, StoreError> {
        Ok(self.date)
    }

    fn save(&mut self, date: NaiveDate) -> Result<(), StoreError> {
        self.date = Some(date);
        Ok(())
    }
}

/// File-backed store holding a single `YYYY-MM-DD` line.
#[derive(Debug, Clone)]
pub struct FileCheckInStore {
    path: PathBuf,
}

impl FileCheckInStore {
    /// Use the file at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckInStore for FileCheckInStore {
    fn load(&self) -> Result<Option<NaiveDate>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let value = contents.trim();
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Some)
            .map_err(|_parse| StoreError::InvalidDate {
                value: value.to_owned(),
            })
    }

    fn save(&mut self, date: NaiveDate) -> Result<(), StoreError> {
        std::fs::write(&self.path, date.format(DATE_KEY_FORMAT).to_string())?;
        Ok(())
    }
}
