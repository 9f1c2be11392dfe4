//! File adapter
//!
//! Maps the in-memory table onto the backing CSV file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::store::Table;

use super::{decode_table, encode_table};

/// Loads and saves the roster file
///
/// No locking: two sessions on the same file means last writer wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create an adapter for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create an adapter for the configured data file
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_file)
    }

    /// Load the table
    ///
    /// A missing file yields an empty table. Any other read or parse
    /// failure is returned as is.
    pub fn load(&self) -> Result<Table> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting empty", self.path.display());
                return Ok(Table::new());
            }
            Err(e) => return Err(e.into()),
        };

        let table = decode_table(&contents)?;
        tracing::info!(
            "Loaded {} students from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }

    /// Overwrite the file with the whole table
    ///
    /// Not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&self, table: &Table) -> Result<()> {
        fs::write(&self.path, encode_table(table))?;
        tracing::info!("Saved {} students to {}", table.len(), self.path.display());
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
