//! CSV Data Loader Module
//! Reads the asset valuation file with Polars and caches the parsed table
//! until the file on disk changes.

use super::AssetTable;
use polars::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file '{}' was not found. Please make sure it's in the working directory.", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),
}

/// Identity of a file's contents as seen by `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFingerprint {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileFingerprint {
    pub fn of(path: &Path) -> Result<Self, LoaderError> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Self {
                len: meta.len(),
                modified: meta.modified().ok(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(LoaderError::NotFound(path.to_path_buf()))
            }
            Err(source) => Err(LoaderError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

struct CachedTable {
    fingerprint: FileFingerprint,
    table: Arc<AssetTable>,
}

/// Loads CSV files and keeps one parsed table per path.
pub struct DataLoader {
    cache: HashMap<PathBuf, CachedTable>,
    reads: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            reads: 0,
        }
    }

    /// Return the table for `path`, reading the file only when it is not
    /// cached yet or its fingerprint changed since the last read.
    pub fn load(&mut self, path: &Path) -> Result<Arc<AssetTable>, LoaderError> {
        let fingerprint = match FileFingerprint::of(path) {
            Ok(fp) => fp,
            Err(e) => {
                self.cache.remove(path);
                return Err(e);
            }
        };

        if let Some(cached) = self.cache.get(path) {
            if cached.fingerprint == fingerprint {
                debug!(path = %path.display(), "table cache hit");
                return Ok(Arc::clone(&cached.table));
            }
        }

        let started = Instant::now();
        let table = Arc::new(Self::read_table(path)?);
        self.reads += 1;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded asset table"
        );

        self.cache.insert(
            path.to_path_buf(),
            CachedTable {
                fingerprint,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Number of times a file was actually read from disk.
    pub fn read_count(&self) -> usize {
        self.reads
    }

    fn read_table(path: &Path) -> Result<AssetTable, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            // Scan every row so a late decimal widens an integer column
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        AssetTable::from_frame(df)
    }
}
