//! Persistence for background frequency tables.
//!
//! The workflow never touches cache files directly; it goes through a [`BackgroundStore`]
//! so callers decide where tables live. Artifacts are never invalidated: once a table is
//! stored for a key it is reused until the artifact is removed or a rebuild is requested.

use super::config::BackgroundScope;
use super::error::EngineError;
use crate::core::io::tables::{self, TableError};
use crate::core::models::background::BackgroundFrequencyTable;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;
use tracing::debug;

/// Names one cached background table.
///
/// The identifier is part of the key for both scopes, so a corpus-wide table built while
/// analysing one structure is not picked up when analysing another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub identifier: String,
    pub scope: BackgroundScope,
}

impl ScopeKey {
    pub fn new(identifier: impl Into<String>, scope: BackgroundScope) -> Self {
        Self {
            identifier: identifier.into(),
            scope,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_{}_background.csv", self.identifier, self.scope)
    }
}

pub trait BackgroundStore: Send + Sync {
    fn load(&self, key: &ScopeKey) -> Result<Option<BackgroundFrequencyTable>, EngineError>;
    fn save(&self, key: &ScopeKey, table: &BackgroundFrequencyTable) -> Result<(), EngineError>;
}

/// Keeps one `Residue,Frequency` CSV per key in a directory.
///
/// Writes go to a temporary file in the same directory and are renamed into place, so
/// concurrent builders of the same key never leave a torn file behind.
#[derive(Debug, Clone)]
pub struct CsvBackgroundStore {
    dir: PathBuf,
}

impl CsvBackgroundStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &ScopeKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl BackgroundStore for CsvBackgroundStore {
    fn load(&self, key: &ScopeKey) -> Result<Option<BackgroundFrequencyTable>, EngineError> {
        let path = self.path_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EngineError::io(path, e)),
        };
        let table = tables::read_background(BufReader::new(file)).map_err(|e| match e {
            TableError::Csv(_) => EngineError::csv(&path, e),
            other => EngineError::InvalidCache {
                path: path.clone(),
                reason: other.to_string(),
            },
        })?;
        debug!(path = %path.display(), "Loaded cached background table.");
        Ok(Some(table))
    }

    fn save(&self, key: &ScopeKey, table: &BackgroundFrequencyTable) -> Result<(), EngineError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|e| EngineError::io(&self.dir, e))?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| EngineError::io(&self.dir, e))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            tables::write_background(table, &mut writer)
                .map_err(|e| EngineError::csv(&path, e))?;
            writer.flush().map_err(|e| EngineError::io(&path, e))?;
        }
        temp.persist(&path)
            .map_err(|e| EngineError::io(&path, e.error))?;
        debug!(path = %path.display(), "Stored background table.");
        Ok(())
    }
}

/// Process-local store, for embedding the engine without touching the file system.
#[derive(Debug, Default)]
pub struct MemoryBackgroundStore {
    tables: Mutex<HashMap<ScopeKey, BackgroundFrequencyTable>>,
}

impl MemoryBackgroundStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single insert, so a poisoned map is still consistent.
    fn tables(&self) -> MutexGuard<'_, HashMap<ScopeKey, BackgroundFrequencyTable>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.tables().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BackgroundStore for MemoryBackgroundStore {
    fn load(&self, key: &ScopeKey) -> Result<Option<BackgroundFrequencyTable>, EngineError> {
        Ok(self.tables().get(key).cloned())
    }

    fn save(&self, key: &ScopeKey, table: &BackgroundFrequencyTable) -> Result<(), EngineError> {
        self.tables().insert(key.clone(), table.clone());
        Ok(())
    }
}
