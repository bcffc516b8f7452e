//! JSON-lines-backed [`Store`] (specification §13, §6).
//!
//! Stands in for a real SQL table: each `upsert` rewrites the file with one
//! line per distinct `(ticker, pattern, as_of)` key, last-writer-wins on the
//! other columns, so persisting the same signal twice leaves the file in an
//! identical state to persisting it once.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::collaborators::Store;
use crate::error::{Result, ScanError};
use crate::persisted::PersistedSignal;

type Key = (String, String, chrono::DateTime<chrono::Utc>);

pub struct JsonLinesStore {
    path: PathBuf,
    rows: Mutex<BTreeMap<Key, PersistedSignal>>,
}

impl JsonLinesStore {
    /// Opens `path`, loading any rows already persisted there. The file is
    /// created on the first `upsert` if it does not yet exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut rows = BTreeMap::new();
        if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|e| ScanError::Store(format!("could not read store file: {e}")))?;
            for line in contents.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let row: PersistedSignal =
                    serde_json::from_str(line).map_err(|e| ScanError::Store(e.to_string()))?;
                rows.insert(key_of(&row), row);
            }
        }
        Ok(Self {
            path,
            rows: Mutex::new(rows),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn key_of(row: &PersistedSignal) -> Key {
    (row.ticker.clone(), row.pattern.clone(), row.as_of)
}

impl Store for JsonLinesStore {
    fn upsert(&self, new_rows: &[PersistedSignal]) -> Result<()> {
        let mut rows = self.rows.lock().expect("store mutex poisoned");
        for row in new_rows {
            rows.insert(key_of(row), row.clone());
        }

        let mut out = String::new();
        for row in rows.values() {
            out.push_str(
                &serde_json::to_string(row).map_err(|e| ScanError::Store(e.to_string()))?,
            );
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|e| ScanError::Store(format!("could not write store file: {e}")))
    }
}
