//! File-backed score store.
//!
//! The file is a flat JSON object mapping keys to scores:
//!
//! ```json
//! { "higherOrLowerHighScore": 12 }
//! ```
//!
//! Values written as strings (the browser store keeps everything as
//! text) are accepted on read. Writes replace the whole file via a
//! temporary sibling and a rename. A file that cannot be parsed is
//! overwritten on the next write rather than blocking it.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Result, ScoreStore, StoreError};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredScore {
    Number(u32),
    Text(String),
}

/// Score store persisted to a JSON file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the file at `path`. It is created on first write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().into(),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, StoredScore>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        let value = match self.load()?.remove(key) {
            Some(StoredScore::Number(n)) => Some(n),
            Some(StoredScore::Text(text)) => match text.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!(path = %self.path.display(), key, value = %text, "Ignoring non-numeric stored score");
                    None
                }
            },
            None => None,
        };
        Ok(value)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StoreError::Format(e)) => {
                warn!(path = %self.path.display(), error = %e, "Replacing malformed score file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), StoredScore::Number(value));

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
