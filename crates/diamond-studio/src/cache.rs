// File: crates/diamond-studio/src/cache.rs
// Summary: Remembers the last active document path across runs.
// Notes:
// - Stored as `{"last_file_path": ...}` under the per-user data directory.
// - Cache problems never reach the user; they are logged and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const APP_DIR_NAME: &str = "DiamondStudio";
pub const CACHE_FILE_NAME: &str = "last_file.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheRecord {
    last_file_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct PathCache {
    file: PathBuf,
}

impl PathCache {
    pub fn new(file: impl Into<PathBuf>) -> Self { Self { file: file.into() } }

    /// `<data_dir>/DiamondStudio/last_file.json`.
    pub fn default_file() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR_NAME).join(CACHE_FILE_NAME))
    }

    pub fn open_default() -> Option<Self> { Self::default_file().map(Self::new) }

    pub fn file(&self) -> &Path { &self.file }

    /// Last recorded path; `None` when nothing usable is cached.
    pub fn read(&self) -> Option<PathBuf> {
        match self.try_read() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("ignoring path cache: {e:#}");
                None
            }
        }
    }

    pub fn write(&self, path: &Path) {
        if let Err(e) = self.try_write(path) {
            tracing::warn!("could not update path cache: {e:#}");
        }
    }

    fn try_read(&self) -> Result<Option<PathBuf>> {
        if !self.file.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.file)
            .with_context(|| format!("reading {}", self.file.display()))?;
        let record: CacheRecord = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.file.display()))?;
        Ok(record.last_file_path)
    }

    fn try_write(&self, path: &Path) -> Result<()> {
        if let Some(dir) = self.file.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let record = CacheRecord { last_file_path: Some(path.to_path_buf()) };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.file, json).with_context(|| format!("writing {}", self.file.display()))?;
        tracing::debug!(cache = %self.file.display(), "recorded last file");
        Ok(())
    }
}
