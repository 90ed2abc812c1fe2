// File: crates/diamond-core/src/document.rs
// Summary: The persisted design bundle and its JSON file I/O.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::highlight::HighlightStore;
use crate::settings::{ColorSettings, DisplaySettings, FrameColorSettings, FrameSizeSettings, SizeSettings};
use crate::types::{DEFAULT_FOLDER_NAME, FILE_EXTENSION};

/// Unit of save/load. Frame records default when absent so pre-frame files still open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub size_settings: SizeSettings,
    pub color_settings: ColorSettings,
    pub display_settings: DisplaySettings,
    pub highlights: HighlightStore,
    #[serde(default)]
    pub frame_size_settings: FrameSizeSettings,
    #[serde(default)]
    pub frame_color_settings: FrameColorSettings,
}

impl Document {
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document; size records above the accepted limits are rejected.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(text)?;
        match doc.size_settings.out_of_range() {
            Some((field, value, max)) => Err(DocumentError::OutOfRange { field, value, max }),
            None => Ok(doc),
        }
    }

    /// Write to `path`, creating the parent directory if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        let io = |source| DocumentError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io)?;
        }
        fs::write(path, json).map_err(io)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }
}

/// `<documents>/Diamonds`, falling back to the working directory.
pub fn default_location() -> PathBuf {
    dirs::document_dir()
        .map(|d| d.join(DEFAULT_FOLDER_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `<dir>/<stem>.dmnds`.
pub fn document_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{FILE_EXTENSION}"))
}
