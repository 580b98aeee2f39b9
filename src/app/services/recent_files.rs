use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentFilesData {
    #[serde(default)]
    files: Vec<String>,
}

/// Ordered list of recently opened files, most recent first.
///
/// Re-opening a file moves it to the front instead of duplicating it, and the
/// list never grows past `max_recent_files`: the oldest entries fall off the end.
/// When backed by a file, every mutation is written through.
#[derive(Debug)]
pub struct RecentFilesManager {
    files: Vec<String>,
    max_recent_files: usize,
    storage: Option<PathBuf>,
}

impl RecentFilesManager {
    /// Returns the default storage path: config_dir/cobolpad/recent_files.json
    pub fn default_storage_path() -> PathBuf {
        AppSettings::config_dir().join("recent_files.json")
    }

    pub fn in_memory(max_recent_files: usize) -> Self {
        Self {
            files: Vec::new(),
            max_recent_files: max_recent_files.max(1),
            storage: None,
        }
    }

    /// Load the list from `path`. A missing or unreadable file yields an empty list.
    pub fn load(path: impl Into<PathBuf>, max_recent_files: usize) -> Self {
        let path = path.into();
        let mut files = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<RecentFilesData>(&json) {
                Ok(data) => data.files,
                Err(e) => {
                    tracing::warn!("Failed to parse recent files: {}. Starting empty.", e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        let max_recent_files = max_recent_files.max(1);
        files.truncate(max_recent_files);
        Self {
            files,
            max_recent_files,
            storage: Some(path),
        }
    }

    /// Record `path` as the most recently opened file.
    pub fn open_file(&mut self, path: &str) {
        self.files.retain(|f| f != path);
        self.files.insert(0, path.to_string());
        self.files.truncate(self.max_recent_files);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.persist();
    }

    /// Recent files that still exist on disk, most recent first.
    pub fn recent_files(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| Path::new(f.as_str()).exists())
            .cloned()
            .collect()
    }

    /// The raw list, including entries whose files were removed.
    pub fn entries(&self) -> &[String] {
        &self.files
    }

    pub fn max_recent_files(&self) -> usize {
        self.max_recent_files
    }

    pub fn save(&self) -> Result<(), AppError> {
        let Some(ref path) = self.storage else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = RecentFilesData {
            files: self.files.clone(),
        };
        fs::write(path, serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save recent files: {}", e);
        }
    }
}
