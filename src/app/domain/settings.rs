use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::file_type::FileType;
use crate::app::infrastructure::error::AppError;

/// Settings shared between the controller and every open document.
pub type SharedSettings = Rc<RefCell<SettingsStore>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Last file or directory used in an open/save dialog.
    #[serde(default = "default_last_path")]
    pub last_path: String,

    /// Per-file overrides of the automatic file type detection.
    #[serde(default)]
    pub file_types: HashMap<String, FileType>,

    #[serde(default = "default_max_recent_files")]
    pub max_recent_files: usize,
}

fn default_last_path() -> String {
    dirs::home_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

fn default_max_recent_files() -> usize {
    15
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            last_path: default_last_path(),
            file_types: HashMap::new(),
            max_recent_files: default_max_recent_files(),
        }
    }
}

impl AppSettings {
    /// Get config directory path (cross-platform)
    pub fn config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("cobolpad");
        path
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }
}

/// Process-wide settings: loaded once at startup, written back after every
/// mutation. An in-memory store never touches the disk.
#[derive(Debug)]
pub struct SettingsStore {
    data: AppSettings,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Load settings from the default config path.
    pub fn load() -> Self {
        Self::load_from(AppSettings::get_config_path())
    }

    /// Load settings from disk, or create default if not exists
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    AppSettings::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults and try to save them for next time
                let default = AppSettings::default();
                if let Err(e) = write_settings(&path, &default) {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                default
            }
        };
        Self {
            data,
            path: Some(path),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            data: AppSettings::default(),
            path: None,
        }
    }

    pub fn into_shared(self) -> SharedSettings {
        Rc::new(RefCell::new(self))
    }

    pub fn settings(&self) -> &AppSettings {
        &self.data
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn last_path(&self) -> &str {
        &self.data.last_path
    }

    pub fn set_last_path(&mut self, path: &str) {
        self.data.last_path = path.to_string();
        self.persist();
    }

    pub fn file_type(&self, path: &str) -> Option<FileType> {
        self.data.file_types.get(path).copied()
    }

    pub fn set_file_type(&mut self, path: &str, file_type: FileType) {
        self.data.file_types.insert(path.to_string(), file_type);
        self.persist();
    }

    pub fn max_recent_files(&self) -> usize {
        self.data.max_recent_files
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        match self.path {
            Some(ref path) => write_settings(path, &self.data),
            None => Ok(()),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

fn write_settings(path: &Path, settings: &AppSettings) -> Result<(), AppError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
