use std::fs;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::app::domain::file_type::{FileType, TextEncoding};
use crate::app::domain::settings::SettingsStore;

fn module_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\bPROCEDURE\s+DIVISION\s+USING\b").expect("valid module regex")
    })
}

/// Classify source text: a procedure division taking parameters marks a module.
pub fn detect_file_type(source: &str) -> FileType {
    if module_pattern().is_match(source) {
        FileType::Module
    } else {
        FileType::Executable
    }
}

/// File type of `path`: a stored override wins, otherwise the file content
/// is read with `encoding` and classified. Unreadable files are executables.
pub fn get_file_type(settings: &SettingsStore, path: &str, encoding: TextEncoding) -> FileType {
    if let Some(file_type) = settings.file_type(path) {
        return file_type;
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("cannot read {} for classification: {}", path, e);
            return FileType::Executable;
        }
    };
    match encoding.decode(&bytes) {
        Ok(text) => detect_file_type(&text),
        Err(_) => detect_file_type(&String::from_utf8_lossy(&bytes)),
    }
}
