use std::fs;
use std::path::{Path, PathBuf};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Normalize a path into the form used as a document identity.
///
/// Existing files are canonicalized (symlinks and `..` resolved). For a file
/// that doesn't exist yet, its parent directory is canonicalized instead, and
/// failing that the path is made absolute against the current directory.
pub fn normalize_path(path: &str) -> String {
    let p = Path::new(path);
    let canonical_parent = || -> std::io::Result<PathBuf> {
        let name = p
            .file_name()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::InvalidInput))?;
        let parent = match p.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(fs::canonicalize(parent)?.join(name))
    };
    fs::canonicalize(p)
        .or_else(|_| canonical_parent())
        .or_else(|_| std::path::absolute(p))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// True when the last path component has an extension (`foo.cbl`, `foo.`).
/// Leading-dot names such as `.profile` count as extension-less.
pub fn has_extension(path: &str) -> bool {
    Path::new(path).extension().is_some()
}

/// Directory to seed a dialog with: the path itself if it is a directory,
/// otherwise its parent.
pub fn dialog_directory(path: &str) -> String {
    let p = Path::new(path);
    if p.is_dir() {
        return path.to_string();
    }
    p.parent()
        .filter(|d| !d.as_os_str().is_empty())
        .map(|d| d.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
