use std::path::Path;

use super::paths::has_extension;

/// Extensions the COBOL editor declares as its own.
pub const COBOL_EXTENSIONS: &[&str] = &[".COB", ".CBL", ".PCO", ".CPY", ".SCB"];

/// Separator between filters in a Qt-style filter string.
pub const FILTER_SEPARATOR: &str = ";;";

pub const COBOL_FILES_DESCRIPTION: &str = "Cobol files";
pub const OTHER_FILES_DESCRIPTION: &str = "Other text files";

/// Which filter the user had selected when confirming a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Cobol,
    OtherText,
}

impl FilterKind {
    /// Extension appended to a save-as name that has none.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Self::Cobol => ".cbl",
            Self::OtherText => ".txt",
        }
    }

    /// Map a dialog's selected filter index back to a kind. The COBOL filter is
    /// always first; anything else (including toolkit-added entries) is "other".
    pub fn from_index(index: i32) -> Self {
        if index == 0 { Self::Cobol } else { Self::OtherText }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub kind: FilterKind,
    pub description: &'static str,
    /// Glob patterns without the leading `*`, e.g. `.cbl`. Empty means all files.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn cobol() -> Self {
        let lower = COBOL_EXTENSIONS.iter().map(|e| e.to_lowercase());
        let upper = COBOL_EXTENSIONS.iter().map(|e| e.to_string());
        Self {
            kind: FilterKind::Cobol,
            description: COBOL_FILES_DESCRIPTION,
            extensions: lower.chain(upper).collect(),
        }
    }

    pub fn other_text() -> Self {
        Self {
            kind: FilterKind::OtherText,
            description: OTHER_FILES_DESCRIPTION,
            extensions: Vec::new(),
        }
    }

    /// Qt-style label: `Cobol files (*.cob *.cbl ...)`.
    pub fn label(&self) -> String {
        if self.extensions.is_empty() {
            return format!("{} (*)", self.description);
        }
        let globs: Vec<String> = self.extensions.iter().map(|e| format!("*{}", e)).collect();
        format!("{} ({})", self.description, globs.join(" "))
    }

    /// FLTK native chooser line: `Description\tPattern`.
    pub fn fltk_line(&self) -> String {
        if self.extensions.is_empty() {
            return format!("{}\t*", self.description);
        }
        let exts: Vec<&str> = self.extensions.iter().map(|e| e.trim_start_matches('.')).collect();
        format!("{}\t*.{{{}}}", self.description, exts.join(","))
    }
}

/// The filter set shown by the open and save-as dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilters {
    filters: Vec<FileFilter>,
}

impl Default for FileFilters {
    fn default() -> Self {
        Self {
            filters: vec![FileFilter::cobol(), FileFilter::other_text()],
        }
    }
}

impl FileFilters {
    /// Qt-style combined filter string joined by `;;`.
    pub fn qt_filter(&self) -> String {
        self.filters
            .iter()
            .map(FileFilter::label)
            .collect::<Vec<_>>()
            .join(FILTER_SEPARATOR)
    }

    /// Multi-line filter string for FLTK's native chooser.
    pub fn fltk_filter(&self) -> String {
        self.filters
            .iter()
            .map(FileFilter::fltk_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Append the default extension for `kind` when `path` has none.
pub fn ensure_extension(path: &str, kind: FilterKind) -> String {
    if has_extension(path) {
        path.to_string()
    } else {
        format!("{}{}", path, kind.default_extension())
    }
}

/// Guess a mimetype from the file extension.
pub fn guess_mimetype(path: &str) -> Option<String> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "cob" | "cbl" | "pco" | "cpy" | "scb" => "text/x-cobol",
        "txt" | "lst" | "log" => "text/plain",
        "json" => "application/json",
        "xml" => "text/xml",
        "sh" => "application/x-sh",
        "html" | "htm" => "text/html",
        _ => return None,
    };
    Some(mime.to_string())
}
