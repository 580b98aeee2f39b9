use std::fs;

use super::file_type::{FileType, TextEncoding};
use super::settings::SharedSettings;
use crate::app::infrastructure::error::Result;
use crate::app::services::classifier::get_file_type;
use crate::app::services::file_filters::guess_mimetype;
use crate::app::services::paths::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// A source file open in the COBOL editor.
///
/// Identity is the normalized file path. The file type is never cached on the
/// document: it is recomputed from the file on every read so that a stored
/// override (or a content change on disk) is always honoured.
#[derive(Debug)]
pub struct Document {
    pub id: DocumentId,
    pub file_path: String,
    pub display_name: String,
    pub mimetype: Option<String>,
    pub encoding: TextEncoding,
    pub cursor_position: i32,
    text: String,
    dirty: bool,
    settings: SharedSettings,
}

impl Document {
    /// Bind a new document to `path`, loading its content from disk.
    pub fn open(
        id: DocumentId,
        path: &str,
        name: String,
        mimetype: Option<String>,
        settings: SharedSettings,
    ) -> Result<Self> {
        let bytes = fs::read(path)?;
        let (encoding, text) = TextEncoding::detect_and_decode(&bytes);
        Ok(Self {
            id,
            file_path: path.to_string(),
            display_name: name,
            mimetype,
            encoding,
            cursor_position: 0,
            text,
            dirty: false,
            settings,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the editor content; marks the document dirty when it changed.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Write the content to the bound path with the document's encoding.
    pub fn save(&mut self) -> Result<()> {
        self.write_to(&self.file_path)?;
        self.mark_clean();
        Ok(())
    }

    /// Write the content to `path` without changing the document.
    pub fn write_to(&self, path: &str) -> Result<()> {
        let bytes = self.encoding.encode(&self.text)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Point the document at a new path (save-as), refreshing the derived
    /// display name and mimetype.
    pub fn rebind(&mut self, path: &str) {
        self.file_path = path.to_string();
        self.display_name = extract_filename(path);
        self.mimetype = guess_mimetype(path);
    }

    pub fn file_type(&self) -> FileType {
        get_file_type(&self.settings.borrow(), &self.file_path, self.encoding)
    }

    /// Persist `file_type` for this path, overriding automatic detection.
    pub fn set_file_type(&self, file_type: FileType) {
        self.settings
            .borrow_mut()
            .set_file_type(&self.file_path, file_type);
    }
}
