use crate::app::services::file_filters::{FileFilters, FilterKind};
use crate::app::services::new_file::NewFileRequest;

/// Result of a confirmed save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSelection {
    pub path: String,
    pub filter: FilterKind,
}

/// Answer to the unsaved-changes question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal dialogs the file controller needs. Every method blocks until the user
/// answers; `None` / `false` means the user cancelled or dismissed the dialog.
pub trait Prompter {
    /// Show the new-file wizard.
    fn new_file(&mut self, directory: &str) -> Option<NewFileRequest>;

    fn open_file(&mut self, title: &str, directory: &str, filters: &FileFilters) -> Option<String>;

    fn save_file(
        &mut self,
        title: &str,
        initial_path: &str,
        filters: &FileFilters,
    ) -> Option<SaveSelection>;

    /// Yes/No question defaulting to No.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Ask what to do with a document that has unsaved changes. Dismissing
    /// the dialog counts as `Cancel`.
    fn unsaved_changes(&mut self, display_name: &str) -> UnsavedChoice;
}
