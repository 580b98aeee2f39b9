use crate::app::domain::document::DocumentId;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::SharedSettings;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::notify::Notifier;
use crate::app::infrastructure::prompt::{Prompter, UnsavedChoice};
use crate::app::services::file_filters::{FileFilters, ensure_extension, guess_mimetype};
use crate::app::services::new_file::create_new_file;
use crate::app::services::paths::{dialog_directory, extract_filename, normalize_path};
use crate::app::services::recent_files::RecentFilesManager;

use super::tabs::TabManager;

pub const APP_NAME: &str = "CobolPad";

/// Which page of the main window is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Edit,
}

/// Controls file operations (new file, open, save as, recent files, quit).
///
/// Every dialog goes through the `Prompter`; a cancelled dialog is a silent
/// no-op, never an error. Errors are only returned for real I/O failures.
pub struct FileController<P: Prompter, N: Notifier> {
    prompter: P,
    notifier: N,
    settings: SharedSettings,
    filters: FileFilters,
    pub tabs: TabManager,
    pub recent_files: RecentFilesManager,
    page: Page,
}

impl<P: Prompter, N: Notifier> FileController<P, N> {
    pub fn new(
        prompter: P,
        notifier: N,
        settings: SharedSettings,
        recent_files: RecentFilesManager,
    ) -> Self {
        let tabs = TabManager::new(settings.clone());
        Self {
            prompter,
            notifier,
            settings,
            filters: FileFilters::default(),
            tabs,
            recent_files,
            page: Page::Home,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    fn show_edit_page(&mut self) {
        self.page = Page::Edit;
    }

    fn record_recent(&mut self, path: &str) {
        self.recent_files.open_file(path);
        self.notifier.notify(Message::RecentFilesUpdated);
    }

    /// Show the new file wizard and open the created file.
    pub fn request_new(&mut self) -> Result<Option<DocumentId>> {
        let directory = dialog_directory(self.settings.borrow().last_path());
        let Some(request) = self.prompter.new_file(&directory) else {
            return Ok(None);
        };

        let target = request.target_path();
        let overwrite = if target.exists() {
            let question = format!(
                "{} already exists. Do you want to replace it?",
                target.display()
            );
            if !self.prompter.confirm("File already exists", &question) {
                return Ok(None);
            }
            true
        } else {
            false
        };

        let path = create_new_file(&request, overwrite)?;
        self.open_file(&path.to_string_lossy()).map(Some)
    }

    /// Prompt the user for a file to open and open it.
    pub fn request_open(&mut self) -> Result<Option<DocumentId>> {
        let directory = dialog_directory(self.settings.borrow().last_path());
        let Some(path) = self
            .prompter
            .open_file("Open a file", &directory, &self.filters)
        else {
            return Ok(None);
        };
        let id = self.open_file(&path)?;
        self.settings.borrow_mut().set_last_path(&path);
        Ok(Some(id))
    }

    /// Open a file in the edit view. If an editor is already open for the
    /// file, it just gets the focus.
    pub fn open_file(&mut self, path: &str) -> Result<DocumentId> {
        let path = normalize_path(path);
        let name = extract_filename(&path);
        let mimetype = guess_mimetype(&path);

        let id = match self.tabs.index_from_filename(&path) {
            Some(index) => {
                self.tabs.set_current_index(index);
                self.tabs.documents()[index].id
            }
            None => {
                tracing::debug!(
                    "opening file path={}, name={}, mimetype={:?}",
                    path,
                    name,
                    mimetype
                );
                self.tabs.add_editor(&path, name, mimetype)?
            }
        };
        self.show_edit_page();
        self.record_recent(&path);
        Ok(id)
    }

    /// Save the current editor to its own path.
    pub fn save(&mut self) -> Result<()> {
        self.tabs.save_current(None)?;
        Ok(())
    }

    /// Save the current editor content under a new name.
    ///
    /// Returns the path written, or `None` when the dialog was cancelled.
    pub fn save_as(&mut self) -> Result<Option<String>> {
        let Some(initial) = self.tabs.current().map(|d| d.file_path.clone()) else {
            return Ok(None);
        };
        let Some(selection) = self
            .prompter
            .save_file("Save file as...", &initial, &self.filters)
        else {
            return Ok(None);
        };
        if selection.path.is_empty() {
            return Ok(None);
        }

        let path = normalize_path(&ensure_extension(&selection.path, selection.filter));
        tracing::info!("saving editor content as: {}", path);
        let Some(id) = self.tabs.save_current(Some(&path))? else {
            return Ok(None);
        };
        self.record_recent(&path);
        self.notifier.notify(Message::ActiveTabChanged(id));
        self.settings.borrow_mut().set_last_path(&path);
        Ok(Some(path))
    }

    /// Ask for confirmation before quitting, then resolve every tab with
    /// unsaved changes. Returns true when the caller should exit.
    pub fn quit(&mut self) -> Result<bool> {
        let confirmed = self.prompter.confirm(
            &format!("Quit {}?", APP_NAME),
            &format!("Are you sure you want to quit {}?", APP_NAME),
        );
        if !confirmed {
            return Ok(false);
        }
        for id in self.tabs.dirty_ids() {
            if !self.resolve_unsaved(id)? {
                return Ok(false);
            }
        }
        tracing::debug!("quit action triggered");
        Ok(true)
    }

    /// Ask what to do with a dirty document. Returns false when the user
    /// cancelled; a clean or unknown document needs no answer.
    fn resolve_unsaved(&mut self, id: DocumentId) -> Result<bool> {
        let Some(doc) = self.tabs.doc_by_id(id) else {
            return Ok(true);
        };
        if !doc.is_dirty() {
            return Ok(true);
        }
        match self.prompter.unsaved_changes(&doc.display_name) {
            UnsavedChoice::Save => {
                self.tabs.save(id)?;
                Ok(true)
            }
            UnsavedChoice::Discard => Ok(true),
            UnsavedChoice::Cancel => Ok(false),
        }
    }

    /// Open an entry of the recent files menu.
    pub fn open_recent(&mut self, path: &str) -> Result<DocumentId> {
        self.open_file(path).inspect_err(|e| {
            if let AppError::Io(_) = e {
                tracing::warn!("recent file {} could not be opened: {}", path, e);
            }
        })
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
        self.notifier.notify(Message::RecentFilesUpdated);
    }

    /// Focus an open tab.
    pub fn switch_to(&mut self, id: DocumentId) {
        if self.tabs.active_id() != Some(id) && self.tabs.doc_by_id(id).is_some() {
            self.tabs.set_active(id);
            self.notifier.notify(Message::ActiveTabChanged(id));
        }
    }

    /// Close a tab; the home page is shown once the last tab is gone.
    ///
    /// A document with unsaved changes is only closed once the user chose to
    /// save or discard them. Returns false when the tab stays open.
    pub fn close_tab(&mut self, id: DocumentId) -> Result<bool> {
        if !self.resolve_unsaved(id)? {
            return Ok(false);
        }
        self.tabs.close(id);
        match self.tabs.active_id() {
            Some(active) => self.notifier.notify(Message::ActiveTabChanged(active)),
            None => self.page = Page::Home,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::file_type::FileType;
    use crate::app::domain::settings::SettingsStore;
    use crate::app::infrastructure::prompt::{SaveSelection, UnsavedChoice};
    use crate::app::services::file_filters::FilterKind;
    use crate::app::services::new_file::{NewFileRequest, Template};
    use std::collections::VecDeque;
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc;

    /// Prompter answering from queued responses; an empty queue means cancel.
    #[derive(Default)]
    struct ScriptedPrompter {
        new_files: VecDeque<NewFileRequest>,
        opens: VecDeque<String>,
        saves: VecDeque<SaveSelection>,
        confirms: VecDeque<bool>,
        unsaved: VecDeque<UnsavedChoice>,
        unsaved_names: Vec<String>,
        open_directories: Vec<String>,
        save_initial_paths: Vec<String>,
        confirm_titles: Vec<String>,
    }

    impl Prompter for ScriptedPrompter {
        fn new_file(&mut self, _directory: &str) -> Option<NewFileRequest> {
            self.new_files.pop_front()
        }

        fn open_file(&mut self, _title: &str, directory: &str, _filters: &FileFilters) -> Option<String> {
            self.open_directories.push(directory.to_string());
            self.opens.pop_front()
        }

        fn save_file(
            &mut self,
            _title: &str,
            initial_path: &str,
            _filters: &FileFilters,
        ) -> Option<SaveSelection> {
            self.save_initial_paths.push(initial_path.to_string());
            self.saves.pop_front()
        }

        fn confirm(&mut self, title: &str, _message: &str) -> bool {
            self.confirm_titles.push(title.to_string());
            self.confirms.pop_front().unwrap_or(false)
        }

        fn unsaved_changes(&mut self, display_name: &str) -> UnsavedChoice {
            self.unsaved_names.push(display_name.to_string());
            self.unsaved.pop_front().unwrap_or(UnsavedChoice::Cancel)
        }
    }

    type TestController = FileController<ScriptedPrompter, mpsc::Sender<Message>>;

    fn controller() -> (TestController, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel();
        let settings = SettingsStore::in_memory().into_shared();
        let ctrl = FileController::new(
            ScriptedPrompter::default(),
            tx,
            settings,
            RecentFilesManager::in_memory(15),
        );
        (ctrl, rx)
    }

    fn write(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        normalize_path(&path.to_string_lossy())
    }

    #[test]
    fn test_open_same_path_twice_reuses_tab() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let b = write(dir.path(), "b.cbl", "B");
        let (mut ctrl, _rx) = controller();

        let id_a = ctrl.open_file(&a).unwrap();
        ctrl.open_file(&b).unwrap();
        let again = ctrl.open_file(&a).unwrap();

        assert_eq!(again, id_a);
        assert_eq!(ctrl.tabs.count(), 2);
        assert_eq!(ctrl.tabs.active_id(), Some(id_a));
    }

    #[test]
    fn test_open_same_file_via_different_spelling() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();

        ctrl.open_file(&a).unwrap();
        let dotted = dir.path().join("sub").join("..").join("a.cbl");
        ctrl.open_file(&dotted.to_string_lossy()).unwrap();
        assert_eq!(ctrl.tabs.count(), 1);
    }

    #[test]
    fn test_open_file_switches_to_edit_page() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        assert_eq!(ctrl.page(), Page::Home);

        ctrl.open_file(&a).unwrap();
        assert_eq!(ctrl.page(), Page::Edit);
    }

    #[test]
    fn test_open_file_records_recent_once_at_front() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let b = write(dir.path(), "b.cbl", "B");
        let (mut ctrl, rx) = controller();

        ctrl.open_file(&a).unwrap();
        ctrl.open_file(&b).unwrap();
        ctrl.open_file(&a).unwrap();

        let entries = ctrl.recent_files.entries();
        assert_eq!(entries[0], a);
        assert_eq!(entries.iter().filter(|p| **p == a).count(), 1);
        assert_eq!(entries.len(), 2);

        let updates = rx
            .try_iter()
            .filter(|m| *m == Message::RecentFilesUpdated)
            .count();
        assert_eq!(updates, 3);
    }

    #[test]
    fn test_open_missing_file_changes_nothing() {
        let (mut ctrl, rx) = controller();
        let result = ctrl.open_file("/nonexistent/dir/x.cbl");
        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(ctrl.tabs.count(), 0);
        assert!(ctrl.recent_files.entries().is_empty());
        assert_eq!(ctrl.page(), Page::Home);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_request_open_cancelled_is_noop() {
        let (mut ctrl, rx) = controller();
        assert_eq!(ctrl.request_open().unwrap(), None);
        assert_eq!(ctrl.tabs.count(), 0);
        assert!(ctrl.recent_files.entries().is_empty());
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_request_open_opens_and_remembers_path() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        ctrl.settings().borrow_mut().set_last_path(&dir.path().to_string_lossy());
        ctrl.prompter_mut().opens.push_back(a.clone());

        let id = ctrl.request_open().unwrap();
        assert!(id.is_some());
        assert_eq!(ctrl.tabs.count(), 1);
        assert_eq!(ctrl.settings().borrow().last_path(), a);
        assert_eq!(
            ctrl.prompter_mut().open_directories,
            vec![dir.path().to_string_lossy().to_string()]
        );
    }

    #[test]
    fn test_request_new_cancelled_is_noop() {
        let (mut ctrl, _rx) = controller();
        assert_eq!(ctrl.request_new().unwrap(), None);
        assert_eq!(ctrl.tabs.count(), 0);
        assert!(ctrl.recent_files.entries().is_empty());
    }

    #[test]
    fn test_request_new_creates_and_opens() {
        let dir = tempfile::tempdir().unwrap();
        let (mut ctrl, _rx) = controller();
        ctrl.prompter_mut().new_files.push_back(NewFileRequest {
            directory: dir.path().to_string_lossy().to_string(),
            name: "adder".to_string(),
            template: Template::Module,
        });

        let id = ctrl.request_new().unwrap().unwrap();
        let doc = ctrl.tabs.doc_by_id(id).unwrap();
        assert_eq!(doc.display_name, "adder.cbl");
        assert!(doc.text().contains("PROGRAM-ID. ADDER."));
        assert_eq!(doc.file_type(), FileType::Module);
        assert_eq!(ctrl.recent_files.entries().len(), 1);
    }

    #[test]
    fn test_request_new_declined_overwrite_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let existing = write(dir.path(), "hello.cbl", "keep me");
        let (mut ctrl, _rx) = controller();
        ctrl.prompter_mut().new_files.push_back(NewFileRequest {
            directory: dir.path().to_string_lossy().to_string(),
            name: "hello".to_string(),
            template: Template::Program,
        });
        ctrl.prompter_mut().confirms.push_back(false);

        assert_eq!(ctrl.request_new().unwrap(), None);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");
        assert_eq!(ctrl.tabs.count(), 0);
    }

    #[test]
    fn test_save_as_appends_cbl_under_cobol_filter() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "SOURCE");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        let target = dir.path().join("copy").to_string_lossy().to_string();
        ctrl.prompter_mut().saves.push_back(SaveSelection {
            path: target.clone(),
            filter: FilterKind::Cobol,
        });

        let saved = ctrl.save_as().unwrap().unwrap();
        assert!(saved.ends_with("copy.cbl"));
        assert_eq!(fs::read_to_string(&saved).unwrap(), "SOURCE");
        assert_eq!(ctrl.prompter_mut().save_initial_paths, vec![a]);
    }

    #[test]
    fn test_save_as_appends_txt_under_other_filter() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "SOURCE");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.prompter_mut().saves.push_back(SaveSelection {
            path: dir.path().join("notes").to_string_lossy().to_string(),
            filter: FilterKind::OtherText,
        });

        let saved = ctrl.save_as().unwrap().unwrap();
        assert!(saved.ends_with("notes.txt"));
    }

    #[test]
    fn test_save_as_keeps_existing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "SOURCE");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.prompter_mut().saves.push_back(SaveSelection {
            path: dir.path().join("prog.cob").to_string_lossy().to_string(),
            filter: FilterKind::OtherText,
        });

        let saved = ctrl.save_as().unwrap().unwrap();
        assert!(saved.ends_with("prog.cob"));
    }

    #[test]
    fn test_save_as_updates_recents_notifies_and_last_path() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "SOURCE");
        let (mut ctrl, rx) = controller();
        let id = ctrl.open_file(&a).unwrap();
        let _ = rx.try_iter().count();
        ctrl.prompter_mut().saves.push_back(SaveSelection {
            path: dir.path().join("b.cbl").to_string_lossy().to_string(),
            filter: FilterKind::Cobol,
        });

        let saved = ctrl.save_as().unwrap().unwrap();
        assert_eq!(ctrl.recent_files.entries()[0], saved);
        assert_eq!(ctrl.settings().borrow().last_path(), saved);
        assert_eq!(ctrl.tabs.current().unwrap().file_path, saved);
        assert_eq!(ctrl.tabs.current().unwrap().id, id);

        let msgs: Vec<Message> = rx.try_iter().collect();
        assert_eq!(
            msgs,
            vec![Message::RecentFilesUpdated, Message::ActiveTabChanged(id)]
        );
    }

    #[test]
    fn test_save_as_cancelled_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "SOURCE");
        let (mut ctrl, rx) = controller();
        ctrl.open_file(&a).unwrap();
        let _ = rx.try_iter().count();
        let last_path = ctrl.settings().borrow().last_path().to_string();
        let recents_before = ctrl.recent_files.entries().to_vec();

        assert_eq!(ctrl.save_as().unwrap(), None);
        assert_eq!(ctrl.tabs.current().unwrap().file_path, a);
        assert_eq!(ctrl.recent_files.entries(), recents_before.as_slice());
        assert_eq!(ctrl.settings().borrow().last_path(), last_path);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_failed_save_as_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cbl");
        fs::write(&a, b"caf\xe9").unwrap();
        let a = normalize_path(&a.to_string_lossy());
        let b = write(dir.path(), "b.cbl", "B");
        let (mut ctrl, rx) = controller();
        let id_b = ctrl.open_file(&b).unwrap();
        let id_a = ctrl.open_file(&a).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("price: \u{20ac}5");
        let _ = rx.try_iter().count();
        let last_path = ctrl.settings().borrow().last_path().to_string();
        let recents_before = ctrl.recent_files.entries().to_vec();
        ctrl.prompter_mut().saves.push_back(SaveSelection {
            path: b.clone(),
            filter: FilterKind::Cobol,
        });

        assert!(matches!(ctrl.save_as(), Err(AppError::Encoding(_))));
        assert_eq!(ctrl.tabs.count(), 2);
        assert_eq!(ctrl.tabs.active_id(), Some(id_a));
        assert_eq!(ctrl.tabs.current().unwrap().file_path, a);
        assert!(ctrl.tabs.doc_by_id(id_b).is_some());
        assert_eq!(fs::read_to_string(&b).unwrap(), "B");
        assert_eq!(ctrl.recent_files.entries(), recents_before.as_slice());
        assert_eq!(ctrl.settings().borrow().last_path(), last_path);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_save_as_without_document_does_not_prompt() {
        let (mut ctrl, _rx) = controller();
        assert_eq!(ctrl.save_as().unwrap(), None);
        assert!(ctrl.prompter_mut().save_initial_paths.is_empty());
    }

    #[test]
    fn test_quit_requires_affirmative_answer() {
        let (mut ctrl, _rx) = controller();
        ctrl.prompter_mut().confirms.push_back(false);
        assert!(!ctrl.quit().unwrap());
        // Dismissed dialog
        assert!(!ctrl.quit().unwrap());
        ctrl.prompter_mut().confirms.push_back(true);
        assert!(ctrl.quit().unwrap());
        assert_eq!(ctrl.prompter_mut().confirm_titles[0], "Quit CobolPad?");
    }

    #[test]
    fn test_quit_asks_about_dirty_tabs_after_confirming() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let b = write(dir.path(), "b.cbl", "B");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.open_file(&b).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("B edited");

        // Declining the quit question never reaches the unsaved prompt
        ctrl.prompter_mut().confirms.push_back(false);
        assert!(!ctrl.quit().unwrap());
        assert!(ctrl.prompter_mut().unsaved_names.is_empty());

        ctrl.prompter_mut().confirms.push_back(true);
        ctrl.prompter_mut().unsaved.push_back(UnsavedChoice::Cancel);
        assert!(!ctrl.quit().unwrap());
        assert_eq!(ctrl.prompter_mut().unsaved_names, vec!["b.cbl".to_string()]);
        assert!(ctrl.tabs.current().unwrap().is_dirty());
        assert_eq!(fs::read_to_string(&b).unwrap(), "B");
    }

    #[test]
    fn test_quit_saves_dirty_tab_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("A edited");
        ctrl.prompter_mut().confirms.push_back(true);
        ctrl.prompter_mut().unsaved.push_back(UnsavedChoice::Save);

        assert!(ctrl.quit().unwrap());
        assert_eq!(fs::read_to_string(&a).unwrap(), "A edited");
        assert!(ctrl.tabs.dirty_ids().is_empty());
    }

    #[test]
    fn test_quit_fails_when_dirty_tab_cannot_be_saved() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cbl");
        fs::write(&a, b"caf\xe9").unwrap();
        let a = normalize_path(&a.to_string_lossy());
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("\u{20ac}");
        ctrl.prompter_mut().confirms.push_back(true);
        ctrl.prompter_mut().unsaved.push_back(UnsavedChoice::Save);

        assert!(ctrl.quit().is_err());
        assert!(ctrl.tabs.current().unwrap().is_dirty());
    }

    #[test]
    fn test_quit_with_clean_tabs_asks_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        ctrl.open_file(&a).unwrap();
        ctrl.prompter_mut().confirms.push_back(true);

        assert!(ctrl.quit().unwrap());
        assert!(ctrl.prompter_mut().unsaved_names.is_empty());
    }

    #[test]
    fn test_close_dirty_tab_cancelled_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, rx) = controller();
        let id = ctrl.open_file(&a).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("A edited");
        let _ = rx.try_iter().count();

        assert!(!ctrl.close_tab(id).unwrap());
        assert_eq!(ctrl.tabs.count(), 1);
        assert_eq!(ctrl.tabs.current().unwrap().text(), "A edited");
        assert_eq!(ctrl.page(), Page::Edit);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_close_dirty_tab_discard() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        let id = ctrl.open_file(&a).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("A edited");
        ctrl.prompter_mut().unsaved.push_back(UnsavedChoice::Discard);

        assert!(ctrl.close_tab(id).unwrap());
        assert_eq!(ctrl.tabs.count(), 0);
        assert_eq!(fs::read_to_string(&a).unwrap(), "A");
    }

    #[test]
    fn test_close_dirty_tab_save_writes_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let b = write(dir.path(), "b.cbl", "B");
        let (mut ctrl, rx) = controller();
        let id_a = ctrl.open_file(&a).unwrap();
        let id_b = ctrl.open_file(&b).unwrap();
        ctrl.tabs.current_mut().unwrap().set_text("B edited");
        ctrl.prompter_mut().unsaved.push_back(UnsavedChoice::Save);
        let _ = rx.try_iter().count();

        assert!(ctrl.close_tab(id_b).unwrap());
        assert_eq!(fs::read_to_string(&b).unwrap(), "B edited");
        assert_eq!(ctrl.tabs.active_id(), Some(id_a));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Message::ActiveTabChanged(id_a)]);
    }

    #[test]
    fn test_clear_recent_files_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, rx) = controller();
        ctrl.open_file(&a).unwrap();
        let _ = rx.try_iter().count();

        ctrl.clear_recent_files();
        assert!(ctrl.recent_files.entries().is_empty());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Message::RecentFilesUpdated]);
    }

    #[test]
    fn test_close_last_tab_returns_home() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.cbl", "A");
        let (mut ctrl, _rx) = controller();
        let id = ctrl.open_file(&a).unwrap();

        assert!(ctrl.close_tab(id).unwrap());
        assert_eq!(ctrl.tabs.count(), 0);
        assert_eq!(ctrl.page(), Page::Home);
    }

    #[test]
    fn test_file_type_override_applies_to_reopened_document() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "main.cbl", "       PROCEDURE DIVISION.\n");
        let (mut ctrl, _rx) = controller();

        let id = ctrl.open_file(&a).unwrap();
        ctrl.tabs.doc_by_id(id).unwrap().set_file_type(FileType::Module);
        ctrl.close_tab(id).unwrap();

        let reopened = ctrl.open_file(&a).unwrap();
        assert_ne!(reopened, id);
        assert_eq!(ctrl.tabs.doc_by_id(reopened).unwrap().file_type(), FileType::Module);
    }
}
