use fltk::dialog::{self, FileDialogType, NativeFileChooser};

use crate::app::infrastructure::prompt::{Prompter, SaveSelection, UnsavedChoice};
use crate::app::services::file_filters::{FileFilters, FilterKind};
use crate::app::services::new_file::{NewFileRequest, Template};
use crate::app::services::paths::{dialog_directory, extract_filename};

/// `Prompter` backed by FLTK's native file choosers and message boxes.
#[derive(Debug, Default)]
pub struct FltkPrompter;

fn run_chooser(mut nfc: NativeFileChooser) -> Option<(String, i32)> {
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() {
        None
    } else {
        Some((s.to_string(), nfc.filter_value()))
    }
}

fn chooser(kind: FileDialogType, title: &str, directory: &str) -> NativeFileChooser {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    if let Err(e) = nfc.set_directory(&directory) {
        tracing::debug!("cannot preset dialog directory {}: {:?}", directory, e);
    }
    nfc
}

impl Prompter for FltkPrompter {
    fn new_file(&mut self, directory: &str) -> Option<NewFileRequest> {
        let name = dialog::input_default("New file name:", "")?;
        if name.trim().is_empty() {
            return None;
        }
        let [first, second, third] = Template::all() else {
            return None;
        };
        let choice = dialog::choice2_default(
            "Template for the new file:",
            first.display_name(),
            second.display_name(),
            third.display_name(),
        )?;
        let template = Template::from_index(choice)?;
        let (directory, _) = run_chooser(chooser(FileDialogType::BrowseDir, "Create in directory", directory))?;
        Some(NewFileRequest {
            directory,
            name: name.trim().to_string(),
            template,
        })
    }

    fn open_file(&mut self, title: &str, directory: &str, filters: &FileFilters) -> Option<String> {
        let mut nfc = chooser(FileDialogType::BrowseFile, title, directory);
        nfc.set_filter(&filters.fltk_filter());
        run_chooser(nfc).map(|(path, _)| path)
    }

    fn save_file(
        &mut self,
        title: &str,
        initial_path: &str,
        filters: &FileFilters,
    ) -> Option<SaveSelection> {
        let directory = dialog_directory(initial_path);
        let mut nfc = chooser(FileDialogType::BrowseSaveFile, title, &directory);
        nfc.set_filter(&filters.fltk_filter());
        nfc.set_preset_file(&extract_filename(initial_path));
        run_chooser(nfc).map(|(path, filter)| SaveSelection {
            path,
            filter: FilterKind::from_index(filter),
        })
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let text = format!("{}\n\n{}", title, message);
        // Buttons are laid out right to left; "No" is the default.
        dialog::choice2_default(&text, "No", "Yes", "") == Some(1)
    }

    fn unsaved_changes(&mut self, display_name: &str) -> UnsavedChoice {
        let text = format!("\"{}\" has unsaved changes.", display_name);
        match dialog::choice2_default(&text, "Save", "Discard", "Cancel") {
            Some(0) => UnsavedChoice::Save,
            Some(1) => UnsavedChoice::Discard,
            _ => UnsavedChoice::Cancel,
        }
    }
}
