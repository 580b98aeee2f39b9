use fltk::{
    frame::Frame,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::APP_NAME;
use crate::app::controllers::file::Page;
use crate::app::controllers::tabs::TabManager;
use crate::app::domain::document::DocumentId;

/// Keeps the single FLTK editor in sync with the active document.
///
/// The editor shows one buffer at a time; its text is written back into the
/// bound document before every action and reloaded when the active tab changes.
pub struct EditorView {
    editor: TextEditor,
    buffer: TextBuffer,
    home_frame: Frame,
    bound: Option<DocumentId>,
}

impl EditorView {
    pub fn new(mut editor: TextEditor, home_frame: Frame) -> Self {
        let buffer = TextBuffer::default();
        editor.set_buffer(buffer.clone());
        Self {
            editor,
            buffer,
            home_frame,
            bound: None,
        }
    }

    /// Copy the editor content into the bound document.
    pub fn store(&mut self, tabs: &mut TabManager) {
        let Some(id) = self.bound else { return };
        if let Some(doc) = tabs.doc_by_id_mut(id) {
            doc.set_text(&self.buffer.text());
            doc.cursor_position = self.editor.insert_position();
        }
    }

    /// Bind the active document if it changed and show the right page.
    pub fn refresh(&mut self, tabs: &TabManager, page: Page) {
        let active = tabs.active_id();
        if active != self.bound {
            match tabs.current() {
                Some(doc) => {
                    self.buffer.set_text(doc.text());
                    self.editor.set_insert_position(doc.cursor_position);
                    self.editor.show_insert_position();
                }
                None => self.buffer.set_text(""),
            }
            self.bound = active;
        }

        match page {
            Page::Edit if active.is_some() => {
                self.home_frame.hide();
                self.editor.show();
                let _ = self.editor.take_focus();
            }
            _ => {
                self.editor.hide();
                self.home_frame.show();
            }
        }
    }

    pub fn update_window_title(&self, window: &mut Window, tabs: &TabManager) {
        match tabs.current() {
            Some(doc) => {
                let prefix = if doc.is_dirty() { "*" } else { "" };
                window.set_label(&format!(
                    "{}{} [{}] - {}",
                    prefix,
                    doc.display_name,
                    doc.file_type().display_name(),
                    APP_NAME
                ));
            }
            None => window.set_label(APP_NAME),
        }
    }
}
