use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::file_type::FileType;
use crate::app::domain::messages::Message;

const RECENTS_MENU: &str = "File/Recents";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New...", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add(&format!("{}/Clear list", RECENTS_MENU), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearRecentFiles) });
    menu.add("File/Close Tab", Shortcut::Ctrl | 'w', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::TabCloseActive) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Build
    for ft in FileType::all() {
        let ft = *ft;
        let label = format!("Build/File Type/{}", ft.display_name());
        menu.add(&label, Shortcut::None, MenuFlag::Radio, { let s = *s; move |_| s.send(Message::SetFileType(ft)) });
    }
}

/// Escape characters FLTK treats specially in menu labels.
fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('/', "\\/").replace('&', "&&")
}

/// Rebuild the Recents submenu from `files`, most recent first.
pub fn rebuild_recent_menu(menu: &mut MenuBar, sender: &Sender<Message>, files: &[String]) {
    let idx = menu.find_index(RECENTS_MENU);
    if idx >= 0 {
        if let Err(e) = menu.clear_submenu(idx) {
            tracing::warn!("cannot clear recents menu: {:?}", e);
            return;
        }
    }

    for (i, path) in files.iter().enumerate() {
        let label = format!("{}/{}. {}", RECENTS_MENU, i + 1, escape_label(path));
        let path = path.clone();
        let s = *sender;
        menu.add(&label, Shortcut::None, MenuFlag::Normal, move |_| {
            s.send(Message::OpenRecent(path.clone()))
        });
    }

    let flag = if files.is_empty() { MenuFlag::Inactive } else { MenuFlag::Normal };
    let s = *sender;
    let label = format!("{}/Clear list", RECENTS_MENU);
    menu.add(&label, Shortcut::None, flag, move |_| s.send(Message::ClearRecentFiles));
}

/// Reflect the active document's file type in the radio items.
pub fn update_file_type_menu(menu: &mut MenuBar, file_type: Option<FileType>) {
    for ft in FileType::all() {
        let label = format!("Build/File Type/{}", ft.display_name());
        if let Some(mut item) = menu.find_item(&label) {
            if Some(*ft) == file_type {
                item.set();
            } else {
                item.clear();
            }
            if file_type.is_some() {
                item.activate();
            } else {
                item.deactivate();
            }
        }
    }
}
