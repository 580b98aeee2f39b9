use fltk::{app, dialog, prelude::*};

use cobol_pad::app::infrastructure::logging::init_logging;
use cobol_pad::app::{FileController, Message, RecentFilesManager, SettingsStore};
use cobol_pad::ui::editor_view::EditorView;
use cobol_pad::ui::file_dialogs::FltkPrompter;
use cobol_pad::ui::main_window::build_main_window;
use cobol_pad::ui::menu::{build_menu, rebuild_recent_menu, update_file_type_menu};

fn report(result: cobol_pad::app::Result<impl Sized>) {
    if let Err(e) = result {
        tracing::error!("{}", e);
        dialog::alert_default(&e.to_string());
    }
}

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = SettingsStore::load().into_shared();
    let max_recent = settings.borrow().max_recent_files();
    let recent_files = RecentFilesManager::load(RecentFilesManager::default_storage_path(), max_recent);

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    let mut ctrl = FileController::new(FltkPrompter, sender, settings, recent_files);
    let mut view = EditorView::new(widgets.text_editor.clone(), widgets.home_frame.clone());

    rebuild_recent_menu(&mut widgets.menu, &sender, &ctrl.recent_files.recent_files());

    for path in std::env::args().skip(1) {
        report(ctrl.open_file(&path));
    }

    view.refresh(&ctrl.tabs, ctrl.page());
    widgets.tab_bar.rebuild(ctrl.tabs.documents(), ctrl.tabs.active_id());
    update_file_type_menu(&mut widgets.menu, ctrl.tabs.current().map(|d| d.file_type()));
    view.update_window_title(&mut widgets.wind, &ctrl.tabs);
    widgets.wind.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else { continue };
        view.store(&mut ctrl.tabs);

        match msg {
            Message::FileNew => report(ctrl.request_new()),
            Message::FileOpen => report(ctrl.request_open()),
            Message::FileSave => report(ctrl.save()),
            Message::FileSaveAs => report(ctrl.save_as()),
            Message::FileQuit | Message::WindowClose => match ctrl.quit() {
                Ok(true) => app.quit(),
                Ok(false) => {}
                Err(e) => report(Err::<(), _>(e)),
            },
            Message::OpenRecent(path) => report(ctrl.open_recent(&path)),
            Message::ClearRecentFiles => ctrl.clear_recent_files(),
            Message::TabSwitch(id) => ctrl.switch_to(id),
            Message::TabClose(id) => report(ctrl.close_tab(id)),
            Message::TabCloseActive => {
                if let Some(id) = ctrl.tabs.active_id() {
                    report(ctrl.close_tab(id));
                }
            }
            Message::SetFileType(file_type) => {
                if let Some(doc) = ctrl.tabs.current() {
                    doc.set_file_type(file_type);
                }
            }
            Message::RecentFilesUpdated => {
                rebuild_recent_menu(&mut widgets.menu, &sender, &ctrl.recent_files.recent_files());
            }
            Message::ActiveTabChanged(_) => {}
        }

        view.refresh(&ctrl.tabs, ctrl.page());
        widgets.tab_bar.rebuild(ctrl.tabs.documents(), ctrl.tabs.active_id());
        update_file_type_menu(&mut widgets.menu, ctrl.tabs.current().map(|d| d.file_type()));
        view.update_window_title(&mut widgets.wind, &ctrl.tabs);
    }
}
