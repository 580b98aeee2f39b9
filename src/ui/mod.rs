//! FLTK front end: window, menus, tab bar and native dialogs.

pub mod editor_view;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod tab_bar;
