use fltk::{
    app::Sender,
    enums::{Align, Color, Event, Font},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::tab_bar::{TAB_BAR_HEIGHT, TabBar};
use crate::app::APP_NAME;
use crate::app::domain::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub home_frame: Frame,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, APP_NAME);
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let tab_bar = TabBar::new(0, 30, 800, *sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    // Home page, shown while no file is open
    let mut home_frame = Frame::default().with_label(&format!(
        "Welcome to {}\n\nCtrl+N: new file\nCtrl+O: open a file",
        APP_NAME
    ));
    home_frame.set_label_font(Font::Helvetica);
    home_frame.set_label_size(16);
    home_frame.set_align(Align::Center | Align::Inside);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_linenumber_width(48);
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    text_editor.hide();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the close button through the quit confirmation
    let s = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        tab_bar,
        home_frame,
        text_editor,
    }
}
