use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::document::{Document, DocumentId};
use crate::app::domain::messages::Message;

pub const TAB_BAR_HEIGHT: i32 = 30;

const MIN_TAB_WIDTH: i32 = 60;
const MAX_TAB_WIDTH: i32 = 200;
const CLOSE_BTN_SIZE: i32 = 14;
const CLOSE_BTN_MARGIN: i32 = 6;
const TAB_H_PADDING: i32 = 10;
const TAB_GAP: i32 = 1;

struct TabInfo {
    id: DocumentId,
    display_name: String,
    is_dirty: bool,
    is_active: bool,
}

struct TabBarState {
    tabs: Vec<TabInfo>,
    tab_width: i32,
    hover_tab_index: Option<usize>,
    hover_close: bool,
    sender: Sender<Message>,
}

enum HitResult {
    Tab { index: usize, is_close: bool },
    None,
}

pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            tabs: Vec::new(),
            tab_width: MAX_TAB_WIDTH,
            hover_tab_index: None,
            hover_close: false,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tab_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tab_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild(&mut self, documents: &[Document], active_id: Option<DocumentId>) {
        let mut st = self.state.borrow_mut();
        st.tabs = documents
            .iter()
            .map(|doc| TabInfo {
                id: doc.id,
                display_name: doc.display_name.clone(),
                is_dirty: doc.is_dirty(),
                is_active: active_id == Some(doc.id),
            })
            .collect();
        st.tab_width = compute_tab_width(self.widget.w(), st.tabs.len() as i32);
        st.hover_tab_index = None;
        st.hover_close = false;
        drop(st);
        self.widget.redraw();
    }
}

fn compute_tab_width(widget_w: i32, count: i32) -> i32 {
    if count == 0 {
        return MAX_TAB_WIDTH;
    }
    let available = widget_w - TAB_GAP * (count - 1);
    (available / count).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH)
}

fn hit_test(st: &TabBarState, wy: i32, mx: i32, my: i32) -> HitResult {
    if my < wy || my >= wy + TAB_BAR_HEIGHT || mx < 0 {
        return HitResult::None;
    }
    let stride = st.tab_width + TAB_GAP;
    let index = (mx / stride) as usize;
    if index >= st.tabs.len() {
        return HitResult::None;
    }
    let x = index as i32 * stride;
    let close_x = x + st.tab_width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
    let close_y = wy + (TAB_BAR_HEIGHT - CLOSE_BTN_SIZE) / 2;
    let is_close = mx >= close_x
        && mx <= close_x + CLOSE_BTN_SIZE
        && my >= close_y
        && my <= close_y + CLOSE_BTN_SIZE;
    HitResult::Tab { index, is_close }
}

fn draw_tab_bar(wid: &Widget, st: &TabBarState) {
    let wx = wid.x();
    let wy = wid.y();
    let wh = wid.h();

    draw::set_draw_color(Color::from_rgb(225, 225, 225));
    draw::draw_rectf(wx, wy, wid.w(), wh);

    for (index, tab) in st.tabs.iter().enumerate() {
        let tx = wx + index as i32 * (st.tab_width + TAB_GAP);
        if tab.is_active {
            draw::set_draw_color(Color::from_rgb(255, 255, 255));
            draw::draw_rectf(tx, wy, st.tab_width, wh);
        } else {
            draw::set_draw_color(Color::from_rgb(240, 240, 240));
            draw::draw_rectf(tx, wy + 2, st.tab_width, wh - 2);
        }

        let label = if tab.is_dirty {
            format!("\u{25cf} {}", tab.display_name)
        } else {
            tab.display_name.clone()
        };
        draw::set_draw_color(if tab.is_active {
            Color::Black
        } else {
            Color::from_rgb(90, 90, 90)
        });
        draw::set_font(Font::Helvetica, 12);
        let text_w = st.tab_width - TAB_H_PADDING - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
        draw::push_clip(tx + TAB_H_PADDING, wy, text_w, wh);
        draw::draw_text(&label, tx + TAB_H_PADDING, wy + (wh + 12) / 2);
        draw::pop_clip();

        let close_x = tx + st.tab_width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
        let close_y = wy + (wh - CLOSE_BTN_SIZE) / 2;
        if st.hover_tab_index == Some(index) && st.hover_close {
            draw::set_draw_color(Color::from_rgb(200, 200, 200));
            draw::draw_rectf(close_x - 2, close_y - 2, CLOSE_BTN_SIZE + 4, CLOSE_BTN_SIZE + 4);
        }
        draw::set_draw_color(Color::from_rgb(90, 90, 90));
        draw::set_font(Font::HelveticaBold, 20);
        draw::draw_text2("\u{00d7}", close_x, close_y, CLOSE_BTN_SIZE, CLOSE_BTN_SIZE, Align::Center);
    }
}

fn handle_tab_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();
            let button = fltk::app::event_button();
            match hit_test(&st, wid.y(), mx, my) {
                HitResult::Tab { index, is_close } => {
                    let tab_id = st.tabs[index].id;
                    let sender = st.sender;
                    drop(st);
                    if button == 2 || (button == 1 && is_close) {
                        sender.send(Message::TabClose(tab_id));
                    } else if button == 1 {
                        sender.send(Message::TabSwitch(tab_id));
                    }
                    true
                }
                HitResult::None => false,
            }
        }
        Event::Move => {
            let mut st = state.borrow_mut();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();
            let (hover, close) = match hit_test(&st, wid.y(), mx, my) {
                HitResult::Tab { index, is_close } => (Some(index), is_close),
                HitResult::None => (None, false),
            };
            if hover != st.hover_tab_index || close != st.hover_close {
                st.hover_tab_index = hover;
                st.hover_close = close;
                drop(st);
                wid.redraw();
            }
            true
        }
        Event::Leave => {
            let mut st = state.borrow_mut();
            st.hover_tab_index = None;
            st.hover_close = false;
            drop(st);
            wid.redraw();
            true
        }
        _ => false,
    }
}
