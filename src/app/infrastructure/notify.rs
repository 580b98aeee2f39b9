use std::sync::mpsc;

use crate::app::domain::messages::Message;

/// Sink for change notifications emitted by controllers.
pub trait Notifier {
    fn notify(&self, msg: Message);
}

impl Notifier for mpsc::Sender<Message> {
    fn notify(&self, msg: Message) {
        // Receiver gone means the UI is shutting down.
        let _ = self.send(msg);
    }
}

#[cfg(feature = "gui")]
impl Notifier for fltk::app::Sender<Message> {
    fn notify(&self, msg: Message) {
        self.send(msg);
    }
}
