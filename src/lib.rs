//! CobolPad - a minimalist COBOL editor.
//!
//! The `app` module holds the toolkit-independent core; the FLTK front end
//! lives in `ui` and is only built with the `gui` feature.

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
