//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and DocumentId
//! - File types and text encodings
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod file_type;
pub mod messages;
pub mod settings;

pub use document::{Document, DocumentId};
pub use file_type::{FileType, TextEncoding};
pub use messages::Message;
pub use settings::{AppSettings, SettingsStore, SharedSettings};
