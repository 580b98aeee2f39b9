//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, FileType, Settings, Messages)
//! - `controllers/` - Orchestration (FileController, TabManager)
//! - `services/` - Business operations (classifier, filters, templates, recent files)
//! - `infrastructure/` - Seams to the outside (errors, logging, prompts, notifications)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::file::{APP_NAME, FileController, Page};
pub use controllers::tabs::TabManager;
pub use domain::{AppSettings, Document, DocumentId, FileType, Message, SettingsStore, SharedSettings, TextEncoding};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::notify::Notifier;
pub use infrastructure::prompt::{Prompter, SaveSelection};
pub use services::recent_files::RecentFilesManager;
