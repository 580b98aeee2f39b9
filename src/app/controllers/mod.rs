//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - File operations (new, open, save as, recent files, quit)
//! - Tab management

pub mod file;
pub mod tabs;
