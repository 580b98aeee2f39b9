//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File type classification
//! - Dialog filters and default extensions
//! - New file templates
//! - Recent files persistence
//! - Path helpers

pub mod classifier;
pub mod file_filters;
pub mod new_file;
pub mod paths;
pub mod recent_files;
