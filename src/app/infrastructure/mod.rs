//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Logging setup
//! - Dialog and notification seams implemented by the UI

pub mod error;
pub mod logging;
pub mod notify;
pub mod prompt;
