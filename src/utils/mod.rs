//! Utility modules for common functionality
//!
//! This module provides logging, progress display and report formatting
//! used by the CLI and the library facade.

pub mod logger;
pub(crate) mod progress;
pub mod format_utils;
