//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::utils::logger::Logger;
use crate::cs::errors::CsResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// The text report to print, or an error
    fn execute(&self) -> CsResult<String>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> CsResult<Box<dyn Command + 'a>>;
}
