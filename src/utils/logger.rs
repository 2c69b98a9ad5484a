//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. Clones share
//! one file handle, so log records and axis tables land in the same file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::cs::{CoordinateSystem, CoordinateSystemAxis, CsDefinition, IdentifiedObject};

/// Custom logger implementation
#[derive(Clone)]
pub struct Logger {
    /// File handle for log output, shared between clones
    file: Arc<Mutex<Option<File>>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Arc::new(Mutex::new(Some(file))),
        })
    }

    /// Creates a logger that discards its own messages
    pub fn disabled() -> Self {
        Logger {
            file: Arc::new(Mutex::new(None)),
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the axes of a coordinate system in a formatted way
    ///
    /// # Arguments
    ///
    /// * `cs` - The coordinate system whose axes to record
    pub fn print_axes(&self, cs: &CsDefinition) -> io::Result<()> {
        self.log(&format!("{} '{}' ({} axes):", cs.kind(), cs.name(), cs.dimension()))?;

        for (i, axis) in cs.axes().enumerate() {
            let message = format!(
                "  Axis {}: {} ({}), Direction: {}, Unit: {}, Range: [{}, {}], Meaning: {}",
                i,
                axis.name(),
                axis.abbreviation(),
                axis.direction(),
                axis.unit(),
                axis.minimum_value(),
                axis.maximum_value(),
                axis.range_meaning().map_or("none", |m| m.code())
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// Log records go to `log_file` only, leaving stdout to the command
    /// report.
    ///
    /// # Returns
    /// A handle writing to the same file, for axis tables and command output
    pub fn init_global_logger(log_file: &str) -> io::Result<Logger> {
        let logger = Logger::new(log_file)?;

        if log::set_boxed_logger(Box::new(logger.clone())).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(logger)
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
