//! Definition catalog command
//!
//! Loads every definition file in a directory and reports a one-line
//! summary for each, or the reason it failed to load.

use std::path::Path;
use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::config::DefinitionLoader;
use crate::cs::errors::{CsError, CsResult};
use crate::cs::{CoordinateSystem, IdentifiedObject};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for checking a directory of definitions
pub struct CatalogCommand<'a> {
    /// Directory holding `*.toml` definitions
    directory: String,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CatalogCommand<'a> {
    /// Create a new catalog command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CatalogCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CsResult<Self> {
        let directory = args.get_one::<String>("catalog")
            .ok_or_else(|| CsError::GenericError("Missing catalog directory".to_string()))?
            .clone();

        Ok(Self::for_directory(&directory, !args.get_flag("quiet"), logger))
    }

    /// Create a catalog command for a directory
    pub fn for_directory(directory: &str, show_progress: bool, logger: &'a Logger) -> Self {
        CatalogCommand {
            directory: directory.to_string(),
            show_progress,
            logger,
        }
    }

    /// Summarize one definition file
    ///
    /// # Returns
    /// The report line, as `Ok` when the file loaded and `Err` when it did not
    fn summarize(path: &Path) -> Result<String, String> {
        let file = path.file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match DefinitionLoader::from_file(path) {
            Ok(cs) => Ok(format!("OK    {:<28} {} '{}' ({}D)", file, cs.kind(), cs.name(), cs.dimension())),
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                Err(format!("ERROR {:<28} {}", file, e))
            }
        }
    }
}

impl<'a> Command for CatalogCommand<'a> {
    fn execute(&self) -> CsResult<String> {
        let paths = DefinitionLoader::list_directory(&self.directory)?;
        info!("Cataloguing {} definitions in {}", paths.len(), self.directory);

        let progress = if self.show_progress {
            ProgressTracker::new(paths.len() as u64, "Loading definitions")
        } else {
            ProgressTracker::hidden()
        };

        let mut lines = Vec::with_capacity(paths.len());
        let mut failures = 0;
        for path in &paths {
            progress.set_message(&path.display().to_string());
            let line = match Self::summarize(path) {
                Ok(line) => line,
                Err(line) => {
                    failures += 1;
                    line
                }
            };
            self.logger.log(&line)?;
            lines.push(line);
            progress.increment(1);
        }
        progress.finish();

        let mut report = lines.join("\n");
        if !report.is_empty() {
            report.push('\n');
        }
        report.push_str(&format!("{} definitions, {} failed\n", paths.len(), failures));
        Ok(report)
    }
}
