//! Coordinate system description command
//!
//! Loads a definition file and reports its axes and WKT.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::DefinitionLoader;
use crate::cs::errors::{CsError, CsResult};
use crate::cs::IdentifiedObject;
use crate::utils::format_utils::describe_definition;
use crate::utils::logger::Logger;

/// Command for describing a coordinate system definition
pub struct DescribeCommand<'a> {
    /// Path to the definition file
    input_file: String,
    /// Print only the WKT
    wkt_only: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DescribeCommand<'a> {
    /// Create a new describe command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DescribeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CsResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| CsError::GenericError("Missing input definition file".to_string()))?
            .clone();

        Ok(Self::for_file(&input_file, args.get_flag("wkt-only"), logger))
    }

    /// Create a describe command for a definition file
    pub fn for_file(input_file: &str, wkt_only: bool, logger: &'a Logger) -> Self {
        DescribeCommand {
            input_file: input_file.to_string(),
            wkt_only,
            logger,
        }
    }
}

impl<'a> Command for DescribeCommand<'a> {
    fn execute(&self) -> CsResult<String> {
        info!("Describing coordinate system from {}", self.input_file);

        let cs = DefinitionLoader::from_file(&self.input_file)?;
        self.logger.print_axes(&cs)?;

        if self.wkt_only {
            return Ok(format!("{}\n", cs.to_wkt()));
        }

        let mut report = describe_definition(&cs);
        report.push_str(&format!("\nWKT:\n  {}\n", cs.to_wkt()));
        Ok(report)
    }
}
