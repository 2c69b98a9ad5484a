//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod describe_command;
pub mod directions_command;
pub mod catalog_command;

pub use command_traits::{Command, CommandFactory};
pub use describe_command::DescribeCommand;
pub use directions_command::DirectionsCommand;
pub use catalog_command::CatalogCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::utils::logger::Logger;
use crate::cs::errors::CsResult;

/// Build the `cskit` command-line interface
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("cskit")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Inspect ISO 19111 coordinate system definitions")
        .arg(
            Arg::new("input")
                .help("Coordinate system definition file (TOML)")
                .required_unless_present_any(["directions", "catalog"])
                .index(1),
        )
        .arg(
            Arg::new("wkt-only")
                .long("wkt-only")
                .help("Print only the Well-Known Text of the definition")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("directions")
                .short('d')
                .long("directions")
                .help("List axis direction codes with their opposites")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .help("Regular expression filtering the direction listing")
                .value_name("REGEX")
                .required(false),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .help("Load every definition in a directory and report each")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not draw progress bars")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records and axis tables to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct CskitCommandFactory;

impl CskitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CskitCommandFactory
    }
}

impl Default for CskitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CskitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CsResult<Box<dyn Command + 'a>> {
        if args.get_flag("directions") {
            Ok(Box::new(DirectionsCommand::new(args)?))
        } else if args.get_one::<String>("catalog").is_some() {
            Ok(Box::new(CatalogCommand::new(args, logger)?))
        } else {
            // Default to describe command
            Ok(Box::new(DescribeCommand::new(args, logger)?))
        }
    }
}
