//! Axis direction listing command

use clap::ArgMatches;
use log::{debug, info};
use regex::Regex;

use crate::commands::command_traits::Command;
use crate::cs::errors::{CsError, CsResult};
use crate::cs::AxisDirection;
use crate::utils::format_utils::describe_directions;

/// Command listing axis direction codes, optionally filtered by a pattern
pub struct DirectionsCommand {
    /// Pattern matched against the code and the constant name
    pattern: Option<Regex>,
}

impl DirectionsCommand {
    /// Create a new directions command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new DirectionsCommand, or an error if the `--match` pattern is not a valid regex
    pub fn new(args: &ArgMatches) -> CsResult<Self> {
        let pattern = match args.get_one::<String>("match") {
            Some(text) => Some(Self::compile(text)?),
            None => None,
        };

        Ok(DirectionsCommand { pattern })
    }

    /// Create a directions command from an optional pattern string
    pub fn with_pattern(pattern: Option<&str>) -> CsResult<Self> {
        let pattern = pattern.map(Self::compile).transpose()?;
        Ok(DirectionsCommand { pattern })
    }

    fn compile(text: &str) -> CsResult<Regex> {
        Regex::new(&format!("(?i){}", text))
            .map_err(|e| CsError::GenericError(format!("Invalid direction pattern '{}': {}", text, e)))
    }

    /// Directions selected by the pattern, in declaration order
    pub fn selected(&self) -> Vec<AxisDirection> {
        AxisDirection::values().iter()
            .copied()
            .filter(|dir| match &self.pattern {
                Some(re) => re.is_match(dir.code()) || re.is_match(dir.constant_name()),
                None => true,
            })
            .collect()
    }
}

impl Command for DirectionsCommand {
    fn execute(&self) -> CsResult<String> {
        let selected = self.selected();
        info!("Listing {} axis directions", selected.len());
        if let Some(re) = &self.pattern {
            debug!("Direction filter: {}", re.as_str());
        }

        Ok(describe_directions(&selected))
    }
}
