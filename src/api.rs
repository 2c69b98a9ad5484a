use std::path::Path;
use log::info;

use crate::config::DefinitionLoader;
use crate::cs::errors::CsResult;
use crate::cs::{AnyCs, CsDefinition, IdentifiedObject};
use crate::utils::format_utils::describe_definition;
use crate::utils::logger::Logger;

/// Main interface to the cskit library
pub struct CsKit {
    logger: Logger,
}

impl CsKit {
    /// Create a new CsKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; without one, nothing is
    ///   written to disk
    ///
    /// # Returns
    /// A CsKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> CsResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(CsKit { logger })
    }

    /// Load a coordinate system definition file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> CsResult<CsDefinition> {
        let path = path.as_ref();
        info!("Loading coordinate system from {}", path.display());

        let cs = DefinitionLoader::from_file(path)?;
        self.logger.print_axes(&cs)?;
        Ok(cs)
    }

    /// Load a definition file as a kind-tagged coordinate system
    pub fn load_typed<P: AsRef<Path>>(&self, path: P) -> CsResult<AnyCs> {
        self.load(path).map(AnyCs::from_definition)
    }

    /// Describe a coordinate system definition file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML definition
    ///
    /// # Returns
    /// A text report with one row per axis, or an error
    pub fn describe<P: AsRef<Path>>(&self, path: P) -> CsResult<String> {
        let cs = self.load(path)?;
        Ok(describe_definition(&cs))
    }

    /// Well-Known Text of a coordinate system definition file
    pub fn wkt<P: AsRef<Path>>(&self, path: P) -> CsResult<String> {
        let cs = self.load(path)?;
        Ok(cs.to_wkt())
    }
}
