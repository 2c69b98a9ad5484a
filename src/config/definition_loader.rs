//! TOML loader for coordinate system definitions
//!
//! A definition file looks like this:
//!
//! ```toml
//! name = "Ellipsoidal 2D"
//! kind = "ellipsoidal"
//!
//! [[axis]]
//! name = "Geodetic longitude"
//! abbreviation = "Lon"
//! direction = "east"
//! unit = "degree"
//! minimum = -180.0
//! maximum = 180.0
//! range_meaning = "wraparound"
//! ```
//!
//! `unit` is either the name of a well-known unit or an inline table with
//! `name`, `kind` and `factor`.

use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::cs::errors::{CsError, CsResult};
use crate::cs::{Axis, AxisDirection, CsDefinition, CsKind, RangeMeaning, Unit, UnitKind};

/// Loader for TOML coordinate system definitions
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Parse a coordinate system definition from a TOML string
    ///
    /// # Arguments
    /// * `content` - TOML text of the definition
    ///
    /// # Returns
    /// The coordinate system, or an error describing the first problem found
    pub fn from_str(content: &str) -> CsResult<CsDefinition> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CsError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let name = Self::required_str(&toml_value, "name", "name")?;
        let kind = CsKind::from_name(Self::required_str(&toml_value, "kind", "kind")?)?;

        let axis_values = match toml_value.get("axis") {
            Some(value) => value.as_array()
                .ok_or_else(|| CsError::ConfigError("'axis' must be an array of tables".to_string()))?,
            None => return Err(CsError::EmptyAxes),
        };

        let mut axes = Vec::with_capacity(axis_values.len());
        for (position, value) in axis_values.iter().enumerate() {
            axes.push(Self::parse_axis(value, position)?);
        }

        debug!("Parsed {} '{}' with {} axes", kind, name, axes.len());

        let definition = CsDefinition::new(name, kind, axes)?;
        match Self::optional_str(&toml_value, "remarks")? {
            Some(remarks) => Ok(definition.with_remarks(remarks)),
            None => Ok(definition),
        }
    }

    /// Load a coordinate system definition from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CsResult<CsDefinition> {
        let path = path.as_ref();
        debug!("Loading definition from {}", path.display());

        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// List the definition files (`*.toml`) in a directory, sorted by path
    pub fn list_directory<P: AsRef<Path>>(dir: P) -> CsResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Parse one `[[axis]]` table
    ///
    /// # Arguments
    /// * `value` - The axis table
    /// * `position` - 0-based position, used in error messages
    fn parse_axis(value: &toml::Value, position: usize) -> CsResult<Axis> {
        if !value.is_table() {
            return Err(CsError::ConfigError(format!("axis {} must be a table", position)));
        }

        let name = Self::required_str(value, "name", "axis.name")?;
        let abbreviation = Self::required_str(value, "abbreviation", "axis.abbreviation")?;
        let direction = AxisDirection::from_code(Self::required_str(value, "direction", "axis.direction")?)?;

        let unit = match value.get("unit") {
            Some(unit) => Self::parse_unit(unit)?,
            None => return Err(CsError::MissingField("axis.unit")),
        };

        let mut builder = Axis::builder(name, abbreviation, direction, unit);

        if let Some(minimum) = Self::optional_number(value, "minimum", position)? {
            builder = builder.minimum(minimum);
        }
        if let Some(maximum) = Self::optional_number(value, "maximum", position)? {
            builder = builder.maximum(maximum);
        }
        if let Some(meaning) = Self::optional_str(value, "range_meaning")? {
            builder = builder.range_meaning(RangeMeaning::from_code(meaning)?);
        }
        if let Some(remarks) = Self::optional_str(value, "remarks")? {
            builder = builder.remarks(remarks);
        }

        builder.build()
    }

    /// Parse a unit given by name or as an inline table
    fn parse_unit(value: &toml::Value) -> CsResult<Unit> {
        if let Some(name) = value.as_str() {
            return Unit::lookup(name);
        }

        if value.is_table() {
            let name = Self::required_str(value, "name", "unit.name")?;
            let kind = UnitKind::from_name(Self::required_str(value, "kind", "unit.kind")?)?;
            let factor = value.get("factor")
                .and_then(Self::as_number)
                .ok_or(CsError::MissingField("unit.factor"))?;
            return Unit::try_new(name, kind, factor);
        }

        Err(CsError::ConfigError("'unit' must be a string or a table".to_string()))
    }

    fn required_str<'v>(value: &'v toml::Value, key: &str, field: &'static str) -> CsResult<&'v str> {
        match value.get(key) {
            Some(v) => v.as_str()
                .ok_or_else(|| CsError::ConfigError(format!("'{}' must be a string", field))),
            None => Err(CsError::MissingField(field)),
        }
    }

    fn optional_str<'v>(value: &'v toml::Value, key: &str) -> CsResult<Option<&'v str>> {
        match value.get(key) {
            Some(v) => v.as_str()
                .map(Some)
                .ok_or_else(|| CsError::ConfigError(format!("'{}' must be a string", key))),
            None => Ok(None),
        }
    }

    fn optional_number(value: &toml::Value, key: &str, position: usize) -> CsResult<Option<f64>> {
        match value.get(key) {
            Some(v) => Self::as_number(v)
                .map(Some)
                .ok_or_else(|| CsError::ConfigError(format!("axis {}: '{}' must be a number", position, key))),
            None => Ok(None),
        }
    }

    // TOML keeps integers and floats apart; both are accepted as numbers
    fn as_number(value: &toml::Value) -> Option<f64> {
        value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
    }
}
