//! Units of measure for coordinate system axes
//!
//! The axis contract leaves the unit type to implementers. This module
//! provides the unit type used by the crate's own axis implementation: a
//! name, a kind and a scale factor to the base unit of that kind. No
//! conversion is performed here; the factor is carried so it can be written
//! to WKT and read by consumers.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::debug;

use crate::cs::errors::{CsError, CsResult};
use crate::cs::wkt::WktElement;

lazy_static! {
    // Parse the embedded unit table at startup
    static ref UNIT_TABLE: UnitTable = {
        let content = include_str!("../../units.toml");
        UnitTable::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse unit definitions: {}", e);
            UnitTable::default()
        })
    };
}

/// Physical quantity measured by a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Lengths, base unit metre
    Linear,
    /// Angles, base unit radian
    Angular,
    /// Dimensionless scale, base unit unity
    Scale,
    /// Durations, base unit second
    Time,
    /// Parameter values such as pressure levels
    Parametric,
}

impl UnitKind {
    /// WKT 2 keyword for units of this kind
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            UnitKind::Linear => "LENGTHUNIT",
            UnitKind::Angular => "ANGLEUNIT",
            UnitKind::Scale => "SCALEUNIT",
            UnitKind::Time => "TIMEUNIT",
            UnitKind::Parametric => "PARAMETRICUNIT",
        }
    }

    /// Parse a kind name as used in definition files
    pub fn from_name(name: &str) -> CsResult<UnitKind> {
        match name.trim().to_lowercase().as_str() {
            "linear" | "length" => Ok(UnitKind::Linear),
            "angular" | "angle" => Ok(UnitKind::Angular),
            "scale" => Ok(UnitKind::Scale),
            "time" | "temporal" => Ok(UnitKind::Time),
            "parametric" => Ok(UnitKind::Parametric),
            other => Err(CsError::ConfigError(format!("Unknown unit kind: {}", other))),
        }
    }
}

/// A unit of measure
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name: String,
    kind: UnitKind,
    factor: f64,
}

impl Unit {
    /// Create a unit from its parts
    pub fn new(name: &str, kind: UnitKind, factor: f64) -> Self {
        Unit {
            name: name.to_string(),
            kind,
            factor,
        }
    }

    /// Create a unit read from a definition, rejecting factors that are not
    /// finite and positive
    pub fn try_new(name: &str, kind: UnitKind, factor: f64) -> CsResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CsError::ConfigError(format!(
                "unit '{}' has invalid factor {}", name, factor
            )));
        }
        Ok(Unit::new(name, kind, factor))
    }

    /// The metre
    pub fn metre() -> Self {
        Unit::new("metre", UnitKind::Linear, 1.0)
    }

    /// The degree of arc
    pub fn degree() -> Self {
        Unit::new("degree", UnitKind::Angular, std::f64::consts::PI / 180.0)
    }

    /// The second
    pub fn second() -> Self {
        Unit::new("second", UnitKind::Time, 1.0)
    }

    /// The dimensionless unit
    pub fn unity() -> Self {
        Unit::new("unity", UnitKind::Scale, 1.0)
    }

    /// Resolve a well-known unit by name or alias, ignoring case
    pub fn lookup(name: &str) -> CsResult<Unit> {
        UNIT_TABLE.get(name)
            .cloned()
            .ok_or_else(|| CsError::UnknownUnit(name.trim().to_string()))
    }

    /// Unit name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical quantity measured
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Scale factor to the base unit of the kind
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// WKT element for this unit, e.g. `LENGTHUNIT["metre",1]`
    pub fn wkt_element(&self) -> WktElement {
        WktElement::new(self.kind.wkt_keyword())
            .text(&self.name)
            .number(self.factor)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Name and alias index over the known units
#[derive(Debug, Default)]
pub struct UnitTable {
    units: Vec<Unit>,
    // Lowercased names and aliases to positions in `units`
    index: HashMap<String, usize>,
}

impl UnitTable {
    /// Parse unit definitions from a TOML string
    ///
    /// The expected layout is an array of `[[unit]]` tables, each with
    /// `name`, `kind`, `factor` and an optional `aliases` array.
    pub fn from_str(content: &str) -> CsResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CsError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut table = UnitTable::default();

        let entries = match toml_value.get("unit").and_then(|v| v.as_array()) {
            Some(entries) => entries,
            None => return Ok(table),
        };

        for entry in entries {
            let name = entry.get("name").and_then(|v| v.as_str())
                .ok_or(CsError::MissingField("unit.name"))?;
            let kind = entry.get("kind").and_then(|v| v.as_str())
                .ok_or(CsError::MissingField("unit.kind"))?;
            let factor = entry.get("factor")
                .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
                .ok_or(CsError::MissingField("unit.factor"))?;

            let unit = Unit::try_new(name, UnitKind::from_name(kind)?, factor)?;
            let position = table.units.len();
            table.index.insert(name.to_lowercase(), position);

            if let Some(aliases) = entry.get("aliases").and_then(|v| v.as_array()) {
                for alias in aliases.iter().filter_map(|a| a.as_str()) {
                    table.index.insert(alias.to_lowercase(), position);
                }
            }

            table.units.push(unit);
        }

        debug!("Loaded {} units ({} names)", table.units.len(), table.index.len());
        Ok(table)
    }

    /// Find a unit by name or alias, ignoring case
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.index.get(&name.trim().to_lowercase())
            .map(|&position| &self.units[position])
    }

    /// Number of distinct units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
