//! Closed set of coordinate system kinds

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::cs::errors::{CsError, CsResult};

/// The kind of a coordinate system
///
/// Each kind carries geometric expectations (dimension, units, axis
/// geometry) that are documented here but never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsKind {
    /// 2- or 3-dimensional, straight axes that are not necessarily orthogonal
    Affine,
    /// 2- or 3-dimensional, orthogonal straight axes sharing one length unit
    Cartesian,
    /// 3-dimensional: a polar CS extended by a straight axis perpendicular
    /// to the plane spanned by the polar CS
    Cylindrical,
    /// 2- or 3-dimensional: geodetic latitude, geodetic longitude and (in
    /// the 3D case) ellipsoidal height
    Ellipsoidal,
    /// 1-dimensional: distance, with or without offset, from the origin
    /// along the single axis
    Linear,
    /// 1-dimensional: parameter values or functions describing the position
    Parametric,
    /// 2-dimensional: distance from the origin and angle from a reference
    /// direction
    Polar,
    /// 3-dimensional: one distance from the origin and two angular
    /// coordinates. Not an ellipsoidal CS on a degenerate ellipsoid.
    Spherical,
    /// 1-dimensional: temporal position in time units from a time origin
    Time,
    /// 1-dimensional: heights or depths, usually tied to the Earth's
    /// gravity field
    Vertical,
}

impl CsKind {
    /// All kinds in declaration order
    pub fn values() -> &'static [CsKind] {
        &[
            CsKind::Affine,
            CsKind::Cartesian,
            CsKind::Cylindrical,
            CsKind::Ellipsoidal,
            CsKind::Linear,
            CsKind::Parametric,
            CsKind::Polar,
            CsKind::Spherical,
            CsKind::Time,
            CsKind::Vertical,
        ]
    }

    /// ISO 19111 type name (e.g. `CartesianCS`)
    pub fn type_name(&self) -> &'static str {
        match self {
            CsKind::Affine => "AffineCS",
            CsKind::Cartesian => "CartesianCS",
            CsKind::Cylindrical => "CylindralCS",
            CsKind::Ellipsoidal => "EllipsoidalCS",
            CsKind::Linear => "LinearCS",
            CsKind::Parametric => "ParametricCS",
            CsKind::Polar => "PolarCS",
            CsKind::Spherical => "SphericalCS",
            CsKind::Time => "TimeCS",
            CsKind::Vertical => "VerticalCS",
        }
    }

    /// Keyword for the `CS[...]` element in WKT 2
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            CsKind::Affine => "affine",
            CsKind::Cartesian => "Cartesian",
            CsKind::Cylindrical => "cylindrical",
            CsKind::Ellipsoidal => "ellipsoidal",
            CsKind::Linear => "linear",
            CsKind::Parametric => "parametric",
            CsKind::Polar => "polar",
            CsKind::Spherical => "spherical",
            CsKind::Time => "temporal",
            CsKind::Vertical => "vertical",
        }
    }

    /// Dimensions the kind is documented for
    pub fn nominal_dimensions(&self) -> RangeInclusive<usize> {
        match self {
            CsKind::Affine | CsKind::Cartesian | CsKind::Ellipsoidal => 2..=3,
            CsKind::Cylindrical | CsKind::Spherical => 3..=3,
            CsKind::Polar => 2..=2,
            CsKind::Linear | CsKind::Parametric | CsKind::Time | CsKind::Vertical => 1..=1,
        }
    }

    /// Parse a kind from a type name, WKT keyword or plain word
    ///
    /// Accepts `CartesianCS`, `Cartesian`, `cartesian`; `cylindral` and
    /// `cylindrical`; `time` and `temporal`. Case is ignored.
    pub fn from_name(name: &str) -> CsResult<CsKind> {
        let lower = name.trim().to_lowercase();
        let word = lower.strip_suffix("cs").unwrap_or(&lower);

        match word {
            "affine" => Ok(CsKind::Affine),
            "cartesian" => Ok(CsKind::Cartesian),
            "cylindral" | "cylindrical" => Ok(CsKind::Cylindrical),
            "ellipsoidal" => Ok(CsKind::Ellipsoidal),
            "linear" => Ok(CsKind::Linear),
            "parametric" => Ok(CsKind::Parametric),
            "polar" => Ok(CsKind::Polar),
            "spherical" => Ok(CsKind::Spherical),
            "time" | "temporal" => Ok(CsKind::Time),
            "vertical" => Ok(CsKind::Vertical),
            _ => Err(CsError::UnknownKind(name.trim().to_string())),
        }
    }
}

impl fmt::Display for CsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for CsKind {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CsKind::from_name(s)
    }
}
