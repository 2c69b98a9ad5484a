//! Custom error types for coordinate system handling

use std::fmt;
use std::io;

/// Coordinate system error types
#[derive(Debug)]
pub enum CsError {
    /// I/O error
    IoError(io::Error),
    /// Axis index outside `[0, dimension)`
    AxisIndexOutOfRange { index: usize, dimension: usize },
    /// Text that is not an axis direction code
    UnknownDirection(String),
    /// Text that is not a range meaning code
    UnknownRangeMeaning(String),
    /// Text that is not a coordinate system kind
    UnknownKind(String),
    /// Unit name not found in the unit table
    UnknownUnit(String),
    /// Axis minimum greater than its maximum
    InvalidRange { min: f64, max: f64 },
    /// A required property was absent or empty
    MissingField(&'static str),
    /// A coordinate system was declared without axes
    EmptyAxes,
    /// A definition was wrapped into a typed coordinate system of another kind
    KindMismatch { expected: &'static str, found: &'static str },
    /// Malformed definition file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsError::IoError(e) => write!(f, "I/O error: {}", e),
            CsError::AxisIndexOutOfRange { index, dimension } => {
                write!(f, "Axis index {} out of range for dimension {}", index, dimension)
            },
            CsError::UnknownDirection(s) => write!(f, "Unknown axis direction: {}", s),
            CsError::UnknownRangeMeaning(s) => write!(f, "Unknown range meaning: {}", s),
            CsError::UnknownKind(s) => write!(f, "Unknown coordinate system kind: {}", s),
            CsError::UnknownUnit(s) => write!(f, "Unknown unit of measure: {}", s),
            CsError::InvalidRange { min, max } => {
                write!(f, "Invalid axis range: minimum {} is greater than maximum {}", min, max)
            },
            CsError::MissingField(field) => write!(f, "Missing required field: {}", field),
            CsError::EmptyAxes => write!(f, "Coordinate system must have at least one axis"),
            CsError::KindMismatch { expected, found } => {
                write!(f, "Expected a {} coordinate system, found {}", expected, found)
            },
            CsError::ConfigError(msg) => write!(f, "Definition error: {}", msg),
            CsError::GenericError(msg) => write!(f, "CS error: {}", msg),
        }
    }
}

impl std::error::Error for CsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CsError {
    fn from(error: io::Error) -> Self {
        CsError::IoError(error)
    }
}

/// Result type for coordinate system operations
pub type CsResult<T> = Result<T, CsError>;

impl From<String> for CsError {
    fn from(msg: String) -> Self {
        CsError::GenericError(msg)
    }
}
