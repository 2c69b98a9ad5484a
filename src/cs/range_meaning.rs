//! Meaning of an axis value range

use std::fmt;
use std::str::FromStr;

use crate::cs::errors::{CsError, CsResult};

/// Meaning of the axis value range specified through minimum and maximum values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeMeaning {
    /// Any value between and including the minimum and maximum values is
    /// valid; values outside are invalid.
    Exact,
    /// The axis is continuous with values wrapping around at the minimum and
    /// maximum values. Values with the same meaning repeat modulo the
    /// difference between maximum and minimum (e.g. longitude at ±180°).
    Wraparound,
}

impl RangeMeaning {
    /// Returns both range meanings
    pub fn values() -> &'static [RangeMeaning] {
        &[RangeMeaning::Exact, RangeMeaning::Wraparound]
    }

    /// Returns the portable code string
    pub fn code(&self) -> &'static str {
        match self {
            RangeMeaning::Exact => "exact",
            RangeMeaning::Wraparound => "wraparound",
        }
    }

    /// Look up a range meaning by code, ignoring case
    pub fn from_code(code: &str) -> CsResult<RangeMeaning> {
        let code = code.trim();
        RangeMeaning::values().iter()
            .find(|m| m.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| CsError::UnknownRangeMeaning(code.to_string()))
    }
}

impl fmt::Display for RangeMeaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RangeMeaning {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeMeaning::from_code(s)
    }
}
