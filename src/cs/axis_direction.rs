//! Axis direction code list
//!
//! The direction of positive increase in the coordinate value for a
//! coordinate system axis. This direction is exact in some cases and
//! approximate in others. The code strings are the portable ISO 19111
//! identifiers and are written verbatim wherever a direction is serialized.

use std::fmt;
use std::str::FromStr;

use crate::cs::errors::{CsError, CsResult};

/// Direction of positive increase along a coordinate system axis
///
/// Variants are declared in ISO 19111 order, which is also the order used
/// by [`AxisDirection::absolute`] to pick the canonical member of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisDirection {
    /// Unknown or unspecified axis orientation
    Other,
    /// Increasing ordinates values go North
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    /// Increasing ordinates values go East
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    /// Increasing ordinates values go South
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    /// Increasing ordinates values go West
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
    /// Increasing ordinates values go up, used for vertical coordinate reference systems
    Up,
    /// Increasing ordinates values go down
    Down,
    /// Axis positive direction is in the equatorial plane from the centre of the
    /// modelled Earth towards the intersection of the equator with the prime meridian
    GeocentricX,
    /// Axis positive direction is in the equatorial plane from the centre of the
    /// modelled Earth towards the intersection of the equator and the meridian 90°E
    GeocentricY,
    /// Axis positive direction is from the centre of the modelled Earth parallel
    /// to its rotation axis and towards its north pole
    GeocentricZ,
    /// Increasing time
    Future,
    /// Decreasing time
    Past,
    /// Axis positive direction is towards higher pixel column
    ColumnPositive,
    /// Axis positive direction is towards lower pixel column
    ColumnNegative,
    /// Axis positive direction is towards higher pixel row
    RowPositive,
    /// Axis positive direction is towards lower pixel row
    RowNegative,
    /// Axis positive direction is right in display
    DisplayRight,
    /// Axis positive direction is left in display
    DisplayLeft,
    /// Axis positive direction is towards top of approximately vertical display surface
    DisplayUp,
    /// Axis positive direction is towards bottom of approximately vertical display surface
    DisplayDown,
}

/// Code table: (direction, portable code, constant name)
const DIRECTION_TABLE: [(AxisDirection, &str, &str); 32] = [
    (AxisDirection::Other, "other", "OTHER"),
    (AxisDirection::North, "north", "NORTH"),
    (AxisDirection::NorthNorthEast, "northNorthEast", "NORTH_NORTH_EAST"),
    (AxisDirection::NorthEast, "northEast", "NORTH_EAST"),
    (AxisDirection::EastNorthEast, "eastNorthEast", "EAST_NORTH_EAST"),
    (AxisDirection::East, "east", "EAST"),
    (AxisDirection::EastSouthEast, "eastSouthEast", "EAST_SOUTH_EAST"),
    (AxisDirection::SouthEast, "southEast", "SOUTH_EAST"),
    (AxisDirection::SouthSouthEast, "southSouthEast", "SOUTH_SOUTH_EAST"),
    (AxisDirection::South, "south", "SOUTH"),
    (AxisDirection::SouthSouthWest, "southSouthWest", "SOUTH_SOUTH_WEST"),
    (AxisDirection::SouthWest, "southWest", "SOUTH_WEST"),
    (AxisDirection::WestSouthWest, "westSouthWest", "WEST_SOUTH_WEST"),
    (AxisDirection::West, "west", "WEST"),
    (AxisDirection::WestNorthWest, "westNorthWest", "WEST_NORTH_WEST"),
    (AxisDirection::NorthWest, "northWest", "NORTH_WEST"),
    (AxisDirection::NorthNorthWest, "northNorthWest", "NORTH_NORTH_WEST"),
    (AxisDirection::Up, "up", "UP"),
    (AxisDirection::Down, "down", "DOWN"),
    (AxisDirection::GeocentricX, "geocentricX", "GEOCENTRIC_X"),
    (AxisDirection::GeocentricY, "geocentricY", "GEOCENTRIC_Y"),
    (AxisDirection::GeocentricZ, "geocentricZ", "GEOCENTRIC_Z"),
    (AxisDirection::Future, "future", "FUTURE"),
    (AxisDirection::Past, "past", "PAST"),
    (AxisDirection::ColumnPositive, "columnPositive", "COLUMN_POSITIVE"),
    (AxisDirection::ColumnNegative, "columnNegative", "COLUMN_NEGATIVE"),
    (AxisDirection::RowPositive, "rowPositive", "ROW_POSITIVE"),
    (AxisDirection::RowNegative, "rowNegative", "ROW_NEGATIVE"),
    (AxisDirection::DisplayRight, "displayRight", "DISPLAY_RIGHT"),
    (AxisDirection::DisplayLeft, "displayLeft", "DISPLAY_LEFT"),
    (AxisDirection::DisplayUp, "displayUp", "DISPLAY_UP"),
    (AxisDirection::DisplayDown, "displayDown", "DISPLAY_DOWN"),
];

const ALL_DIRECTIONS: [AxisDirection; 32] = {
    let mut all = [AxisDirection::Other; 32];
    let mut i = 0;
    while i < DIRECTION_TABLE.len() {
        all[i] = DIRECTION_TABLE[i].0;
        i += 1;
    }
    all
};

impl AxisDirection {
    /// Returns all directions in declaration order
    pub fn values() -> &'static [AxisDirection] {
        &ALL_DIRECTIONS
    }

    /// Returns the portable code string (e.g. `"northEast"`)
    pub fn code(&self) -> &'static str {
        DIRECTION_TABLE[*self as usize].1
    }

    /// Returns the upper-snake constant name (e.g. `"NORTH_EAST"`)
    pub fn constant_name(&self) -> &'static str {
        DIRECTION_TABLE[*self as usize].2
    }

    /// Look up a direction by its code string
    ///
    /// The portable code is matched exactly first. As a convenience the
    /// constant name (`SOUTH_SOUTH_EAST`) is also accepted, ignoring case.
    pub fn from_code(code: &str) -> CsResult<AxisDirection> {
        let code = code.trim();

        if let Some((dir, _, _)) = DIRECTION_TABLE.iter().find(|(_, c, _)| *c == code) {
            return Ok(*dir);
        }

        DIRECTION_TABLE.iter()
            .find(|(_, _, name)| name.eq_ignore_ascii_case(code))
            .map(|(dir, _, _)| *dir)
            .ok_or_else(|| CsError::UnknownDirection(code.to_string()))
    }

    /// Returns the opposite direction, if one is defined
    ///
    /// `Other` is its own opposite. The geocentric directions have none.
    pub fn opposite(&self) -> Option<AxisDirection> {
        use AxisDirection::*;

        let opposite = match self {
            Other => Other,
            North => South,
            NorthNorthEast => SouthSouthWest,
            NorthEast => SouthWest,
            EastNorthEast => WestSouthWest,
            East => West,
            EastSouthEast => WestNorthWest,
            SouthEast => NorthWest,
            SouthSouthEast => NorthNorthWest,
            South => North,
            SouthSouthWest => NorthNorthEast,
            SouthWest => NorthEast,
            WestSouthWest => EastNorthEast,
            West => East,
            WestNorthWest => EastSouthEast,
            NorthWest => SouthEast,
            NorthNorthWest => SouthSouthEast,
            Up => Down,
            Down => Up,
            Future => Past,
            Past => Future,
            ColumnPositive => ColumnNegative,
            ColumnNegative => ColumnPositive,
            RowPositive => RowNegative,
            RowNegative => RowPositive,
            DisplayRight => DisplayLeft,
            DisplayLeft => DisplayRight,
            DisplayUp => DisplayDown,
            DisplayDown => DisplayUp,
            GeocentricX | GeocentricY | GeocentricZ => return None,
        };

        Some(opposite)
    }

    /// Returns the "absolute" direction of this one
    ///
    /// Of a direction and its opposite, this is whichever comes first in
    /// declaration order: `South.absolute()` is `North`, `West.absolute()`
    /// is `East`, `Past.absolute()` is `Future`. Directions without an
    /// opposite are returned unchanged.
    pub fn absolute(&self) -> AxisDirection {
        match self.opposite() {
            Some(opposite) if opposite < *self => opposite,
            _ => *self,
        }
    }

    /// Whether this is one of the 16 compass directions
    pub fn is_compass(&self) -> bool {
        (AxisDirection::North..=AxisDirection::NorthNorthWest).contains(self)
    }

    /// Whether two directions lie along the same line (identical or opposite)
    pub fn is_colinear(&self, other: AxisDirection) -> bool {
        self.absolute() == other.absolute()
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AxisDirection {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AxisDirection::from_code(s)
    }
}
