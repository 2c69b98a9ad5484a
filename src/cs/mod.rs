//! Coordinate system contracts (ISO 19111)
//!
//! This module provides the code lists, capability traits and immutable
//! default implementations for coordinate systems and their axes.

pub mod errors;
mod axis_direction;
mod range_meaning;
mod identified;
pub mod unit;
mod axis;
mod kind;
mod coordinate_system;
mod markers;
pub mod wkt;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::errors::{CsError, CsResult};
pub use self::axis_direction::AxisDirection;
pub use self::range_meaning::RangeMeaning;
pub use self::identified::IdentifiedObject;
pub use self::unit::{Unit, UnitKind};
pub use self::axis::{Axis, AxisBuilder, CoordinateSystemAxis};
pub use self::kind::CsKind;
pub use self::coordinate_system::{AxisIter, CoordinateSystem, CsDefinition};
pub use self::markers::{
    AffineCS, AffineCs, AnyCs, CartesianCS, CartesianCs, CylindralCS, CylindralCs,
    EllipsoidalCS, EllipsoidalCs, LinearCS, LinearCs, ParametricCS, ParametricCs,
    PolarCS, PolarCs, SphericalCS, SphericalCs, TimeCS, TimeCs, VerticalCS, VerticalCs,
};
