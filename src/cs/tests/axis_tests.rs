//! Tests for coordinate system axes

extern crate std;

use crate::cs::{
    Axis, AxisDirection, CoordinateSystemAxis, CsError, IdentifiedObject, RangeMeaning, Unit,
};
use super::test_utils::longitude_axis;

/// Minimal axis relying on every default of the contract
struct BareAxis;

impl IdentifiedObject for BareAxis {
    fn name(&self) -> &str {
        "bare"
    }

    fn to_wkt(&self) -> String {
        String::new()
    }
}

impl CoordinateSystemAxis for BareAxis {
    type Unit = &'static str;

    fn abbreviation(&self) -> &str {
        "b"
    }

    fn direction(&self) -> AxisDirection {
        AxisDirection::Other
    }

    fn unit(&self) -> &&'static str {
        &"metre"
    }
}

#[test]
fn test_contract_defaults() {
    let axis = BareAxis;
    std::assert_eq!(axis.remarks(), None);
    std::assert_eq!(axis.minimum_value(), f64::NEG_INFINITY);
    std::assert_eq!(axis.maximum_value(), f64::INFINITY);
    std::assert_eq!(axis.range_meaning(), None);
    std::assert_eq!(*axis.unit(), "metre");
}

#[test]
fn test_builder_defaults() {
    let axis = Axis::builder("Height", "h", AxisDirection::Up, Unit::metre()).build().unwrap();
    std::assert_eq!(axis.name(), "Height");
    std::assert_eq!(axis.abbreviation(), "h");
    std::assert_eq!(axis.direction(), AxisDirection::Up);
    std::assert_eq!(axis.unit(), &Unit::metre());
    std::assert!(axis.minimum_value().is_infinite() && axis.minimum_value() < 0.0);
    std::assert!(axis.maximum_value().is_infinite() && axis.maximum_value() > 0.0);
    std::assert_eq!(axis.range_meaning(), None);
    std::assert_eq!(axis.remarks(), None);
}

#[test]
fn test_wraparound_longitude_axis() {
    let axis = longitude_axis();
    std::assert_eq!(axis.minimum_value(), -180.0);
    std::assert_eq!(axis.maximum_value(), 180.0);
    std::assert_eq!(axis.range_meaning(), Some(RangeMeaning::Wraparound));
    std::assert!(axis.minimum_value() <= axis.maximum_value());
}

#[test]
fn test_inverted_range_rejected() {
    let result = Axis::builder("Lat", "Lat", AxisDirection::North, Unit::degree())
        .range(90.0, -90.0)
        .build();
    std::assert!(matches!(result, Err(CsError::InvalidRange { min, max }) if min == 90.0 && max == -90.0));
}

#[test]
fn test_nan_bound_rejected() {
    let result = Axis::builder("Lat", "Lat", AxisDirection::North, Unit::degree())
        .minimum(f64::NAN)
        .build();
    std::assert!(matches!(result, Err(CsError::InvalidRange { .. })));
}

#[test]
fn test_half_bounded_axis() {
    let axis = Axis::builder("Depth", "D", AxisDirection::Down, Unit::metre())
        .minimum(0.0)
        .build()
        .unwrap();
    std::assert_eq!(axis.minimum_value(), 0.0);
    std::assert_eq!(axis.maximum_value(), f64::INFINITY);
}

#[test]
fn test_missing_required_fields() {
    let no_name = Axis::builder(" ", "X", AxisDirection::East, Unit::metre()).build();
    std::assert!(matches!(no_name, Err(CsError::MissingField("name"))));

    let no_abbreviation = Axis::builder("Easting", "", AxisDirection::East, Unit::metre()).build();
    std::assert!(matches!(no_abbreviation, Err(CsError::MissingField("abbreviation"))));

    let no_unit = Axis::builder("Easting", "X", AxisDirection::East, Unit::new("", crate::cs::UnitKind::Linear, 1.0)).build();
    std::assert!(matches!(no_unit, Err(CsError::MissingField("unit"))));
}

#[test]
fn test_axis_remarks() {
    let axis = Axis::builder("Time", "t", AxisDirection::Future, Unit::second())
        .remarks("Seconds since epoch")
        .build()
        .unwrap();
    std::assert_eq!(axis.remarks(), Some("Seconds since epoch"));
}
