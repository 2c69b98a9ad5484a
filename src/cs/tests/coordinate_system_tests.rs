//! Tests for coordinate systems

extern crate std;

use crate::cs::{
    Axis, AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsDefinition, CsError, CsKind,
    IdentifiedObject, Unit,
};
use super::test_utils::{cartesian_2d, ellipsoidal_2d};

#[test]
fn test_cartesian_axes_in_order() {
    let cs = cartesian_2d();
    std::assert_eq!(cs.dimension(), 2);
    std::assert_eq!(cs.axis(0).unwrap().direction(), AxisDirection::East);
    std::assert_eq!(cs.axis(1).unwrap().direction(), AxisDirection::North);
    std::assert_eq!(cs.axis(0).unwrap().abbreviation(), "X");
    std::assert_eq!(cs.axis(1).unwrap().unit().name(), "metre");
}

#[test]
fn test_axis_out_of_range() {
    let cs = cartesian_2d();
    let result = cs.axis(2);
    std::assert!(matches!(result, Err(CsError::AxisIndexOutOfRange { index: 2, dimension: 2 })));
    std::assert!(cs.axis(usize::MAX).is_err());
}

#[test]
fn test_axis_lookup_is_stable() {
    let cs = ellipsoidal_2d();
    for i in 0..cs.dimension() {
        let first = cs.axis(i).unwrap();
        let second = cs.axis(i).unwrap();
        std::assert!(std::ptr::eq(first, second));
        std::assert_eq!(first, second);
    }
}

#[test]
fn test_axes_iterator_matches_dimension() {
    let cs = ellipsoidal_2d();
    let abbreviations: Vec<&str> = cs.axes().map(|a| a.abbreviation()).collect();
    std::assert_eq!(abbreviations, vec!["Lon", "Lat"]);
    std::assert_eq!(cs.axes().len(), cs.dimension());
}

#[test]
fn test_empty_axes_rejected() {
    let result = CsDefinition::new("Nothing", CsKind::Linear, Vec::new());
    std::assert!(matches!(result, Err(CsError::EmptyAxes)));
}

#[test]
fn test_empty_name_rejected() {
    let axis = Axis::builder("Distance", "d", AxisDirection::East, Unit::metre()).build().unwrap();
    let result = CsDefinition::new("", CsKind::Linear, vec![axis]);
    std::assert!(matches!(result, Err(CsError::MissingField("name"))));
}

#[test]
fn test_nominal_dimension_is_informative_only() {
    let axis = Axis::builder("Distance", "d", AxisDirection::East, Unit::metre()).build().unwrap();
    // A 1D Cartesian CS is accepted, just flagged as outside the documented range
    let cs = CsDefinition::new("Odd", CsKind::Cartesian, vec![axis]).unwrap();
    std::assert!(!cs.has_nominal_dimension());
    std::assert!(cartesian_2d().has_nominal_dimension());
}

#[test]
fn test_remarks() {
    let cs = cartesian_2d();
    std::assert_eq!(cs.remarks(), None);
    let cs = cs.with_remarks("Local grid");
    std::assert_eq!(cs.remarks(), Some("Local grid"));
    std::assert_eq!(cs.name(), "Cartesian 2D");
}

#[test]
fn test_kind_names() {
    std::assert_eq!(CsKind::values().len(), 10);
    for kind in CsKind::values() {
        std::assert_eq!(CsKind::from_name(kind.type_name()).unwrap(), *kind);
        std::assert_eq!(CsKind::from_name(kind.wkt_keyword()).unwrap(), *kind);
    }
    std::assert_eq!("cylindral".parse::<CsKind>().unwrap(), CsKind::Cylindrical);
    std::assert_eq!("time".parse::<CsKind>().unwrap(), CsKind::Time);
    std::assert!(matches!(CsKind::from_name("hyperbolic"), Err(CsError::UnknownKind(_))));
}

#[test]
fn test_definitions_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CsDefinition>();
    assert_send_sync::<Axis>();
}
