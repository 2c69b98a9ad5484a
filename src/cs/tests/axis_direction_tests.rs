//! Tests for the axis direction code list

extern crate std;

use crate::cs::{AxisDirection, CsError};

#[test]
fn test_direction_count() {
    std::assert_eq!(AxisDirection::values().len(), 32);
}

#[test]
fn test_direction_codes_round_trip() {
    for dir in AxisDirection::values() {
        let decoded = AxisDirection::from_code(dir.code()).unwrap();
        std::assert_eq!(decoded, *dir, "round trip failed for {}", dir.code());
    }
}

#[test]
fn test_direction_codes_are_unique() {
    let mut codes: Vec<&str> = AxisDirection::values().iter().map(|d| d.code()).collect();
    codes.sort();
    codes.dedup();
    std::assert_eq!(codes.len(), 32);
}

#[test]
fn test_portable_code_values() {
    std::assert_eq!(AxisDirection::North.code(), "north");
    std::assert_eq!(AxisDirection::ColumnNegative.code(), "columnNegative");
    std::assert_eq!(AxisDirection::GeocentricX.code(), "geocentricX");
    std::assert_eq!(AxisDirection::DisplayDown.to_string(), "displayDown");
}

#[test]
fn test_south_south_east_is_distinct_from_south_south_west() {
    std::assert_eq!(AxisDirection::SouthSouthEast.code(), "southSouthEast");
    std::assert_eq!(AxisDirection::SouthSouthWest.code(), "southSouthWest");
    std::assert_eq!(
        AxisDirection::from_code("southSouthEast").unwrap(),
        AxisDirection::SouthSouthEast
    );
}

#[test]
fn test_constant_name_lookup() {
    std::assert_eq!(AxisDirection::from_code("SOUTH_SOUTH_EAST").unwrap(), AxisDirection::SouthSouthEast);
    std::assert_eq!("geocentric_z".parse::<AxisDirection>().unwrap(), AxisDirection::GeocentricZ);
    std::assert_eq!(AxisDirection::RowPositive.constant_name(), "ROW_POSITIVE");
}

#[test]
fn test_unknown_direction() {
    let result = AxisDirection::from_code("sideways");
    std::assert!(matches!(result, Err(CsError::UnknownDirection(ref s)) if s == "sideways"));
    // Codes are case sensitive
    std::assert!(AxisDirection::from_code("North").is_err());
}

#[test]
fn test_opposites() {
    std::assert_eq!(AxisDirection::North.opposite(), Some(AxisDirection::South));
    std::assert_eq!(AxisDirection::EastNorthEast.opposite(), Some(AxisDirection::WestSouthWest));
    std::assert_eq!(AxisDirection::Past.opposite(), Some(AxisDirection::Future));
    std::assert_eq!(AxisDirection::DisplayLeft.opposite(), Some(AxisDirection::DisplayRight));
    std::assert_eq!(AxisDirection::Other.opposite(), Some(AxisDirection::Other));
    std::assert_eq!(AxisDirection::GeocentricY.opposite(), None);
}

#[test]
fn test_opposite_is_involution() {
    for dir in AxisDirection::values() {
        if let Some(opposite) = dir.opposite() {
            std::assert_eq!(opposite.opposite(), Some(*dir));
        }
    }
}

#[test]
fn test_absolute() {
    std::assert_eq!(AxisDirection::South.absolute(), AxisDirection::North);
    std::assert_eq!(AxisDirection::West.absolute(), AxisDirection::East);
    std::assert_eq!(AxisDirection::NorthWest.absolute(), AxisDirection::SouthEast);
    std::assert_eq!(AxisDirection::Down.absolute(), AxisDirection::Up);
    std::assert_eq!(AxisDirection::ColumnNegative.absolute(), AxisDirection::ColumnPositive);
    std::assert_eq!(AxisDirection::North.absolute(), AxisDirection::North);
    std::assert_eq!(AxisDirection::GeocentricZ.absolute(), AxisDirection::GeocentricZ);
}

#[test]
fn test_compass_and_colinear() {
    std::assert!(AxisDirection::NorthNorthWest.is_compass());
    std::assert!(!AxisDirection::Up.is_compass());
    std::assert!(!AxisDirection::Other.is_compass());
    std::assert!(AxisDirection::East.is_colinear(AxisDirection::West));
    std::assert!(!AxisDirection::East.is_colinear(AxisDirection::North));
}
