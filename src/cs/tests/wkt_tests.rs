//! Tests for WKT output

extern crate std;

use crate::cs::{Axis, AxisDirection, CsDefinition, CsKind, IdentifiedObject, Unit};
use crate::cs::wkt::{escape_text, format_number, join_elements, WktElement};
use super::test_utils::{cartesian_2d, ellipsoidal_2d, longitude_axis};

#[test]
fn test_element_rendering() {
    let element = WktElement::new("CS").enumeration("Cartesian").integer(2);
    std::assert_eq!(element.to_string(), "CS[Cartesian,2]");
    std::assert_eq!(element.keyword(), "CS");

    let nested = WktElement::new("A").text("x").child(WktElement::new("B").number(0.5));
    std::assert_eq!(nested.to_string(), "A[\"x\",B[0.5]]");
    std::assert_eq!(join_elements(&[element, nested]), "CS[Cartesian,2],A[\"x\",B[0.5]]");
}

#[test]
fn test_text_escaping() {
    std::assert_eq!(escape_text("say \"hi\""), "say \"\"hi\"\"");
    let element = WktElement::new("REMARK").text("a \"b\"");
    std::assert_eq!(element.to_string(), "REMARK[\"a \"\"b\"\"\"]");
}

#[test]
fn test_number_format() {
    std::assert_eq!(format_number(1.0), "1");
    std::assert_eq!(format_number(-180.0), "-180");
    std::assert_eq!(format_number(-0.0), "0");
    std::assert_eq!(format_number(0.3048), "0.3048");
}

#[test]
fn test_axis_wkt() {
    let axis = longitude_axis();
    std::assert_eq!(
        axis.to_wkt(),
        "AXIS[\"Geodetic longitude (Lon)\",east,ANGLEUNIT[\"degree\",0.017453292519943295],\
         AXISMINVALUE[-180],AXISMAXVALUE[180],RANGEMEANING[wraparound]]"
    );
}

#[test]
fn test_axis_wkt_name_equal_to_abbreviation() {
    let axis = Axis::builder("h", "h", AxisDirection::Up, Unit::metre()).build().unwrap();
    std::assert_eq!(axis.to_wkt(), "AXIS[\"(h)\",up,LENGTHUNIT[\"metre\",1]]");
}

#[test]
fn test_cartesian_wkt() {
    std::assert_eq!(
        cartesian_2d().to_wkt(),
        "CS[Cartesian,2],\
         AXIS[\"Easting (X)\",east,ORDER[1],LENGTHUNIT[\"metre\",1]],\
         AXIS[\"Northing (Y)\",north,ORDER[2],LENGTHUNIT[\"metre\",1]]"
    );
}

#[test]
fn test_wkt_with_remarks() {
    let wkt = ellipsoidal_2d().with_remarks("Greenwich based").to_wkt();
    std::assert!(wkt.starts_with("CS[ellipsoidal,2],AXIS[\"Geodetic longitude (Lon)\",east,ORDER[1],"));
    std::assert!(wkt.contains("RANGEMEANING[exact]"));
    std::assert!(wkt.ends_with(",REMARK[\"Greenwich based\"]"));
}

#[test]
fn test_time_cs_wkt_keyword() {
    let axis = Axis::builder("Time", "t", AxisDirection::Future, Unit::second()).build().unwrap();
    let cs = CsDefinition::new("Time", CsKind::Time, vec![axis]).unwrap();
    std::assert_eq!(
        cs.to_wkt(),
        "CS[temporal,1],AXIS[\"Time (t)\",future,ORDER[1],TIMEUNIT[\"second\",1]]"
    );
}
