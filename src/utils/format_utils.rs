//! Text formatting for coordinate system reports
//!
//! Utilities for rendering coordinate systems and direction listings as
//! plain-text tables for the CLI and the library facade.

use crate::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsDefinition, IdentifiedObject};

/// Formats an axis bound, writing infinities as `-inf` / `+inf`
pub fn format_bound(value: f64) -> String {
    if value == f64::INFINITY {
        "+inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{}", value)
    }
}

/// Renders a summary of a coordinate system with one row per axis
///
/// # Arguments
/// * `cs` - The coordinate system to describe
///
/// # Returns
/// A multi-line report
pub fn describe_definition(cs: &CsDefinition) -> String {
    let mut result = format!("Coordinate System: {}\n", cs.name());
    result.push_str(&format!("  Kind: {} ({})\n", cs.kind(), cs.kind().wkt_keyword()));
    result.push_str(&format!("  Dimension: {}", cs.dimension()));
    if !cs.has_nominal_dimension() {
        let nominal = cs.kind().nominal_dimensions();
        result.push_str(&format!(" (documented for {}..={})", nominal.start(), nominal.end()));
    }
    result.push('\n');
    if let Some(remarks) = cs.remarks() {
        result.push_str(&format!("  Remarks: {}\n", remarks));
    }

    result.push_str(&format!(
        "\n  {:<3} {:<24} {:<6} {:<16} {:<12} {:<22} {}\n",
        "#", "Name", "Abbr", "Direction", "Unit", "Range", "Meaning"
    ));
    for (i, axis) in cs.axes().enumerate() {
        let range = format!(
            "[{}, {}]",
            format_bound(axis.minimum_value()),
            format_bound(axis.maximum_value())
        );
        result.push_str(&format!(
            "  {:<3} {:<24} {:<6} {:<16} {:<12} {:<22} {}\n",
            i,
            axis.name(),
            axis.abbreviation(),
            axis.direction().code(),
            axis.unit().name(),
            range,
            axis.range_meaning().map_or("-", |m| m.code())
        ));
    }

    result
}

/// Renders one line per direction: code, constant name, opposite, absolute
pub fn describe_directions(directions: &[AxisDirection]) -> String {
    let mut result = format!(
        "{:<16} {:<18} {:<16} {}\n",
        "Code", "Constant", "Opposite", "Absolute"
    );
    for dir in directions {
        result.push_str(&format!(
            "{:<16} {:<18} {:<16} {}\n",
            dir.code(),
            dir.constant_name(),
            dir.opposite().map_or("-", |o| o.code()),
            dir.absolute().code()
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::{Axis, CsKind, RangeMeaning, Unit};

    #[test]
    fn test_format_bound() {
        assert_eq!(format_bound(f64::INFINITY), "+inf");
        assert_eq!(format_bound(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_bound(-180.0), "-180");
    }

    #[test]
    fn test_describe_definition() {
        let lon = Axis::builder("Geodetic longitude", "Lon", AxisDirection::East, Unit::degree())
            .range(-180.0, 180.0)
            .range_meaning(RangeMeaning::Wraparound)
            .build()
            .unwrap();
        let cs = CsDefinition::new("Longitude only", CsKind::Ellipsoidal, vec![lon]).unwrap();

        let report = describe_definition(&cs);
        assert!(report.starts_with("Coordinate System: Longitude only\n"));
        assert!(report.contains("Kind: EllipsoidalCS (ellipsoidal)"));
        assert!(report.contains("Dimension: 1 (documented for 2..=3)"));
        assert!(report.contains("[-180, 180]"));
        assert!(report.contains("wraparound"));
    }

    #[test]
    fn test_describe_directions() {
        let listing = describe_directions(&[AxisDirection::South, AxisDirection::GeocentricX]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("south"));
        assert!(lines[1].contains("north"));
        assert!(lines[2].contains(" - "));
    }
}
