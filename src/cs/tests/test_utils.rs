use crate::cs::{Axis, AxisDirection, CsDefinition, CsKind, RangeMeaning, Unit};

/// Creates a 2D Cartesian coordinate system: X east, Y north, both in metres
pub fn cartesian_2d() -> CsDefinition {
    let x = Axis::builder("Easting", "X", AxisDirection::East, Unit::metre())
        .build()
        .unwrap();
    let y = Axis::builder("Northing", "Y", AxisDirection::North, Unit::metre())
        .build()
        .unwrap();

    CsDefinition::new("Cartesian 2D", CsKind::Cartesian, vec![x, y]).unwrap()
}

/// Creates a longitude axis wrapping around at ±180°
pub fn longitude_axis() -> Axis {
    Axis::builder("Geodetic longitude", "Lon", AxisDirection::East, Unit::degree())
        .range(-180.0, 180.0)
        .range_meaning(RangeMeaning::Wraparound)
        .build()
        .unwrap()
}

/// Creates a latitude axis bounded at ±90°
pub fn latitude_axis() -> Axis {
    Axis::builder("Geodetic latitude", "Lat", AxisDirection::North, Unit::degree())
        .range(-90.0, 90.0)
        .range_meaning(RangeMeaning::Exact)
        .build()
        .unwrap()
}

/// Creates a 2D ellipsoidal coordinate system in (longitude, latitude) order
pub fn ellipsoidal_2d() -> CsDefinition {
    CsDefinition::new(
        "Ellipsoidal 2D",
        CsKind::Ellipsoidal,
        vec![longitude_axis(), latitude_axis()],
    ).unwrap()
}
