//! Coordinate system kinds as types
//!
//! Each kind is available two ways. The marker traits (`CartesianCS`, ...)
//! add no members and let independent implementations tag their own types.
//! The wrappers (`CartesianCs`, ...) hold a [`CsDefinition`] already checked
//! to be of the right kind, and [`AnyCs`] is the closed union over them for
//! exhaustive matching.

use crate::cs::axis::Axis;
use crate::cs::coordinate_system::{CoordinateSystem, CsDefinition};
use crate::cs::errors::{CsError, CsResult};
use crate::cs::identified::IdentifiedObject;
use crate::cs::kind::CsKind;

macro_rules! typed_cs {
    ($(#[$marker_doc:meta])* $marker:ident, $wrapper:ident, $kind:ident) => {
        $(#[$marker_doc])*
        pub trait $marker: CoordinateSystem {}

        #[doc = concat!("A [`CsDefinition`] known to be a [`", stringify!($marker), "`]")]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $wrapper(CsDefinition);

        impl $wrapper {
            /// Wrap a definition, checking its kind
            pub fn new(definition: CsDefinition) -> CsResult<Self> {
                if definition.kind() != CsKind::$kind {
                    return Err(CsError::KindMismatch {
                        expected: CsKind::$kind.type_name(),
                        found: definition.kind().type_name(),
                    });
                }
                Ok($wrapper(definition))
            }

            /// Underlying definition
            pub fn definition(&self) -> &CsDefinition {
                &self.0
            }

            /// Unwrap into the underlying definition
            pub fn into_definition(self) -> CsDefinition {
                self.0
            }
        }

        impl IdentifiedObject for $wrapper {
            fn name(&self) -> &str {
                self.0.name()
            }

            fn remarks(&self) -> Option<&str> {
                self.0.remarks()
            }

            fn to_wkt(&self) -> String {
                self.0.to_wkt()
            }
        }

        impl CoordinateSystem for $wrapper {
            type Axis = Axis;

            fn dimension(&self) -> usize {
                self.0.dimension()
            }

            fn axis(&self, index: usize) -> CsResult<&Axis> {
                self.0.axis(index)
            }
        }

        impl $marker for $wrapper {}
    };
}

typed_cs!(
    /// A 2- or 3-dimensional coordinate system with straight axes that are
    /// not necessarily orthogonal.
    AffineCS, AffineCs, Affine
);

typed_cs!(
    /// A 2- or 3-dimensional coordinate system with orthogonal straight
    /// axes. All axes shall have the same length unit of measure.
    CartesianCS, CartesianCs, Cartesian
);

typed_cs!(
    /// A 3-dimensional coordinate system consisting of a polar coordinate
    /// system extended by a straight axis perpendicular to the plane spanned
    /// by the polar coordinate system.
    CylindralCS, CylindralCs, Cylindrical
);

typed_cs!(
    /// A 2- or 3-dimensional coordinate system in which position is
    /// specified by geodetic latitude, geodetic longitude, and (in the 3D
    /// case) ellipsoidal height.
    EllipsoidalCS, EllipsoidalCs, Ellipsoidal
);

typed_cs!(
    /// A 1-dimensional coordinate system of the points that lie on its
    /// single axis. The coordinate is the distance, with or without offset,
    /// from the origin to the point along the axis.
    LinearCS, LinearCs, Linear
);

typed_cs!(
    /// A 1-dimensional coordinate system whose single axis uses parameter
    /// values or functions to describe the position of a point.
    ParametricCS, ParametricCs, Parametric
);

typed_cs!(
    /// A 2-dimensional coordinate system in which position is specified by
    /// the distance from the origin and the angle between the line from the
    /// origin to a point and a reference direction.
    PolarCS, PolarCs, Polar
);

typed_cs!(
    /// A 3-dimensional coordinate system with one distance measured from the
    /// origin and two angular coordinates. Not to be confused with an
    /// ellipsoidal coordinate system based on an ellipsoid degenerated into
    /// a sphere.
    SphericalCS, SphericalCs, Spherical
);

typed_cs!(
    /// A 1-dimensional coordinate system containing a single time axis,
    /// describing the temporal position of a point in the specified time
    /// units from a specified time origin.
    TimeCS, TimeCs, Time
);

typed_cs!(
    /// A 1-dimensional coordinate system used to record the heights or
    /// depths of points. Usually dependent on the Earth's gravity field,
    /// perhaps loosely as when atmospheric pressure is the basis for the
    /// vertical axis.
    VerticalCS, VerticalCs, Vertical
);

/// A coordinate system of any kind, as a closed union
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCs {
    Affine(AffineCs),
    Cartesian(CartesianCs),
    Cylindrical(CylindralCs),
    Ellipsoidal(EllipsoidalCs),
    Linear(LinearCs),
    Parametric(ParametricCs),
    Polar(PolarCs),
    Spherical(SphericalCs),
    Time(TimeCs),
    Vertical(VerticalCs),
}

impl AnyCs {
    /// Wrap a definition into the variant matching its kind
    pub fn from_definition(definition: CsDefinition) -> AnyCs {
        match definition.kind() {
            CsKind::Affine => AnyCs::Affine(AffineCs(definition)),
            CsKind::Cartesian => AnyCs::Cartesian(CartesianCs(definition)),
            CsKind::Cylindrical => AnyCs::Cylindrical(CylindralCs(definition)),
            CsKind::Ellipsoidal => AnyCs::Ellipsoidal(EllipsoidalCs(definition)),
            CsKind::Linear => AnyCs::Linear(LinearCs(definition)),
            CsKind::Parametric => AnyCs::Parametric(ParametricCs(definition)),
            CsKind::Polar => AnyCs::Polar(PolarCs(definition)),
            CsKind::Spherical => AnyCs::Spherical(SphericalCs(definition)),
            CsKind::Time => AnyCs::Time(TimeCs(definition)),
            CsKind::Vertical => AnyCs::Vertical(VerticalCs(definition)),
        }
    }

    /// Underlying definition
    pub fn definition(&self) -> &CsDefinition {
        match self {
            AnyCs::Affine(cs) => cs.definition(),
            AnyCs::Cartesian(cs) => cs.definition(),
            AnyCs::Cylindrical(cs) => cs.definition(),
            AnyCs::Ellipsoidal(cs) => cs.definition(),
            AnyCs::Linear(cs) => cs.definition(),
            AnyCs::Parametric(cs) => cs.definition(),
            AnyCs::Polar(cs) => cs.definition(),
            AnyCs::Spherical(cs) => cs.definition(),
            AnyCs::Time(cs) => cs.definition(),
            AnyCs::Vertical(cs) => cs.definition(),
        }
    }

    /// Kind of the wrapped coordinate system
    pub fn kind(&self) -> CsKind {
        self.definition().kind()
    }
}

impl From<CsDefinition> for AnyCs {
    fn from(definition: CsDefinition) -> Self {
        AnyCs::from_definition(definition)
    }
}

impl IdentifiedObject for AnyCs {
    fn name(&self) -> &str {
        self.definition().name()
    }

    fn remarks(&self) -> Option<&str> {
        self.definition().remarks()
    }

    fn to_wkt(&self) -> String {
        self.definition().to_wkt()
    }
}

impl CoordinateSystem for AnyCs {
    type Axis = Axis;

    fn dimension(&self) -> usize {
        self.definition().dimension()
    }

    fn axis(&self, index: usize) -> CsResult<&Axis> {
        self.definition().axis(index)
    }
}
