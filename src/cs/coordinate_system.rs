//! Coordinate system contract and its default implementation

use crate::cs::axis::{Axis, CoordinateSystemAxis};
use crate::cs::errors::{CsError, CsResult};
use crate::cs::identified::IdentifiedObject;
use crate::cs::kind::CsKind;
use crate::cs::wkt::{join_elements, WktElement};

/// The set of coordinate system axes that spans a given coordinate space
///
/// The coordinate values in a coordinate tuple are recorded in the order in
/// which the axes are indexed here. That order is fixed for the lifetime of
/// the instance: two calls to [`axis`](CoordinateSystem::axis) with the same
/// index return the same axis.
pub trait CoordinateSystem: IdentifiedObject {
    /// Axis type of this coordinate system
    type Axis: CoordinateSystemAxis;

    /// Number of axes
    fn dimension(&self) -> usize;

    /// Returns the axis at the given 0-based dimension
    ///
    /// # Returns
    /// The axis, or [`CsError::AxisIndexOutOfRange`] when `index >= dimension`
    fn axis(&self, index: usize) -> CsResult<&Self::Axis>;

    /// Iterate over the axes in order
    fn axes(&self) -> AxisIter<'_, Self> {
        AxisIter { cs: self, next: 0 }
    }
}

/// Iterator over the axes of a coordinate system
pub struct AxisIter<'a, C: CoordinateSystem + ?Sized> {
    cs: &'a C,
    next: usize,
}

impl<'a, C: CoordinateSystem + ?Sized> Iterator for AxisIter<'a, C> {
    type Item = &'a C::Axis;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.cs.dimension() {
            return None;
        }
        let axis = self.cs.axis(self.next).ok()?;
        self.next += 1;
        Some(axis)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cs.dimension().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a, C: CoordinateSystem + ?Sized> ExactSizeIterator for AxisIter<'a, C> {}

/// Immutable coordinate system of any kind
#[derive(Debug, Clone, PartialEq)]
pub struct CsDefinition {
    name: String,
    remarks: Option<String>,
    kind: CsKind,
    axes: Vec<Axis>,
}

impl CsDefinition {
    /// Create a coordinate system from its axes
    ///
    /// # Arguments
    /// * `name` - Name of the coordinate system
    /// * `kind` - Kind of coordinate system
    /// * `axes` - Axes in coordinate tuple order
    ///
    /// # Returns
    /// The coordinate system, or an error if the name is empty or there are no axes
    pub fn new(name: &str, kind: CsKind, axes: Vec<Axis>) -> CsResult<Self> {
        if name.trim().is_empty() {
            return Err(CsError::MissingField("name"));
        }
        if axes.is_empty() {
            return Err(CsError::EmptyAxes);
        }

        Ok(CsDefinition {
            name: name.to_string(),
            remarks: None,
            kind,
            axes,
        })
    }

    /// Attach remarks
    pub fn with_remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    /// Kind of this coordinate system
    pub fn kind(&self) -> CsKind {
        self.kind
    }

    /// All axes as a slice
    pub fn axis_slice(&self) -> &[Axis] {
        &self.axes
    }

    /// Whether the dimension lies within the range documented for the kind
    pub fn has_nominal_dimension(&self) -> bool {
        self.kind.nominal_dimensions().contains(&self.axes.len())
    }

    /// WKT elements: `CS[...]` followed by one `AXIS[...]` per axis
    pub fn wkt_elements(&self) -> Vec<WktElement> {
        let mut elements = Vec::with_capacity(self.axes.len() + 2);
        elements.push(
            WktElement::new("CS")
                .enumeration(self.kind.wkt_keyword())
                .integer(self.axes.len()),
        );
        for (i, axis) in self.axes.iter().enumerate() {
            elements.push(axis.wkt_element(Some(i + 1)));
        }
        if let Some(remarks) = &self.remarks {
            elements.push(WktElement::new("REMARK").text(remarks));
        }
        elements
    }
}

impl IdentifiedObject for CsDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    fn to_wkt(&self) -> String {
        join_elements(&self.wkt_elements())
    }
}

impl CoordinateSystem for CsDefinition {
    type Axis = Axis;

    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn axis(&self, index: usize) -> CsResult<&Axis> {
        self.axes.get(index).ok_or(CsError::AxisIndexOutOfRange {
            index,
            dimension: self.axes.len(),
        })
    }
}
