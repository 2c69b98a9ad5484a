//! Coordinate system axis contract and its default implementation

use crate::cs::axis_direction::AxisDirection;
use crate::cs::errors::{CsError, CsResult};
use crate::cs::identified::IdentifiedObject;
use crate::cs::range_meaning::RangeMeaning;
use crate::cs::unit::Unit;
use crate::cs::wkt::WktElement;

/// Definition of a coordinate system axis
pub trait CoordinateSystemAxis: IdentifiedObject {
    /// Unit of measure type chosen by the implementation
    type Unit;

    /// The abbreviation used for this coordinate system axis (e.g. "X", "Lat")
    fn abbreviation(&self) -> &str;

    /// Direction of this coordinate system axis
    ///
    /// Determines the sign convention for coordinate values along the axis.
    fn direction(&self) -> AxisDirection;

    /// The unit of measure used for values along this axis
    fn unit(&self) -> &Self::Unit;

    /// The minimum value normally allowed for this axis, in the unit of
    /// measure for the axis. Negative infinity when there is no minimum.
    fn minimum_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// The maximum value normally allowed for this axis, in the unit of
    /// measure for the axis. Positive infinity when there is no maximum.
    fn maximum_value(&self) -> f64 {
        f64::INFINITY
    }

    /// Meaning of the axis value range given by the minimum and maximum values
    ///
    /// `None` means no range semantics apply.
    fn range_meaning(&self) -> Option<RangeMeaning> {
        None
    }
}

/// Immutable coordinate system axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    abbreviation: String,
    direction: AxisDirection,
    unit: Unit,
    minimum: f64,
    maximum: f64,
    range_meaning: Option<RangeMeaning>,
    remarks: Option<String>,
}

impl Axis {
    /// Start building an axis from its required properties
    pub fn builder(name: &str, abbreviation: &str, direction: AxisDirection, unit: Unit) -> AxisBuilder {
        AxisBuilder {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            direction,
            unit,
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            range_meaning: None,
            remarks: None,
        }
    }

    /// Text for the WKT name: `name (abbreviation)`
    fn wkt_name(&self) -> String {
        if self.name == self.abbreviation {
            format!("({})", self.abbreviation)
        } else {
            format!("{} ({})", self.name, self.abbreviation)
        }
    }

    /// WKT element for this axis
    ///
    /// # Arguments
    /// * `order` - 1-based position within the owning coordinate system, if any
    pub fn wkt_element(&self, order: Option<usize>) -> WktElement {
        let mut element = WktElement::new("AXIS")
            .text(&self.wkt_name())
            .enumeration(self.direction.code())
            .child_opt(order.map(|n| WktElement::new("ORDER").integer(n)))
            .child(self.unit.wkt_element());

        if self.minimum.is_finite() {
            element = element.child(WktElement::new("AXISMINVALUE").number(self.minimum));
        }
        if self.maximum.is_finite() {
            element = element.child(WktElement::new("AXISMAXVALUE").number(self.maximum));
        }
        if let Some(meaning) = self.range_meaning {
            element = element.child(WktElement::new("RANGEMEANING").enumeration(meaning.code()));
        }

        element.child_opt(self.remarks.as_deref().map(|r| WktElement::new("REMARK").text(r)))
    }
}

impl IdentifiedObject for Axis {
    fn name(&self) -> &str {
        &self.name
    }

    fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    fn to_wkt(&self) -> String {
        self.wkt_element(None).to_string()
    }
}

impl CoordinateSystemAxis for Axis {
    type Unit = Unit;

    fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    fn direction(&self) -> AxisDirection {
        self.direction
    }

    fn unit(&self) -> &Unit {
        &self.unit
    }

    fn minimum_value(&self) -> f64 {
        self.minimum
    }

    fn maximum_value(&self) -> f64 {
        self.maximum
    }

    fn range_meaning(&self) -> Option<RangeMeaning> {
        self.range_meaning
    }
}

/// Builder for [`Axis`]
#[derive(Debug, Clone)]
pub struct AxisBuilder {
    name: String,
    abbreviation: String,
    direction: AxisDirection,
    unit: Unit,
    minimum: f64,
    maximum: f64,
    range_meaning: Option<RangeMeaning>,
    remarks: Option<String>,
}

impl AxisBuilder {
    /// Set the minimum allowed value
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Set the maximum allowed value
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = maximum;
        self
    }

    /// Set both bounds
    pub fn range(self, minimum: f64, maximum: f64) -> Self {
        self.minimum(minimum).maximum(maximum)
    }

    /// Set the meaning of the value range
    pub fn range_meaning(mut self, meaning: RangeMeaning) -> Self {
        self.range_meaning = Some(meaning);
        self
    }

    /// Attach remarks
    pub fn remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    /// Finish the axis
    ///
    /// # Returns
    /// The axis, or an error when a required text property is empty or the
    /// range bounds are inverted or not numbers
    pub fn build(self) -> CsResult<Axis> {
        if self.name.trim().is_empty() {
            return Err(CsError::MissingField("name"));
        }
        if self.abbreviation.trim().is_empty() {
            return Err(CsError::MissingField("abbreviation"));
        }
        if self.unit.name().trim().is_empty() {
            return Err(CsError::MissingField("unit"));
        }
        // Also rejects NaN bounds
        if !(self.minimum <= self.maximum) {
            return Err(CsError::InvalidRange { min: self.minimum, max: self.maximum });
        }

        Ok(Axis {
            name: self.name,
            abbreviation: self.abbreviation,
            direction: self.direction,
            unit: self.unit,
            minimum: self.minimum,
            maximum: self.maximum,
            range_meaning: self.range_meaning,
            remarks: self.remarks,
        })
    }
}
