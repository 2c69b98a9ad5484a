//! Well-Known Text (WKT 2) formatting
//!
//! This module only writes WKT. Elements are built as a small tree and
//! rendered through `Display`, following the bracket and quoting rules of
//! ISO 19162: quoted text doubles any embedded `"`, enumerations are written
//! bare, and child elements are separated by commas.

use std::fmt;

/// A single value inside a WKT element
#[derive(Debug, Clone, PartialEq)]
enum WktValue {
    /// Quoted text
    Text(String),
    /// Bare enumeration keyword such as `east` or `Cartesian`
    Enumeration(String),
    /// Floating point number
    Number(f64),
    /// Unsigned integer
    Integer(usize),
    /// Nested element
    Element(WktElement),
}

/// A WKT element: `KEYWORD[value,value,...]`
#[derive(Debug, Clone, PartialEq)]
pub struct WktElement {
    keyword: &'static str,
    values: Vec<WktValue>,
}

impl WktElement {
    /// Create an empty element with the given keyword
    pub fn new(keyword: &'static str) -> Self {
        WktElement {
            keyword,
            values: Vec::new(),
        }
    }

    /// Append quoted text
    pub fn text(mut self, text: &str) -> Self {
        self.values.push(WktValue::Text(text.to_string()));
        self
    }

    /// Append a bare enumeration keyword
    pub fn enumeration(mut self, value: &str) -> Self {
        self.values.push(WktValue::Enumeration(value.to_string()));
        self
    }

    /// Append a number
    pub fn number(mut self, value: f64) -> Self {
        self.values.push(WktValue::Number(value));
        self
    }

    /// Append an integer
    pub fn integer(mut self, value: usize) -> Self {
        self.values.push(WktValue::Integer(value));
        self
    }

    /// Append a nested element
    pub fn child(mut self, element: WktElement) -> Self {
        self.values.push(WktValue::Element(element));
        self
    }

    /// Append a nested element when present
    pub fn child_opt(self, element: Option<WktElement>) -> Self {
        match element {
            Some(element) => self.child(element),
            None => self,
        }
    }

    /// Element keyword
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }
}

impl fmt::Display for WktValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WktValue::Text(text) => write!(f, "\"{}\"", escape_text(text)),
            WktValue::Enumeration(value) => write!(f, "{}", value),
            WktValue::Number(value) => write!(f, "{}", format_number(*value)),
            WktValue::Integer(value) => write!(f, "{}", value),
            WktValue::Element(element) => write!(f, "{}", element),
        }
    }
}

impl fmt::Display for WktElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.keyword)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// Join sibling elements with commas (e.g. `CS[...],AXIS[...],AXIS[...]`)
pub fn join_elements(elements: &[WktElement]) -> String {
    elements.iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Double any quote character inside WKT quoted text
pub fn escape_text(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Format a number the way WKT expects: no exponent for ordinary
/// magnitudes and no trailing `.0` on integral values
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0.0
        return "0".to_string();
    }
    format!("{}", value)
}
