//! Root capability for named referencing objects

/// Identification and remarks information for a reference system or
/// CRS-related object.
///
/// Implementations are read-only: nothing in this contract mutates the
/// object, so every accessor may be called from any number of threads.
pub trait IdentifiedObject {
    /// The primary name by which this object is identified
    fn name(&self) -> &str;

    /// Comments on or information about this object, including data source
    /// information
    fn remarks(&self) -> Option<&str> {
        None
    }

    /// Returns a Well-Known Text (WKT) representation of this object
    ///
    /// The grammar is the OGC/ISO 19162 one. Producing it has no side effects.
    fn to_wkt(&self) -> String;
}
