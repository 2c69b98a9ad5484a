pub mod cs;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CsKit;

pub use config::DefinitionLoader;
pub use cs::{
    AnyCs, Axis, AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsDefinition, CsError,
    CsKind, CsResult, IdentifiedObject, RangeMeaning, Unit, UnitKind,
};
