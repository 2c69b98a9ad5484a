//! Coordinate system definition files
//!
//! Coordinate systems can be declared in TOML and loaded into
//! [`CsDefinition`](crate::cs::CsDefinition) values.

mod definition_loader;

pub use self::definition_loader::DefinitionLoader;
