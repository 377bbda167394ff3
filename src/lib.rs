//! stylegen - Style save/load code generator
//!
//! Reads headerless CSV tables describing the fields of a UI style record
//! and a named color table, and emits the C++ statements that save those
//! fields to a YAML document and load them back.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod output;
pub mod validation;

pub use config::{Manifest, Settings};
pub use descriptor::{load_table, read_descriptors, ColorDescriptor, FieldDescriptor, Tables, TypeTag};
pub use emit::{generate, EmitOptions, Generated, Section};
pub use error::{GenError, Result};
pub use validation::{validate_tables, Diagnostic, Severity, ValidationResult};
