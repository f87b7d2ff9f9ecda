//! # msggen Codegen
//!
//! ROS 2 interface package generation from item type schemas.
//!
//! This crate provides:
//! - Identifier normalization for schema symbols
//! - The closed property-type mapping table
//! - Pure rendering of interface units, manifest, and package metadata
//! - A thin filesystem shell that writes the rendered package

pub mod emit;
pub mod error;
pub mod generator;
pub mod ident;
pub mod mapping;
pub mod package;

pub use emit::write_package;
pub use error::CodegenError;
pub use generator::{GeneratedPackage, GeneratedUnit, Generator};
pub use ident::normalize_identifier;
pub use mapping::{PropertyType, map_property};

use msggen_schema::Registry;
use std::path::Path;

/// Generates and writes a complete interface package for a registry.
///
/// # Arguments
/// * `registry` - Loaded type registry
/// * `output_dir` - Root of the generated ROS package
///
/// # Errors
/// Returns `CodegenError` if rendering or writing fails.
pub fn generate_package(registry: &Registry, output_dir: &Path) -> Result<(), CodegenError> {
    let package = Generator::new(registry).generate()?;
    write_package(output_dir, &package)
}
