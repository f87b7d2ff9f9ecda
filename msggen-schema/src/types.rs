//! Schema type definitions.
//!
//! This module contains the data structures representing item type schema
//! documents: named types with static and dynamic typed properties.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Registry of item types, keyed by type name.
///
/// Built fresh per run by the loader, immutable afterwards. The `BTreeMap`
/// keying gives the ascending type-name iteration the generator relies on
/// for reproducible output.
pub type Registry = BTreeMap<String, TypeDefinition>;

/// A single item type definition parsed from one schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDefinition {
    /// Type name, unique within a registry.
    pub name: String,
    /// Properties fixed at item construction. Not part of the generated
    /// interfaces; carried for the scaffolding side of the toolchain.
    #[serde(default)]
    pub static_properties: BTreeMap<String, PropertyDefinition>,
    /// Runtime-mutable properties. Each becomes one field of the generated
    /// interface, in ascending property-name order.
    #[serde(default)]
    pub dynamic_properties: BTreeMap<String, PropertyDefinition>,
}

/// A single property declaration within a type definition.
///
/// The `type` string is validated against the closed primitive table at
/// mapping time, not here: a document may deserialize successfully and
/// still fail at generation.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDefinition {
    /// Declared primitive type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the property holds a sequence of values.
    #[serde(default)]
    pub multiple: bool,
    /// Referenced type name, only meaningful for `type = item`. Carried as
    /// an opaque name; never resolved or validated by the generator.
    #[serde(default)]
    pub domain: Option<String>,
    /// Allowed values, only meaningful for `type = symbol`.
    #[serde(default)]
    pub values: Option<Vec<String>>,
    /// Lower numeric bound, when the schema declares one.
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper numeric bound, when the schema declares one.
    #[serde(default)]
    pub max: Option<f64>,
}
