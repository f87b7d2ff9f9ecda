//! # msggen Schema
//!
//! Item type schema model and loader.
//!
//! This crate provides:
//! - Data structures for item type definitions and their properties
//! - A JSON document loader building a type registry from files and folders
//! - Typed errors for unreadable or malformed documents

pub mod error;
pub mod loader;
pub mod types;

pub use error::LoadError;
pub use loader::{collect_sources, load_registry};
pub use types::{PropertyDefinition, Registry, TypeDefinition};
