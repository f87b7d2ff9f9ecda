//! Error types for interface generation.

use thiserror::Error;

/// Error type for interface generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A property declares a type outside the closed mapping table.
    #[error("unsupported property type '{type_name}' for property '{property}'")]
    UnsupportedType {
        /// Declared type name.
        type_name: String,
        /// Property that declared it.
        property: String,
    },

    /// IO error while emitting the generated package.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates an unsupported-type error.
    pub fn unsupported(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            property: property.into(),
        }
    }
}
