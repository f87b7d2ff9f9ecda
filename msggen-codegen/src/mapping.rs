//! Property type mapping.
//!
//! Maps the closed set of schema primitive types to ROS 2 field types.
//! The table is closed by design: an unmapped primitive is a hard error,
//! never a silent default.

use crate::error::CodegenError;

/// The closed set of schema primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// 32-bit signed integer.
    Int,
    /// 32-bit floating point.
    Float,
    /// Free-form string.
    String,
    /// Enumerated string-valued domain.
    Symbol,
    /// Boolean.
    Bool,
    /// Cross-type reference, represented as an opaque string identifier.
    Item,
}

impl PropertyType {
    /// Parses a schema type name into a primitive type.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "string" => Some(Self::String),
            "symbol" => Some(Self::Symbol),
            "bool" => Some(Self::Bool),
            "item" => Some(Self::Item),
            _ => None,
        }
    }

    /// Returns the ROS 2 field type for this primitive.
    #[must_use]
    pub const fn ros_type(self) -> &'static str {
        match self {
            Self::Int => "int32",
            Self::Float => "float32",
            Self::String | Self::Symbol | Self::Item => "string",
            Self::Bool => "bool",
        }
    }
}

/// Maps a declared property type to a ROS 2 field type declaration.
///
/// # Arguments
/// * `type_name` - Declared primitive type name
/// * `multiple` - Whether the property holds a sequence of values
/// * `property` - Property name, used for error reporting
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` if `type_name` is outside the
/// closed mapping table.
pub fn map_property(
    type_name: &str,
    multiple: bool,
    property: &str,
) -> Result<String, CodegenError> {
    let primitive = PropertyType::parse(type_name)
        .ok_or_else(|| CodegenError::unsupported(type_name, property))?;

    let ros_type = primitive.ros_type();
    if multiple {
        Ok(format!("{ros_type}[]"))
    } else {
        Ok(ros_type.to_string())
    }
}
