//! Interface generation.
//!
//! Pure rendering of the registry into an in-memory generated package.
//! The filesystem is touched only by the emit shell, so everything here is
//! testable without any I/O. The manifest is rendered from the same unit
//! list the interface files come from, which keeps the two consistent by
//! construction.

use crate::error::CodegenError;
use crate::ident::normalize_identifier;
use crate::mapping::map_property;
use crate::package::{render_cmake_lists, render_package_xml};
use msggen_schema::{Registry, TypeDefinition};

/// One generated interface definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// File name within the `msg` directory, e.g. `AlertLevel.msg`.
    pub file_name: String,
    /// Full file contents.
    pub contents: String,
}

impl GeneratedUnit {
    /// Returns the package-relative path of this unit.
    #[must_use]
    pub fn manifest_path(&self) -> String {
        format!("msg/{}", self.file_name)
    }
}

/// A fully rendered interface package, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    /// Interface units, in ascending type-name order.
    pub units: Vec<GeneratedUnit>,
    /// Static `package.xml` contents.
    pub package_xml: String,
    /// `CMakeLists.txt` manifest, listing exactly `units`.
    pub cmake_lists: String,
}

/// Generator producing interface packages from a type registry.
pub struct Generator<'a> {
    registry: &'a Registry,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the given registry.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Renders the complete interface package.
    ///
    /// Types are visited in ascending name order, and each type's dynamic
    /// properties in ascending property-name order, so output is identical
    /// across runs and platforms.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedType` if any property declares a
    /// type outside the closed mapping table.
    pub fn generate(&self) -> Result<GeneratedPackage, CodegenError> {
        let mut units = Vec::with_capacity(self.registry.len());
        for definition in self.registry.values() {
            units.push(render_unit(definition)?);
        }

        let unit_paths: Vec<String> = units.iter().map(GeneratedUnit::manifest_path).collect();

        Ok(GeneratedPackage {
            cmake_lists: render_cmake_lists(&unit_paths),
            package_xml: render_package_xml(),
            units,
        })
    }
}

/// Renders one interface unit for a type definition.
///
/// One field line per dynamic property: `<ros-type> <property-name>`.
/// Property names are emitted as-is; only the type name is normalized.
/// Static properties belong to the scaffolding side and are not emitted.
fn render_unit(definition: &TypeDefinition) -> Result<GeneratedUnit, CodegenError> {
    let mut contents = String::new();
    for (prop_name, prop) in &definition.dynamic_properties {
        let ros_type = map_property(&prop.type_name, prop.multiple, prop_name)?;
        contents.push_str(&format!("{ros_type} {prop_name}\n"));
    }

    Ok(GeneratedUnit {
        file_name: format!("{}.msg", normalize_identifier(&definition.name)),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_from(docs: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for doc in docs {
            let def: TypeDefinition = serde_json::from_str(doc).expect("Failed to parse document");
            registry.insert(def.name.clone(), def);
        }
        registry
    }

    #[test]
    fn test_alert_level_scenario() {
        let registry = registry_from(&[r#"{
            "name": "alert_level",
            "dynamic_properties": {
                "crowd_count": {"type": "int"},
                "zones": {"type": "string", "multiple": true}
            }
        }"#]);

        let package = Generator::new(&registry).generate().expect("Failed to generate");

        assert_eq!(package.units.len(), 1);
        let unit = &package.units[0];
        assert_eq!(unit.file_name, "AlertLevel.msg");
        assert_eq!(unit.contents, "int32 crowd_count\nstring[] zones\n");

        let listed: Vec<&str> = package
            .cmake_lists
            .lines()
            .filter(|line| line.trim_start().starts_with("\"msg/"))
            .collect();
        assert_eq!(listed, ["  \"msg/AlertLevel.msg\""]);
    }

    #[test]
    fn test_types_ordered_by_name() {
        let registry = registry_from(&[
            r#"{"name": "zone"}"#,
            r#"{"name": "alert_level"}"#,
            r#"{"name": "robot"}"#,
        ]);

        let package = Generator::new(&registry).generate().expect("Failed to generate");
        let names: Vec<&str> = package.units.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, ["AlertLevel.msg", "Robot.msg", "Zone.msg"]);
    }

    #[test]
    fn test_properties_ordered_by_name() {
        let registry = registry_from(&[r#"{
            "name": "robot",
            "dynamic_properties": {
                "zeta": {"type": "float"},
                "alpha": {"type": "bool"},
                "mid": {"type": "item", "domain": "zone"}
            }
        }"#]);

        let package = Generator::new(&registry).generate().expect("Failed to generate");
        assert_eq!(
            package.units[0].contents,
            "bool alpha\nstring mid\nfloat32 zeta\n"
        );
    }

    #[test]
    fn test_static_properties_not_emitted() {
        let registry = registry_from(&[r#"{
            "name": "robot",
            "static_properties": {"serial": {"type": "string"}},
            "dynamic_properties": {"pose": {"type": "string"}}
        }"#]);

        let package = Generator::new(&registry).generate().expect("Failed to generate");
        assert_eq!(package.units[0].contents, "string pose\n");
    }

    #[test]
    fn test_unsupported_type_aborts_generation() {
        let registry = registry_from(&[r#"{
            "name": "robot",
            "dynamic_properties": {"orientation": {"type": "quaternion"}}
        }"#]);

        let err = Generator::new(&registry).generate().expect_err("should fail");
        assert!(matches!(err, CodegenError::UnsupportedType { .. }));
    }

    #[test]
    fn test_deterministic_output() {
        let registry = registry_from(&[
            r#"{"name": "zone", "dynamic_properties": {"area": {"type": "float"}}}"#,
            r#"{"name": "robot", "dynamic_properties": {"pose": {"type": "string"}}}"#,
        ]);

        let generator = Generator::new(&registry);
        let first = generator.generate().expect("Failed to generate");
        let second = generator.generate().expect("Failed to generate");

        assert_eq!(first.units, second.units);
        assert_eq!(first.cmake_lists, second.cmake_lists);
        assert_eq!(first.package_xml, second.package_xml);
    }

    #[test]
    fn test_manifest_matches_unit_set() {
        let registry = registry_from(&[
            r#"{"name": "alert_level"}"#,
            r#"{"name": "3d_map"}"#,
            r#"{"name": "zone"}"#,
        ]);

        let package = Generator::new(&registry).generate().expect("Failed to generate");

        let from_units: Vec<String> =
            package.units.iter().map(GeneratedUnit::manifest_path).collect();
        let from_manifest: Vec<String> = package
            .cmake_lists
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .filter_map(|line| line.strip_suffix('"'))
            .map(str::to_string)
            .collect();
        assert_eq!(from_units, from_manifest);
        assert!(from_manifest.contains(&"msg/T3dMap.msg".to_string()));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        let package = Generator::new(&registry).generate().expect("Failed to generate");
        assert!(package.units.is_empty());
        assert!(package.cmake_lists.contains("rosidl_generate_interfaces"));
    }
}
