//! Package boilerplate rendering.
//!
//! Renders the static `package.xml` metadata and the `CMakeLists.txt`
//! build manifest. Metadata values are fixed constants; only the manifest's
//! interface list depends on the registry.

/// Generated ROS package name.
pub const PACKAGE_NAME: &str = "item_interfaces";
/// Generated ROS package version.
pub const PACKAGE_VERSION: &str = "0.1.0";
/// Generated ROS package description.
pub const PACKAGE_DESCRIPTION: &str = "Item type interfaces";
/// Generated ROS package maintainer.
pub const PACKAGE_MAINTAINER: &str = "msggen maintainers";
/// Generated ROS package maintainer email.
pub const PACKAGE_MAINTAINER_EMAIL: &str = "maintainers@cocohub.dev";
/// Generated ROS package license.
pub const PACKAGE_LICENSE: &str = "MIT";

/// Renders the static `package.xml` contents.
#[must_use]
pub fn render_package_xml() -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\"?>\n");
    output.push_str("<package format=\"3\">\n");
    output.push_str(&format!("  <name>{PACKAGE_NAME}</name>\n"));
    output.push_str(&format!("  <version>{PACKAGE_VERSION}</version>\n"));
    output.push_str(&format!(
        "  <description>{PACKAGE_DESCRIPTION}</description>\n"
    ));
    output.push_str(&format!(
        "  <maintainer email=\"{PACKAGE_MAINTAINER_EMAIL}\">{PACKAGE_MAINTAINER}</maintainer>\n"
    ));
    output.push_str(&format!("  <license>{PACKAGE_LICENSE}</license>\n"));
    output.push_str("  <member_of_group>rosidl_interface_packages</member_of_group>\n");
    output.push_str("  <buildtool_depend>ament_cmake</buildtool_depend>\n");
    output.push_str("  <build_depend>rosidl_default_generators</build_depend>\n");
    output.push_str("  <exec_depend>rosidl_default_runtime</exec_depend>\n");
    output.push_str("</package>\n");
    output
}

/// Renders the `CMakeLists.txt` build manifest.
///
/// # Arguments
/// * `unit_paths` - Package-relative paths of the generated units, in the
///   same order the interface emitter wrote them
#[must_use]
pub fn render_cmake_lists(unit_paths: &[String]) -> String {
    let mut output = String::new();
    output.push_str("cmake_minimum_required(VERSION 3.5)\n");
    output.push_str(&format!("project({PACKAGE_NAME})\n\n"));
    output.push_str("find_package(ament_cmake REQUIRED)\n");
    output.push_str("find_package(rosidl_default_generators REQUIRED)\n\n");
    output.push_str("rosidl_generate_interfaces(${PROJECT_NAME}\n");
    for path in unit_paths {
        output.push_str(&format!("  \"{path}\"\n"));
    }
    output.push_str(")\n\n");
    output.push_str("ament_export_dependencies(rosidl_default_runtime)\n\n");
    output.push_str("ament_package()\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_xml_is_schema_independent() {
        let xml = render_package_xml();
        assert!(xml.contains("<name>item_interfaces</name>"));
        assert!(xml.contains("<license>MIT</license>"));
        assert!(xml.contains("rosidl_interface_packages"));
        // Static metadata only; rendered once, identical every run.
        assert_eq!(xml, render_package_xml());
    }

    #[test]
    fn test_cmake_lists_interface_block() {
        let manifest = render_cmake_lists(&[
            "msg/AlertLevel.msg".to_string(),
            "msg/Robot.msg".to_string(),
        ]);
        assert!(manifest.contains("rosidl_generate_interfaces(${PROJECT_NAME}\n  \"msg/AlertLevel.msg\"\n  \"msg/Robot.msg\"\n)"));
        assert!(manifest.contains("ament_package()"));
    }

    #[test]
    fn test_cmake_lists_empty_registry() {
        let manifest = render_cmake_lists(&[]);
        assert!(manifest.contains("rosidl_generate_interfaces(${PROJECT_NAME}\n)"));
    }
}
