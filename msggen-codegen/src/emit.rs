//! Filesystem shell for generated packages.
//!
//! All disk writes live here; rendering is pure and happens in
//! [`crate::generator`]. Regeneration is idempotent, not additive: every
//! pre-existing `.msg` file at the output location is removed before the
//! new unit set is written, so types dropped from the registry leave no
//! stale units behind.
//!
//! There is no cross-file transaction. If a write fails partway through,
//! units written earlier in the same run remain on disk.

use crate::error::CodegenError;
use crate::generator::GeneratedPackage;
use std::path::Path;

/// Writes a generated package under the given output directory.
///
/// Creates `<output_dir>/msg/` as needed, clears previously generated
/// units, then writes each interface unit, the `CMakeLists.txt` manifest,
/// and the static `package.xml`. Each file is fully written and closed
/// before the next begins.
///
/// # Arguments
/// * `output_dir` - Root of the generated ROS package
/// * `package` - Rendered package contents
///
/// # Errors
/// Returns `CodegenError::Io` on any filesystem failure.
pub fn write_package(output_dir: &Path, package: &GeneratedPackage) -> Result<(), CodegenError> {
    let msg_dir = output_dir.join("msg");
    std::fs::create_dir_all(&msg_dir)?;

    clear_stale_units(&msg_dir)?;

    for unit in &package.units {
        let path = msg_dir.join(&unit.file_name);
        std::fs::write(&path, &unit.contents)?;
        tracing::debug!(path = %path.display(), "wrote interface unit");
    }

    std::fs::write(output_dir.join("package.xml"), &package.package_xml)?;
    std::fs::write(output_dir.join("CMakeLists.txt"), &package.cmake_lists)?;

    tracing::info!(
        units = package.units.len(),
        output_dir = %output_dir.display(),
        "wrote interface package"
    );
    Ok(())
}

/// Removes every `.msg` file directly under the given directory.
fn clear_stale_units(msg_dir: &Path) -> Result<(), CodegenError> {
    for entry in std::fs::read_dir(msg_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "msg") {
            tracing::debug!(path = %path.display(), "removing stale interface unit");
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}
