//! Schema document loader.
//!
//! Collects source documents from explicit paths and folders, parses each
//! as JSON, and builds the type registry.

use crate::error::LoadError;
use crate::types::{Registry, TypeDefinition};
use std::path::{Path, PathBuf};

/// Resolves the set of source documents from explicit file paths and
/// folder paths.
///
/// Explicit files are kept in the order given. Each folder contributes its
/// immediate files (subdirectories are not descended into) in lexicographic
/// path order, so downstream output does not depend on filesystem
/// enumeration order. Folders that do not exist are skipped.
///
/// # Arguments
/// * `files` - Explicit schema document paths
/// * `folders` - Folders whose immediate files are schema documents
///
/// # Errors
/// Returns `LoadError::Io` if a folder exists but cannot be enumerated.
pub fn collect_sources(files: &[PathBuf], folders: &[PathBuf]) -> Result<Vec<PathBuf>, LoadError> {
    let mut sources: Vec<PathBuf> = files.to_vec();

    for folder in folders {
        if !folder.is_dir() {
            tracing::debug!(folder = %folder.display(), "skipping missing type folder");
            continue;
        }
        let mut entries: Vec<PathBuf> = std::fs::read_dir(folder)
            .map_err(|e| LoadError::io(folder, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LoadError::io(folder, e))?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();
        sources.extend(entries);
    }

    Ok(sources)
}

/// Loads a registry from the given source documents.
///
/// Each document is parsed as one JSON type definition; the `name` field is
/// mandatory. When two documents declare the same type name, the later one
/// replaces the earlier and a warning is logged.
///
/// # Arguments
/// * `sources` - Paths of the schema documents, in load order
///
/// # Errors
/// Returns `LoadError` if a document cannot be read or parsed.
pub fn load_registry(sources: &[PathBuf]) -> Result<Registry, LoadError> {
    let mut registry = Registry::new();

    for path in sources {
        let definition = load_document(path)?;
        tracing::debug!(path = %path.display(), name = %definition.name, "loaded type document");
        if registry.contains_key(&definition.name) {
            tracing::warn!(
                name = %definition.name,
                path = %path.display(),
                "duplicate type name, later document replaces the earlier definition"
            );
        }
        registry.insert(definition.name.clone(), definition);
    }

    Ok(registry)
}

/// Parses a single schema document.
fn load_document(path: &Path) -> Result<TypeDefinition, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| LoadError::parse(path, e))
}
