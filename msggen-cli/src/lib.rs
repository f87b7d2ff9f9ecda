//! # msggen CLI
//!
//! Argument surface and runnable entry point for the `msggen` binary.
//! The logic lives here so it can be exercised in tests; `main.rs` only
//! parses arguments and reports errors.

use clap::Parser;
use msggen_codegen::CodegenError;
use msggen_schema::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Generate a ROS 2 interface package from item type schema documents.
#[derive(Parser, Debug)]
#[command(name = "msggen", version, about)]
pub struct GenerateArgs {
    /// Explicit type definition files.
    #[arg(short = 't', long = "type-files", num_args = 0..)]
    pub type_files: Vec<PathBuf>,

    /// Folders containing type definition files.
    #[arg(short = 'f', long = "type-folders", num_args = 0..)]
    pub type_folders: Vec<PathBuf>,

    /// Output directory for the generated ROS package.
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: PathBuf,
}

/// Error type for a generator run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The file and folder inputs resolved to zero source documents.
    /// Reported before any output is created.
    #[error("no type definition files were provided")]
    Usage,

    /// A schema document failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Interface generation or emission failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Runs one generation pass: load, generate, write.
///
/// # Errors
/// Returns `CliError::Usage` if no source documents resolve, or the
/// underlying load/codegen error. No output is created on a usage error;
/// load and mapping errors abort before the first write.
pub fn run(args: &GenerateArgs) -> Result<(), CliError> {
    let sources = msggen_schema::collect_sources(&args.type_files, &args.type_folders)?;
    if sources.is_empty() {
        return Err(CliError::Usage);
    }
    tracing::info!(documents = sources.len(), "resolved schema documents");

    let registry = msggen_schema::load_registry(&sources)?;
    tracing::info!(types = registry.len(), "loaded type registry");

    msggen_codegen::generate_package(&registry, &args.output_dir)?;
    Ok(())
}
