//! `msggen` binary entry point.

use clap::Parser;
use msggen_cli::GenerateArgs;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = GenerateArgs::parse();
    msggen_cli::run(&args)?;
    Ok(())
}
