//! # osgradle
//!
//! Converts a tree of OSGi bundles (`META-INF/MANIFEST.MF` plus
//! `build.properties`) into a Gradle multi-project build.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed command line");
    commands::execute(cli)
}
