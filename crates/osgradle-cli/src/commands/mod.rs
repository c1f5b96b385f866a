//! CLI command definitions and dispatch.

pub mod generate;
pub mod plan;

use clap::{Parser, Subcommand};

/// osgradle: generate Gradle builds from OSGi bundle trees.
#[derive(Parser, Debug)]
#[command(name = osgradle_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Maximum directory depth searched for components.
    #[arg(long, global = true, default_value_t = osgradle_common::constants::DISCOVERY_MAX_DEPTH)]
    pub max_depth: usize,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write subprojects.gradle, settings.gradle, and default root files.
    Generate(generate::GenerateArgs),
    /// Show how every component's dependencies resolve, without writing files.
    Plan(plan::PlanArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => generate::execute(args, cli.max_depth),
        Command::Plan(args) => plan::execute(args, cli.max_depth),
    }
}
