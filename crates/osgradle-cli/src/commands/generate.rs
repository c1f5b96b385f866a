//! `osgradle generate`: write the Gradle build for a component tree.

use std::path::PathBuf;

use clap::Args;
use osgradle_common::config::GeneratorConfig;
use osgradle_common::constants::DEFAULT_RUN_CONFIGURATION;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project root containing the component directories.
    pub root: PathBuf,

    /// Also write an Eclipse PDE run configuration (default name: New_configuration).
    #[arg(
        long,
        value_name = "NAME",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_RUN_CONFIGURATION
    )]
    pub eclipse: Option<String>,
}

/// Executes the `generate` command.
///
/// # Errors
///
/// Returns an error if the root is invalid or any file cannot be read or
/// written.
#[allow(clippy::print_stdout)]
pub fn execute(args: GenerateArgs, max_depth: usize) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(&args.root);
    config.max_depth = max_depth;
    if let Some(name) = args.eclipse {
        config = config.with_eclipse_run_configuration(name);
    }

    let report = osgradle_gradle::generator::generate(&config)?;

    println!("Generated Gradle build in {}", args.root.display());
    println!(
        "  {} component(s), {} with a manifest",
        report.components, report.with_descriptor
    );
    for path in &report.files_written {
        println!("  wrote {}", path.display());
    }
    Ok(())
}
