//! `osgradle plan`: show dependency resolution without writing files.

use std::path::PathBuf;

use clap::Args;
use osgradle_bundle::discovery::discover;
use osgradle_bundle::loader::load_components;
use osgradle_bundle::plan::{plan_components, render_plan_json};
use osgradle_common::config::GeneratorConfig;

use crate::output::{format_plan, rule};

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Project root containing the component directories.
    pub root: PathBuf,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `plan` command.
///
/// Discovers and loads every component, resolves its dependencies, and
/// prints the result per component.
///
/// # Errors
///
/// Returns an error if the root is invalid or a component cannot be read.
#[allow(clippy::print_stdout)]
pub fn execute(args: PlanArgs, max_depth: usize) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::new(&args.root);
    config.max_depth = max_depth;
    config.validate()?;

    let discovered = load_components(discover(&config.root, config.max_depth)?)?;
    let plans = plan_components(&discovered);

    if args.json {
        println!("{}", render_plan_json(&plans)?);
        return Ok(());
    }

    println!("Build plan for: {}", args.root.display());
    println!("{}", rule(40));
    for plan in &plans {
        print!("{}", format_plan(plan));
    }
    println!();
    println!("  {} component(s) discovered.", plans.len());
    Ok(())
}
