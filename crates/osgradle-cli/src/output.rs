//! Formatted output helpers for CLI commands.

use std::fmt::Write;

use osgradle_bundle::model::Reference;
use osgradle_bundle::plan::ComponentPlan;

/// Returns a horizontal rule of `width` box-drawing characters.
#[must_use]
pub fn rule(width: usize) -> String {
    "\u{2550}".repeat(width)
}

/// Formats a reference as `name` or `name@version`.
#[must_use]
pub fn format_reference(reference: &Reference) -> String {
    match reference.version() {
        Some(version) => format!("{}@{version}", reference.name()),
        None => reference.name().to_owned(),
    }
}

/// Formats one component's plan as an indented block.
#[must_use]
pub fn format_plan(plan: &ComponentPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  + {} ({})", plan.id, plan.relative_path);
    let (Some(name), Some(version)) = (&plan.symbolic_name, &plan.version) else {
        let _ = writeln!(out, "      no manifest");
        return out;
    };
    let _ = writeln!(out, "      bundle: {name} {version}");

    let deps = &plan.dependencies;
    for internal in &deps.internal {
        let _ = writeln!(
            out,
            "      internal: {} -> :{}",
            format_reference(&internal.reference),
            internal.component
        );
    }
    for external in &deps.external {
        let _ = writeln!(out, "      external: {}", format_reference(external));
    }
    for archive in &deps.embedded_archives {
        let _ = writeln!(out, "      embedded: {archive}");
    }
    out
}
