//! A complete generation run over a project tree.
//!
//! Discovers components, loads their metadata, resolves dependencies,
//! and writes every Gradle file. The first I/O failure aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use osgradle_bundle::discovery::discover;
use osgradle_bundle::loader::{load_components, read_build_properties};
use osgradle_bundle::model::{Component, LoadedComponent};
use osgradle_bundle::plan::plan_components;
use osgradle_common::config::GeneratorConfig;
use osgradle_common::constants::{
    BUILD_GRADLE, GRADLE_PROPERTIES, SETTINGS_GRADLE, SUBPROJECTS_GRADLE,
};
use osgradle_common::error::{OsgradleError, Result};

use crate::eclipse::write_run_configuration;
use crate::project::{ProjectDeclaration, declare_project};
use crate::settings::declare_settings;
use crate::templates::{
    DEFAULT_BUILD_GRADLE, DEFAULT_GRADLE_PROPERTIES, SUBPROJECTS_PRELUDE, write_if_missing,
};

/// Summary of a finished generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of components discovered.
    pub components: usize,
    /// Number of components that carried a manifest.
    pub with_descriptor: usize,
    /// Files written, in the order they were written.
    pub files_written: Vec<PathBuf>,
}

/// Renders `subprojects.gradle`: the prelude followed by one project block
/// per component.
///
/// # Errors
///
/// Returns an error if a component's `build.properties` cannot be read.
pub fn render_subprojects(discovered: &[LoadedComponent]) -> Result<Vec<u8>> {
    let target = Path::new(SUBPROJECTS_GRADLE);
    let mut out = SUBPROJECTS_PRELUDE.as_bytes().to_vec();

    for (loaded, plan) in discovered.iter().zip(plan_components(discovered)) {
        let properties = read_build_properties(&loaded.component)?;
        let declaration = ProjectDeclaration {
            component: &loaded.component,
            properties: &properties,
            descriptor: loaded.descriptor.as_ref(),
            dependencies: &plan.dependencies,
        };
        declare_project(&mut out, &declaration).map_err(|e| OsgradleError::io(target, e))?;
    }

    Ok(out)
}

/// Renders `settings.gradle` for the discovered components.
#[must_use]
pub fn render_settings(discovered: &[LoadedComponent]) -> Vec<u8> {
    let components: Vec<&Component> = discovered.iter().map(|l| &l.component).collect();
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = declare_settings(&mut out, &components);
    out
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| OsgradleError::io(path, e))
}

/// Runs discovery, resolution, and emission for `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any file cannot be
/// read or written.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;
    let root = config.root.as_path();
    tracing::info!(root = %root.display(), "generating Gradle build");

    let discovered = load_components(discover(root, config.max_depth)?)?;
    let mut report = GenerationReport {
        components: discovered.len(),
        with_descriptor: discovered.iter().filter(|l| l.descriptor.is_some()).count(),
        files_written: Vec::new(),
    };

    let subprojects_path = root.join(SUBPROJECTS_GRADLE);
    write_file(&subprojects_path, &render_subprojects(&discovered)?)?;
    report.files_written.push(subprojects_path);

    let settings_path = root.join(SETTINGS_GRADLE);
    write_file(&settings_path, &render_settings(&discovered))?;
    report.files_written.push(settings_path);

    for (name, contents) in [
        (BUILD_GRADLE, DEFAULT_BUILD_GRADLE),
        (GRADLE_PROPERTIES, DEFAULT_GRADLE_PROPERTIES),
    ] {
        let path = root.join(name);
        if write_if_missing(&path, contents)? {
            report.files_written.push(path);
        }
    }

    if let Some(name) = &config.eclipse_run_configuration {
        report
            .files_written
            .extend(write_run_configuration(root, name, &discovered)?);
    }

    tracing::info!(
        components = report.components,
        files = report.files_written.len(),
        "generation complete"
    );
    Ok(report)
}
