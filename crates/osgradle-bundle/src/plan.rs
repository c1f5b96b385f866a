//! Per-component resolution results for a whole discovered set.

use osgradle_common::error::Result;
use osgradle_common::types::ComponentId;
use serde::Serialize;

use crate::model::LoadedComponent;
use crate::resolver::{ResolvedDependencies, resolve};

/// Identity and resolved dependencies of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPlan {
    /// Component id.
    pub id: ComponentId,
    /// Location relative to the project root, `/`-separated.
    pub relative_path: String,
    /// Symbolic name, or `None` when the component has no manifest.
    pub symbolic_name: Option<String>,
    /// Declared version, or `None` when the component has no manifest.
    pub version: Option<String>,
    /// Resolved dependencies; empty without a manifest.
    pub dependencies: ResolvedDependencies,
}

/// Resolves every component against the full set, in discovered order.
#[must_use]
pub fn plan_components(discovered: &[LoadedComponent]) -> Vec<ComponentPlan> {
    discovered
        .iter()
        .map(|loaded| {
            let id = loaded.component.id();
            let dependencies = loaded
                .descriptor
                .as_ref()
                .map(|descriptor| resolve(id, descriptor, discovered))
                .unwrap_or_default();
            ComponentPlan {
                id: id.clone(),
                relative_path: loaded.component.relative_path(),
                symbolic_name: loaded.descriptor.as_ref().map(|d| d.symbolic_name.clone()),
                version: loaded.descriptor.as_ref().map(|d| d.version.clone()),
                dependencies,
            }
        })
        .collect()
}

/// Renders plans as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`osgradle_common::error::OsgradleError::Serialization`] if a
/// plan cannot be serialized.
pub fn render_plan_json(plans: &[ComponentPlan]) -> Result<String> {
    Ok(serde_json::to_string_pretty(plans)?)
}
