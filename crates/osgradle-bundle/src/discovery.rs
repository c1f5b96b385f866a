//! Discovery of component directories under a project root.
//!
//! Every directory holding a `build.properties` file within the configured
//! depth is a component.

use std::path::Path;

use osgradle_common::constants::BUILD_PROPERTIES_FILE;
use osgradle_common::error::{OsgradleError, Result};
use walkdir::WalkDir;

use crate::model::Component;

/// Walks `root` up to `max_depth` levels and returns the components found,
/// sorted case-insensitively by id.
///
/// # Errors
///
/// Returns an error if any directory in the walk cannot be read.
pub fn discover(root: &Path, max_depth: usize) -> Result<Vec<Component>> {
    tracing::info!(root = %root.display(), max_depth, "discovering components");
    let mut components = Vec::new();

    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            OsgradleError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() || entry.file_name() != BUILD_PROPERTIES_FILE {
            continue;
        }
        let Some(directory) = entry.path().parent() else {
            continue;
        };
        let Ok(relative) = directory.strip_prefix(root) else {
            continue;
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if segments.is_empty() {
            tracing::warn!(
                path = %entry.path().display(),
                "ignoring build.properties at the project root"
            );
            continue;
        }

        let component = Component::new(segments, directory);
        tracing::debug!(id = %component.id(), "found component");
        components.push(component);
    }

    components.sort_by(Component::cmp_by_id);
    tracing::info!(count = components.len(), "discovery complete");
    Ok(components)
}
