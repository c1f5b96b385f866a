//! Reads component metadata files from disk.
//!
//! Any I/O failure here is fatal for the run; a missing manifest is not.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use osgradle_common::constants::{BUILD_PROPERTIES_FILE, MANIFEST_DIR, MANIFEST_FILE};
use osgradle_common::error::{OsgradleError, Result};

use crate::model::{BuildProperties, Component, LoadedComponent};
use crate::parser::manifest::{ManifestHeaders, parse_manifest};
use crate::parser::properties::{decode_latin1, parse_properties};
use crate::parser::{parse_build_properties, parse_descriptor};

/// Returns the manifest path of a component.
#[must_use]
pub fn manifest_path(component: &Component) -> PathBuf {
    component
        .directory()
        .join(MANIFEST_DIR)
        .join(MANIFEST_FILE)
}

/// Returns the `build.properties` path of a component.
#[must_use]
pub fn build_properties_path(component: &Component) -> PathBuf {
    component.directory().join(BUILD_PROPERTIES_FILE)
}

/// Reads a component's manifest headers, or `None` if it has no manifest.
///
/// # Errors
///
/// Returns an error if the manifest exists but cannot be read.
pub fn load_descriptor_text(component: &Component) -> Result<Option<ManifestHeaders>> {
    let path = manifest_path(component);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let headers = parse_manifest(&text);
            if headers.is_empty() {
                tracing::warn!(path = %path.display(), "manifest declares no headers");
            }
            Ok(Some(headers))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(id = %component.id(), "component has no manifest");
            Ok(None)
        }
        Err(e) => Err(OsgradleError::io(path, e)),
    }
}

/// Reads a component's raw `build.properties` entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_build_properties(component: &Component) -> Result<BTreeMap<String, String>> {
    let path = build_properties_path(component);
    let bytes = fs::read(&path).map_err(|e| OsgradleError::io(&path, e))?;
    Ok(parse_properties(&decode_latin1(&bytes)))
}

/// Reads and interprets a component's `build.properties`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_build_properties(component: &Component) -> Result<BuildProperties> {
    Ok(parse_build_properties(&load_build_properties(component)?))
}

/// Attaches parsed descriptors to every discovered component.
///
/// # Errors
///
/// Returns an error on the first manifest that cannot be read.
pub fn load_components(components: Vec<Component>) -> Result<Vec<LoadedComponent>> {
    components
        .into_iter()
        .map(|component| {
            let descriptor = load_descriptor_text(&component)?
                .map(|headers| parse_descriptor(&headers, component.id().as_str()));
            Ok::<_, OsgradleError>(LoadedComponent::new(component, descriptor))
        })
        .collect()
}
