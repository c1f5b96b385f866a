//! Turns raw component metadata into the [`crate::model`] types.
//!
//! Parsing never fails: absent headers take defaults and clauses outside
//! the reference grammar are tolerated.

pub mod manifest;
pub mod properties;
pub mod references;

use std::collections::BTreeMap;

use osgradle_common::constants::{
    ARCHIVE_SUFFIX, HEADER_CLASS_PATH, HEADER_IMPORT, HEADER_REQUIRE, HEADER_SYMBOLIC_NAME,
    HEADER_VERSION, PROPERTY_BIN_INCLUDES, PROPERTY_SOURCES,
};

pub use self::references::parse_reference_list;
use self::manifest::ManifestHeaders;
use crate::model::{BuildProperties, Descriptor};

/// Parses a symbolic-name header value.
///
/// An absent value yields `fallback_id`. Otherwise the value is trimmed,
/// cut at the first `;` (dropping attributes such as `singleton:=true`),
/// and trimmed again.
#[must_use]
pub fn parse_symbolic_name(raw: Option<&str>, fallback_id: &str) -> String {
    let Some(raw) = raw else {
        return fallback_id.to_owned();
    };
    let trimmed = raw.trim();
    let name = trimmed.split_once(';').map_or(trimmed, |(name, _)| name);
    name.trim().to_owned()
}

/// Parses a version header value; an absent value yields an empty string.
#[must_use]
pub fn parse_version(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_owned()
}

/// Splits a comma-separated header value into trimmed entries.
#[must_use]
pub fn parse_comma_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| value.split(',').map(|entry| entry.trim().to_owned()).collect())
        .unwrap_or_default()
}

/// Returns `true` when `path` carries the embedded-archive suffix.
#[must_use]
pub fn is_archive(path: &str) -> bool {
    path.to_lowercase().ends_with(ARCHIVE_SUFFIX)
}

/// Builds a [`Descriptor`] from manifest headers.
///
/// `fallback_id` names the component when no symbolic name is declared.
#[must_use]
pub fn parse_descriptor(headers: &ManifestHeaders, fallback_id: &str) -> Descriptor {
    let declared = headers.get(HEADER_SYMBOLIC_NAME);
    let mut symbolic_name = parse_symbolic_name(declared, fallback_id);
    let mut symbolic_name_declared = declared.is_some();
    if symbolic_name.is_empty() {
        tracing::warn!(
            component = fallback_id,
            "blank symbolic name, using component id"
        );
        fallback_id.clone_into(&mut symbolic_name);
        symbolic_name_declared = false;
    }

    let mut imported_names: Vec<String> = Vec::new();
    for name in parse_comma_list(headers.get(HEADER_IMPORT)) {
        if !imported_names.contains(&name) {
            imported_names.push(name);
        }
    }

    Descriptor {
        symbolic_name,
        symbolic_name_declared,
        version: parse_version(headers.get(HEADER_VERSION)),
        required_references: parse_reference_list(headers.get(HEADER_REQUIRE)),
        imported_names,
        embedded_paths: parse_comma_list(headers.get(HEADER_CLASS_PATH)),
    }
}

/// Builds [`BuildProperties`] from a parsed `build.properties` map.
#[must_use]
pub fn parse_build_properties(raw: &BTreeMap<String, String>) -> BuildProperties {
    let source_directories = parse_comma_list(raw.get(PROPERTY_SOURCES).map(String::as_str))
        .into_iter()
        .filter(|dir| dir != ".")
        .collect();

    let (archives_to_include, non_archives_to_include): (Vec<String>, Vec<String>) =
        parse_comma_list(raw.get(PROPERTY_BIN_INCLUDES).map(String::as_str))
            .into_iter()
            .filter(|entry| entry != ".")
            .partition(|entry| is_archive(entry));

    BuildProperties {
        source_directories,
        archives_to_include,
        non_archives_to_include,
    }
}
