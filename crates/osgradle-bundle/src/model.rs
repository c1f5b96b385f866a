//! In-memory representation of discovered components and their metadata.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use osgradle_common::types::ComponentId;
use serde::{Deserialize, Serialize};

/// A discovered unit of source with its own build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    segments: Vec<String>,
    directory: PathBuf,
}

impl Component {
    /// Creates a component from its location relative to the project root.
    ///
    /// `directory` is the component directory as found on disk.
    #[must_use]
    pub fn new(segments: Vec<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            id: ComponentId::from_segments(&segments),
            segments,
            directory: directory.into(),
        }
    }

    /// Returns the component id (relative segments joined by `:`).
    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Returns the final relative path segment (the directory name).
    #[must_use]
    pub fn last_segment(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns the location relative to the project root, `/`-separated.
    #[must_use]
    pub fn relative_path(&self) -> String {
        self.segments.join("/")
    }

    /// Returns the component directory on disk.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Orders components case-insensitively by id.
    #[must_use]
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id
            .as_str()
            .to_lowercase()
            .cmp(&other.id.as_str().to_lowercase())
    }
}

/// A declared dependency on another component, by name.
///
/// Two references are equal when their names are equal; the version only
/// matters when duplicates are collapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    name: String,
    version: Option<String>,
}

impl Reference {
    /// Creates a reference with an optional required version.
    #[must_use]
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the required version, if constrained.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Identity and dependency metadata parsed from a component manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Symbolic name; never empty.
    pub symbolic_name: String,
    /// Whether the manifest declared a non-blank symbolic name, rather than
    /// it defaulting to the component id.
    pub symbolic_name_declared: bool,
    /// Version; empty when unspecified.
    pub version: String,
    /// Explicitly required components, in declaration order.
    pub required_references: Vec<Reference>,
    /// Imported package-style names, without duplicates, in declaration order.
    pub imported_names: Vec<String>,
    /// Files embedded in the component, in declaration order.
    pub embedded_paths: Vec<String>,
}

/// Source and packaging layout read from a component's `build.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProperties {
    /// Source directories, excluding `.`.
    pub source_directories: Vec<String>,
    /// Packaged entries carrying the archive suffix.
    pub archives_to_include: Vec<String>,
    /// Other packaged entries, excluding `.`.
    pub non_archives_to_include: Vec<String>,
}

/// A component together with its descriptor, if it has one.
#[derive(Debug, Clone)]
pub struct LoadedComponent {
    /// The discovered component.
    pub component: Component,
    /// Parsed manifest metadata.
    pub descriptor: Option<Descriptor>,
}

impl LoadedComponent {
    /// Pairs a component with its optional descriptor.
    #[must_use]
    pub const fn new(component: Component, descriptor: Option<Descriptor>) -> Self {
        Self {
            component,
            descriptor,
        }
    }
}
