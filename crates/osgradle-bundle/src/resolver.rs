//! Dependency resolution for one component against the discovered set.
//!
//! Resolution is recomputed on every call and keeps no state between
//! calls. Unmatched references are never an error: they are declared as
//! external artifacts.

use std::collections::HashMap;

use osgradle_common::types::ComponentId;
use serde::Serialize;

use crate::model::{Descriptor, LoadedComponent, Reference};
use crate::parser::is_archive;

/// A reference satisfied by another discovered component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalDependency {
    /// The declared reference.
    pub reference: Reference,
    /// Id of the component it resolves to.
    pub component: ComponentId,
}

/// Dependencies of one component, ready for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedDependencies {
    /// References resolved to discovered components.
    pub internal: Vec<InternalDependency>,
    /// References declared as named, versioned artifacts.
    pub external: Vec<Reference>,
    /// Embedded archives, declared compile-only.
    pub embedded_archives: Vec<String>,
}

impl ResolvedDependencies {
    /// Returns `true` when nothing needs to be declared at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty() && self.embedded_archives.is_empty()
    }
}

/// Loose imported-name match: the symbolic name occurs anywhere in the
/// imported name.
#[must_use]
pub fn contains_match(imported_name: &str, symbolic_name: &str) -> bool {
    !symbolic_name.is_empty() && imported_name.contains(symbolic_name)
}

/// Exact match of a reference name against a component directory name,
/// ignoring case.
#[must_use]
pub fn segment_match(reference_name: &str, last_segment: &str) -> bool {
    reference_name.to_lowercase() == last_segment.to_lowercase()
}

fn others<'a>(
    owner: &'a ComponentId,
    discovered: &'a [LoadedComponent],
) -> impl Iterator<Item = &'a LoadedComponent> + 'a {
    discovered.iter().filter(move |c| c.component.id() != owner)
}

/// Lists the candidate references of a descriptor: explicit requirements
/// first, then references synthesized from imported names.
#[must_use]
pub fn collect_candidates(
    owner: &ComponentId,
    descriptor: &Descriptor,
    discovered: &[LoadedComponent],
) -> Vec<Reference> {
    let mut candidates = descriptor.required_references.clone();

    for imported in &descriptor.imported_names {
        for other in others(owner, discovered) {
            let Some(provider) = &other.descriptor else {
                continue;
            };
            if contains_match(imported, &provider.symbolic_name) {
                tracing::debug!(
                    owner = %owner,
                    imported = %imported,
                    provider = %provider.symbolic_name,
                    "imported name matches component"
                );
                let version = Some(provider.version.clone()).filter(|v| !v.is_empty());
                candidates.push(Reference::new(provider.symbolic_name.clone(), version));
            }
        }
    }

    candidates
}

/// Collapses references sharing a name, keeping the greatest version.
///
/// Versions compare as plain strings with an absent version lowest; on a
/// tie the earlier reference wins. Output follows the first occurrence of
/// each name.
#[must_use]
pub fn deduplicate(candidates: Vec<Reference>) -> Vec<Reference> {
    let mut kept: Vec<Reference> = Vec::with_capacity(candidates.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        if let Some(&idx) = positions.get(candidate.name()) {
            let current = kept[idx].version().unwrap_or_default();
            if candidate.version().unwrap_or_default() > current {
                kept[idx] = candidate;
            }
        } else {
            let _ = positions.insert(candidate.name().to_owned(), kept.len());
            kept.push(candidate);
        }
    }

    kept
}

/// Finds the first other component whose directory name matches `reference`.
#[must_use]
pub fn find_internal<'a>(
    owner: &'a ComponentId,
    reference: &Reference,
    discovered: &'a [LoadedComponent],
) -> Option<&'a LoadedComponent> {
    others(owner, discovered)
        .find(|other| segment_match(reference.name(), other.component.last_segment()))
}

/// Returns the embedded paths carrying the archive suffix.
#[must_use]
pub fn embedded_archives(descriptor: &Descriptor) -> Vec<String> {
    descriptor
        .embedded_paths
        .iter()
        .filter(|path| is_archive(path))
        .cloned()
        .collect()
}

/// Resolves the dependencies of the component `owner` described by
/// `descriptor` against every discovered component.
#[must_use]
pub fn resolve(
    owner: &ComponentId,
    descriptor: &Descriptor,
    discovered: &[LoadedComponent],
) -> ResolvedDependencies {
    let mut resolved = ResolvedDependencies {
        embedded_archives: embedded_archives(descriptor),
        ..ResolvedDependencies::default()
    };

    for reference in deduplicate(collect_candidates(owner, descriptor, discovered)) {
        match find_internal(owner, &reference, discovered) {
            Some(target) => resolved.internal.push(InternalDependency {
                component: target.component.id().clone(),
                reference,
            }),
            None => resolved.external.push(reference),
        }
    }

    tracing::debug!(
        owner = %owner,
        internal = resolved.internal.len(),
        external = resolved.external.len(),
        embedded = resolved.embedded_archives.len(),
        "resolved dependencies"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Component;

    fn loaded(segments: &[&str], descriptor: Option<Descriptor>) -> LoadedComponent {
        let segments: Vec<String> = segments.iter().map(|s| (*s).to_owned()).collect();
        let dir = format!("/ws/{}", segments.join("/"));
        LoadedComponent::new(Component::new(segments, dir), descriptor)
    }

    fn named(symbolic_name: &str, version: &str) -> Descriptor {
        Descriptor {
            symbolic_name: symbolic_name.into(),
            version: version.into(),
            ..Descriptor::default()
        }
    }

    fn reference(name: &str, version: Option<&str>) -> Reference {
        Reference::new(name, version.map(str::to_owned))
    }

    fn pairs(references: &[Reference]) -> Vec<(&str, Option<&str>)> {
        references.iter().map(|r| (r.name(), r.version())).collect()
    }

    #[test]
    fn deduplicate_keeps_greatest_version_in_first_occurrence_order() {
        let result = deduplicate(vec![
            reference("x", Some("1.0")),
            reference("y", Some("2.0")),
            reference("x", Some("2.0")),
        ]);
        assert_eq!(pairs(&result), vec![("x", Some("2.0")), ("y", Some("2.0"))]);
    }

    #[test]
    fn deduplicate_ranks_missing_version_lowest() {
        let result = deduplicate(vec![reference("x", None), reference("x", Some("0.1"))]);
        assert_eq!(pairs(&result), vec![("x", Some("0.1"))]);

        let result = deduplicate(vec![reference("x", Some("0.1")), reference("x", None)]);
        assert_eq!(pairs(&result), vec![("x", Some("0.1"))]);
    }

    #[test]
    fn deduplicate_compares_versions_as_strings() {
        let result = deduplicate(vec![reference("x", Some("10.0")), reference("x", Some("9.0"))]);
        assert_eq!(pairs(&result), vec![("x", Some("9.0"))]);
    }

    #[test]
    fn deduplicate_keeps_first_on_tie() {
        let result = deduplicate(vec![reference("x", Some("")), reference("x", None)]);
        assert_eq!(pairs(&result), vec![("x", Some(""))]);
    }

    #[test]
    fn classifies_by_last_path_segment_ignoring_case() {
        let discovered = vec![
            loaded(&["app"], None),
            loaded(&["plugins", "core"], Some(named("org.example.core", "1.0"))),
            loaded(&["util"], None),
        ];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            required_references: vec![reference("CORE", None), reference("other", Some("3"))],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &discovered);
        assert_eq!(resolved.internal.len(), 1);
        assert_eq!(resolved.internal[0].component.as_str(), "plugins:core");
        assert_eq!(resolved.internal[0].reference.name(), "CORE");
        assert_eq!(pairs(&resolved.external), vec![("other", Some("3"))]);
    }

    #[test]
    fn symbolic_name_is_not_a_match_key() {
        let discovered = vec![
            loaded(&["app"], None),
            loaded(&["core-dir"], Some(named("core", "1.0"))),
        ];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            required_references: vec![reference("core", None)],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &discovered);
        assert!(resolved.internal.is_empty());
        assert_eq!(pairs(&resolved.external), vec![("core", None)]);
    }

    #[test]
    fn self_reference_is_external() {
        let discovered = vec![loaded(&["app"], None)];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            required_references: vec![reference("app", None)],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &discovered);
        assert!(resolved.internal.is_empty());
        assert_eq!(resolved.external.len(), 1);
    }

    #[test]
    fn imported_names_synthesize_references_after_required_ones() {
        let discovered = vec![
            loaded(&["app"], None),
            loaded(&["org.example.util"], Some(named("org.example.util", "2.0.0"))),
            loaded(&["org.example.io"], Some(named("org.example.io", ""))),
            loaded(&["bare"], None),
        ];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            required_references: vec![reference("org.eclipse.ui", None)],
            imported_names: vec![
                "org.example.util.text".into(),
                "org.example.io.streams".into(),
                "org.osgi.framework".into(),
            ],
            ..Descriptor::default()
        };

        let candidates = collect_candidates(&ComponentId::new("app"), &descriptor, &discovered);
        assert_eq!(
            pairs(&candidates),
            vec![
                ("org.eclipse.ui", None),
                ("org.example.util", Some("2.0.0")),
                ("org.example.io", None),
            ]
        );
    }

    #[test]
    fn imported_match_merges_with_explicit_requirement() {
        let discovered = vec![
            loaded(&["app"], None),
            loaded(&["core"], Some(named("core", "2.0"))),
        ];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            required_references: vec![reference("core", Some("1.0"))],
            imported_names: vec!["core.api".into()],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &discovered);
        assert_eq!(resolved.internal.len(), 1);
        assert_eq!(resolved.internal[0].reference.version(), Some("2.0"));
        assert!(resolved.external.is_empty());
    }

    #[test]
    fn owner_is_not_matched_by_its_own_imports() {
        let discovered = vec![loaded(&["app"], Some(named("app", "1.0")))];
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            imported_names: vec!["app.internal".into()],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &discovered);
        assert!(resolved.is_empty());
    }

    #[test]
    fn embedded_archives_are_independent_of_references() {
        let descriptor = Descriptor {
            symbolic_name: "app".into(),
            embedded_paths: vec![".".into(), "lib/a.jar".into(), "lib/B.Jar".into(), "res/".into()],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("app"), &descriptor, &[]);
        assert_eq!(resolved.embedded_archives, vec!["lib/a.jar", "lib/B.Jar"]);
        assert!(!resolved.is_empty());
    }

    #[test]
    fn descriptor_without_dependencies_resolves_empty() {
        let descriptor = Descriptor {
            symbolic_name: "lonely".into(),
            embedded_paths: vec![".".into(), "plugin.xml".into()],
            ..Descriptor::default()
        };

        let resolved = resolve(&ComponentId::new("lonely"), &descriptor, &[]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn contains_match_is_substring_containment() {
        assert!(contains_match("org.example.core.internal", "org.example.core"));
        assert!(contains_match("com.acme.core", "core"));
        assert!(!contains_match("org.example", "org.example.core"));
        assert!(!contains_match("anything", ""));
    }

    #[test]
    fn app_requiring_core_resolves_internally() {
        let discovered = vec![
            loaded(&["app"], Some(Descriptor {
                symbolic_name: "app".into(),
                required_references: vec![reference("core", None)],
                ..Descriptor::default()
            })),
            loaded(&["core"], Some(named("core", ""))),
        ];
        let app = discovered[0].descriptor.as_ref().expect("descriptor");

        let resolved = resolve(discovered[0].component.id(), app, &discovered);
        assert_eq!(resolved.internal.len(), 1);
        assert_eq!(resolved.internal[0].component.as_str(), "core");
        assert!(resolved.external.is_empty());
        assert!(resolved.embedded_archives.is_empty());
    }
}
