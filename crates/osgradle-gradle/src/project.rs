//! Emission of one `project(':id') { ... }` block per component.
//!
//! Output uses CRLF line endings throughout.

use std::io::{self, Write};

use osgradle_bundle::model::{BuildProperties, Component, Descriptor, Reference};
use osgradle_bundle::resolver::ResolvedDependencies;
use osgradle_common::constants::LINE_ENDING as NL;

/// Everything needed to declare one component's Gradle project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectDeclaration<'a> {
    /// The component being declared.
    pub component: &'a Component,
    /// Its `build.properties` layout.
    pub properties: &'a BuildProperties,
    /// Its manifest metadata, if any.
    pub descriptor: Option<&'a Descriptor>,
    /// Its resolved dependencies.
    pub dependencies: &'a ResolvedDependencies,
}

/// Joins entries as `'a','b'`.
fn quoted_list(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("'{entry}'"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes the `p2bundle('name'[, 'version'])` call for an external reference.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn declare_p2bundle_call<W: Write>(w: &mut W, reference: &Reference) -> io::Result<()> {
    write!(w, "p2bundle('{}'", reference.name())?;
    if let Some(version) = reference.version() {
        write!(w, ", '{version}'")?;
    }
    write!(w, ")")
}

fn declare_source_sets<W: Write>(w: &mut W, properties: &BuildProperties) -> io::Result<()> {
    if !properties.source_directories.is_empty() {
        write!(
            w,
            "\tsourceSets.main.java.srcDirs = [{}]{NL}",
            quoted_list(&properties.source_directories)
        )?;
    }
    write!(
        w,
        "\tsourceSets.main.resources.srcDirs = sourceSets.main.java.srcDirs{NL}"
    )?;
    if !properties.archives_to_include.is_empty() {
        write!(
            w,
            "\tjar.from files({}).collect {{ zipTree(it) }}{NL}",
            quoted_list(&properties.archives_to_include)
        )?;
    }
    if !properties.non_archives_to_include.is_empty() {
        write!(
            w,
            "\tjar.from fileTree(projectDir) {{ includes = [{}] }}{NL}",
            quoted_list(&properties.non_archives_to_include)
        )?;
    }
    Ok(())
}

fn declare_archive_names<W: Write>(w: &mut W, descriptor: &Descriptor) -> io::Result<()> {
    let name = &descriptor.symbolic_name;
    let version = &descriptor.version;
    write!(w, "\tjar.archiveBaseName = '{name}'{NL}")?;
    write!(w, "\tjar.archiveVersion = '{version}'{NL}")?;
    write!(w, "\tjar.archiveFileName = '{name}_{version}.jar'{NL}{NL}")
}

/// Writes the `dependencies { ... }` block, or nothing when there are no
/// dependencies.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn declare_dependencies<W: Write>(
    w: &mut W,
    dependencies: &ResolvedDependencies,
) -> io::Result<()> {
    if dependencies.is_empty() {
        return Ok(());
    }
    write!(w, "{NL}\tdependencies {{{NL}")?;
    for internal in &dependencies.internal {
        write!(w, "\t\timplementation project(':{}'){NL}", internal.component)?;
    }
    write!(w, "{NL}")?;
    for external in &dependencies.external {
        write!(w, "\t\timplementation ")?;
        declare_p2bundle_call(w, external)?;
        write!(w, "{NL}")?;
    }
    write!(w, "{NL}")?;
    if !dependencies.embedded_archives.is_empty() {
        write!(
            w,
            "\t\tcompileOnly files('{}'){NL}",
            dependencies.embedded_archives.join("', '")
        )?;
    }
    write!(w, "\t}}{NL}")
}

/// Writes the complete project block of one component.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn declare_project<W: Write>(w: &mut W, project: &ProjectDeclaration<'_>) -> io::Result<()> {
    write!(w, "project(':{}') {{{NL}", project.component.id())?;
    declare_source_sets(w, project.properties)?;
    if let Some(descriptor) = project.descriptor {
        declare_archive_names(w, descriptor)?;
        declare_dependencies(w, project.dependencies)?;
    }
    write!(w, "}}{NL}{NL}")
}

#[cfg(test)]
mod tests {
    use osgradle_bundle::resolver::InternalDependency;
    use osgradle_common::types::ComponentId;

    use super::*;

    fn render(project: &ProjectDeclaration<'_>) -> String {
        let mut out = Vec::new();
        declare_project(&mut out, project).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    fn component(name: &str) -> Component {
        Component::new(vec!["plugins".into(), name.into()], format!("/ws/plugins/{name}"))
    }

    #[test]
    fn component_without_descriptor_declares_layout_only() {
        let component = component("core");
        let properties = BuildProperties {
            source_directories: vec!["src/".into(), "src-gen/".into()],
            archives_to_include: vec!["lib/a.jar".into(), "lib/b.jar".into()],
            non_archives_to_include: vec!["META-INF/".into(), "plugin.xml".into()],
        };
        let text = render(&ProjectDeclaration {
            component: &component,
            properties: &properties,
            descriptor: None,
            dependencies: &ResolvedDependencies::default(),
        });

        assert_eq!(
            text,
            concat!(
                "project(':plugins:core') {\r\n",
                "\tsourceSets.main.java.srcDirs = ['src/','src-gen/']\r\n",
                "\tsourceSets.main.resources.srcDirs = sourceSets.main.java.srcDirs\r\n",
                "\tjar.from files('lib/a.jar','lib/b.jar').collect { zipTree(it) }\r\n",
                "\tjar.from fileTree(projectDir) { includes = ['META-INF/','plugin.xml'] }\r\n",
                "}\r\n\r\n",
            )
        );
    }

    #[test]
    fn dependencies_block_lists_internal_external_and_archives() {
        let component = component("app");
        let descriptor = Descriptor {
            symbolic_name: "org.example.app".into(),
            version: "1.0.0".into(),
            ..Descriptor::default()
        };
        let dependencies = ResolvedDependencies {
            internal: vec![InternalDependency {
                reference: Reference::new("core", None),
                component: ComponentId::new("plugins:core"),
            }],
            external: vec![
                Reference::new("org.eclipse.ui", Some("[3.0.0,4.0.0)".into())),
                Reference::new("org.eclipse.jface", None),
            ],
            embedded_archives: vec!["lib/a.jar".into(), "lib/b.jar".into()],
        };
        let text = render(&ProjectDeclaration {
            component: &component,
            properties: &BuildProperties::default(),
            descriptor: Some(&descriptor),
            dependencies: &dependencies,
        });

        assert_eq!(
            text,
            concat!(
                "project(':plugins:app') {\r\n",
                "\tsourceSets.main.resources.srcDirs = sourceSets.main.java.srcDirs\r\n",
                "\tjar.archiveBaseName = 'org.example.app'\r\n",
                "\tjar.archiveVersion = '1.0.0'\r\n",
                "\tjar.archiveFileName = 'org.example.app_1.0.0.jar'\r\n",
                "\r\n",
                "\r\n",
                "\tdependencies {\r\n",
                "\t\timplementation project(':plugins:core')\r\n",
                "\r\n",
                "\t\timplementation p2bundle('org.eclipse.ui', '[3.0.0,4.0.0)')\r\n",
                "\t\timplementation p2bundle('org.eclipse.jface')\r\n",
                "\r\n",
                "\t\tcompileOnly files('lib/a.jar', 'lib/b.jar')\r\n",
                "\t}\r\n",
                "}\r\n\r\n",
            )
        );
    }

    #[test]
    fn no_dependencies_omits_the_block() {
        let component = component("lonely");
        let descriptor = Descriptor {
            symbolic_name: "lonely".into(),
            ..Descriptor::default()
        };
        let text = render(&ProjectDeclaration {
            component: &component,
            properties: &BuildProperties::default(),
            descriptor: Some(&descriptor),
            dependencies: &ResolvedDependencies::default(),
        });

        assert!(!text.contains("dependencies"), "got: {text}");
        assert!(text.contains("jar.archiveFileName = 'lonely_.jar'"));
    }

    #[test]
    fn p2bundle_call_keeps_version_exactly() {
        let mut out = Vec::new();
        declare_p2bundle_call(&mut out, &Reference::new("a", Some("2.1.0".into()))).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "p2bundle('a', '2.1.0')");
    }
}
