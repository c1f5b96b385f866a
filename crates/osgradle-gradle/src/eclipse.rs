//! Eclipse PDE run-configuration files.
//!
//! `dev.properties` points each component's symbolic name at its Gradle
//! output directories; `platform.xml` declares the project tree as a
//! user-included update site.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use osgradle_bundle::model::LoadedComponent;
use osgradle_bundle::parser::properties::render_properties;
use osgradle_common::constants::{
    APP_NAME, DEV_PROPERTIES_FILE, PDE_METADATA_DIR, PLATFORM_XML_FILE,
};
use osgradle_common::error::{OsgradleError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use url::Url;

/// Output directories listed first for every component.
const DEV_CLASS_PATH: [&str; 2] = ["build/classes/java/main", "build/resources/main"];

/// Builds the `dev.properties` entries for all components whose manifest
/// declares a symbolic name.
#[must_use]
pub fn dev_properties(discovered: &[LoadedComponent]) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let _ = entries.insert("@ignoredot@".to_owned(), "true".to_owned());

    for loaded in discovered {
        let Some(descriptor) = &loaded.descriptor else {
            continue;
        };
        if !descriptor.symbolic_name_declared {
            tracing::debug!(
                id = %loaded.component.id(),
                "no declared symbolic name, leaving out of dev.properties"
            );
            continue;
        }
        let class_path: Vec<&str> = DEV_CLASS_PATH
            .into_iter()
            .chain(
                descriptor
                    .embedded_paths
                    .iter()
                    .map(String::as_str)
                    .filter(|path| *path != "."),
            )
            .collect();
        let _ = entries.insert(descriptor.symbolic_name.clone(), class_path.join(","));
    }

    entries
}

/// Renders `dev.properties` with its generated-by and timestamp comments.
#[must_use]
pub fn render_dev_properties(entries: &BTreeMap<String, String>, now: DateTime<Utc>) -> String {
    let generated_by = format!("Auto-generated by {APP_NAME}");
    let timestamp = now.format("%a %b %d %H:%M:%S UTC %Y").to_string();
    render_properties(&[generated_by.as_str(), timestamp.as_str()], entries)
}

fn xml_error(path: &Path, e: impl Display) -> OsgradleError {
    OsgradleError::Xml {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Renders `platform.xml` listing every component under `root_url`.
///
/// # Errors
///
/// Returns an error if the document cannot be written.
pub fn render_platform_xml(
    root_url: &Url,
    discovered: &[LoadedComponent],
    now: DateTime<Utc>,
) -> Result<String> {
    let target = Path::new(PLATFORM_XML_FILE);
    let list = discovered
        .iter()
        .map(|loaded| loaded.component.relative_path())
        .collect::<Vec<_>>()
        .join(",");
    let date = now.timestamp_millis().to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))
        .map_err(|e| xml_error(target, e))?;

    let mut config = BytesStart::new("config");
    config.push_attribute(("date", date.as_str()));
    config.push_attribute(("transient", "true"));
    config.push_attribute(("version", "3.0"));
    writer
        .write_event(Event::Start(config))
        .map_err(|e| xml_error(target, e))?;

    let mut site = BytesStart::new("site");
    site.push_attribute(("enabled", "true"));
    site.push_attribute(("list", list.as_str()));
    site.push_attribute(("policy", "USER-INCLUDE"));
    site.push_attribute(("updateable", "true"));
    site.push_attribute(("url", root_url.as_str()));
    writer
        .write_event(Event::Empty(site))
        .map_err(|e| xml_error(target, e))?;

    writer
        .write_event(Event::End(BytesEnd::new("config")))
        .map_err(|e| xml_error(target, e))?;

    String::from_utf8(writer.into_inner()).map_err(|e| xml_error(target, e))
}

/// Returns the directory holding a run configuration's files.
#[must_use]
pub fn run_configuration_dir(root: &Path, name: &str) -> PathBuf {
    root.join(PDE_METADATA_DIR).join(name)
}

fn write_creating_parents(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| OsgradleError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| OsgradleError::io(path, e))
}

/// Writes `dev.properties` and `platform.xml` for the run configuration
/// `name` and returns the paths written.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved to a URL or a file
/// cannot be written.
pub fn write_run_configuration(
    root: &Path,
    name: &str,
    discovered: &[LoadedComponent],
) -> Result<Vec<PathBuf>> {
    tracing::info!(configuration = name, "writing Eclipse run configuration");
    let absolute_root = fs::canonicalize(root).map_err(|e| OsgradleError::io(root, e))?;
    let root_url = Url::from_directory_path(&absolute_root).map_err(|()| OsgradleError::Config {
        message: format!(
            "project root cannot be expressed as a file URL: {}",
            absolute_root.display()
        ),
    })?;
    let now = Utc::now();
    let dir = run_configuration_dir(root, name);

    let dev_path = dir.join(DEV_PROPERTIES_FILE);
    write_creating_parents(
        &dev_path,
        &render_dev_properties(&dev_properties(discovered), now),
    )?;

    let platform_path = dir.join(PLATFORM_XML_FILE);
    write_creating_parents(
        &platform_path,
        &render_platform_xml(&root_url, discovered, now)?,
    )?;

    Ok(vec![dev_path, platform_path])
}
