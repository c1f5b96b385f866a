//! File names, header names, and fixed values shared by the workspace.

/// Application name used in CLI output and generated file comments.
pub const APP_NAME: &str = "osgradle";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "osgradle";

/// File whose presence marks a directory as a component.
pub const BUILD_PROPERTIES_FILE: &str = "build.properties";

/// Directory holding the component manifest, relative to the component.
pub const MANIFEST_DIR: &str = "META-INF";

/// Manifest file name inside [`MANIFEST_DIR`].
pub const MANIFEST_FILE: &str = "MANIFEST.MF";

/// Maximum walk depth when discovering components (the root is depth 0).
pub const DISCOVERY_MAX_DEPTH: usize = 3;

/// Separator joining relative path segments into a component id.
pub const ID_SEPARATOR: char = ':';

/// Suffix identifying embedded archives (compared case-insensitively).
pub const ARCHIVE_SUFFIX: &str = ".jar";

/// Line ending used in every generated Gradle file.
pub const LINE_ENDING: &str = "\r\n";

/// Manifest header carrying the component's symbolic name.
pub const HEADER_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
/// Manifest header carrying the component's version.
pub const HEADER_VERSION: &str = "Bundle-Version";
/// Manifest header listing required components.
pub const HEADER_REQUIRE: &str = "Require-Bundle";
/// Manifest header listing imported package names.
pub const HEADER_IMPORT: &str = "Import-Package";
/// Manifest header listing files embedded in the component.
pub const HEADER_CLASS_PATH: &str = "Bundle-ClassPath";

/// Reference-list clause carrying the required version.
pub const VERSION_CLAUSE: &str = ";bundle-version=";

/// `build.properties` key listing source directories.
pub const PROPERTY_SOURCES: &str = "source..";
/// `build.properties` key listing files packaged into the output.
pub const PROPERTY_BIN_INCLUDES: &str = "bin.includes";

/// Generated file holding one project block per component.
pub const SUBPROJECTS_GRADLE: &str = "subprojects.gradle";
/// Generated settings file.
pub const SETTINGS_GRADLE: &str = "settings.gradle";
/// Root build script, written only when missing.
pub const BUILD_GRADLE: &str = "build.gradle";
/// Root Gradle properties, written only when missing.
pub const GRADLE_PROPERTIES: &str = "gradle.properties";

/// Default Eclipse run-configuration name.
pub const DEFAULT_RUN_CONFIGURATION: &str = "New_configuration";

/// Eclipse PDE metadata directory, relative to the project root.
pub const PDE_METADATA_DIR: &str = ".metadata/.plugins/org.eclipse.pde.core";

/// Development class path file inside a run-configuration directory.
pub const DEV_PROPERTIES_FILE: &str = "dev.properties";

/// Update-site definition inside a run-configuration directory.
pub const PLATFORM_XML_FILE: &str = "org.eclipse.update/platform.xml";
