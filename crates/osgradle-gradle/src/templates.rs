//! Fixed file contents shipped with the generator.

use std::fs;
use std::path::Path;

use osgradle_common::error::{OsgradleError, Result};

/// Prelude of `subprojects.gradle`, before the generated project blocks.
pub const SUBPROJECTS_PRELUDE: &str = include_str!("../templates/bundlebuilder.gradle");

/// Root `build.gradle` written when the project has none.
pub const DEFAULT_BUILD_GRADLE: &str = include_str!("../templates/build.default.gradle");

/// Root `gradle.properties` written when the project has none.
pub const DEFAULT_GRADLE_PROPERTIES: &str = include_str!("../templates/gradle.default.properties");

/// Writes `contents` to `path` unless the file already exists.
///
/// Returns whether the file was written.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_if_missing(path: &Path, contents: &str) -> Result<bool> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "keeping existing file");
        return Ok(false);
    }
    fs::write(path, contents).map_err(|e| OsgradleError::io(path, e))?;
    Ok(true)
}
