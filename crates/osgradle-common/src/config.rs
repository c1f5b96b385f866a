//! Configuration model for a generation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{OsgradleError, Result};

/// Settings for one generation run over a project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory of the project tree.
    pub root: PathBuf,
    /// Maximum directory depth searched for components.
    pub max_depth: usize,
    /// Eclipse run configuration to generate files for, if any.
    pub eclipse_run_configuration: Option<String>,
}

impl GeneratorConfig {
    /// Creates a configuration for `root` with default settings.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: constants::DISCOVERY_MAX_DEPTH,
            eclipse_run_configuration: None,
        }
    }

    /// Enables Eclipse run-configuration output under `name`.
    #[must_use]
    pub fn with_eclipse_run_configuration(mut self, name: impl Into<String>) -> Self {
        self.eclipse_run_configuration = Some(name.into());
        self
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not an existing directory, the depth
    /// is zero, or the run-configuration name is empty or contains a path
    /// separator.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(OsgradleError::NotFound {
                kind: "project root",
                id: self.root.display().to_string(),
            });
        }
        if self.max_depth == 0 {
            return Err(OsgradleError::Config {
                message: "discovery depth must be at least 1".into(),
            });
        }
        if let Some(name) = &self.eclipse_run_configuration {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                return Err(OsgradleError::Config {
                    message: format!("invalid Eclipse run configuration name: \"{name}\""),
                });
            }
        }
        Ok(())
    }
}
