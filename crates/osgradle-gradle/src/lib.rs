//! # osgradle-gradle
//!
//! Emits Gradle build files for a discovered component tree.
//!
//! Handles:
//! - **Project**: one `project(':id') { ... }` block per component.
//! - **Settings**: the `settings.gradle` include list.
//! - **Templates**: the fixed prelude and default root files.
//! - **Eclipse**: `dev.properties` and `platform.xml` for a PDE run
//!   configuration.
//! - **Generator**: a complete run over a project tree.

pub mod eclipse;
pub mod generator;
pub mod project;
pub mod settings;
pub mod templates;
