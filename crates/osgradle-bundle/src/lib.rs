//! # osgradle-bundle
//!
//! Reads legacy component metadata and resolves dependencies between
//! components.
//!
//! Handles:
//! - **Discovery**: finding component directories under a project root.
//! - **Parser**: manifest headers, `build.properties` files, and the
//!   reference-list grammar.
//! - **Loader**: attaching descriptors and build properties to components.
//! - **Resolver**: classifying declared dependencies as internal or
//!   external.
//! - **Plan**: resolution results for a whole discovered set.

pub mod discovery;
pub mod loader;
pub mod model;
pub mod parser;
pub mod plan;
pub mod resolver;
