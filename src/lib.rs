//! Solution Tree: Deterministic Solution Explorer View Model
//!
//! Builds the hierarchical view of a solution from flat, already-parsed
//! metadata: folders and projects, project files with dependent files nested
//! under their roots, and package references with their dependencies.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod project;
pub mod snapshot;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::ApiError;
