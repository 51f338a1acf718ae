//! Core types shared across the solution tree model and builders.

use indexmap::IndexMap;

/// Virtual path sentinel for the root of a project.
pub const ROOT_VIRTUAL_PATH: &str = ".";

/// Solution file display name -> path relative to the solution folder.
pub type SolutionFileMap = IndexMap<String, String>;

/// Package name -> version, in declaration order.
pub type PackageVersionMap = IndexMap<String, String>;

/// Package name -> resolved metadata for every package a project pulls in transitively.
pub type PackageDependencyMap = IndexMap<String, crate::model::PackageMetadata>;
