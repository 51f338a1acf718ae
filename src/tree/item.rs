//! Child descriptors produced by the builders.

use crate::model::{PackageReference, ProjectItemEntry, SolutionFolder, SolutionProject};
use crate::project::ProjectKind;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Context values the host keys menus and commands on.
pub mod context_values {
    pub const SOLUTION: &str = "solution";
    pub const SOLUTION_FOLDER: &str = "solution-folder";
    pub const SOLUTION_FILE: &str = "solution-file";
    pub const PROJECT: &str = "project";
    pub const PROJECT_CPS: &str = "project-cps";
    pub const PROJECT_STANDARD: &str = "project-standard";
    pub const UNKNOWN_PROJECT: &str = "unknown-project";
    pub const PROJECT_FOLDER: &str = "project-folder";
    pub const PROJECT_FILE: &str = "project-file";
    pub const PROJECT_PACKAGES: &str = "project-referenced-packages";
    pub const PROJECT_PACKAGE: &str = "project-referenced-package";

    /// Appended to project-scoped values inside F# projects.
    pub const FSHARP_SUFFIX: &str = "-fs";
}

/// Label of the node grouping a project's package references.
pub const PACKAGES_LABEL: &str = "Packages";

/// Whether the host should render an expander, and its initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

/// One child of a scope, ready to become a display node.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeItem {
    Solution {
        name: String,
        full_path: PathBuf,
    },
    SolutionFolder(SolutionFolder),
    Project {
        project: SolutionProject,
        kind: ProjectKind,
    },
    /// Project whose file could not be parsed; kept for display.
    UnknownProject(SolutionProject),
    PackagesFolder,
    ProjectFolder(ProjectItemEntry),
    ProjectFile {
        entry: ProjectItemEntry,
        /// Files nested under this one, in discovery order.
        related: Vec<ProjectItemEntry>,
        /// True when this file is itself shown nested under another.
        nested: bool,
    },
    ReferencedPackage {
        package: PackageReference,
        dependencies: Vec<PackageReference>,
        context_value: String,
    },
    SolutionFile {
        name: String,
        full_path: PathBuf,
        folder: String,
    },
}

impl TreeItem {
    pub fn label(&self) -> &str {
        match self {
            TreeItem::Solution { name, .. } => name,
            TreeItem::SolutionFolder(folder) => &folder.name,
            TreeItem::Project { project, .. } | TreeItem::UnknownProject(project) => &project.name,
            TreeItem::PackagesFolder => PACKAGES_LABEL,
            TreeItem::ProjectFolder(entry) => &entry.name,
            TreeItem::ProjectFile { entry, .. } => &entry.name,
            TreeItem::ReferencedPackage { package, .. } => &package.name,
            TreeItem::SolutionFile { name, .. } => name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TreeItem::ProjectFile { entry, nested, .. } => {
                if *nested || entry.dependent_upon.is_some() {
                    Some("dependent")
                } else if entry.is_link {
                    Some("link")
                } else {
                    None
                }
            }
            TreeItem::ReferencedPackage { package, .. } if !package.version.is_empty() => {
                Some(package.version.as_str())
            }
            TreeItem::UnknownProject(_) => Some("unloaded"),
            _ => None,
        }
    }

    pub fn collapsible_state(&self) -> CollapsibleState {
        match self {
            TreeItem::Solution { .. } => CollapsibleState::Expanded,
            TreeItem::SolutionFolder(_)
            | TreeItem::Project { .. }
            | TreeItem::PackagesFolder
            | TreeItem::ProjectFolder(_) => CollapsibleState::Collapsed,
            TreeItem::ProjectFile { related, .. } if !related.is_empty() => {
                CollapsibleState::Collapsed
            }
            TreeItem::ReferencedPackage { dependencies, .. } if !dependencies.is_empty() => {
                CollapsibleState::Collapsed
            }
            _ => CollapsibleState::None,
        }
    }

    /// Context value before any project-specific suffix.
    pub fn base_context_value(&self) -> &str {
        match self {
            TreeItem::Solution { .. } => context_values::SOLUTION,
            TreeItem::SolutionFolder(_) => context_values::SOLUTION_FOLDER,
            TreeItem::Project { kind, .. } => match kind {
                ProjectKind::Cps => context_values::PROJECT_CPS,
                ProjectKind::Standard => context_values::PROJECT_STANDARD,
                ProjectKind::Generic => context_values::PROJECT,
            },
            TreeItem::UnknownProject(_) => context_values::UNKNOWN_PROJECT,
            TreeItem::PackagesFolder => context_values::PROJECT_PACKAGES,
            TreeItem::ProjectFolder(_) => context_values::PROJECT_FOLDER,
            TreeItem::ProjectFile { .. } => context_values::PROJECT_FILE,
            TreeItem::ReferencedPackage { context_value, .. } => context_value,
            TreeItem::SolutionFile { .. } => context_values::SOLUTION_FILE,
        }
    }

    /// On-disk location, when the item has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeItem::Solution { full_path, .. } | TreeItem::SolutionFile { full_path, .. } => {
                Some(full_path.as_path())
            }
            TreeItem::Project { project, .. } | TreeItem::UnknownProject(project) => {
                Some(project.full_path.as_path())
            }
            TreeItem::ProjectFolder(entry) | TreeItem::ProjectFile { entry, .. } => {
                Some(entry.full_path.as_path())
            }
            TreeItem::SolutionFolder(_)
            | TreeItem::PackagesFolder
            | TreeItem::ReferencedPackage { .. } => None,
        }
    }
}
