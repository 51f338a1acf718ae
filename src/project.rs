//! Project collaborator boundary
//!
//! Parsing project files is not done here. A host supplies a [`ProjectFactory`]
//! that turns a [`SolutionProject`] pointer into a [`Project`], and each project
//! exposes its entries and package metadata through a [`ProjectSource`].

use crate::error::ApiError;
use crate::model::{PackageReference, ProjectItemEntry, SolutionProject};
use crate::types::PackageDependencyMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Rendering strategy selected by a parsed project's `type` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// SDK-style project (project system with a dependency tree).
    Cps,
    /// Classic project format.
    Standard,
    /// Parsed, but of no recognized type.
    Generic,
}

impl ProjectKind {
    /// Map a raw discriminant to a kind. Unknown or absent values are generic.
    pub fn from_discriminant(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("cps") => ProjectKind::Cps,
            Some("standard") => ProjectKind::Standard,
            _ => ProjectKind::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Cps => "cps",
            ProjectKind::Standard => "standard",
            ProjectKind::Generic => "generic",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed project content, fetched on demand.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// All entries of the project, flat.
    async fn item_entries(&self) -> Result<Vec<ProjectItemEntry>, ApiError>;

    /// Packages the project references directly.
    async fn package_references(&self) -> Result<Vec<PackageReference>, ApiError>;

    /// Every package the project pulls in, with each package's direct dependencies.
    async fn package_dependencies(&self) -> Result<PackageDependencyMap, ApiError>;
}

/// Turns a solution's project pointer into parsed project metadata.
#[async_trait]
pub trait ProjectFactory: Send + Sync {
    /// `Ok(None)` means the project file was read but yielded no structured project.
    async fn parse(&self, project: &SolutionProject) -> Result<Option<Project>, ApiError>;
}

/// Parsed project metadata.
#[derive(Clone)]
pub struct Project {
    pub name: String,
    pub full_path: PathBuf,
    pub kind: ProjectKind,
    source: Arc<dyn ProjectSource>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        full_path: impl Into<PathBuf>,
        kind: ProjectKind,
        source: Arc<dyn ProjectSource>,
    ) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            kind,
            source,
        }
    }

    /// Lower-cased project file extension.
    pub fn extension(&self) -> String {
        self.full_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    pub async fn item_entries(&self) -> Result<Vec<ProjectItemEntry>, ApiError> {
        self.source.item_entries().await
    }

    pub async fn package_references(&self) -> Result<Vec<PackageReference>, ApiError> {
        self.source.package_references().await
    }

    pub async fn package_dependencies(&self) -> Result<PackageDependencyMap, ApiError> {
        self.source.package_dependencies().await
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("name", &self.name)
            .field("full_path", &self.full_path)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Project content that was parsed ahead of time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryProject {
    #[serde(default)]
    pub entries: Vec<ProjectItemEntry>,
    #[serde(default)]
    pub packages: Vec<PackageReference>,
    #[serde(default)]
    pub package_dependencies: PackageDependencyMap,
}

impl InMemoryProject {
    pub fn new(entries: Vec<ProjectItemEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn with_packages(
        mut self,
        packages: Vec<PackageReference>,
        package_dependencies: PackageDependencyMap,
    ) -> Self {
        self.packages = packages;
        self.package_dependencies = package_dependencies;
        self
    }
}

#[async_trait]
impl ProjectSource for InMemoryProject {
    async fn item_entries(&self) -> Result<Vec<ProjectItemEntry>, ApiError> {
        Ok(self.entries.clone())
    }

    async fn package_references(&self) -> Result<Vec<PackageReference>, ApiError> {
        Ok(self.packages.clone())
    }

    async fn package_dependencies(&self) -> Result<PackageDependencyMap, ApiError> {
        Ok(self.package_dependencies.clone())
    }
}
