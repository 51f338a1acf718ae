use async_trait::async_trait;
use solution_tree::error::ApiError;
use solution_tree::model::{PackageReference, ProjectItemEntry, SolutionProject};
use solution_tree::project::{InMemoryProject, Project, ProjectFactory, ProjectKind, ProjectSource};
use solution_tree::tree::TreeNode;
use solution_tree::types::PackageDependencyMap;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Project source whose every read fails.
pub struct LockedProject;

#[async_trait]
impl ProjectSource for LockedProject {
    async fn item_entries(&self) -> Result<Vec<ProjectItemEntry>, ApiError> {
        Err(ApiError::ProjectEntries {
            project: "Locked".to_string(),
            message: "file is locked".to_string(),
        })
    }

    async fn package_references(&self) -> Result<Vec<PackageReference>, ApiError> {
        Ok(Vec::new())
    }

    async fn package_dependencies(&self) -> Result<PackageDependencyMap, ApiError> {
        Ok(PackageDependencyMap::new())
    }
}

/// Factory over a fixed table of project file paths.
#[derive(Default)]
pub struct TableFactory {
    projects: HashMap<PathBuf, (ProjectKind, Arc<dyn ProjectSource>)>,
    failing: Vec<PathBuf>,
}

impl TableFactory {
    pub fn with(mut self, path: &str, kind: ProjectKind, source: InMemoryProject) -> Self {
        let source: Arc<dyn ProjectSource> = Arc::new(source);
        self.projects.insert(PathBuf::from(path), (kind, source));
        self
    }

    pub fn with_source(
        mut self,
        path: &str,
        kind: ProjectKind,
        source: Arc<dyn ProjectSource>,
    ) -> Self {
        self.projects.insert(PathBuf::from(path), (kind, source));
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.push(PathBuf::from(path));
        self
    }
}

#[async_trait]
impl ProjectFactory for TableFactory {
    async fn parse(&self, project: &SolutionProject) -> Result<Option<Project>, ApiError> {
        if self.failing.contains(&project.full_path) {
            return Err(ApiError::ProjectParse {
                path: project.full_path.display().to_string(),
                message: "malformed".to_string(),
            });
        }
        Ok(self.projects.get(&project.full_path).map(|(kind, source)| {
            Project::new(
                project.name.clone(),
                project.full_path.clone(),
                *kind,
                source.clone(),
            )
        }))
    }
}

pub fn labels(nodes: &[TreeNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.label()).collect()
}

/// The single child labelled `label`.
pub fn child<'a>(nodes: &'a [TreeNode], label: &str) -> &'a TreeNode {
    nodes
        .iter()
        .find(|n| n.label() == label)
        .unwrap_or_else(|| panic!("no child labelled {label}"))
}
