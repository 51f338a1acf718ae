//! Scope token propagated to every node.

use crate::config::TreeOptions;
use crate::model::Solution;
use crate::project::{Project, ProjectFactory};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Enclosing solution, resolved project (if any), workspace root and the
/// factory used to parse projects on demand.
///
/// Shared read-only between siblings; descending into a project produces a
/// copy via [`with_project`](Self::with_project). Holds no entry data.
#[derive(Clone)]
pub struct TreeItemContext {
    pub solution: Arc<Solution>,
    pub project: Option<Project>,
    pub workspace_root: PathBuf,
    pub factory: Arc<dyn ProjectFactory>,
    pub options: TreeOptions,
}

impl TreeItemContext {
    pub fn new(
        factory: Arc<dyn ProjectFactory>,
        solution: Arc<Solution>,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            solution,
            project: None,
            workspace_root: workspace_root.into(),
            factory,
            options: TreeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Copy of this context scoped to `project`.
    pub fn with_project(&self, project: Option<Project>) -> Self {
        Self {
            project,
            ..self.clone()
        }
    }
}

impl fmt::Debug for TreeItemContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeItemContext")
            .field("solution", &self.solution.name)
            .field("project", &self.project.as_ref().map(|p| &p.name))
            .field("workspace_root", &self.workspace_root)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
