//! Project Resolver
//!
//! Decides how a solution child is rendered. Projects are parsed through the
//! context's factory; the outcome is classified into a closed set of variants.

use super::context::TreeItemContext;
use super::item::TreeItem;
use super::node::TreeNode;
use crate::error::ApiError;
use crate::model::{SolutionItem, SolutionProject};
use crate::project::{Project, ProjectKind};
use tracing::{debug, warn};

/// Outcome of parsing a project pointer.
#[derive(Debug)]
pub enum ProjectVariant {
    /// Parsing failed or produced nothing.
    Unknown,
    Standard(Project),
    Cps(Project),
    Generic(Project),
}

impl ProjectVariant {
    pub fn from_parse(result: Result<Option<Project>, ApiError>) -> Self {
        match result {
            Ok(Some(project)) => match project.kind {
                ProjectKind::Cps => ProjectVariant::Cps(project),
                ProjectKind::Standard => ProjectVariant::Standard(project),
                ProjectKind::Generic => ProjectVariant::Generic(project),
            },
            Ok(None) => ProjectVariant::Unknown,
            Err(err) => {
                warn!(error = %err, "Project parse failed; showing unknown project");
                ProjectVariant::Unknown
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectVariant::Unknown => "unknown",
            ProjectVariant::Standard(_) => "standard",
            ProjectVariant::Cps(_) => "cps",
            ProjectVariant::Generic(_) => "generic",
        }
    }

    /// Build the node, scoping the context to the parsed project.
    pub fn into_node(self, context: &TreeItemContext, pointer: &SolutionProject) -> TreeNode {
        let (kind, project) = match self {
            ProjectVariant::Unknown => {
                return TreeNode::new(
                    TreeItem::UnknownProject(pointer.clone()),
                    context.with_project(None),
                )
            }
            ProjectVariant::Cps(project) => (ProjectKind::Cps, project),
            ProjectVariant::Standard(project) => (ProjectKind::Standard, project),
            ProjectVariant::Generic(project) => (ProjectKind::Generic, project),
        };
        TreeNode::new(
            TreeItem::Project {
                project: pointer.clone(),
                kind,
            },
            context.with_project(Some(project)),
        )
    }
}

/// Resolve a project pointer into a project node (or an unknown-project node).
pub async fn resolve_project(context: &TreeItemContext, pointer: &SolutionProject) -> TreeNode {
    let variant = ProjectVariant::from_parse(context.factory.parse(pointer).await);
    debug!(
        project = %pointer.name,
        path = %pointer.full_path.display(),
        variant = variant.name(),
        "Resolved project"
    );
    variant.into_node(context, pointer)
}

/// Node for any child of a solution scope.
pub async fn create_from_solution_item(context: &TreeItemContext, item: &SolutionItem) -> TreeNode {
    match item {
        SolutionItem::Folder(folder) => {
            TreeNode::new(TreeItem::SolutionFolder(folder.clone()), context.clone())
        }
        SolutionItem::Project(pointer) => resolve_project(context, pointer).await,
    }
}
