//! Lazy tree nodes handed to the host.
//!
//! A node holds one [`TreeItem`] and its [`TreeItemContext`]. Children are only
//! computed when [`TreeNode::children`] is called, and never cached.

use super::builder::{create_items_from_packages, create_items_from_project, create_items_from_solution};
use super::context::TreeItemContext;
use super::item::{context_values, CollapsibleState, TreeItem};
use crate::config::TreeOptions;
use crate::error::ApiError;
use crate::model::Solution;
use crate::project::ProjectFactory;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Root node for `solution`. Children are not listed until asked for.
pub fn create_from_solution(
    factory: Arc<dyn ProjectFactory>,
    solution: Arc<Solution>,
    workspace_root: impl Into<PathBuf>,
    options: TreeOptions,
) -> TreeNode {
    let item = TreeItem::Solution {
        name: solution.name.clone(),
        full_path: solution.full_path.clone(),
    };
    let context = TreeItemContext::new(factory, solution, workspace_root).with_options(options);
    TreeNode::new(item, context)
}

/// A display node: entry plus scope.
#[derive(Debug, Clone)]
pub struct TreeNode {
    item: TreeItem,
    context: TreeItemContext,
}

impl TreeNode {
    pub fn new(item: TreeItem, context: TreeItemContext) -> Self {
        Self { item, context }
    }

    pub fn item(&self) -> &TreeItem {
        &self.item
    }

    pub fn context(&self) -> &TreeItemContext {
        &self.context
    }

    pub fn label(&self) -> &str {
        self.item.label()
    }

    pub fn description(&self) -> Option<&str> {
        self.item.description()
    }

    pub fn collapsible_state(&self) -> CollapsibleState {
        self.item.collapsible_state()
    }

    pub fn path(&self) -> Option<&Path> {
        self.item.path()
    }

    /// Context value, with the F# suffix on project files inside `.fsproj` projects.
    pub fn context_value(&self) -> String {
        let base = self.item.base_context_value();
        let in_fsharp_project = self
            .context
            .project
            .as_ref()
            .map(|p| p.extension() == "fsproj")
            .unwrap_or(false);
        if in_fsharp_project && matches!(self.item, TreeItem::ProjectFile { .. }) {
            format!("{}{}", base, context_values::FSHARP_SUFFIX)
        } else {
            base.to_string()
        }
    }

    /// List this node's children.
    ///
    /// Errors are local to this node: a failure here leaves siblings and the
    /// parent listing untouched.
    pub async fn children(&self) -> Result<Vec<TreeNode>, ApiError> {
        let context = &self.context;
        match &self.item {
            TreeItem::Solution { .. } => Ok(create_items_from_solution(context, None).await),
            TreeItem::SolutionFolder(folder) => {
                Ok(create_items_from_solution(context, Some(folder)).await)
            }
            TreeItem::Project { .. } => self.project_children().await,
            TreeItem::ProjectFolder(entry) => match &context.project {
                Some(project) => {
                    create_items_from_project(context, project, Some(&entry.relative_path)).await
                }
                None => Ok(Vec::new()),
            },
            TreeItem::ProjectFile { related, .. } => Ok(related
                .iter()
                .map(|entry| {
                    TreeNode::new(
                        TreeItem::ProjectFile {
                            entry: entry.clone(),
                            related: Vec::new(),
                            nested: true,
                        },
                        context.clone(),
                    )
                })
                .collect()),
            TreeItem::PackagesFolder => match &context.project {
                Some(project) => {
                    let packages = project.package_references().await?;
                    Ok(create_items_from_packages(
                        context,
                        &packages,
                        context_values::PROJECT_PACKAGE,
                    )
                    .await)
                }
                None => Ok(Vec::new()),
            },
            TreeItem::ReferencedPackage {
                dependencies,
                context_value,
                ..
            } => Ok(create_items_from_packages(context, dependencies, context_value).await),
            TreeItem::UnknownProject(_) | TreeItem::SolutionFile { .. } => Ok(Vec::new()),
        }
    }

    async fn project_children(&self) -> Result<Vec<TreeNode>, ApiError> {
        let context = &self.context;
        let Some(project) = &context.project else {
            return Ok(Vec::new());
        };

        let mut children = Vec::new();
        if context.options.show_packages {
            match project.package_references().await {
                Ok(packages) if !packages.is_empty() => {
                    children.push(TreeNode::new(TreeItem::PackagesFolder, context.clone()));
                }
                Ok(_) => {}
                Err(err) => warn!(
                    project = %project.name,
                    error = %err,
                    "Package references unavailable; omitting packages node"
                ),
            }
        }
        children.extend(create_items_from_project(context, project, None).await?);
        Ok(children)
    }
}
