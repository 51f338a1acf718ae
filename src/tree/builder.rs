//! Hierarchy Builder
//!
//! Produces the ordered children of a scope: a solution or solution folder, a
//! virtual folder inside a project, or a list of package references. Nothing is
//! cached; each call re-reads its inputs.

use super::context::TreeItemContext;
use super::grouping::group_dependent_files;
use super::item::TreeItem;
use super::node::TreeNode;
use super::packages::resolve_package_dependencies;
use super::resolver::resolve_project;
use crate::error::ApiError;
use crate::model::{PackageReference, ProjectItemEntry, SolutionFolder};
use crate::paths::{join_normalized, normalize_virtual_path, virtual_dirname};
use crate::project::Project;
use crate::types::{PackageDependencyMap, ROOT_VIRTUAL_PATH};
use futures::future::join_all;
use tracing::{debug, warn};

/// Sort by lower-cased display name, ascending. Stable: equal names keep input order.
pub fn sort_by_display_name<'a, T, F>(items: &'a [T], name: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| name(item).to_lowercase());
    sorted
}

/// Children of the solution (`scope == None`) or of one of its folders.
///
/// Folders first, then projects, each sorted by name. A folder scope also lists
/// its solution files, in mapping order. Projects are parsed concurrently; the
/// output order does not depend on which parse finishes first.
pub async fn create_items_from_solution(
    context: &TreeItemContext,
    scope: Option<&SolutionFolder>,
) -> Vec<TreeNode> {
    let solution = context.solution.as_ref();
    let (folders, projects) = match scope {
        Some(folder) => (folder.folders(), folder.projects()),
        None => (solution.folders(), solution.projects()),
    };

    let mut result: Vec<TreeNode> = sort_by_display_name(folders, |f| f.name.as_str())
        .into_iter()
        .map(|folder| TreeNode::new(TreeItem::SolutionFolder(folder.clone()), context.clone()))
        .collect();

    let projects = sort_by_display_name(projects, |p| p.name.as_str());
    result.extend(join_all(projects.into_iter().map(|p| resolve_project(context, p))).await);

    if let Some(folder) = scope {
        for (name, relative_path) in &folder.solution_files {
            result.push(TreeNode::new(
                TreeItem::SolutionFile {
                    name: name.clone(),
                    full_path: join_normalized(&solution.folder_path, relative_path),
                    folder: folder.name.clone(),
                },
                context.clone(),
            ));
        }
    }

    debug!(
        scope = scope.map(|f| f.name.as_str()).unwrap_or(solution.name.as_str()),
        children = result.len(),
        "Listed solution scope"
    );
    result
}

/// Children of a virtual folder inside `project` (`None` means the project root).
///
/// Directories first, sorted by name, then file groups in scan order. Entries
/// living in other virtual folders are left for their own expansion.
pub async fn create_items_from_project(
    context: &TreeItemContext,
    project: &Project,
    virtual_path: Option<&str>,
) -> Result<Vec<TreeNode>, ApiError> {
    let target = normalize_virtual_path(virtual_path.unwrap_or(ROOT_VIRTUAL_PATH));
    let entries = project.item_entries().await?;

    let (folders, files): (Vec<&ProjectItemEntry>, Vec<&ProjectItemEntry>) = entries
        .iter()
        .filter(|entry| normalize_virtual_path(&virtual_dirname(&entry.relative_path)) == target)
        .partition(|entry| entry.is_directory);

    let mut folders = folders;
    folders.sort_by_cached_key(|entry| entry.name.to_lowercase());

    let mut result: Vec<TreeNode> = folders
        .into_iter()
        .map(|folder| TreeNode::new(TreeItem::ProjectFolder(folder.clone()), context.clone()))
        .collect();

    for group in group_dependent_files(&files, context.options.item_nesting) {
        result.push(TreeNode::new(
            TreeItem::ProjectFile {
                entry: group.root.clone(),
                related: group.related.into_iter().cloned().collect(),
                nested: false,
            },
            context.clone(),
        ));
    }

    debug!(
        project = %project.name,
        virtual_path = %target,
        children = result.len(),
        "Listed project folder"
    );
    Ok(result)
}

/// One node per declared package, each carrying its direct dependencies.
///
/// Without a project in scope there is nothing to resolve against. A failed
/// metadata lookup is treated as an empty map.
pub async fn create_items_from_packages(
    context: &TreeItemContext,
    packages: &[PackageReference],
    context_value: &str,
) -> Vec<TreeNode> {
    let Some(project) = &context.project else {
        return Vec::new();
    };

    let dependency_map = match project.package_dependencies().await {
        Ok(map) => map,
        Err(err) => {
            warn!(
                project = %project.name,
                error = %err,
                "Package metadata unavailable; listing packages without dependencies"
            );
            PackageDependencyMap::new()
        }
    };

    resolve_package_dependencies(packages, &dependency_map)
        .into_iter()
        .map(|resolved| {
            TreeNode::new(
                TreeItem::ReferencedPackage {
                    package: resolved.package,
                    dependencies: resolved.dependencies,
                    context_value: context_value.to_string(),
                },
                context.clone(),
            )
        })
        .collect()
}
