//! Solution tree construction
//!
//! Builders turn a scope (solution, solution folder, project folder, package
//! list) into ordered child descriptors. Nodes wrap a descriptor and its
//! context and call back into the builders when the host expands them.

pub mod builder;
mod context;
pub mod grouping;
mod item;
mod node;
pub mod packages;
pub mod render;
pub mod resolver;

pub use builder::{
    create_items_from_packages, create_items_from_project, create_items_from_solution,
    sort_by_display_name,
};
pub use context::TreeItemContext;
pub use grouping::{group_dependent_files, FileGroup};
pub use item::{context_values, CollapsibleState, TreeItem, PACKAGES_LABEL};
pub use node::{create_from_solution, TreeNode};
pub use packages::{resolve_package_dependencies, ResolvedPackage};
pub use render::{render_text, render_tree, RenderedNode};
pub use resolver::{create_from_solution_item, resolve_project, ProjectVariant};
