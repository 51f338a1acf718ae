//! ASCII rendering of an expanded tree.
//!
//! Expands nodes up to a depth and prints them the way a host would show them
//! fully opened. Used by the CLI and handy in tests.

use super::item::CollapsibleState;
use super::node::TreeNode;
use futures::future::{join_all, BoxFuture, FutureExt};
use owo_colors::OwoColorize;
use serde::Serialize;

/// A node with its children materialized.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedNode {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub context_value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
    /// Set when listing this node's children failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Expand `node` `depth` levels deep. Sibling expansions run concurrently and
/// keep their listed order.
pub fn expand(node: &TreeNode, depth: usize) -> BoxFuture<'_, RenderedNode> {
    async move {
        let mut rendered = RenderedNode {
            label: node.label().to_string(),
            description: node.description().map(str::to_string),
            context_value: node.context_value(),
            children: Vec::new(),
            error: None,
        };
        if depth == 0 || node.collapsible_state() == CollapsibleState::None {
            return rendered;
        }
        match node.children().await {
            Ok(children) => {
                rendered.children =
                    join_all(children.iter().map(|child| expand(child, depth - 1))).await;
            }
            Err(err) => rendered.error = Some(err.to_string()),
        }
        rendered
    }
    .boxed()
}

/// Expand and render as plain text.
pub async fn render_tree(node: &TreeNode, depth: usize) -> String {
    render_text(&expand(node, depth).await, false)
}

/// Render an expanded tree.
///
/// ```text
/// App
/// ├── Src
/// │   └── Core
/// └── Web
///     ├── Program.cs
///     └── Startup.cs
/// ```
pub fn render_text(root: &RenderedNode, color: bool) -> String {
    let mut output = String::new();
    push_line(&mut output, root, "", color);
    render_children(&mut output, root, "", color);
    output
}

fn render_children(output: &mut String, node: &RenderedNode, prefix: &str, color: bool) {
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i == node.children.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        push_line(output, child, &format!("{}{}", prefix, branch), color);
        let continuation = if is_last { "    " } else { "│   " };
        render_children(output, child, &format!("{}{}", prefix, continuation), color);
    }
}

fn push_line(output: &mut String, node: &RenderedNode, prefix: &str, color: bool) {
    output.push_str(prefix);
    let expandable = !node.children.is_empty();
    if color && expandable {
        output.push_str(&node.label.bold().to_string());
    } else {
        output.push_str(&node.label);
    }
    if let Some(description) = &node.description {
        let text = format!(" ({})", description);
        if color {
            output.push_str(&text.dimmed().to_string());
        } else {
            output.push_str(&text);
        }
    }
    if let Some(error) = &node.error {
        let text = format!(" [error: {}]", error);
        if color {
            output.push_str(&text.red().to_string());
        } else {
            output.push_str(&text);
        }
    }
    output.push('\n');
}
