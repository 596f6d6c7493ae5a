//! Render the visible window as an indented tree.

use crate::viewer::GraphViewer;
use lore_core::graph::Node;
use std::collections::HashSet;

/// Format the visible window beneath `root_id` as an indented tree.
///
/// The root prints only if it is visible; each level lists the visible
/// children with box-drawing connectors. Nodes outside the visible set are
/// omitted, so the output is exactly what the viewer exposes. Already
/// printed nodes are skipped to keep cyclic adjacency from recursing.
pub fn format_tree(viewer: &GraphViewer<'_>, root_id: &str) -> String {
    let mut output = String::new();
    let Some(root) = viewer.visible_node_by_id(root_id) else {
        return output;
    };

    output.push_str(&format!("{} [{}]\n", root.id, root.type_name));
    let mut visited = HashSet::new();
    visited.insert(root.id.clone());
    render_children(viewer, &root.id, 1, &mut visited, &mut output);
    output
}

fn render_children(
    viewer: &GraphViewer<'_>,
    id: &str,
    indent: usize,
    visited: &mut HashSet<String>,
    output: &mut String,
) {
    let children: Vec<&Node> = viewer
        .children(id)
        .into_iter()
        .filter(|c| !visited.contains(&c.id))
        .collect();

    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        if !visited.insert(child.id.clone()) {
            continue;
        }
        let prefix = "  ".repeat(indent - 1);
        let connector = if i == count - 1 { "└──" } else { "├──" };
        output.push_str(&format!(
            "{}{} {} [{}]\n",
            prefix, connector, child.id, child.type_name
        ));
        render_children(viewer, &child.id, indent + 1, visited, output);
    }
}
