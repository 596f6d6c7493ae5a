//! The progressive-reveal viewer: a visibility window over a graph.

use crate::state::ViewerState;
use lore_core::graph::{ConnectionRule, Graph, Node, NodeTypeSchema};
use std::collections::BTreeSet;

/// A read-only visibility window over a [`Graph`].
///
/// The visible set is recomputed from the revealed roots on every
/// construction: each revealed id contributes itself plus its immediate
/// adjacency children. One hop, not a transitive closure. The viewer never
/// mutates the graph; reveal/hide produce a new viewer over the same borrow.
#[derive(Debug, Clone)]
pub struct GraphViewer<'g> {
    graph: &'g Graph,
    state: ViewerState,
    visible: BTreeSet<String>,
}

impl<'g> GraphViewer<'g> {
    /// Open a viewer with nothing revealed.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_state(graph, ViewerState::new())
    }

    /// Open a viewer from a previously captured state.
    ///
    /// Revealed ids not present in the graph are accepted silently: they
    /// contribute only themselves to the visible set and match no node.
    pub fn with_state(graph: &'g Graph, state: ViewerState) -> Self {
        let mut visible = state.revealed.clone();
        for id in &state.revealed {
            visible.extend(graph.children(id).iter().cloned());
        }
        tracing::debug!(
            "visible set recomputed: {} ids from {} revealed",
            visible.len(),
            state.revealed.len()
        );
        Self {
            graph,
            state,
            visible,
        }
    }

    /// A new viewer with `ids` added to the revealed set.
    pub fn reveal_nodes<I, S>(&self, ids: I) -> GraphViewer<'g>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_state(self.graph, self.state.reveal(ids))
    }

    /// A new viewer with `ids` removed from the revealed set.
    pub fn hide_nodes<I, S>(&self, ids: I) -> GraphViewer<'g>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_state(self.graph, self.state.hide(ids))
    }

    /// Snapshot of the declared node types.
    pub fn types(&self) -> Vec<NodeTypeSchema> {
        self.graph.node_types.clone()
    }

    /// Snapshot of the declared connection rules.
    pub fn connection_types(&self) -> Vec<ConnectionRule> {
        self.graph.connection_rules.clone()
    }

    /// Children of `id` that are inside the visible set, in adjacency order.
    pub fn children(&self, id: &str) -> Vec<&'g Node> {
        self.graph
            .children(id)
            .iter()
            .filter(|child| self.visible.contains(child.as_str()))
            .filter_map(|child| self.graph.node(child.as_str()))
            .collect()
    }

    /// [`GraphViewer::children`] filtered by node type.
    pub fn children_by_type(&self, id: &str, type_name: &str) -> Vec<&'g Node> {
        self.children(id)
            .into_iter()
            .filter(|n| n.type_name == type_name)
            .collect()
    }

    /// All nodes in the underlying graph, unfiltered by visibility.
    pub fn nodes(&self) -> Vec<&'g Node> {
        self.graph.nodes.iter().collect()
    }

    /// Nodes whose id is in the visible set, in graph insertion order.
    pub fn visible_nodes(&self) -> Vec<&'g Node> {
        self.graph
            .nodes
            .iter()
            .filter(|n| self.visible.contains(&n.id))
            .collect()
    }

    /// Visible nodes of the given type.
    pub fn by_type(&self, type_name: &str) -> Vec<&'g Node> {
        self.visible_nodes()
            .into_iter()
            .filter(|n| n.type_name == type_name)
            .collect()
    }

    /// Look up a node across the whole graph, visible or not.
    pub fn node_by_id(&self, id: &str) -> Option<&'g Node> {
        self.graph.node(id)
    }

    /// Look up a node only if it is visible.
    pub fn visible_node_by_id(&self, id: &str) -> Option<&'g Node> {
        if self.visible.contains(id) {
            self.graph.node(id)
        } else {
            None
        }
    }

    /// Whether `id` is in the visible set.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// The underlying graph borrow.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The revealed-roots state, suitable for snapshotting and later
    /// reconstructing an equivalent viewer via [`GraphViewer::with_state`].
    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}
