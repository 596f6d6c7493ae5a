//! Fluent builder over the graph mutation operations.

use crate::error::Result;
use crate::graph::{ConnectionRule, Graph, Node, NodeTypeSchema};

/// Chainable facade over [`Graph`]'s mutation operations.
///
/// Each call applies one operation and returns a new builder wrapping the
/// resulting graph, so a chain aborts at the first violation with no
/// partial application; earlier builder values (and the graphs they wrap)
/// are unaffected.
///
/// ```
/// use lore_core::builder::GraphBuilder;
/// use lore_core::graph::{ConnectionRule, Node, NodeTypeSchema};
///
/// let graph = GraphBuilder::new()
///     .add_node_type(NodeTypeSchema::new("world").with_field("name", "text"))?
///     .add_node_type(NodeTypeSchema::new("book").with_field("name", "text"))?
///     .add_connection_type(ConnectionRule::new("world", "book"))?
///     .add_node(Node::with_id("0", "world", serde_json::json!({"name": "asdf"})))?
///     .add_node(Node::with_id("1", "book", serde_json::json!({"name": "book1"})))?
///     .add_connection("0", "1")?
///     .build();
///
/// assert_eq!(graph.children("0"), ["1"]);
/// # Ok::<(), lore_core::error::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Start from an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Resume from an existing graph value.
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Extract the current graph.
    pub fn build(self) -> Graph {
        self.graph
    }

    pub fn add_node_type(self, schema: NodeTypeSchema) -> Result<Self> {
        Ok(Self {
            graph: self.graph.add_node_type(schema)?,
        })
    }

    pub fn update_node_type(self, schema: NodeTypeSchema) -> Result<Self> {
        Ok(Self {
            graph: self.graph.update_node_type(schema)?,
        })
    }

    pub fn remove_node_type(self, type_name: &str) -> Result<Self> {
        Ok(Self {
            graph: self.graph.remove_node_type(type_name)?,
        })
    }

    pub fn add_connection_type(self, rule: ConnectionRule) -> Result<Self> {
        Ok(Self {
            graph: self.graph.add_connection_type(rule)?,
        })
    }

    pub fn remove_connection_type(self, rule: &ConnectionRule) -> Self {
        Self {
            graph: self.graph.remove_connection_type(rule),
        }
    }

    pub fn add_node(self, node: Node) -> Result<Self> {
        Ok(Self {
            graph: self.graph.add_node(node)?,
        })
    }

    pub fn remove_node(self, id: &str) -> Self {
        Self {
            graph: self.graph.remove_node(id),
        }
    }

    pub fn add_connection(self, from_id: &str, to_id: &str) -> Result<Self> {
        Ok(Self {
            graph: self.graph.add_connection(from_id, to_id)?,
        })
    }

    pub fn remove_connection(self, from_id: &str, to_id: &str) -> Result<Self> {
        Ok(Self {
            graph: self.graph.remove_connection(from_id, to_id)?,
        })
    }
}
