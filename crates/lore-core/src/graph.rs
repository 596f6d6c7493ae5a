//! Graph data model and schema-validated mutation operations.
//!
//! A [`Graph`] is an immutable value: every mutation validates fully, then
//! returns a fresh graph, leaving the input untouched. The adjacency index
//! is denormalized and must be repaired at each structural mutation site.

use crate::error::{GraphError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A declared field on a node type.
///
/// Advisory only: node `data` is never validated against it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A named node type and the shape nodes of that type are expected to carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeSchema {
    #[serde(rename = "type")]
    pub type_name: String,
    pub fields: Vec<FieldSchema>,
}

impl NodeTypeSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a declared field.
    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldSchema {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }
}

/// A permitted ordered pairing of node types.
///
/// Directional: `(A, B)` does not permit an edge from a `B` node to an `A` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRule {
    pub from: String,
    pub to: String,
}

impl ConnectionRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A node: unique id, declared type, free-form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub data: Value,
}

impl Node {
    /// Create a node with a generated short base-36 id.
    pub fn new(type_name: impl Into<String>, data: Value) -> Self {
        Self {
            id: crate::id::generate(),
            type_name: type_name.into(),
            data,
        }
    }

    /// Create a node with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, type_name: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            data,
        }
    }
}

/// Counts derived on demand from the current graph value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_types: usize,
    pub connection_rules: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Read-only audit of references left dangling by non-cascading removals.
///
/// `remove_node_type` deliberately does not cascade, so nodes and rules can
/// outlive the type they reference. The audit reports them; it never repairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Nodes whose declared type is no longer registered.
    pub untyped_nodes: Vec<String>,
    /// Rules referencing a type that is no longer registered.
    pub stale_rules: Vec<ConnectionRule>,
    /// Adjacency entries whose source or target id no longer resolves.
    pub dangling_edges: Vec<(String, String)>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.untyped_nodes.is_empty()
            && self.stale_rules.is_empty()
            && self.dangling_edges.is_empty()
    }
}

/// The complete typed, directed, heterogeneous graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Declared node types, in declaration order, unique by `type_name`.
    pub node_types: Vec<NodeTypeSchema>,
    /// Permitted type-to-type pairings, in declaration order.
    pub connection_rules: Vec<ConnectionRule>,
    /// Nodes in insertion order, unique by `id`.
    pub nodes: Vec<Node>,
    /// Derived edge index: node id -> child ids in insertion order.
    /// No duplicate targets per source.
    pub adjacency: BTreeMap<String, Vec<String>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            node_types: Vec::new(),
            connection_rules: Vec::new(),
            nodes: Vec::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Clone the current value as the basis for the next one.
    fn begin(&self) -> Graph {
        let mut next = self.clone();
        next.updated_at = Utc::now();
        next
    }

    // ─────────────────────────────────────────────────────────────────────
    // Node-type registry
    // ─────────────────────────────────────────────────────────────────────

    /// Register a new node type.
    pub fn add_node_type(&self, schema: NodeTypeSchema) -> Result<Graph> {
        if self.node_type(&schema.type_name).is_some() {
            return Err(GraphError::DuplicateType(schema.type_name));
        }
        let mut next = self.begin();
        next.node_types.push(schema);
        Ok(next)
    }

    /// Replace an existing node type in place, preserving its position.
    pub fn update_node_type(&self, schema: NodeTypeSchema) -> Result<Graph> {
        let Some(pos) = self
            .node_types
            .iter()
            .position(|t| t.type_name == schema.type_name)
        else {
            return Err(GraphError::UnknownType(schema.type_name));
        };
        let mut next = self.begin();
        next.node_types[pos] = schema;
        Ok(next)
    }

    /// Remove a node type.
    ///
    /// Does not cascade: nodes of this type and rules naming it are left
    /// behind, dangling. See [`Graph::check_integrity`].
    pub fn remove_node_type(&self, type_name: &str) -> Result<Graph> {
        if self.node_type(type_name).is_none() {
            return Err(GraphError::UnknownType(type_name.to_string()));
        }
        let mut next = self.begin();
        next.node_types.retain(|t| t.type_name != type_name);
        Ok(next)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Connection-type registry
    // ─────────────────────────────────────────────────────────────────────

    /// Permit edges from `rule.from`-typed nodes to `rule.to`-typed nodes.
    ///
    /// Both endpoint types must already be declared.
    pub fn add_connection_type(&self, rule: ConnectionRule) -> Result<Graph> {
        for endpoint in [&rule.from, &rule.to] {
            if self.node_type(endpoint).is_none() {
                return Err(GraphError::UnknownType(endpoint.clone()));
            }
        }
        if self.has_rule(&rule.from, &rule.to) {
            return Err(GraphError::DuplicateRule {
                from: rule.from,
                to: rule.to,
            });
        }
        let mut next = self.begin();
        next.connection_rules.push(rule);
        Ok(next)
    }

    /// Remove the exact ordered pair. Removing an absent rule is a no-op.
    pub fn remove_connection_type(&self, rule: &ConnectionRule) -> Graph {
        let mut next = self.begin();
        next.connection_rules.retain(|r| r != rule);
        next
    }

    // ─────────────────────────────────────────────────────────────────────
    // Nodes and connections
    // ─────────────────────────────────────────────────────────────────────

    /// Insert a node. Its type must be declared and its id fresh.
    pub fn add_node(&self, node: Node) -> Result<Graph> {
        if self.node(&node.id).is_some() {
            return Err(GraphError::DuplicateId(node.id));
        }
        if self.node_type(&node.type_name).is_none() {
            return Err(GraphError::UnknownType(node.type_name));
        }
        let mut next = self.begin();
        next.nodes.push(node);
        Ok(next)
    }

    /// Remove a node and strip it from the adjacency index, both as a key
    /// and as a target in every other source's list. Order of the remaining
    /// entries is preserved. No-op if the id is absent.
    pub fn remove_node(&self, id: &str) -> Graph {
        let mut next = self.begin();
        next.nodes.retain(|n| n.id != id);
        next.adjacency.remove(id);
        for targets in next.adjacency.values_mut() {
            targets.retain(|t| t != id);
        }
        tracing::debug!("removed node {}", id);
        next
    }

    /// Establish an edge from `from_id` to `to_id`.
    ///
    /// Both ids must resolve to nodes, and a connection rule must permit the
    /// resolved `(from, to)` type pair. Adding an edge that already exists is
    /// a no-op: adjacency lists carry no duplicate targets.
    pub fn add_connection(&self, from_id: &str, to_id: &str) -> Result<Graph> {
        let from = self
            .node(from_id)
            .ok_or_else(|| GraphError::UnknownId(from_id.to_string()))?;
        let to = self
            .node(to_id)
            .ok_or_else(|| GraphError::UnknownId(to_id.to_string()))?;
        if !self.has_rule(&from.type_name, &to.type_name) {
            return Err(GraphError::InvalidConnectionType {
                from: from.type_name.clone(),
                to: to.type_name.clone(),
            });
        }
        let mut next = self.begin();
        let targets = next.adjacency.entry(from_id.to_string()).or_default();
        if !targets.iter().any(|t| t == to_id) {
            targets.push(to_id.to_string());
        }
        tracing::debug!("connected {} -> {}", from_id, to_id);
        Ok(next)
    }

    /// Remove the edge from `from_id` to `to_id` if present.
    ///
    /// Both ids must resolve to nodes; an absent edge is a no-op.
    pub fn remove_connection(&self, from_id: &str, to_id: &str) -> Result<Graph> {
        for id in [from_id, to_id] {
            if self.node(id).is_none() {
                return Err(GraphError::UnknownId(id.to_string()));
            }
        }
        let mut next = self.begin();
        if let Some(targets) = next.adjacency.get_mut(from_id) {
            targets.retain(|t| t != to_id);
        }
        Ok(next)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a node-type schema by name.
    pub fn node_type(&self, type_name: &str) -> Option<&NodeTypeSchema> {
        self.node_types.iter().find(|t| t.type_name == type_name)
    }

    /// Outgoing edge targets for `id`, in insertion order.
    pub fn children(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Whether a rule permits edges from `from`-typed to `to`-typed nodes.
    pub fn has_rule(&self, from: &str, to: &str) -> bool {
        self.connection_rules
            .iter()
            .any(|r| r.from == from && r.to == to)
    }

    /// Compute counts from the current state.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_types: self.node_types.len(),
            connection_rules: self.connection_rules.len(),
            nodes: self.nodes.len(),
            edges: self.adjacency.values().map(Vec::len).sum(),
        }
    }

    /// Audit the graph for references left dangling by non-cascading
    /// removals. Reports only; never mutates or repairs.
    pub fn check_integrity(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        for node in &self.nodes {
            if self.node_type(&node.type_name).is_none() {
                report.untyped_nodes.push(node.id.clone());
            }
        }
        for rule in &self.connection_rules {
            if self.node_type(&rule.from).is_none() || self.node_type(&rule.to).is_none() {
                report.stale_rules.push(rule.clone());
            }
        }
        for (source, targets) in &self.adjacency {
            for target in targets {
                if self.node(source).is_none() || self.node(target).is_none() {
                    report.dangling_edges.push((source.clone(), target.clone()));
                }
            }
        }
        report
    }
}
