//! Module definition.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Loaded schema module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// Module DESCRIPTION text.
    #[serde(default)]
    pub description: String,
    /// Names of imported modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    /// Nodes in definition order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Node lookup map (built after loading).
    #[serde(skip)]
    node_map: HashMap<String, usize>,
}

impl Module {
    /// Creates a new empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            imports: Vec::new(),
            nodes: Vec::new(),
            node_map: HashMap::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds an import.
    #[must_use]
    pub fn with_import(mut self, module: impl Into<String>) -> Self {
        self.imports.push(module.into());
        self
    }

    /// Adds a node and returns the module.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.add_node(node);
        self
    }

    /// Adds a node.
    pub fn add_node(&mut self, node: Node) {
        let index = self.nodes.len();
        self.node_map.insert(node.name.clone(), index);
        self.nodes.push(node);
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_map.get(name).map(|&idx| &self.nodes[idx])
    }

    /// Returns the nodes in definition order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Builds the node lookup map from the nodes vector.
    pub fn build_node_map(&mut self) {
        self.node_map.clear();
        for (idx, node) in self.nodes.iter().enumerate() {
            self.node_map.insert(node.name.clone(), idx);
        }
    }
}
