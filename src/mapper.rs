//! Tree mapping: run the classifier over a whole design subtree.
//!
//! Mapping visits every node exactly once in pre-order (parent before
//! children, children in document order) and records one decision per node.
//! It never mutates the tree and never fails; undecidable nodes are recorded
//! as containers.

use crate::catalog::{ComponentCatalog, Framework};
use crate::classify::{classify_node, Choice};
use crate::design::DesignNode;
use serde::Serialize;
use std::collections::HashMap;

/// One classification decision, keyed to its node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMapping {
    pub node_id: String,
    pub node_name: String,
    /// Catalog component name, or `null` for a plain container.
    pub component: Choice,
    pub confidence: f32,
}

/// Classify every node of the subtree rooted at `root`, in pre-order.
pub fn map_tree(
    root: &DesignNode,
    catalog: &ComponentCatalog,
    framework: Framework,
) -> Vec<NodeMapping> {
    let mut out = Vec::with_capacity(root.subtree_len());
    visit(root, catalog, framework, &mut out);
    out
}

fn visit(
    node: &DesignNode,
    catalog: &ComponentCatalog,
    framework: Framework,
    out: &mut Vec<NodeMapping>,
) {
    let classified = classify_node(node, catalog, framework);
    out.push(NodeMapping {
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        component: classified.choice,
        confidence: classified.confidence,
    });
    for child in &node.children {
        visit(child, catalog, framework, out);
    }
}

/// Id-keyed view over a mapping list, for O(1) lookups during emission.
pub struct MappingIndex<'a> {
    by_id: HashMap<&'a str, &'a NodeMapping>,
}

impl<'a> MappingIndex<'a> {
    pub fn build(mappings: &'a [NodeMapping]) -> Self {
        Self {
            by_id: mappings.iter().map(|m| (m.node_id.as_str(), m)).collect(),
        }
    }

    /// The decision for a node. Nodes absent from the mapping list (never the
    /// case for trees mapped by [`map_tree`]) read as containers.
    pub fn choice_for(&self, node_id: &str) -> &Choice {
        self.by_id
            .get(node_id)
            .map(|m| &m.component)
            .unwrap_or(&Choice::Container)
    }
}
