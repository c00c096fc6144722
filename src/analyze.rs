//! Diagnostic tree summary, independent of full conversion.
//!
//! Counts node kinds and proposes name-based component mappings using the
//! same keyword tables the classifier applies, so the suggestions predict
//! what a conversion would do without running one.

use crate::catalog::{ComponentCatalog, Framework};
use crate::classify::keyword_suggestion;
use crate::design::{DesignNode, NodeType};
use serde::Serialize;

/// Summary statistics for one design subtree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeAnalysis {
    pub total_nodes: usize,
    /// COMPONENT and INSTANCE nodes.
    pub component_count: usize,
    pub frame_count: usize,
    pub text_count: usize,
    pub available_component_names: Vec<String>,
    pub suggested_mappings: Vec<SuggestedMapping>,
}

/// One keyword-table hit found during analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedMapping {
    pub node_id: String,
    pub node_name: String,
    pub component: String,
}

/// Walk the tree once, in pre-order, and summarize it.
pub fn analyze_tree(root: &DesignNode, catalog: &ComponentCatalog) -> TreeAnalysis {
    let mut analysis = TreeAnalysis {
        total_nodes: 0,
        component_count: 0,
        frame_count: 0,
        text_count: 0,
        available_component_names: catalog
            .components(Framework::React)
            .iter()
            .map(|c| c.name.clone())
            .collect(),
        suggested_mappings: Vec::new(),
    };
    visit(root, &mut analysis);
    analysis
}

fn visit(node: &DesignNode, analysis: &mut TreeAnalysis) {
    analysis.total_nodes += 1;
    match node.node_type {
        NodeType::Component | NodeType::Instance => analysis.component_count += 1,
        NodeType::Frame => analysis.frame_count += 1,
        NodeType::Text => analysis.text_count += 1,
        _ => {}
    }
    if let Some(component) = keyword_suggestion(&node.name) {
        analysis.suggested_mappings.push(SuggestedMapping {
            node_id: node.id.clone(),
            node_name: node.name.clone(),
            component: component.to_string(),
        });
    }
    for child in &node.children {
        visit(child, analysis);
    }
}
