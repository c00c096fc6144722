//! Design tree input types, parsed from Figma node JSON.
//!
//! The tree arrives already fetched and parsed; this module only models the
//! node attributes the mapper and emitter consume, and validates the minimal
//! shape the pipeline depends on (non-empty ids/names, unique ids).

use crate::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Node type tag from the design tool. Unknown tags degrade to [`NodeType::Other`]
/// so a tree with unrecognized node kinds still converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Text,
    Frame,
    Group,
    Component,
    Instance,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    BooleanOperation,
    #[serde(other)]
    Other,
}

impl NodeType {
    /// Frame-like nodes share the structural classification sub-rules.
    pub fn is_frame_like(&self) -> bool {
        matches!(
            self,
            NodeType::Frame | NodeType::Group | NodeType::Component | NodeType::Instance
        )
    }
}

/// Auto-layout direction declared on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

/// Bounding box in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// RGBA color in normalized 0.0-1.0 range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Color {
    /// Render as a CSS `rgba(..)` value, translating 0-1 channels to 0-255.
    pub fn to_css_rgba(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

/// Paint entry (fill or stroke).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<Color>,
    pub opacity: Option<f32>,
}

impl Paint {
    /// The first usable color of a solid paint, if any.
    pub fn solid_color(&self) -> Option<Color> {
        if self.paint_type == "SOLID" {
            self.color
        } else {
            None
        }
    }
}

/// One node of the externally supplied design tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub characters: Option<String>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub corner_radius: Option<f32>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f32>,
    pub layout_mode: Option<LayoutMode>,
}

fn default_visible() -> bool {
    true
}

impl DesignNode {
    /// Non-empty trimmed text content, if present.
    pub fn text(&self) -> Option<&str> {
        self.characters
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DesignNode::subtree_len).sum::<usize>()
    }
}

/// Validate a tree before mapping: every node must carry a non-empty id and
/// name, and ids must be unique within the tree. Fails fast with the first
/// offending node rather than partially emitting.
pub fn validate_tree(root: &DesignNode) -> Result<()> {
    let mut seen = HashSet::new();
    validate_node(root, &mut seen)
}

fn validate_node<'a>(node: &'a DesignNode, seen: &mut HashSet<&'a str>) -> Result<()> {
    if node.id.trim().is_empty() {
        return Err(PaletteError::input(format!(
            "node named {:?} has an empty id",
            node.name
        )));
    }
    if node.name.trim().is_empty() {
        return Err(PaletteError::input(format!(
            "node '{}' has an empty name",
            node.id
        )));
    }
    if !seen.insert(node.id.as_str()) {
        return Err(PaletteError::input(format!(
            "duplicate node id '{}' in tree",
            node.id
        )));
    }
    for child in &node.children {
        validate_node(child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn node(id: &str, name: &str, node_type: NodeType) -> DesignNode {
    DesignNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type,
        visible: true,
        characters: None,
        children: Vec::new(),
        absolute_bounding_box: None,
        corner_radius: None,
        fills: Vec::new(),
        strokes: Vec::new(),
        stroke_weight: None,
        layout_mode: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_node_json() {
        let json = r#"{
            "id": "1:2",
            "name": "Submit Button",
            "type": "RECTANGLE",
            "characters": "Submit",
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 120, "height": 40 },
            "cornerRadius": 8,
            "fills": [{ "type": "SOLID", "color": { "r": 0.2, "g": 0.4, "b": 0.8, "a": 1.0 } }]
        }"#;

        let node: DesignNode = serde_json::from_str(json).expect("parse node");
        assert_eq!(node.node_type, NodeType::Rectangle);
        assert!(node.visible);
        assert_eq!(node.text(), Some("Submit"));
        assert_eq!(node.absolute_bounding_box.unwrap().height, 40.0);
        assert_eq!(
            node.fills[0].solid_color().unwrap().to_css_rgba(),
            "rgba(51, 102, 204, 1)"
        );
    }

    #[test]
    fn unknown_node_type_degrades_to_other() {
        let json = r#"{ "id": "1", "name": "Star", "type": "STAR_POLYGON" }"#;
        let node: DesignNode = serde_json::from_str(json).expect("parse node");
        assert_eq!(node.node_type, NodeType::Other);
    }

    #[test]
    fn visible_defaults_to_true_and_respects_false() {
        let json = r#"{ "id": "1", "name": "Hidden", "type": "FRAME", "visible": false }"#;
        let node: DesignNode = serde_json::from_str(json).expect("parse node");
        assert!(!node.visible);
    }

    #[test]
    fn text_trims_and_rejects_whitespace_only() {
        let mut n = node("1", "Label", NodeType::Text);
        n.characters = Some("  \n ".to_string());
        assert_eq!(n.text(), None);
        n.characters = Some("  hi ".to_string());
        assert_eq!(n.text(), Some("hi"));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut root = node("1", "Root", NodeType::Frame);
        root.children.push(node("2", "A", NodeType::Text));
        root.children.push(node("2", "B", NodeType::Text));

        let err = validate_tree(&root).unwrap_err();
        assert!(format!("{err}").contains("duplicate node id '2'"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut root = node("1", "Root", NodeType::Frame);
        root.children.push(node("2", "  ", NodeType::Text));

        let err = validate_tree(&root).unwrap_err();
        assert!(format!("{err}").contains("empty name"));
    }

    #[test]
    fn subtree_len_counts_all_nodes() {
        let mut root = node("1", "Root", NodeType::Frame);
        let mut inner = node("2", "Inner", NodeType::Frame);
        inner.children.push(node("3", "Leaf", NodeType::Text));
        root.children.push(inner);
        assert_eq!(root.subtree_len(), 3);
    }
}
