//! Per-node classification: which catalog component does a design node
//! represent, if any.
//!
//! Classification looks at one node in isolation (name, type, visibility,
//! immediate child shape) and never fails: anything unrecognized degrades to
//! [`Choice::Container`], which the emitter renders as plain structural
//! markup or elides.

use crate::catalog::{ComponentCatalog, Framework};
use crate::design::{DesignNode, NodeType};

/// The neutral fallback component assigned to invisible nodes. The emitter
/// elides invisible nodes anyway; the mapping only exists for diagnostics.
pub const NEUTRAL_COMPONENT: &str = "Card";

/// Confidence tiers attached to classification decisions. Informational
/// only; emission never branches on them except through the invisible flag.
pub const CONFIDENCE_INVISIBLE: f32 = 0.1;
pub const CONFIDENCE_NAME_MATCH: f32 = 0.8;
pub const CONFIDENCE_KEYWORD: f32 = 0.6;
pub const CONFIDENCE_TYPE_FALLBACK: f32 = 0.4;
pub const CONFIDENCE_CONTAINER: f32 = 0.3;

/// Ordered keyword table mapping layer-name fragments to catalog components.
/// First matching row wins. Shared with the tree analyzer.
pub(crate) const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["btn", "button", "click", "submit", "action"], "Button"),
    (&["input", "field", "search", "email"], "Input"),
    (&["card", "panel", "container", "box", "wrapper"], "Card"),
    (&["modal", "dialog", "popup", "overlay"], "Modal"),
    (&["table", "grid", "list", "data"], "Table"),
];

const BUTTON_LABEL_KEYWORDS: &[&str] = &["button", "btn", "click", "submit"];
const LINK_KEYWORDS: &[&str] = &["link", "href", "url", "anchor"];
const TAB_KEYWORDS: &[&str] = &["tab"];
const ACCORDION_KEYWORDS: &[&str] = &["accordion", "expand", "collapse"];

/// What a node maps to: a named catalog component, or a plain layout
/// container with no catalog equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Component(String),
    Container,
}

impl serde::Serialize for Choice {
    /// Serialized as the component name, or `null` for a container.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::Component(name) => serializer.serialize_str(name),
            Choice::Container => serializer.serialize_unit(),
        }
    }
}

impl Choice {
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Choice::Component(name) => Some(name),
            Choice::Container => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Choice::Container)
    }
}

/// A classification decision for one node.
#[derive(Debug, Clone)]
pub struct Classified {
    pub choice: Choice,
    pub confidence: f32,
}

/// Return the first keyword-table component suggested by a layer name, if any.
pub(crate) fn keyword_suggestion(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    for (keywords, component) in KEYWORD_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some(component);
        }
    }
    None
}

/// Classify one design node against the catalog for the given framework.
///
/// Strict priority order: invisible → neutral default; exact/fuzzy name
/// match; keyword table; type-based fallback with structural sub-rules.
pub fn classify_node(
    node: &DesignNode,
    catalog: &ComponentCatalog,
    framework: Framework,
) -> Classified {
    if !node.visible {
        return component_or_container(catalog, framework, NEUTRAL_COMPONENT, CONFIDENCE_INVISIBLE);
    }

    if let Some(component) = catalog.fuzzy_match(&node.name, framework) {
        return Classified {
            choice: Choice::Component(component.name.clone()),
            confidence: CONFIDENCE_NAME_MATCH,
        };
    }

    if let Some(name) = keyword_suggestion(&node.name) {
        if catalog.get_by_name(name, framework).is_some() {
            return Classified {
                choice: Choice::Component(name.to_string()),
                confidence: CONFIDENCE_KEYWORD,
            };
        }
    }

    let lower = node.name.to_lowercase();
    match node.node_type {
        NodeType::Text => {
            let name = if contains_any(&lower, BUTTON_LABEL_KEYWORDS) {
                "Button"
            } else if contains_any(&lower, LINK_KEYWORDS) {
                "TextLink"
            } else {
                "Text"
            };
            component_or_container(catalog, framework, name, CONFIDENCE_TYPE_FALLBACK)
        }
        NodeType::Rectangle => {
            let by_name = if contains_any(&lower, &["button", "btn"]) {
                Some("Button")
            } else if contains_any(&lower, &["input", "field"]) {
                Some("Input")
            } else if lower.contains("badge") {
                Some("Badge")
            } else if lower.contains("tag") {
                Some("Tag")
            } else if lower.contains("chip") {
                Some("Chip")
            } else {
                None
            };
            match by_name.or_else(|| structural_match(node)) {
                Some(name) => {
                    component_or_container(catalog, framework, name, CONFIDENCE_TYPE_FALLBACK)
                }
                None => container(),
            }
        }
        t if t.is_frame_like() => match structural_match(node) {
            Some(name) => component_or_container(catalog, framework, name, CONFIDENCE_TYPE_FALLBACK),
            None => container(),
        },
        _ => container(),
    }
}

/// Structural sub-rules for frame-like nodes whose name matched nothing:
/// decide from the immediate child shape.
fn structural_match(node: &DesignNode) -> Option<&'static str> {
    let children = &node.children;
    if children.len() == 1 && children[0].node_type == NodeType::Text {
        return Some("Text");
    }
    if children.len() == 2 && children.iter().all(|c| c.node_type == NodeType::Text) {
        return Some("LabeledText");
    }
    if children
        .iter()
        .any(|c| contains_any(&c.name.to_lowercase(), TAB_KEYWORDS))
    {
        return Some("Tab");
    }
    if children
        .iter()
        .any(|c| contains_any(&c.name.to_lowercase(), ACCORDION_KEYWORDS))
    {
        return Some("Accordion");
    }
    // Anything else, including auto-layout frames, is pure layout.
    None
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn container() -> Classified {
    Classified {
        choice: Choice::Container,
        confidence: CONFIDENCE_CONTAINER,
    }
}

fn component_or_container(
    catalog: &ComponentCatalog,
    framework: Framework,
    name: &str,
    confidence: f32,
) -> Classified {
    match catalog.get_by_name(name, framework) {
        Some(component) => Classified {
            choice: Choice::Component(component.name.clone()),
            confidence,
        },
        None => container(),
    }
}
