//! Markup emission: render a classified design subtree as framework markup.
//!
//! The emitter walks the tree depth-first and applies, per node and in
//! order: invisible elision, same-type parent/child collapse, container
//! elision, empty-leaf elision, label-bearing collapse, and finally normal
//! tag emission with synthesized props. Each rule either produces text or
//! nothing; the walk never fails for a valid tree.
//!
//! Imports are accumulated through return values: every recursive call owns
//! its fragment's import set and the caller merges, so no collection is
//! shared across the walk.

mod builder;

pub use builder::{CodeBuilder, INDENT};

use crate::catalog::Framework;
use crate::classify::Choice;
use crate::design::{DesignNode, NodeType};
use crate::mapper::MappingIndex;
use std::collections::BTreeSet;

/// Interactive/display components whose empty leaves are dropped.
const EMPTY_LEAF_COMPONENTS: &[&str] =
    &["Button", "Chip", "Badge", "Tag", "Icon", "Text", "TextLink"];

/// Compact components that absorb wrapped leaf text as their own content.
const LABEL_BEARING_COMPONENTS: &[&str] = &["Chip", "Badge", "Tag"];

/// A rendered subtree: markup lines (relative indentation, the caller
/// re-indents on nesting) plus the component names the markup references.
#[derive(Debug, Default, Clone)]
pub struct Fragment {
    pub lines: Vec<String>,
    pub imports: BTreeSet<String>,
}

impl Fragment {
    fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn markup(&self) -> String {
        self.lines.join("\n")
    }

    fn merge_imports(&mut self, other: &Fragment) {
        self.imports.extend(other.imports.iter().cloned());
    }

    /// Append another fragment's lines one level deeper.
    fn nest(&mut self, child: &Fragment) {
        for line in &child.lines {
            self.lines.push(format!("{INDENT}{line}"));
        }
        self.merge_imports(child);
    }
}

/// Render the subtree rooted at `root` using the supplied mapping decisions.
pub fn emit_markup(
    root: &DesignNode,
    index: &MappingIndex<'_>,
    framework: Framework,
) -> Fragment {
    let emitter = Emitter { framework, index };
    emitter.emit_node(root, None)
}

struct Emitter<'a> {
    framework: Framework,
    index: &'a MappingIndex<'a>,
}

impl Emitter<'_> {
    fn emit_node(&self, node: &DesignNode, parent: Option<&str>) -> Fragment {
        if !node.visible {
            return Fragment::empty();
        }
        match self.index.choice_for(&node.id) {
            Choice::Component(name) => self.emit_component(node, name.clone(), parent),
            Choice::Container => self.emit_container(node, parent),
        }
    }

    fn emit_component(&self, node: &DesignNode, name: String, parent: Option<&str>) -> Fragment {
        // Same component as the immediate parent: drop this wrapper and let
        // the children (or the leaf text) stand in its place.
        if parent == Some(name.as_str()) {
            return self.emit_collapsed(node, parent);
        }

        let visible_children: Vec<&DesignNode> =
            node.children.iter().filter(|c| c.visible).collect();

        if EMPTY_LEAF_COMPONENTS.contains(&name.as_str())
            && visible_children.is_empty()
            && node.text().is_none()
        {
            return Fragment::empty();
        }

        let mut fragment = Fragment::empty();
        fragment.imports.insert(name.clone());

        let props = self.synthesize_props(node, &name, &visible_children);
        let attrs = render_props(&props);

        if let Some(label) = self.collapsed_label(&name, &visible_children) {
            fragment
                .lines
                .push(format!("<{name}{attrs}>{}</{name}>", escape_text(&label)));
            return fragment;
        }

        // Input and LabeledText absorb their data into props; Icon has no
        // meaningful children. All three self-close.
        if matches!(name.as_str(), "Input" | "LabeledText" | "Icon") {
            fragment.lines.push(format!("<{name}{attrs} />"));
            return fragment;
        }

        let mut body = Fragment::empty();
        for child in &visible_children {
            let rendered = self.emit_node(child, Some(&name));
            body.lines.extend(rendered.lines.iter().cloned());
            body.merge_imports(&rendered);
        }

        if body.is_empty() {
            match node.text() {
                Some(text) => fragment
                    .lines
                    .push(format!("<{name}{attrs}>{}</{name}>", escape_text(text))),
                None => fragment.lines.push(format!("<{name}{attrs} />")),
            }
            fragment.merge_imports(&body);
            return fragment;
        }

        fragment.lines.push(format!("<{name}{attrs}>"));
        fragment.nest(&body);
        fragment.lines.push(format!("</{name}>"));
        fragment
    }

    /// Rule 2: the node's component equals its parent's. Emit the children
    /// directly, with the grandparent's component carried through as the
    /// parent context.
    fn emit_collapsed(&self, node: &DesignNode, parent: Option<&str>) -> Fragment {
        let visible_children: Vec<&DesignNode> =
            node.children.iter().filter(|c| c.visible).collect();
        if visible_children.is_empty() {
            return match node.text() {
                Some(text) => Fragment {
                    lines: vec![escape_text(text)],
                    imports: BTreeSet::new(),
                },
                None => Fragment::empty(),
            };
        }
        let mut out = Fragment::empty();
        for child in visible_children {
            let rendered = self.emit_node(child, parent);
            out.lines.extend(rendered.lines.iter().cloned());
            out.merge_imports(&rendered);
        }
        out
    }

    fn emit_container(&self, node: &DesignNode, parent: Option<&str>) -> Fragment {
        let visible_children: Vec<&DesignNode> =
            node.children.iter().filter(|c| c.visible).collect();

        if visible_children.is_empty() && node.text().is_none() {
            return Fragment::empty();
        }

        // Skip-through: a container wrapping exactly one mapped child adds
        // nothing; emit the child in its place.
        if visible_children.len() == 1 && node.text().is_none() {
            let child = visible_children[0];
            if !self.index.choice_for(&child.id).is_container() {
                return self.emit_node(child, parent);
            }
        }

        let style = wrapper_style_attr(node, self.framework);
        let mut body = Fragment::empty();
        for child in &visible_children {
            let rendered = self.emit_node(child, None);
            body.lines.extend(rendered.lines.iter().cloned());
            body.merge_imports(&rendered);
        }

        let mut fragment = Fragment::empty();
        if body.is_empty() {
            match node.text() {
                Some(text) => fragment
                    .lines
                    .push(format!("<div{style}>{}</div>", escape_text(text))),
                None => fragment.lines.push(format!("<div{style} />")),
            }
            fragment.merge_imports(&body);
            return fragment;
        }

        fragment.lines.push(format!("<div{style}>"));
        fragment.nest(&body);
        fragment.lines.push("</div>".to_string());
        fragment
    }

    /// Rule 5: Chip/Badge/Tag whose only children are Button- or Text-mapped
    /// text leaves take the leaf text as their own content.
    fn collapsed_label(&self, name: &str, children: &[&DesignNode]) -> Option<String> {
        if !LABEL_BEARING_COMPONENTS.contains(&name) || children.is_empty() {
            return None;
        }
        let mut parts = Vec::with_capacity(children.len());
        for child in children {
            if !child.children.is_empty() {
                return None;
            }
            let wraps_label = matches!(
                self.index.choice_for(&child.id).component_name(),
                Some("Button") | Some("Text")
            );
            match (wraps_label, child.text()) {
                (true, Some(text)) => parts.push(text.to_string()),
                _ => return None,
            }
        }
        Some(parts.join(" "))
    }

    fn synthesize_props(
        &self,
        node: &DesignNode,
        component: &str,
        visible_children: &[&DesignNode],
    ) -> Vec<(String, PropValue)> {
        let mut props = Vec::new();
        match component {
            "Button" => {
                if let Some(size) = size_tier(node, 32.0, 48.0) {
                    props.push(("size".to_string(), PropValue::Str(size.to_string())));
                }
            }
            "Chip" | "Badge" | "Tag" => {
                if let Some(size) = size_tier(node, 24.0, 32.0) {
                    props.push(("size".to_string(), PropValue::Str(size.to_string())));
                }
            }
            "Input" => {
                if let Some(text) = node.text().or_else(|| first_child_text(visible_children)) {
                    props.push(("placeholder".to_string(), PropValue::Str(text.to_string())));
                }
            }
            "Modal" => {
                props.push(("isOpen".to_string(), PropValue::Flag));
            }
            "Card" => {
                let lower = node.name.to_lowercase();
                if lower.contains("title") || lower.contains("header") {
                    let title = node.text().unwrap_or(node.name.as_str());
                    props.push(("title".to_string(), PropValue::Str(title.to_string())));
                }
            }
            "Accordion" => {
                if let Some(title) = first_child_text(visible_children) {
                    props.push(("title".to_string(), PropValue::Str(title.to_string())));
                }
            }
            "LabeledText" => {
                let mut texts = visible_children
                    .iter()
                    .filter(|c| c.node_type == NodeType::Text)
                    .filter_map(|c| c.text());
                if let Some(label) = texts.next() {
                    props.push(("label".to_string(), PropValue::Str(label.to_string())));
                }
                if let Some(value) = texts.next() {
                    props.push(("value".to_string(), PropValue::Str(value.to_string())));
                }
            }
            "TextLink" => {
                props.push(("href".to_string(), PropValue::Str("#".to_string())));
            }
            "Icon" => {
                props.push((
                    "name".to_string(),
                    PropValue::Str(icon_slug(&node.name)),
                ));
            }
            _ => {}
        }
        props
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PropValue {
    Str(String),
    Flag,
}

fn render_props(props: &[(String, PropValue)]) -> String {
    let mut out = String::new();
    for (name, value) in props {
        match value {
            PropValue::Str(s) => {
                out.push_str(&format!(" {name}=\"{}\"", escape_attr(s)));
            }
            PropValue::Flag => out.push_str(&format!(" {name}")),
        }
    }
    out
}

/// Height-based size tier. Thresholds differ per component family.
fn size_tier(node: &DesignNode, small_max: f32, large_min: f32) -> Option<&'static str> {
    let height = node.absolute_bounding_box?.height;
    Some(if height < small_max {
        "small"
    } else if height > large_min {
        "large"
    } else {
        "medium"
    })
}

fn first_child_text<'a>(children: &[&'a DesignNode]) -> Option<&'a str> {
    children.iter().find_map(|c| c.text())
}

fn icon_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Geometry-derived inline styling for structural wrapper tags. React gets a
/// JSX style object, Vue a CSS string; both carry the same declarations.
fn wrapper_style_attr(node: &DesignNode, framework: Framework) -> String {
    let decls = wrapper_style_decls(node);
    if decls.is_empty() {
        return String::new();
    }
    match framework {
        Framework::React => {
            let entries: Vec<String> = decls
                .iter()
                .map(|(k, v)| format!("{}: '{}'", css_to_camel(k), v))
                .collect();
            format!(" style={{{{ {} }}}}", entries.join(", "))
        }
        Framework::Vue => {
            let entries: Vec<String> = decls
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect();
            format!(" style=\"{}\"", entries.join("; "))
        }
    }
}

fn wrapper_style_decls(node: &DesignNode) -> Vec<(&'static str, String)> {
    let mut decls = Vec::new();
    if let Some(bounds) = node.absolute_bounding_box {
        decls.push(("width", format_px(bounds.width)));
        decls.push(("height", format_px(bounds.height)));
    }
    if let Some(radius) = node.corner_radius {
        if radius > 0.0 {
            decls.push(("border-radius", format_px(radius)));
        }
    }
    if let Some(color) = node.fills.iter().find_map(|p| p.solid_color()) {
        decls.push(("background-color", color.to_css_rgba()));
    }
    if let Some(color) = node.strokes.iter().find_map(|p| p.solid_color()) {
        let weight = node.stroke_weight.unwrap_or(1.0);
        decls.push((
            "border",
            format!("{} solid {}", format_px(weight), color.to_css_rgba()),
        ));
    }
    decls
}

fn format_px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

fn css_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
