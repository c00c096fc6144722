//! Top-level conversion: design subtree in, component source text out.

use crate::catalog::{Category, ComponentCatalog, Framework};
use crate::design::{validate_tree, DesignNode};
use crate::emit::{emit_markup, CodeBuilder, Fragment};
use crate::mapper::{map_tree, MappingIndex, NodeMapping};
use crate::{PaletteError, Result};
use serde::Serialize;

/// Everything one conversion produced: the source text plus the mapping
/// decisions behind it, for diagnostics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub component_name: String,
    pub framework: Framework,
    pub source: String,
    pub markup: String,
    /// Catalog components referenced by the markup, sorted.
    pub imports: Vec<String>,
    pub mappings: Vec<NodeMapping>,
}

/// Convert a design subtree into a named component source file.
///
/// Fails only for an invalid tree or component name; classification and
/// emission degrade instead of failing.
pub fn convert_to_component(
    tree: &DesignNode,
    component_name: &str,
    framework: Framework,
    catalog: &ComponentCatalog,
) -> Result<Conversion> {
    validate_component_name(component_name)?;
    validate_tree(tree)?;

    let mappings = map_tree(tree, catalog, framework);
    let index = MappingIndex::build(&mappings);
    let fragment = emit_markup(tree, &index, framework);

    let source = match framework {
        Framework::React => react_source(component_name, &fragment, catalog),
        Framework::Vue => vue_source(component_name, &fragment, catalog),
    };

    Ok(Conversion {
        component_name: component_name.to_string(),
        framework,
        source,
        markup: fragment.markup(),
        imports: fragment.imports.iter().cloned().collect(),
        mappings,
    })
}

fn validate_component_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PaletteError::input("component name must not be empty"));
    }
    let mut chars = trimmed.chars();
    let first = chars.next().unwrap_or('_');
    if !first.is_ascii_alphabetic() {
        return Err(PaletteError::input(format!(
            "component name '{trimmed}' must start with a letter"
        )));
    }
    if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(PaletteError::input(format!(
            "component name '{trimmed}' contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

/// Import statements for every catalog component the markup references.
/// React uses named imports, Vue default imports, mirroring how the two
/// design-system packages publish their components.
fn import_lines(fragment: &Fragment, catalog: &ComponentCatalog, framework: Framework) -> Vec<String> {
    fragment
        .imports
        .iter()
        .filter_map(|name| catalog.get_by_name(name, framework))
        .map(|c| match framework {
            Framework::React => format!("import {{ {} }} from '{}';", c.name, c.import_path),
            Framework::Vue => format!("import {} from '{}';", c.name, c.import_path),
        })
        .collect()
}

fn react_source(name: &str, fragment: &Fragment, catalog: &ComponentCatalog) -> String {
    let mut b = CodeBuilder::new();
    b.line("import React from 'react';");
    for import in import_lines(fragment, catalog, Framework::React) {
        b.line(&import);
    }
    b.blank();
    b.line(&format!("interface {name}Props {{}}"));
    b.blank();
    b.line(&format!("const {name}: React.FC<{name}Props> = () => {{"));
    b.indent();
    if fragment.is_empty() {
        b.line("return null;");
    } else {
        b.line("return (");
        b.indent();
        b.lines(&fragment.lines);
        b.dedent();
        b.line(");");
    }
    b.dedent();
    b.line("};");
    b.blank();
    b.line(&format!("export default {name};"));
    b.finish()
}

fn vue_source(_name: &str, fragment: &Fragment, catalog: &ComponentCatalog) -> String {
    let mut b = CodeBuilder::new();
    b.line("<template>");
    b.indent();
    if fragment.is_empty() {
        b.line("<div />");
    } else {
        b.lines(&fragment.lines);
    }
    b.dedent();
    b.line("</template>");
    b.blank();
    b.line("<script setup lang=\"ts\">");
    for import in import_lines(fragment, catalog, Framework::Vue) {
        b.line(&import);
    }
    b.line("</script>");
    b.finish()
}

/// One entry of the read-only catalog listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    pub description: String,
    pub category: Category,
}

/// Read-only catalog introspection.
pub fn list_catalog(catalog: &ComponentCatalog, framework: Framework) -> Vec<ComponentSummary> {
    catalog
        .components(framework)
        .iter()
        .map(|c| ComponentSummary {
            name: c.name.clone(),
            description: c.description.clone(),
            category: c.category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{node, NodeType};

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::new().expect("catalog")
    }

    fn login_tree() -> DesignNode {
        let mut root = node("1", "Login Frame", NodeType::Frame);
        let mut input = node("2", "email input", NodeType::Rectangle);
        input.characters = Some("Email".to_string());
        root.children.push(input);
        let mut button = node("3", "Submit Button", NodeType::Rectangle);
        button.characters = Some("Sign in".to_string());
        root.children.push(button);
        root
    }

    #[test]
    fn react_conversion_produces_importing_function_component() {
        let conversion =
            convert_to_component(&login_tree(), "LoginForm", Framework::React, &catalog())
                .expect("convert");

        assert!(conversion.source.contains("import React from 'react';"));
        assert!(conversion.source.contains(
            "import { Button } from '@dealicious/design-system-react/src/components/ssm-button';"
        ));
        assert!(conversion.source.contains("interface LoginFormProps {}"));
        assert!(conversion
            .source
            .contains("const LoginForm: React.FC<LoginFormProps> = () => {"));
        assert!(conversion.source.contains("export default LoginForm;"));
        assert!(conversion.source.contains("<Input placeholder=\"Email\" />"));
        assert!(conversion.source.contains("<Button>Sign in</Button>"));
    }

    #[test]
    fn vue_conversion_produces_sfc_with_default_imports() {
        let conversion =
            convert_to_component(&login_tree(), "LoginForm", Framework::Vue, &catalog())
                .expect("convert");

        assert!(conversion.source.starts_with("<template>"));
        assert!(conversion.source.contains("<script setup lang=\"ts\">"));
        assert!(conversion.source.contains(
            "import Input from '@dealicious/design-system/src/components/ssm-input';"
        ));
        assert!(!conversion.source.contains("import { Input }"));
    }

    #[test]
    fn conversion_is_idempotent() {
        let catalog = catalog();
        let tree = login_tree();
        let a = convert_to_component(&tree, "LoginForm", Framework::React, &catalog).unwrap();
        let b = convert_to_component(&tree, "LoginForm", Framework::React, &catalog).unwrap();
        assert_eq!(a.source, b.source);
    }

    #[test]
    fn never_fails_for_unknown_node_types() {
        let mut root = node("1", "Strange", NodeType::Other);
        root.children.push(node("2", "Weird", NodeType::Other));
        let conversion =
            convert_to_component(&root, "Mystery", Framework::React, &catalog()).expect("convert");
        // Unknown types degrade to containers; the child elides and the root
        // renders as a bare structural wrapper.
        assert!(conversion.source.contains("<div />"));
    }

    #[test]
    fn empty_tree_renders_null_body() {
        let root = node("1", "Frame 5", NodeType::Frame);
        let conversion =
            convert_to_component(&root, "Empty", Framework::React, &catalog()).expect("convert");
        assert!(conversion.source.contains("return null;"));
        let vue = convert_to_component(&root, "Empty", Framework::Vue, &catalog()).expect("convert");
        assert!(vue.source.contains("<div />"));
    }

    #[test]
    fn rejects_invalid_component_names() {
        let catalog = catalog();
        let tree = login_tree();
        for bad in ["", "  ", "1Login", "Login-Form", "Login Form"] {
            assert!(
                convert_to_component(&tree, bad, Framework::React, &catalog).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_trees() {
        let catalog = catalog();
        let mut root = node("1", "Root", NodeType::Frame);
        root.children.push(node("1", "Dup", NodeType::Text));
        assert!(convert_to_component(&root, "Dup", Framework::React, &catalog).is_err());
    }

    #[test]
    fn list_catalog_names_are_distinct_and_nonempty() {
        let summaries = list_catalog(&catalog(), Framework::React);
        assert!(!summaries.is_empty());
        let mut names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}
