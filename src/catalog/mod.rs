//! Design-system component registry.
//!
//! This module provides:
//! - [`ComponentCatalog`] - the per-framework registry of known UI components
//! - [`CatalogComponent`] - one registry entry with props and usage examples
//! - Lookup by exact name, by category, and fuzzy matching against
//!   designer-assigned layer names
//!
//! The registry is read-only for the life of the process; lookups never fail,
//! they return `None` for unknown names.

mod builtin;

use crate::{PaletteError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target framework for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::React => write!(f, "react"),
            Framework::Vue => write!(f, "vue"),
        }
    }
}

/// Design-system component category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    Actions,
    Forms,
    Layout,
    #[serde(rename = "Data Display")]
    DataDisplay,
    Navigation,
    Overlays,
    Feedback,
    Media,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Actions => "Actions",
            Category::Forms => "Forms",
            Category::Layout => "Layout",
            Category::DataDisplay => "Data Display",
            Category::Navigation => "Navigation",
            Category::Overlays => "Overlays",
            Category::Feedback => "Feedback",
            Category::Media => "Media",
        };
        write!(f, "{label}")
    }
}

/// One prop accepted by a catalog component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub description: String,
}

/// A usage example attached to a catalog component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropExample {
    pub name: String,
    pub code: String,
    pub description: String,
}

/// One entry in the design-system registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogComponent {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub import_path: String,
    pub props: Vec<PropSpec>,
    pub examples: Vec<PropExample>,
}

/// Static registry of known UI components per target framework.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    react: Vec<CatalogComponent>,
    vue: Vec<CatalogComponent>,
}

impl ComponentCatalog {
    /// Build the built-in registry. Fails if either framework table is empty
    /// or carries duplicate names; this is checked once here, never mid-walk.
    pub fn new() -> Result<Self> {
        let catalog = Self {
            react: builtin::components(Framework::React),
            vue: builtin::components(Framework::Vue),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for framework in [Framework::React, Framework::Vue] {
            let components = self.components(framework);
            if components.is_empty() {
                return Err(PaletteError::Config(format!(
                    "component catalog has no entries for {framework}"
                )));
            }
            let mut seen = std::collections::HashSet::new();
            for component in components {
                if !seen.insert(component.name.as_str()) {
                    return Err(PaletteError::Config(format!(
                        "component catalog has duplicate entry '{}' for {framework}",
                        component.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// All components for a framework, in registration order.
    pub fn components(&self, framework: Framework) -> &[CatalogComponent] {
        match framework {
            Framework::React => &self.react,
            Framework::Vue => &self.vue,
        }
    }

    /// Exact, case-sensitive lookup by component name.
    pub fn get_by_name(&self, name: &str, framework: Framework) -> Option<&CatalogComponent> {
        self.components(framework).iter().find(|c| c.name == name)
    }

    /// All components in a category, in registration order.
    pub fn get_by_category(
        &self,
        category: Category,
        framework: Framework,
    ) -> Vec<&CatalogComponent> {
        self.components(framework)
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Distinct categories present in the registry, in registration order.
    pub fn categories(&self, framework: Framework) -> Vec<Category> {
        let mut out = Vec::new();
        for component in self.components(framework) {
            if !out.contains(&component.category) {
                out.push(component.category);
            }
        }
        out
    }

    /// Case-insensitive fuzzy lookup of a designer-assigned layer name.
    ///
    /// Strategies are tried in order, each scanning the registry in
    /// registration order so results are deterministic:
    /// 1. exact match after stripping the `ssm` prefix and separators;
    /// 2. substring containment in either direction;
    /// 3. a fixed list of lexical variations (plural, common synonyms).
    pub fn fuzzy_match(&self, candidate: &str, framework: Framework) -> Option<&CatalogComponent> {
        let components = self.components(framework);
        let normalized = normalize_name(candidate);
        if !normalized.is_empty() {
            for component in components {
                if normalize_name(&component.name) == normalized {
                    return Some(component);
                }
            }
        }

        let lower = candidate.to_lowercase();
        for component in components {
            let name = component.name.to_lowercase();
            if lower.contains(&name) || name.contains(&lower) {
                return Some(component);
            }
        }

        for component in components {
            let name = component.name.to_lowercase();
            for variation in lexical_variations(&name) {
                if lower.contains(&variation) || variation.contains(&lower) {
                    return Some(component);
                }
            }
        }

        None
    }
}

/// Lowercase, drop the conventional `ssm` component prefix, drop separators.
fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let stripped = lower.strip_prefix("ssm").unwrap_or(&lower);
    stripped
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' ' | '/'))
        .collect()
}

/// Fixed lexical variations checked by the last fuzzy-match strategy.
fn lexical_variations(name: &str) -> Vec<String> {
    vec![
        format!("{name}s"),
        name.replace("button", "btn"),
        name.replace("input", "field"),
        name.replace("card", "panel"),
        name.replace("modal", "popup"),
        name.replace("modal", "dialog"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::new().expect("built-in catalog must validate")
    }

    #[test]
    fn builtin_catalog_validates_for_both_frameworks() {
        let catalog = catalog();
        assert!(!catalog.components(Framework::React).is_empty());
        assert!(!catalog.components(Framework::Vue).is_empty());
    }

    #[test]
    fn get_by_name_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.get_by_name("Button", Framework::React).is_some());
        assert!(catalog.get_by_name("button", Framework::React).is_none());
    }

    #[test]
    fn get_by_category_returns_registration_order() {
        let catalog = catalog();
        let layout = catalog.get_by_category(Category::Layout, Framework::React);
        assert!(layout.iter().any(|c| c.name == "Card"));
    }

    #[test]
    fn fuzzy_match_strips_design_system_prefix() {
        let catalog = catalog();
        let hit = catalog.fuzzy_match("ssm-button", Framework::React).unwrap();
        assert_eq!(hit.name, "Button");
    }

    #[test]
    fn fuzzy_match_normalizes_separators() {
        let catalog = catalog();
        let hit = catalog.fuzzy_match("Text Link", Framework::React).unwrap();
        assert_eq!(hit.name, "TextLink");
        let hit = catalog.fuzzy_match("labeled_text", Framework::Vue).unwrap();
        assert_eq!(hit.name, "LabeledText");
    }

    #[test]
    fn fuzzy_match_containment_both_directions() {
        let catalog = catalog();
        let hit = catalog
            .fuzzy_match("Submit Button / Primary", Framework::React)
            .unwrap();
        assert_eq!(hit.name, "Button");
        // Candidate contained in a catalog name.
        let hit = catalog.fuzzy_match("badg", Framework::React).unwrap();
        assert_eq!(hit.name, "Badge");
    }

    #[test]
    fn fuzzy_match_table_beats_tab_by_registration_order() {
        let catalog = catalog();
        let hit = catalog.fuzzy_match("data table", Framework::React).unwrap();
        assert_eq!(hit.name, "Table");
    }

    #[test]
    fn fuzzy_match_lexical_variations() {
        let catalog = catalog();
        let hit = catalog.fuzzy_match("login btn", Framework::React).unwrap();
        assert_eq!(hit.name, "Button");
        let hit = catalog.fuzzy_match("popup", Framework::Vue).unwrap();
        assert_eq!(hit.name, "Modal");
    }

    #[test]
    fn fuzzy_match_misses_return_none() {
        let catalog = catalog();
        assert!(catalog.fuzzy_match("Hero Section", Framework::React).is_none());
        assert!(catalog.fuzzy_match("Frame 123", Framework::Vue).is_none());
    }

    #[test]
    fn import_paths_differ_per_framework() {
        let catalog = catalog();
        let react = catalog.get_by_name("Button", Framework::React).unwrap();
        let vue = catalog.get_by_name("Button", Framework::Vue).unwrap();
        assert!(react.import_path.contains("design-system-react"));
        assert!(vue.import_path.contains("design-system/"));
        assert_ne!(react.import_path, vue.import_path);
    }

    #[test]
    fn categories_are_deduplicated() {
        let catalog = catalog();
        let categories = catalog.categories(Framework::React);
        let mut unique = categories.clone();
        unique.dedup();
        assert_eq!(categories.len(), unique.len());
        assert!(categories.contains(&Category::Actions));
    }
}
