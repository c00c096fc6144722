//! Versioned JSON output payloads for the CLI.

use crate::analyze::TreeAnalysis;
use crate::catalog::Framework;
use crate::convert::ComponentSummary;
use crate::error::ErrorPayload;
use serde::Serialize;
use std::path::PathBuf;

/// Schema version for output payloads.
pub const PALETTE_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PaletteOutput {
    Convert(ConvertOutput),
    Components(ComponentsOutput),
    Analyze(AnalyzeOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOutput {
    pub version: String,
    pub component_name: String,
    pub framework: Framework,
    pub node_count: usize,
    pub imports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsOutput {
    pub version: String,
    pub framework: Framework,
    pub components: Vec<ComponentSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
    pub version: String,
    pub analysis: TreeAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_output_serializes_with_mode_tag() {
        let output = PaletteOutput::Convert(ConvertOutput {
            version: PALETTE_OUTPUT_VERSION.to_string(),
            component_name: "LoginForm".to_string(),
            framework: Framework::React,
            node_count: 4,
            imports: vec!["Button".to_string(), "Input".to_string()],
            output_path: None,
            code: Some("const LoginForm: React.FC<LoginFormProps> = () => null;".to_string()),
            preview_path: None,
            screenshot_path: None,
        });

        let json = serde_json::to_value(&output).expect("serialize");
        assert_eq!(json["mode"], "convert");
        assert_eq!(json["version"], PALETTE_OUTPUT_VERSION);
        assert_eq!(json["framework"], "react");
        assert_eq!(json["componentName"], "LoginForm");
        assert!(json.get("outputPath").is_none());
    }

    #[test]
    fn components_output_serializes_catalog_entries() {
        let catalog = crate::catalog::ComponentCatalog::new().expect("catalog");
        let output = PaletteOutput::Components(ComponentsOutput {
            version: PALETTE_OUTPUT_VERSION.to_string(),
            framework: Framework::Vue,
            components: crate::convert::list_catalog(&catalog, Framework::Vue),
        });

        let json = serde_json::to_value(&output).expect("serialize");
        assert_eq!(json["mode"], "components");
        assert!(json["components"].as_array().map(Vec::len).unwrap_or(0) > 0);
    }
}
