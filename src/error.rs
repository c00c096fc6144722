use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid design tree: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preview error: {0}")]
    Preview(String),
}

impl PaletteError {
    pub fn input(message: impl Into<String>) -> Self {
        PaletteError::Input(message.into())
    }

    pub fn preview(message: impl Into<String>) -> Self {
        PaletteError::Preview(message.into())
    }

    /// Map this error to a reportable payload naming the pipeline phase
    /// that failed plus a remediation hint.
    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            PaletteError::Io(e) => ErrorPayload::new(
                ErrorPhase::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            PaletteError::Serialization(e) => ErrorPayload::new(
                ErrorPhase::Parse,
                e.to_string(),
                "Verify the input file contains a JSON design tree exported from Figma.",
            ),
            PaletteError::Image(e) => ErrorPayload::new(
                ErrorPhase::Preview,
                e.to_string(),
                "The captured preview screenshot could not be decoded; re-run with --verbose.",
            ),
            PaletteError::Input(msg) => ErrorPayload::new(
                ErrorPhase::Parse,
                msg.to_string(),
                "Every node needs a non-empty id and name; ids must be unique within one tree.",
            ),
            PaletteError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("playwright npm package is missing") {
                    ErrorPayload::new(
                        ErrorPhase::Preview,
                        msg.to_string(),
                        "Install Playwright (e.g., `npm install playwright` and `npx playwright install chromium`).",
                    )
                } else if lower.contains("not found on path") || lower.contains("node command") {
                    ErrorPayload::new(
                        ErrorPhase::Preview,
                        msg.to_string(),
                        "Install Node.js and ensure the node binary is on PATH.",
                    )
                } else if lower.contains("catalog") {
                    ErrorPayload::new(
                        ErrorPhase::Catalog,
                        msg.to_string(),
                        "The built-in component registry failed validation; this is a build defect.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorPhase::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file (e.g., --viewport WIDTHxHEIGHT).",
                    )
                }
            }
            PaletteError::Preview(msg) => ErrorPayload::new(
                ErrorPhase::Preview,
                msg.to_string(),
                "Preview generation is best-effort; the component source is still produced.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;

/// Pipeline phase an error is attributed to in user-facing output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPhase {
    Parse,
    Catalog,
    Map,
    Emit,
    Preview,
    Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub phase: ErrorPhase,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(phase: ErrorPhase, message: String, remediation: impl Into<String>) -> Self {
        Self {
            phase,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_payload_reports_parse_phase() {
        let err = PaletteError::input("node '1:2' has an empty name");
        let payload = err.to_payload();
        assert_eq!(payload.phase, ErrorPhase::Parse);
        assert!(payload.message.contains("1:2"));
    }

    #[test]
    fn config_payload_includes_playwright_remediation() {
        let err = PaletteError::Config(
            "Playwright npm package is missing; install with `npm install playwright`.".to_string(),
        );
        let payload = err.to_payload();
        assert_eq!(payload.phase, ErrorPhase::Preview);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("npm install playwright"),
            "expected remediation to mention npm install playwright, got: {remediation}"
        );
    }

    #[test]
    fn catalog_config_payload_reports_catalog_phase() {
        let err = PaletteError::Config("component catalog has no entries for vue".to_string());
        assert_eq!(err.to_payload().phase, ErrorPhase::Catalog);
    }

    #[test]
    fn preview_payload_is_soft() {
        let err = PaletteError::preview("capture timed out after 45s");
        let payload = err.to_payload();
        assert_eq!(payload.phase, ErrorPhase::Preview);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(remediation.contains("best-effort"));
    }
}
