//! Palette Library
//!
//! A library for converting Figma design subtrees into design-system
//! component source code (React or Vue). Classification maps each design
//! node to a catalog component, emission renders simplified framework
//! markup, and an optional preview harness renders the result with mock
//! components (and a headless-browser screenshot when available).
//!
//! # Module Overview
//!
//! - [`design`] - Design tree input types and validation
//! - [`catalog`] - Design-system component registry and fuzzy lookup
//! - [`classify`] - Per-node component classification heuristics
//! - [`mapper`] - Whole-tree classification pass
//! - [`emit`] - Markup emission with collapse/elision rules
//! - [`convert`] - Top-level conversion and catalog introspection
//! - [`analyze`] - Diagnostic tree summaries
//! - [`preview`] - Preview HTML harness and screenshot capture
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use palette_lib::{convert_to_component, ComponentCatalog, Framework};
//!
//! # fn example(tree: &palette_lib::DesignNode) -> palette_lib::Result<()> {
//! let catalog = ComponentCatalog::new()?;
//! let conversion = convert_to_component(tree, "LoginForm", Framework::React, &catalog)?;
//! println!("{}", conversion.source);
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod convert;
pub mod design;
pub mod emit;
pub mod error;
pub mod mapper;
pub mod output;
pub mod preview;
pub mod viewport;

pub use analyze::{analyze_tree, SuggestedMapping, TreeAnalysis};
pub use catalog::{
    CatalogComponent, Category, ComponentCatalog, Framework, PropExample, PropSpec,
};
pub use classify::{classify_node, Choice, Classified};
pub use config::Config;
pub use convert::{convert_to_component, list_catalog, ComponentSummary, Conversion};
pub use design::{validate_tree, BoundingBox, Color, DesignNode, LayoutMode, NodeType, Paint};
pub use emit::{emit_markup, CodeBuilder, Fragment};
pub use error::{ErrorPayload, ErrorPhase, PaletteError, Result};
pub use mapper::{map_tree, MappingIndex, NodeMapping};
pub use output::{
    AnalyzeOutput, ComponentsOutput, ConvertOutput, ErrorOutput, PaletteOutput,
    PALETTE_OUTPUT_VERSION,
};
pub use preview::{
    render_preview_html, CaptureResult, ScreenshotBackend, ScreenshotOptions,
    DEFAULT_MAX_CONTENT_HEIGHT, DEFAULT_NAVIGATION_TIMEOUT, DEFAULT_NETWORK_IDLE_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT,
};
pub use viewport::Viewport;
