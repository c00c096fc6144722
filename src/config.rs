//! TOML configuration for the conversion tool.
//!
//! Priority when loading: explicit `--config` path, then the central
//! `~/.config/palette/config.toml`, then built-in defaults. CLI flags that
//! were explicitly passed override the file (the bin layer merges).

use crate::catalog::Framework;
use crate::preview::{
    DEFAULT_MAX_CONTENT_HEIGHT, DEFAULT_NAVIGATION_TIMEOUT, DEFAULT_NETWORK_IDLE_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT,
};
use crate::{PaletteError, Result, Viewport};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub framework: Framework,
    pub viewport: Viewport,
    pub preview: PreviewConfig,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// The Node.js command used for screenshot capture.
    pub node_command: String,
    /// Content height cap for captured screenshots, in pixels.
    pub max_content_height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    #[serde(with = "humantime_serde")]
    pub navigation: Duration,
    #[serde(with = "humantime_serde")]
    pub network_idle: Duration,
    #[serde(with = "humantime_serde")]
    pub process: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            viewport: Viewport::default(),
            preview: PreviewConfig::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            max_content_height: DEFAULT_MAX_CONTENT_HEIGHT,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation: DEFAULT_NAVIGATION_TIMEOUT,
            network_idle: DEFAULT_NETWORK_IDLE_TIMEOUT,
            process: DEFAULT_PROCESS_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist and parse; the
    /// central path is used only when present; otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::central_config_path() {
                Some(central) if central.is_file() => Self::from_file(&central),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("palette").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&raw).map_err(|e| {
            PaletteError::Config(format!("invalid config {}: {e}", path.display()))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(PaletteError::Config(
                "viewport dimensions must be positive".to_string(),
            ));
        }
        if self.preview.max_content_height == 0 {
            return Err(PaletteError::Config(
                "preview.max_content_height must be positive".to_string(),
            ));
        }
        if self.preview.node_command.trim().is_empty() {
            return Err(PaletteError::Config(
                "preview.node_command must not be empty".to_string(),
            ));
        }
        for (name, value) in [
            ("timeouts.navigation", self.timeouts.navigation),
            ("timeouts.network_idle", self.timeouts.network_idle),
            ("timeouts.process", self.timeouts.process),
        ] {
            if value.is_zero() {
                return Err(PaletteError::Config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}
