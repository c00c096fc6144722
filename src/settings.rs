use std::path::Path;
use std::time::Duration;

use palette_lib::{Config, Framework, PaletteError, Viewport};

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct ConvertFlagSources {
    pub framework: bool,
    pub viewport: bool,
}

impl ConvertFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            framework: flag_present(args, "--framework"),
            viewport: flag_present(args, "--viewport"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConvertSettings {
    pub framework: Framework,
    pub viewport: Viewport,
    pub node_command: String,
    pub max_content_height: u32,
    pub navigation_timeout: Duration,
    pub network_idle_timeout: Duration,
    pub process_timeout: Duration,
}

/// Merge CLI arguments with the config file, preferring CLI when flags were
/// explicitly passed.
pub fn resolve_convert_settings(
    cli_framework: Framework,
    cli_viewport: Viewport,
    config: &Config,
    flags: &ConvertFlagSources,
) -> ResolvedConvertSettings {
    ResolvedConvertSettings {
        framework: if flags.framework {
            cli_framework
        } else {
            config.framework
        },
        viewport: if flags.viewport {
            cli_viewport
        } else {
            config.viewport
        },
        node_command: config.preview.node_command.clone(),
        max_content_height: config.preview.max_content_height,
        navigation_timeout: config.timeouts.navigation,
        network_idle_timeout: config.timeouts.network_idle,
        process_timeout: config.timeouts.process,
    }
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/palette/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, PaletteError> {
    let cfg = Config::load(path)?;
    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("invalid config ({}): {e}", p.display()))
            .unwrap_or_else(|| format!("invalid config: {e}"));
        PaletteError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Log effective settings to stderr (verbose mode).
pub fn log_effective_settings(config_path: Option<&Path>, settings: &ResolvedConvertSettings) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective config (source: {}): framework {}, viewport {}x{}, timeouts nav {}s / idle {}s / process {}s, preview node {:?}, max content height {}px",
        config_source,
        settings.framework,
        settings.viewport.width,
        settings.viewport.height,
        settings.navigation_timeout.as_secs(),
        settings.network_idle_timeout.as_secs(),
        settings.process_timeout.as_secs(),
        settings.node_command,
        settings.max_content_height
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_vue_and_big_viewport() -> Config {
        toml::from_str(
            r#"
            framework = "vue"

            [viewport]
            width = 1280
            height = 720
            "#,
        )
        .expect("parse")
    }

    #[test]
    fn flag_present_matches_exact_and_equals_forms() {
        let args: Vec<String> = ["palette", "convert", "--framework=vue", "--viewport"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(flag_present(&args, "--framework"));
        assert!(flag_present(&args, "--viewport"));
        assert!(!flag_present(&args, "--preview"));
    }

    #[test]
    fn resolve_prefers_config_when_flags_absent() {
        let cfg = config_with_vue_and_big_viewport();
        let resolved = resolve_convert_settings(
            Framework::React,
            Viewport {
                width: 999,
                height: 999,
            },
            &cfg,
            &ConvertFlagSources::default(),
        );
        assert_eq!(resolved.framework, Framework::Vue);
        assert_eq!(resolved.viewport.width, 1280);
    }

    #[test]
    fn resolve_prefers_cli_when_flags_present() {
        let cfg = config_with_vue_and_big_viewport();
        let resolved = resolve_convert_settings(
            Framework::React,
            Viewport {
                width: 640,
                height: 480,
            },
            &cfg,
            &ConvertFlagSources {
                framework: true,
                viewport: true,
            },
        );
        assert_eq!(resolved.framework, Framework::React);
        assert_eq!(resolved.viewport.width, 640);
    }

    #[test]
    fn load_config_defaults_when_no_path_given() {
        // The central path may not exist in test environments; defaults apply.
        if Config::central_config_path().map(|p| p.is_file()) != Some(true) {
            let cfg = load_config(None).expect("defaults");
            assert_eq!(cfg.viewport.width, 800);
        }
    }
}
