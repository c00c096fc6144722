use std::path::PathBuf;
use std::process::ExitCode;

use palette_lib::{
    convert_to_component, render_preview_html, ComponentCatalog, ConvertOutput, DesignNode,
    Framework, PaletteOutput, Result, ScreenshotBackend, ScreenshotOptions, Viewport,
    PALETTE_OUTPUT_VERSION,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{self, ConvertFlagSources};

#[allow(clippy::too_many_arguments)]
pub async fn run_convert(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
    name: String,
    framework: Framework,
    viewport: Viewport,
    output: Option<PathBuf>,
    preview: bool,
    preview_dir: Option<PathBuf>,
    screenshot: bool,
    format: OutputFormat,
) -> ExitCode {
    let result = convert_inner(
        raw_args,
        config_path,
        verbose,
        input,
        &name,
        framework,
        viewport,
        output,
        preview,
        preview_dir,
        screenshot,
    )
    .await;

    match result {
        Ok(body) => match write_output(&body, format, None) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Failed to write output: {err}");
                ExitCode::from(2)
            }
        },
        Err(err) => render_error(err, format, None),
    }
}

#[allow(clippy::too_many_arguments)]
async fn convert_inner(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
    name: &str,
    framework: Framework,
    viewport: Viewport,
    output: Option<PathBuf>,
    preview: bool,
    preview_dir: Option<PathBuf>,
    screenshot: bool,
) -> Result<PaletteOutput> {
    let config = settings::load_config(config_path.as_deref())?;
    let flags = ConvertFlagSources::from_args(raw_args);
    let settings = settings::resolve_convert_settings(framework, viewport, &config, &flags);

    if verbose {
        settings::log_effective_settings(config_path.as_deref(), &settings);
    }

    let raw = std::fs::read_to_string(&input)?;
    let tree: DesignNode = serde_json::from_str(&raw)?;

    let catalog = ComponentCatalog::new()?;
    let conversion = convert_to_component(&tree, name, settings.framework, &catalog)?;

    if verbose {
        eprintln!(
            "Mapped {} nodes; markup references {} catalog components.",
            conversion.mappings.len(),
            conversion.imports.len()
        );
    }

    if let Some(path) = &output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &conversion.source)?;
    }

    let mut preview_path = None;
    let mut screenshot_path = None;
    if preview || screenshot {
        let dir = preview_dir.unwrap_or_else(|| PathBuf::from("palette-preview"));
        std::fs::create_dir_all(&dir)?;

        let html = render_preview_html(&conversion.markup, name, settings.framework);
        let html_path = dir.join(format!("{name}.html"));
        std::fs::write(&html_path, &html)?;
        preview_path = Some(html_path);

        if screenshot {
            let backend = ScreenshotBackend::new(ScreenshotOptions {
                node_command: settings.node_command.clone(),
                viewport: settings.viewport,
                navigation_timeout: settings.navigation_timeout,
                network_idle_timeout: settings.network_idle_timeout,
                process_timeout: settings.process_timeout,
                max_content_height: settings.max_content_height,
            });
            let target = dir.join(format!("{name}.png"));
            // Capture failures never block returning the generated source.
            match backend.capture_html(&html, &target).await {
                Ok(capture) => {
                    if verbose {
                        eprintln!(
                            "Captured {} in {:.1}s",
                            capture.screenshot_path.display(),
                            capture.elapsed.as_secs_f32()
                        );
                    }
                    screenshot_path = Some(capture.screenshot_path);
                }
                Err(err) => {
                    eprintln!(
                        "Warning: preview screenshot skipped: {}",
                        err.to_payload().message
                    );
                }
            }
        }
    }

    let code = if output.is_none() {
        Some(conversion.source.clone())
    } else {
        None
    };

    Ok(PaletteOutput::Convert(ConvertOutput {
        version: PALETTE_OUTPUT_VERSION.to_string(),
        component_name: conversion.component_name,
        framework: conversion.framework,
        node_count: conversion.mappings.len(),
        imports: conversion.imports,
        output_path: output,
        code,
        preview_path,
        screenshot_path,
    }))
}
