use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use palette_lib::{ErrorOutput, PaletteError, PaletteOutput, PALETTE_OUTPUT_VERSION};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &PaletteOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: PaletteError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = PaletteOutput::Error(ErrorOutput {
        version: PALETTE_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {write_err}");
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {write_err}");
            }
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &PaletteOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &PaletteOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &PaletteOutput, colorize: bool) -> String {
    match body {
        PaletteOutput::Convert(out) => {
            let mut buf = String::new();
            let header = color(
                &format!("Generated {} ({})", out.component_name, out.framework),
                "32",
                colorize,
            );
            writeln!(buf, "{header}").ok();
            writeln!(buf, "Nodes mapped: {}", out.node_count).ok();
            if !out.imports.is_empty() {
                writeln!(buf, "Imports: {}", out.imports.join(", ")).ok();
            }
            if let Some(path) = &out.output_path {
                writeln!(buf, "Source written to: {}", path.display()).ok();
            }
            if let Some(path) = &out.preview_path {
                writeln!(buf, "Preview: {}", path.display()).ok();
            }
            if let Some(path) = &out.screenshot_path {
                writeln!(buf, "Screenshot: {}", path.display()).ok();
            }
            if let Some(code) = &out.code {
                writeln!(buf).ok();
                buf.push_str(code);
            }
            buf.trim_end().to_string()
        }
        PaletteOutput::Components(out) => {
            let mut buf = String::new();
            writeln!(
                buf,
                "{} components ({})",
                out.components.len(),
                out.framework
            )
            .ok();
            let mut last_category = None;
            for component in &out.components {
                if last_category != Some(component.category) {
                    writeln!(buf, "{}", color(&component.category.to_string(), "36", colorize))
                        .ok();
                    last_category = Some(component.category);
                }
                writeln!(buf, "  {} - {}", component.name, component.description).ok();
            }
            buf.trim_end().to_string()
        }
        PaletteOutput::Analyze(out) => {
            let analysis = &out.analysis;
            let mut buf = String::new();
            writeln!(
                buf,
                "Nodes: {} total, {} frames, {} texts, {} component instances",
                analysis.total_nodes,
                analysis.frame_count,
                analysis.text_count,
                analysis.component_count
            )
            .ok();
            if analysis.suggested_mappings.is_empty() {
                writeln!(buf, "No name-based mapping suggestions.").ok();
            } else {
                writeln!(buf, "Suggested mappings:").ok();
                for suggestion in &analysis.suggested_mappings {
                    writeln!(
                        buf,
                        "  {} ({}) -> {}",
                        suggestion.node_name, suggestion.node_id, suggestion.component
                    )
                    .ok();
                }
            }
            buf.trim_end().to_string()
        }
        PaletteOutput::Error(out) => {
            let header = color("ERROR", "31", colorize);
            let mut buf = format!("{header} [{:?}]: {}", out.error.phase, out.error.message);
            if let Some(remediation) = &out.error.remediation {
                buf.push_str(&format!("\n  {remediation}"));
            }
            buf
        }
    }
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_lib::{ConvertOutput, Framework};

    #[test]
    fn pretty_convert_lists_imports_and_paths() {
        let body = PaletteOutput::Convert(ConvertOutput {
            version: PALETTE_OUTPUT_VERSION.to_string(),
            component_name: "LoginForm".to_string(),
            framework: Framework::React,
            node_count: 4,
            imports: vec!["Button".to_string(), "Input".to_string()],
            output_path: Some(PathBuf::from("src/LoginForm.jsx")),
            code: None,
            preview_path: None,
            screenshot_path: None,
        });
        let text = format_pretty(&body, false);
        assert!(text.contains("Generated LoginForm (react)"));
        assert!(text.contains("Imports: Button, Input"));
        assert!(text.contains("src/LoginForm.jsx"));
    }

    #[test]
    fn pretty_error_includes_phase_and_remediation() {
        let err = PaletteError::input("duplicate node id '2' in tree");
        let payload = err.to_payload();
        let body = PaletteOutput::Error(ErrorOutput {
            version: PALETTE_OUTPUT_VERSION.to_string(),
            message: Some(payload.message.clone()),
            error: payload,
        });
        let text = format_pretty(&body, false);
        assert!(text.contains("duplicate node id"));
        assert!(text.contains("ids must be unique"));
    }
}
