use std::path::PathBuf;
use std::process::ExitCode;

use palette_lib::{
    analyze_tree, validate_tree, AnalyzeOutput, ComponentCatalog, DesignNode, PaletteOutput,
    Result, PALETTE_OUTPUT_VERSION,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings;

pub fn run_analyze(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    match analyze_inner(config_path, verbose, input) {
        Ok(body) => match write_output(&body, format, output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Failed to write output: {err}");
                ExitCode::from(2)
            }
        },
        Err(err) => render_error(err, format, output),
    }
}

fn analyze_inner(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
) -> Result<PaletteOutput> {
    settings::load_config(config_path.as_deref())?;

    let raw = std::fs::read_to_string(&input)?;
    let tree: DesignNode = serde_json::from_str(&raw)?;
    validate_tree(&tree)?;

    let catalog = ComponentCatalog::new()?;
    let analysis = analyze_tree(&tree, &catalog);

    if verbose {
        eprintln!(
            "Analyzed {} nodes from {}",
            analysis.total_nodes,
            input.display()
        );
    }

    Ok(PaletteOutput::Analyze(AnalyzeOutput {
        version: PALETTE_OUTPUT_VERSION.to_string(),
        analysis,
    }))
}
