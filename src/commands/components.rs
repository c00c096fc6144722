use std::path::PathBuf;
use std::process::ExitCode;

use palette_lib::{
    list_catalog, Category, ComponentCatalog, ComponentsOutput, Framework, PaletteOutput, Result,
    PALETTE_OUTPUT_VERSION,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings;

pub fn run_components(
    config_path: Option<PathBuf>,
    framework: Framework,
    category: Option<Category>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    match components_inner(config_path, framework, category) {
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

fn components_inner(
    config_path: Option<PathBuf>,
    framework: Framework,
    category: Option<Category>,
) -> Result<PaletteOutput> {
    // Config only affects flag defaults elsewhere; load it anyway so a broken
    // file is reported here too.
    settings::load_config(config_path.as_deref())?;

    let catalog = ComponentCatalog::new()?;
    let mut components = list_catalog(&catalog, framework);
    if let Some(category) = category {
        components.retain(|c| c.category == category);
    }

    Ok(PaletteOutput::Components(ComponentsOutput {
        version: PALETTE_OUTPUT_VERSION.to_string(),
        framework,
        components,
    }))
}
