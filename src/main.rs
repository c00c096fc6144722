mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_analyze, run_components, run_convert};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();

    match args.command {
        Commands::Convert {
            input,
            name,
            framework,
            viewport,
            output,
            preview,
            preview_dir,
            screenshot,
            format,
        } => {
            run_convert(
                &raw_args,
                args.config,
                args.verbose,
                input,
                name,
                framework,
                viewport,
                output,
                preview,
                preview_dir,
                screenshot,
                format,
            )
            .await
        }
        Commands::Components {
            framework,
            category,
            format,
            output,
        } => run_components(args.config, framework, category, format, output),
        Commands::Analyze {
            input,
            format,
            output,
        } => run_analyze(args.config, args.verbose, input, format, output),
    }
}
