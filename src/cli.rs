use clap::{Parser, Subcommand, ValueEnum};
use palette_lib::{Category, Framework, Viewport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palette")]
#[command(
    version,
    about = "Palette - Convert Figma design trees into design-system components",
    long_about = "Palette\n\nModes:\n- convert: turn a JSON design tree into a React or Vue component using the built-in design-system catalog.\n- components: list the catalog (names, descriptions, categories).\n- analyze: summarize a design tree and suggest component mappings without converting.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for framework/viewport/timeouts; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a design tree into a component source file
    Convert {
        #[arg(long, help = "Path to a JSON design tree exported from Figma")]
        input: PathBuf,

        #[arg(long, help = "Name of the generated component (e.g., LoginForm)")]
        name: String,

        #[arg(long, value_enum, default_value = "react", help = "Target framework")]
        framework: Framework,

        #[arg(
            long,
            default_value = "800x600",
            help = "Viewport dimensions for preview capture (WIDTHxHEIGHT)"
        )]
        viewport: Viewport,

        #[arg(
            long,
            short,
            help = "Write the component source to this file (the report still goes to stdout)"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Also generate a standalone preview HTML document")]
        preview: bool,

        #[arg(
            long,
            value_name = "PATH",
            help = "Directory for preview artifacts; created if missing (default: palette-preview)"
        )]
        preview_dir: Option<PathBuf>,

        #[arg(
            long,
            help = "Capture a PNG screenshot of the preview (implies --preview; needs node and the playwright npm package)"
        )]
        screenshot: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },

    /// List the design-system component catalog
    Components {
        #[arg(long, value_enum, default_value = "react", help = "Target framework")]
        framework: Framework,

        #[arg(long, value_enum, help = "Only show components in this category")]
        category: Option<Category>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Summarize a design tree and suggest mappings without converting
    Analyze {
        #[arg(long, help = "Path to a JSON design tree exported from Figma")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
