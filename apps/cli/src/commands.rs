//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use snippetbook_core::{
    catalog,
    pipeline::{self, GenerateConfig},
};
use snippetbook_shared::{AppConfig, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// snippetbook — assemble curated code snippets into a notebook.
#[derive(Parser)]
#[command(
    name = "snippetbook",
    version,
    about = "Assemble the built-in snippet catalog into a Jupyter notebook file.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate the notebook from the built-in catalog.
    Generate {
        /// Output notebook path (e.g., snippets.ipynb).
        #[arg(short, long)]
        output: PathBuf,

        /// Config file to use instead of ~/.snippetbook/snippetbook.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the catalog's snippet titles.
    List,

    /// Print one snippet's body verbatim.
    Show {
        /// Snippet title (case-insensitive).
        title: String,
    },

    /// Check that a notebook file is well-formed.
    Validate {
        /// Notebook path to validate.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "snippetbook=info",
        1 => "snippetbook=debug",
        _ => "snippetbook=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { output, config } => cmd_generate(output, config.as_deref()),
        Command::List => cmd_list(),
        Command::Show { title } => cmd_show(&title),
        Command::Validate { file } => cmd_validate(&file),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(output: PathBuf, config_path: Option<&std::path::Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let generate_config = GenerateConfig {
        output,
        options: pipeline::notebook_options(&config),
    };

    info!(output = %generate_config.output.display(), "generating notebook");

    let result = pipeline::generate(&generate_config)?;

    println!();
    println!("  Notebook written successfully!");
    println!("  Path:     {}", result.path.display());
    println!("  Snippets: {}", result.snippet_count);
    println!("  Cells:    {}", result.cell_count);
    println!("  SHA-256:  {}", result.sha256);
    println!(
        "  Time:     {:.1}ms",
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!();

    Ok(())
}

fn cmd_list() -> Result<()> {
    for snippet in catalog::catalog() {
        println!(
            "{:<28} {:>3} lines",
            snippet.title,
            snippet.body.lines().count()
        );
    }
    Ok(())
}

fn cmd_show(title: &str) -> Result<()> {
    match catalog::find(title) {
        Some(snippet) => {
            print!("{}", snippet.body);
            Ok(())
        }
        None => Err(eyre!(
            "unknown snippet '{title}' — run `snippetbook list` for available titles"
        )),
    }
}

fn cmd_validate(file: &std::path::Path) -> Result<()> {
    snippetbook_notebook::validate_notebook(file)?;
    println!("OK: {} is a well-formed notebook", file.display());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
