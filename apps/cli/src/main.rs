//! snippetbook CLI — static notebook assembly tool.
//!
//! Assembles the built-in snippet catalog into a Jupyter-compatible
//! notebook file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
