//! End-to-end `generate` pipeline: catalog → document → notebook → file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};
use tracing::{info, instrument};

use snippetbook_notebook::{KernelSpec, NotebookOptions};
use snippetbook_shared::{AppConfig, Result, Snippet};

use crate::{assembler, catalog};

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Destination notebook path. The parent directory must exist.
    pub output: PathBuf,
    /// Notebook rendering options (kernelspec etc.).
    pub options: NotebookOptions,
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path the notebook was written to.
    pub path: PathBuf,
    /// Number of snippets assembled.
    pub snippet_count: usize,
    /// Number of cells in the written notebook (2 × snippets).
    pub cell_count: usize,
    /// SHA-256 of the written bytes; identical input yields an
    /// identical digest on every run.
    pub sha256: String,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Derive notebook rendering options from the app config.
pub fn notebook_options(config: &AppConfig) -> NotebookOptions {
    let kernelspec = config.notebook.kernel_name.as_ref().map(|name| KernelSpec {
        name: name.clone(),
        display_name: config
            .notebook
            .kernel_display_name
            .clone()
            .unwrap_or_else(|| name.clone()),
        language: config.notebook.language.clone(),
    });

    NotebookOptions { kernelspec }
}

/// Run the full `generate` pipeline over the built-in catalog.
pub fn generate(config: &GenerateConfig) -> Result<GenerateResult> {
    generate_from(&catalog::catalog(), config)
}

/// Run the `generate` pipeline over an explicit snippet sequence.
///
/// 1. Build the block document
/// 2. Render it into an nbformat notebook
/// 3. Serialize once, digest the bytes
/// 4. Write the file (overwriting any existing one)
#[instrument(skip_all, fields(output = %config.output.display(), snippets = snippets.len()))]
pub fn generate_from(snippets: &[Snippet], config: &GenerateConfig) -> Result<GenerateResult> {
    let start = Instant::now();

    info!(output = %config.output.display(), "starting generate pipeline");

    let doc = assembler::build(snippets);
    let nb = snippetbook_notebook::render(&doc, &config.options);

    let json = snippetbook_notebook::to_json(&nb)?;
    let sha256 = {
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    };

    snippetbook_notebook::write_text(&config.output, &json)?;

    let result = GenerateResult {
        path: config.output.clone(),
        snippet_count: snippets.len(),
        cell_count: nb.cells.len(),
        sha256,
        elapsed: start.elapsed(),
    };

    info!(
        cell_count = result.cell_count,
        sha256 = %result.sha256,
        elapsed_ms = result.elapsed.as_millis(),
        "generate pipeline complete"
    );

    Ok(result)
}
