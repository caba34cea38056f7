//! Application configuration for snippetbook.
//!
//! User config lives at `~/.snippetbook/snippetbook.toml`.
//! It only controls notebook metadata; the output destination is always
//! given on the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetbookError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "snippetbook.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".snippetbook";

// ---------------------------------------------------------------------------
// Config structs (matching snippetbook.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Notebook metadata settings.
    #[serde(default)]
    pub notebook: NotebookConfig,
}

/// `[notebook]` section.
///
/// All fields optional: when `kernel_name` is unset the generated
/// notebook carries empty metadata, matching a bare nbformat file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookConfig {
    /// Kernel name for the notebook's kernelspec (e.g. `bash`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_name: Option<String>,

    /// Human-readable kernel name (defaults to `kernel_name`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_display_name: Option<String>,

    /// Language recorded in kernelspec and language_info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.snippetbook/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SnippetbookError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.snippetbook/snippetbook.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SnippetbookError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        SnippetbookError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SnippetbookError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| SnippetbookError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SnippetbookError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
