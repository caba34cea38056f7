//! Serde data model for the nbformat v4 container.
//!
//! Mirrors the on-disk JSON shape: a top-level cell list plus format
//! version numbers. Only the fields snippetbook produces or inspects are
//! modeled; unknown fields in foreign notebooks are ignored on read.

use serde::{Deserialize, Serialize};

/// A complete notebook file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

/// Notebook-level metadata. Empty by default; kernelspec and
/// language_info are only present when configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<KernelSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_info: Option<LanguageInfo>,
}

/// The `metadata.kernelspec` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The `metadata.language_info` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
}

/// One notebook cell, discriminated by `cell_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        id: String,
        #[serde(default)]
        metadata: serde_json::Map<String, serde_json::Value>,
        source: Source,
    },
    Code {
        id: String,
        #[serde(default)]
        metadata: serde_json::Map<String, serde_json::Value>,
        #[serde(default)]
        execution_count: Option<u32>,
        #[serde(default)]
        outputs: Vec<serde_json::Value>,
        source: Source,
    },
    Raw {
        id: String,
        #[serde(default)]
        metadata: serde_json::Map<String, serde_json::Value>,
        source: Source,
    },
}

impl Cell {
    pub fn id(&self) -> &str {
        match self {
            Cell::Markdown { id, .. } | Cell::Code { id, .. } | Cell::Raw { id, .. } => id,
        }
    }

    pub fn source(&self) -> &Source {
        match self {
            Cell::Markdown { source, .. }
            | Cell::Code { source, .. }
            | Cell::Raw { source, .. } => source,
        }
    }
}

/// Cell source text.
///
/// The format allows either a single string or a list of line strings;
/// Jupyter itself writes lists. snippetbook always writes the single
/// string form but accepts both on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Source {
    /// Normalize to a single string. Line lists already carry their own
    /// trailing newlines, so joining is plain concatenation.
    pub fn to_text(&self) -> String {
        match self {
            Source::Text(s) => s.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }
}
