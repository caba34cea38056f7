//! Notebook container format (nbformat v4) rendering and file I/O.
//!
//! This crate is the serialization boundary: it accepts an abstract
//! [`Document`] (ordered heading/content blocks) and maps it onto the
//! external notebook container, without the rest of the workspace
//! knowing anything about the container's schema.
//!
//! Mapping:
//! - heading block → markdown cell with source `## <title>`
//! - content block → code cell with the body verbatim

pub mod model;

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use snippetbook_shared::{
    Block, Document, NBFORMAT_MAJOR, NBFORMAT_MINOR, Result, SnippetbookError,
};

pub use model::{Cell, KernelSpec, LanguageInfo, Notebook, NotebookMetadata, Source};

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Options for notebook rendering.
#[derive(Debug, Clone, Default)]
pub struct NotebookOptions {
    /// Kernelspec to record in notebook metadata. When `None`, the
    /// notebook carries empty metadata.
    pub kernelspec: Option<KernelSpec>,
}

/// Render a document into an nbformat notebook.
///
/// Each heading block becomes a markdown cell (`## <title>`) and each
/// content block a code cell with the body verbatim, so the cell list
/// corresponds 1:1 and in-order with the document's blocks.
pub fn render(doc: &Document, opts: &NotebookOptions) -> Notebook {
    let cells = doc
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| match block {
            Block::Heading(title) => {
                let source = format!("## {title}");
                Cell::Markdown {
                    id: cell_id(index, "markdown", &source),
                    metadata: serde_json::Map::new(),
                    source: Source::Text(source),
                }
            }
            Block::Content(body) => Cell::Code {
                id: cell_id(index, "code", body),
                metadata: serde_json::Map::new(),
                execution_count: None,
                outputs: Vec::new(),
                source: Source::Text(body.clone()),
            },
        })
        .collect();

    let language_info = opts
        .kernelspec
        .as_ref()
        .and_then(|ks| ks.language.clone())
        .map(|name| LanguageInfo { name });

    debug!(cells = doc.len(), "document rendered to notebook");

    Notebook {
        cells,
        metadata: NotebookMetadata {
            kernelspec: opts.kernelspec.clone(),
            language_info,
        },
        nbformat: NBFORMAT_MAJOR,
        nbformat_minor: NBFORMAT_MINOR,
    }
}

/// Deterministic cell id derived from position and content, so repeat
/// runs produce byte-identical files. The id grammar allows 1-64 chars
/// of `[a-zA-Z0-9-_]`.
fn cell_id(index: usize, kind: &str, source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_le_bytes());
    hasher.update(kind.as_bytes());
    hasher.update(source.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Serialize a notebook to its on-disk JSON form (pretty-printed, with
/// a trailing newline).
pub fn to_json(nb: &Notebook) -> Result<String> {
    let mut json = serde_json::to_string_pretty(nb)
        .map_err(|e| SnippetbookError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Serialize and write a notebook file, overwriting any existing file
/// at `path`.
pub fn write_notebook(nb: &Notebook, path: &Path) -> Result<()> {
    let json = to_json(nb)?;
    write_text(path, &json)
}

/// Write already-rendered notebook JSON to `path`.
///
/// Writes to a temp file in the destination directory, then renames, so
/// a failure never leaves a partial file at `path`. The parent directory
/// must already exist.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        SnippetbookError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "destination has no file name",
            ),
        )
    })?;

    let temp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    std::fs::write(&temp, text).map_err(|e| SnippetbookError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| SnippetbookError::io(path, e))?;

    debug!(path = %path.display(), bytes = text.len(), "wrote notebook file");
    Ok(())
}

/// Read and parse a notebook file.
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    let content = std::fs::read_to_string(path).map_err(|e| SnippetbookError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        SnippetbookError::Serialization(format!("invalid notebook {}: {e}", path.display()))
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Verify that a notebook file is well-formed.
///
/// Checks the container version and that every cell id is present,
/// within the id grammar, and unique within the file.
pub fn validate_notebook(path: &Path) -> Result<()> {
    let nb = read_notebook(path)?;

    if nb.nbformat != NBFORMAT_MAJOR {
        return Err(SnippetbookError::validation(format!(
            "unsupported nbformat: {} (expected {NBFORMAT_MAJOR})",
            nb.nbformat
        )));
    }

    let mut seen = std::collections::HashSet::new();
    for (i, cell) in nb.cells.iter().enumerate() {
        let id = cell.id();
        if !is_valid_cell_id(id) {
            return Err(SnippetbookError::validation(format!(
                "cell {i} has an invalid id: {id:?}"
            )));
        }
        if !seen.insert(id) {
            return Err(SnippetbookError::validation(format!(
                "cell {i} has a duplicate id: {id:?}"
            )));
        }
    }

    debug!(path = %path.display(), cells = nb.cells.len(), "notebook validated");
    Ok(())
}

/// nbformat 4.5 cell id grammar: 1-64 chars of `[a-zA-Z0-9-_]`.
fn is_valid_cell_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doc(sections: &[(&str, &str)]) -> Document {
        let mut doc = Document::new();
        for (title, body) in sections {
            doc.push_section(*title, *body);
        }
        doc
    }

    #[test]
    fn render_maps_blocks_to_cells() {
        let doc = make_doc(&[("Title A", "line1\nline2\n")]);
        let nb = render(&doc, &NotebookOptions::default());

        assert_eq!(nb.cells.len(), 2);
        assert_eq!(nb.nbformat, 4);
        assert_eq!(nb.nbformat_minor, 5);

        match &nb.cells[0] {
            Cell::Markdown { source, .. } => assert_eq!(source.to_text(), "## Title A"),
            other => panic!("expected markdown cell, got {other:?}"),
        }
        match &nb.cells[1] {
            Cell::Code {
                source,
                execution_count,
                outputs,
                ..
            } => {
                assert_eq!(source.to_text(), "line1\nline2\n");
                assert!(execution_count.is_none());
                assert!(outputs.is_empty());
            }
            other => panic!("expected code cell, got {other:?}"),
        }
    }

    #[test]
    fn render_preserves_section_order() {
        let doc = make_doc(&[("T1", "B1"), ("T2", "B2")]);
        let nb = render(&doc, &NotebookOptions::default());

        let sources: Vec<String> = nb.cells.iter().map(|c| c.source().to_text()).collect();
        assert_eq!(sources, vec!["## T1", "B1", "## T2", "B2"]);
    }

    #[test]
    fn render_empty_document() {
        let nb = render(&Document::new(), &NotebookOptions::default());
        assert!(nb.cells.is_empty());
        assert_eq!(nb.nbformat, 4);
    }

    #[test]
    fn render_is_deterministic() {
        let doc = make_doc(&[("T1", "B1"), ("T2", "B2")]);
        let a = to_json(&render(&doc, &NotebookOptions::default())).unwrap();
        let b = to_json(&render(&doc, &NotebookOptions::default())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_cell_ids_are_unique_and_valid() {
        // Identical bodies at different positions must still get distinct ids.
        let doc = make_doc(&[("Same", "same body"), ("Same", "same body")]);
        let nb = render(&doc, &NotebookOptions::default());

        let ids: Vec<&str> = nb.cells.iter().map(|c| c.id()).collect();
        let unique: std::collections::HashSet<&&str> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|id| is_valid_cell_id(id)));
    }

    #[test]
    fn render_with_kernelspec() {
        let opts = NotebookOptions {
            kernelspec: Some(KernelSpec {
                name: "bash".into(),
                display_name: "Bash".into(),
                language: Some("bash".into()),
            }),
        };
        let nb = render(&Document::new(), &opts);

        assert_eq!(
            nb.metadata.kernelspec.as_ref().map(|k| k.name.as_str()),
            Some("bash")
        );
        assert_eq!(
            nb.metadata.language_info.as_ref().map(|l| l.name.as_str()),
            Some("bash")
        );
    }

    #[test]
    fn render_without_kernelspec_has_empty_metadata() {
        let nb = render(&Document::new(), &NotebookOptions::default());
        let json = to_json(&nb).unwrap();
        assert!(json.contains("\"metadata\": {}"));
    }

    #[test]
    fn write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ipynb");

        let doc = make_doc(&[("Title A", "line1\nline2\n")]);
        let nb = render(&doc, &NotebookOptions::default());
        write_notebook(&nb, &path).unwrap();

        let parsed = read_notebook(&path).unwrap();
        assert_eq!(parsed, nb);
        assert_eq!(parsed.cells[0].source().to_text(), "## Title A");
        assert_eq!(parsed.cells[1].source().to_text(), "line1\nline2\n");
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ipynb");

        let doc = make_doc(&[("T1", "B1"), ("T2", "B2")]);
        write_notebook(&render(&doc, &NotebookOptions::default()), &path).unwrap();
        let first = std::fs::read(&path).unwrap();

        write_notebook(&render(&doc, &NotebookOptions::default()), &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ipynb");
        std::fs::write(&path, "stale").unwrap();

        let nb = render(&Document::new(), &NotebookOptions::default());
        write_notebook(&nb, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"nbformat\": 4"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn write_fails_when_parent_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.ipynb");

        let nb = render(&Document::new(), &NotebookOptions::default());
        let err = write_notebook(&nb, &path).unwrap_err();
        assert!(matches!(err, SnippetbookError::Io { .. }));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ipynb");

        let nb = render(&Document::new(), &NotebookOptions::default());
        write_notebook(&nb, &path).unwrap();

        for entry in std::fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
    }

    #[test]
    fn validate_accepts_generated_notebook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ipynb");

        let doc = make_doc(&[("T1", "B1")]);
        write_notebook(&render(&doc, &NotebookOptions::default()), &path).unwrap();

        assert!(validate_notebook(&path).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_nbformat() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ipynb");
        std::fs::write(
            &path,
            r#"{"cells": [], "metadata": {}, "nbformat": 3, "nbformat_minor": 0}"#,
        )
        .unwrap();

        let err = validate_notebook(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported nbformat"));
    }

    #[test]
    fn validate_rejects_duplicate_cell_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.ipynb");
        std::fs::write(
            &path,
            r###"{
  "cells": [
    {"cell_type": "markdown", "id": "aaa", "metadata": {}, "source": "## A"},
    {"cell_type": "markdown", "id": "aaa", "metadata": {}, "source": "## B"}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"###,
        )
        .unwrap();

        let err = validate_notebook(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn validate_rejects_bad_cell_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badid.ipynb");
        std::fs::write(
            &path,
            r###"{
  "cells": [
    {"cell_type": "markdown", "id": "not valid!", "metadata": {}, "source": "## A"}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"###,
        )
        .unwrap();

        let err = validate_notebook(&path).unwrap_err();
        assert!(err.to_string().contains("invalid id"));
    }

    #[test]
    fn reads_jupyter_style_fixture() {
        // Written by Jupyter itself: list-of-lines sources, kernelspec set.
        let nb = read_notebook(std::path::Path::new(
            "../../../fixtures/notebook.fixture.ipynb",
        ))
        .expect("read fixture");

        assert_eq!(nb.nbformat, 4);
        assert_eq!(nb.cells.len(), 2);
        assert_eq!(nb.cells[0].source().to_text(), "## Fixture Title");
        assert_eq!(nb.cells[1].source().to_text(), "echo one\necho two\n");
        assert_eq!(
            nb.metadata.kernelspec.as_ref().map(|k| k.name.as_str()),
            Some("bash")
        );
    }
}
