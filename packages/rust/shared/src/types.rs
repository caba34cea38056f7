//! Core domain types for snippetbook documents.

use serde::{Deserialize, Serialize};

/// Current schema version of the notebook container format we emit.
pub const NBFORMAT_MAJOR: u32 = 4;

/// Minor version of the notebook container format we emit.
///
/// 4.5 is the first revision that requires stable cell ids.
pub const NBFORMAT_MINOR: u32 = 5;

// ---------------------------------------------------------------------------
// Snippet
// ---------------------------------------------------------------------------

/// An authored (title, body) pair representing one documentation example.
///
/// Snippets are immutable data defined in the catalog; their order there
/// is significant and preserved all the way into the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Single-line display title.
    pub title: String,
    /// Multi-line body, rendered verbatim (may be empty).
    pub body: String,
}

impl Snippet {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A title must fit on a single display line.
    pub fn has_single_line_title(&self) -> bool {
        !self.title.is_empty() && !self.title.contains('\n')
    }
}

// ---------------------------------------------------------------------------
// Block / Document
// ---------------------------------------------------------------------------

/// One block of an assembled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section title, rendered as a markdown heading cell.
    Heading(String),
    /// Opaque text blob, rendered verbatim as a code cell.
    Content(String),
}

/// The in-memory ordered block sequence assembled before serialization.
///
/// Built fresh per run, populated once, then handed to the notebook
/// serializer. Holds exactly two blocks per input snippet: a heading
/// followed by its content, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading block followed by its content block.
    ///
    /// This is the only mutation path, so the heading/content pairing
    /// cannot be broken by callers.
    pub fn push_section(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.blocks.push(Block::Heading(title.into()));
        self.blocks.push(Block::Content(body.into()));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
