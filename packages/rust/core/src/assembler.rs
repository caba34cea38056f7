//! Document assembler.
//!
//! Takes an ordered snippet sequence and builds the block document that
//! the notebook serializer consumes: one heading block followed by one
//! content block per snippet, in input order.

use tracing::{debug, instrument};

use snippetbook_shared::{Document, Snippet};

/// Build a document from snippets.
///
/// Pure data transformation: cannot fail, and the resulting block
/// sequence always has length `2 * snippets.len()`.
#[instrument(skip_all, fields(snippet_count = snippets.len()))]
pub fn build(snippets: &[Snippet]) -> Document {
    let mut doc = Document::new();

    for snippet in snippets {
        doc.push_section(snippet.title.as_str(), snippet.body.as_str());
    }

    debug!(blocks = doc.len(), "document built");
    doc
}
