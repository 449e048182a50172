//! Content-directory abstraction.

use crate::frontmatter::FrontmatterError;

/// A document discovered under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Slash-separated document id, relative to the content root.
    pub id: String,

    /// Sidebar label override from the document's frontmatter.
    pub label: Option<String>,

    /// Styling hint from the document's frontmatter.
    pub class_name: Option<String>,

    /// Explicit sidebar position from the document's frontmatter.
    pub position: Option<i32>,
}

impl DocEntry {
    /// Entry with nothing but an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            class_name: None,
            position: None,
        }
    }
}

/// Errors raised while scanning content.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },
}

/// Source of documents for autogenerated expansion.
///
/// The site build injects its own implementation; tests inject an in-memory
/// one. `scan` returns entries in sidebar order: explicit positions first,
/// ties and unpositioned entries by id.
pub trait DirectoryProvider: Send + Sync {
    /// Documents under `dir` (relative to the content root), in sidebar order.
    fn scan(&self, dir: &str) -> Result<Vec<DocEntry>, ExpandError>;

    /// Whether `id` resolves to a document.
    fn has_doc(&self, id: &str) -> bool;

    /// Whether `dir` resolves to a directory.
    fn has_dir(&self, dir: &str) -> bool;
}
