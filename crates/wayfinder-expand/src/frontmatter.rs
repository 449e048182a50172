//! Sidebar metadata extraction from document frontmatter.

use serde::Deserialize;

/// Sidebar-relevant frontmatter of one document.
///
/// Documents carry plenty of other frontmatter; everything beyond these
/// fields is ignored here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DocMeta {
    /// Document title, the generator's default display text.
    #[serde(default)]
    pub title: Option<String>,

    /// Sidebar display text override.
    #[serde(default)]
    pub sidebar_label: Option<String>,

    /// Explicit position among siblings (lower = first).
    #[serde(default)]
    pub sidebar_position: Option<i32>,

    /// Styling hint attached to the sidebar entry.
    #[serde(default)]
    pub sidebar_class_name: Option<String>,
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

/// Extract sidebar metadata from a document source.
///
/// Returns `None` when the document has no frontmatter block.
pub fn extract_meta(source: &str) -> Result<Option<DocMeta>, FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();

    let meta: DocMeta = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok(Some(meta))
}
