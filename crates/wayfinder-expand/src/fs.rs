//! Filesystem-backed content provider.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::frontmatter::extract_meta;
use crate::provider::{DirectoryProvider, DocEntry, ExpandError};

/// Document source extensions recognized by the site build.
const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Content provider over a real directory tree.
#[derive(Debug, Clone)]
pub struct FsProvider {
    content_root: PathBuf,
}

impl FsProvider {
    /// Provider rooted at the site's content directory.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    fn resolve(&self, dir: &str) -> PathBuf {
        if dir.is_empty() || dir == "." {
            self.content_root.clone()
        } else {
            self.content_root.join(dir)
        }
    }
}

impl DirectoryProvider for FsProvider {
    fn scan(&self, dir: &str) -> Result<Vec<DocEntry>, ExpandError> {
        let target = self.resolve(dir);
        if !target.is_dir() {
            return Err(ExpandError::DirectoryNotFound(dir.to_string()));
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(&target)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !DOC_EXTENSIONS.contains(&ext) {
                continue;
            }

            // Underscore-prefixed files are partials, not documents.
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            if stem.starts_with('_') {
                continue;
            }

            let source = fs::read_to_string(path).map_err(|e| ExpandError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let meta = extract_meta(&source)
                .map_err(|source| ExpandError::Frontmatter {
                    path: path.display().to_string(),
                    source,
                })?
                .unwrap_or_default();

            entries.push(DocEntry {
                id: doc_id(&self.content_root, path),
                label: meta.sidebar_label,
                class_name: meta.sidebar_class_name,
                position: meta.sidebar_position,
            });
        }

        entries.sort_by(|a, b| {
            let pos_a = a.position.unwrap_or(i32::MAX);
            let pos_b = b.position.unwrap_or(i32::MAX);
            pos_a.cmp(&pos_b).then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!("scanned {} documents under {}", entries.len(), dir);

        Ok(entries)
    }

    fn has_doc(&self, id: &str) -> bool {
        DOC_EXTENSIONS
            .iter()
            .any(|ext| self.content_root.join(format!("{id}.{ext}")).is_file())
    }

    fn has_dir(&self, dir: &str) -> bool {
        self.resolve(dir).is_dir()
    }
}

/// Derive a root-relative, slash-separated document id from a file path.
fn doc_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let without_ext = relative.with_extension("");

    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
