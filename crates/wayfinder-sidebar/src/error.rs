//! Configuration errors and node positions.

use std::fmt;
use std::path::PathBuf;

/// One step in the position of a node within a sidebar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named tree at the configuration root.
    Tree(String),
    /// Category label along the descent.
    Label(String),
    /// Zero-based position within an item sequence.
    Index(usize),
    /// Named field of a node, e.g. `link`.
    Field(&'static str),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree(name) => write!(f, "{name}"),
            Self::Label(label) => write!(f, "\"{label}\""),
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Field(field) => write!(f, "{field}"),
        }
    }
}

/// Position of a node within a configuration: the tree name followed by the
/// labels and indices leading to the node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Start a path at a named tree.
    pub fn tree(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Tree(name.into())],
        }
    }

    /// Extend the path by one segment.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Segments from root to node.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" › ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Errors raised while loading a sidebar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported configuration format: {} (expected .json, .yaml, or .yml)", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration root must be an object mapping tree names to node lists")]
    RootShape,

    #[error("{path}: expected {expected}, found {found}")]
    UnexpectedShape {
        path: NodePath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: unknown node type \"{found}\" (expected doc, category, link, or autogenerated)")]
    UnknownType { path: NodePath, found: String },

    #[error("{path}: missing required field \"{field}\"")]
    MissingField { path: NodePath, field: &'static str },

    #[error("{path}: unknown field \"{field}\"")]
    UnknownField { path: NodePath, field: String },
}
