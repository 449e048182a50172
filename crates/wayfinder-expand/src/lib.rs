//! Autogenerated-directory expansion for sidebar trees.
//!
//! Sidebar configurations carry `autogenerated` placeholders that the site
//! build replaces with the documents found under a content directory. This
//! crate models that seam: a [`DirectoryProvider`] abstracts the content
//! tree so expansion stays unit-testable, [`FsProvider`] walks a real
//! directory, and [`expand`] splices the discovered documents into a new,
//! fully concrete set. [`check_references`] reports document ids and
//! directories that do not resolve.

pub mod expand;
pub mod frontmatter;
pub mod fs;
pub mod provider;

pub use expand::{check_references, expand, DanglingReference, ReferenceKind};
pub use frontmatter::{extract_meta, DocMeta, FrontmatterError};
pub use fs::FsProvider;
pub use provider::{DirectoryProvider, DocEntry, ExpandError};
