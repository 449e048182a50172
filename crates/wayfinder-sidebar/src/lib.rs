//! Sidebar navigation schema and loader.
//!
//! This crate defines the navigation trees a documentation site renders in
//! its sidebar: named, ordered sequences of document references, categories,
//! external links, and autogenerated directory placeholders. Configurations
//! are loaded from JSON or YAML in a single fail-fast pass and serialized
//! back to a canonical literal form.

pub mod error;
pub mod load;
pub mod node;
pub mod ser;
pub mod set;

pub use error::{ConfigError, NodePath, PathSegment};
pub use node::{
    AutogeneratedNode, CategoryLink, CategoryNode, DocNode, LinkNode, SidebarNode, HIDDEN_CLASS,
};
pub use set::SidebarSet;
