//! Named collection of sidebar trees.

use indexmap::IndexMap;

use crate::error::{NodePath, PathSegment};
use crate::node::SidebarNode;

/// All sidebar trees of one site, keyed by tree name in declaration order.
///
/// The set is an immutable snapshot once loaded; nothing mutates it between
/// builds.
#[derive(Debug, Clone, Default)]
pub struct SidebarSet {
    trees: IndexMap<String, Vec<SidebarNode>>,
}

impl SidebarSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named tree, keeping declaration order for new names.
    pub fn insert_tree(&mut self, name: impl Into<String>, nodes: Vec<SidebarNode>) {
        self.trees.insert(name.into(), nodes);
    }

    /// Nodes of a named tree.
    pub fn tree(&self, name: &str) -> Option<&[SidebarNode]> {
        self.trees.get(name).map(Vec::as_slice)
    }

    /// Tree names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Trees in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarNode])> {
        self.trees
            .iter()
            .map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Number of trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the set has no trees.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Sibling labels that repeat within a single category or tree root.
    ///
    /// Repetition is not a structural error, so callers decide what to do
    /// with the report; the loader logs one warning per entry.
    pub fn duplicate_sibling_labels(&self) -> Vec<(NodePath, String)> {
        let mut duplicates = Vec::new();
        for (name, nodes) in self.iter() {
            collect_duplicates(nodes, &NodePath::tree(name), &mut duplicates);
        }
        duplicates
    }

    /// Log a warning for every repeated sibling label.
    pub fn warn_duplicate_labels(&self) {
        for (path, label) in self.duplicate_sibling_labels() {
            tracing::warn!("duplicate sibling label \"{}\" under {}", label, path);
        }
    }
}

// IndexMap equality ignores insertion order; tree order is significant here.
impl PartialEq for SidebarSet {
    fn eq(&self, other: &Self) -> bool {
        self.trees.len() == other.trees.len() && self.trees.iter().eq(other.trees.iter())
    }
}

impl Eq for SidebarSet {}

fn collect_duplicates(
    siblings: &[SidebarNode],
    path: &NodePath,
    duplicates: &mut Vec<(NodePath, String)>,
) {
    let mut seen: Vec<&str> = Vec::new();
    for node in siblings {
        let label = match node {
            SidebarNode::Category(cat) => Some(cat.label.as_str()),
            SidebarNode::Link(link) => Some(link.label.as_str()),
            SidebarNode::Doc(doc) => doc.label.as_deref(),
            SidebarNode::Autogenerated(_) => None,
        };
        if let Some(label) = label {
            if seen.contains(&label) {
                duplicates.push((path.clone(), label.to_string()));
            } else {
                seen.push(label);
            }
        }
        if let SidebarNode::Category(cat) = node {
            let child_path = path.child(PathSegment::Label(cat.label.clone()));
            collect_duplicates(&cat.items, &child_path, duplicates);
        }
    }
}
