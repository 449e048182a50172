//! Splicing autogenerated placeholders and checking references.

use std::fmt;

use wayfinder_sidebar::{
    AutogeneratedNode, CategoryLink, CategoryNode, DocNode, NodePath, PathSegment, SidebarNode,
    SidebarSet,
};

use crate::provider::{DirectoryProvider, ExpandError};

/// Replace every autogenerated placeholder with the documents its directory
/// holds, returning a new fully concrete set. The input set is untouched.
pub fn expand(
    set: &SidebarSet,
    provider: &dyn DirectoryProvider,
) -> Result<SidebarSet, ExpandError> {
    let mut expanded = SidebarSet::new();
    for (name, nodes) in set.iter() {
        expanded.insert_tree(name, expand_nodes(nodes, provider)?);
    }
    Ok(expanded)
}

fn expand_nodes(
    nodes: &[SidebarNode],
    provider: &dyn DirectoryProvider,
) -> Result<Vec<SidebarNode>, ExpandError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            SidebarNode::Autogenerated(auto) => {
                out.extend(expand_autogenerated(auto, provider)?);
            }
            SidebarNode::Category(cat) => {
                out.push(SidebarNode::Category(CategoryNode {
                    label: cat.label.clone(),
                    collapsed: cat.collapsed,
                    collapsible: cat.collapsible,
                    items: expand_nodes(&cat.items, provider)?,
                    link: cat.link.clone(),
                    class_name: cat.class_name.clone(),
                }));
            }
            other => out.push(other.clone()),
        }
    }
    Ok(out)
}

fn expand_autogenerated(
    auto: &AutogeneratedNode,
    provider: &dyn DirectoryProvider,
) -> Result<Vec<SidebarNode>, ExpandError> {
    let entries = provider.scan(&auto.dir_name)?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            SidebarNode::Doc(DocNode {
                id: entry.id,
                label: entry.label,
                // A hidden placeholder hides every route it contributes.
                class_name: entry.class_name.or_else(|| auto.class_name.clone()),
            })
        })
        .collect())
}

/// Kind of content a sidebar node points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Document,
    Directory,
}

/// A document id or directory that does not resolve against the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Position of the referring node.
    pub path: NodePath,

    /// What the node expected to find.
    pub kind: ReferenceKind,

    /// The unresolved id or directory.
    pub target: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ReferenceKind::Document => "document",
            ReferenceKind::Directory => "directory",
        };
        write!(f, "{}: missing {} \"{}\"", self.path, kind, self.target)
    }
}

/// Report every document id and directory in the set that the provider
/// cannot resolve. An empty report means the set is fully grounded in
/// content.
pub fn check_references(
    set: &SidebarSet,
    provider: &dyn DirectoryProvider,
) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();
    for (name, nodes) in set.iter() {
        check_nodes(nodes, &NodePath::tree(name), provider, &mut dangling);
    }
    dangling
}

fn check_nodes(
    nodes: &[SidebarNode],
    parent: &NodePath,
    provider: &dyn DirectoryProvider,
    dangling: &mut Vec<DanglingReference>,
) {
    for (i, node) in nodes.iter().enumerate() {
        let path = parent.child(PathSegment::Index(i));
        match node {
            SidebarNode::Doc(doc) => {
                if !provider.has_doc(&doc.id) {
                    dangling.push(DanglingReference {
                        path,
                        kind: ReferenceKind::Document,
                        target: doc.id.clone(),
                    });
                }
            }
            SidebarNode::Autogenerated(auto) => {
                if !provider.has_dir(&auto.dir_name) {
                    dangling.push(DanglingReference {
                        path,
                        kind: ReferenceKind::Directory,
                        target: auto.dir_name.clone(),
                    });
                }
            }
            SidebarNode::Category(cat) => {
                if let Some(CategoryLink::Doc { id }) = &cat.link {
                    if !provider.has_doc(id) {
                        dangling.push(DanglingReference {
                            path: path.child(PathSegment::Field("link")),
                            kind: ReferenceKind::Document,
                            target: id.clone(),
                        });
                    }
                }
                check_nodes(
                    &cat.items,
                    &path.child(PathSegment::Label(cat.label.clone())),
                    provider,
                    dangling,
                );
            }
            // External links resolve nothing internally.
            SidebarNode::Link(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DocEntry;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use wayfinder_sidebar::LinkNode;

    /// In-memory provider for expansion tests.
    struct MemoryProvider {
        entries: Vec<DocEntry>,
        dirs: BTreeSet<String>,
    }

    impl MemoryProvider {
        fn new(entries: Vec<DocEntry>, dirs: &[&str]) -> Self {
            Self {
                entries,
                dirs: dirs.iter().map(|d| d.to_string()).collect(),
            }
        }
    }

    impl DirectoryProvider for MemoryProvider {
        fn scan(&self, dir: &str) -> Result<Vec<DocEntry>, ExpandError> {
            if !self.has_dir(dir) {
                return Err(ExpandError::DirectoryNotFound(dir.to_string()));
            }
            let prefix = format!("{dir}/");
            Ok(self
                .entries
                .iter()
                .filter(|e| e.id.starts_with(&prefix))
                .cloned()
                .collect())
        }

        fn has_doc(&self, id: &str) -> bool {
            self.entries.iter().any(|e| e.id == id)
        }

        fn has_dir(&self, dir: &str) -> bool {
            self.dirs.contains(dir)
        }
    }

    fn set_with_placeholder() -> SidebarSet {
        SidebarSet::from_json_str(
            r#"{"docs": [
                "introduction",
                {"type": "category", "label": "Guides", "items": [
                    {"type": "autogenerated", "dirName": "guides"}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn placeholders_are_spliced_in_scan_order() {
        let provider = MemoryProvider::new(
            vec![
                DocEntry::new("guides/setup"),
                DocEntry {
                    id: "guides/streaming".to_string(),
                    label: Some("How to stream".to_string()),
                    class_name: None,
                    position: None,
                },
            ],
            &["guides"],
        );

        let expanded = expand(&set_with_placeholder(), &provider).unwrap();

        let docs = expanded.tree("docs").unwrap();
        let SidebarNode::Category(cat) = &docs[1] else {
            panic!("expected category node");
        };
        assert_eq!(cat.items.len(), 2);
        assert_eq!(cat.items[0], SidebarNode::doc("guides/setup"));
        let SidebarNode::Doc(streaming) = &cat.items[1] else {
            panic!("expected doc node");
        };
        assert_eq!(streaming.label.as_deref(), Some("How to stream"));
    }

    #[test]
    fn expansion_leaves_the_input_untouched() {
        let provider = MemoryProvider::new(vec![DocEntry::new("guides/setup")], &["guides"]);
        let original = set_with_placeholder();

        let _ = expand(&original, &provider).unwrap();

        assert_eq!(original, set_with_placeholder());
    }

    #[test]
    fn hidden_placeholder_hides_expanded_docs() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [
                {"type": "autogenerated", "dirName": "extras", "className": "hidden"}
            ]}"#,
        )
        .unwrap();
        let provider = MemoryProvider::new(vec![DocEntry::new("extras/glossary")], &["extras"]);

        let expanded = expand(&set, &provider).unwrap();

        assert!(expanded.tree("docs").unwrap()[0].is_hidden());
    }

    #[test]
    fn missing_directory_fails_expansion() {
        let provider = MemoryProvider::new(vec![], &[]);

        assert!(matches!(
            expand(&set_with_placeholder(), &provider),
            Err(ExpandError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn dangling_references_are_reported_with_positions() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [
                "introduction",
                {"type": "category", "label": "Guides",
                 "link": {"type": "doc", "id": "guides/index"},
                 "items": [{"type": "autogenerated", "dirName": "missing_dir"}]}
            ]}"#,
        )
        .unwrap();
        let provider = MemoryProvider::new(vec![DocEntry::new("introduction")], &["guides"]);

        let dangling = check_references(&set, &provider);

        assert_eq!(dangling.len(), 2);
        assert_eq!(
            dangling[0].to_string(),
            "docs › [1] › link: missing document \"guides/index\""
        );
        assert_eq!(
            dangling[1].to_string(),
            "docs › [1] › \"Guides\" › [0]: missing directory \"missing_dir\""
        );
    }

    #[test]
    fn external_links_are_never_checked() {
        let mut set = SidebarSet::new();
        set.insert_tree(
            "docs",
            vec![SidebarNode::Link(LinkNode::new(
                "Community",
                "https://example.com/forum",
            ))],
        );
        let provider = MemoryProvider::new(vec![], &[]);

        assert!(check_references(&set, &provider).is_empty());
    }

    #[test]
    fn fully_grounded_set_reports_nothing() {
        let provider = MemoryProvider::new(
            vec![DocEntry::new("introduction"), DocEntry::new("guides/setup")],
            &["guides"],
        );

        assert!(check_references(&set_with_placeholder(), &provider).is_empty());
    }
}
