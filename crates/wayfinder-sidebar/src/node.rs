//! Sidebar node types.

/// Class name that hides a node from the rendered sidebar while its routes
/// still register with the site generator.
pub const HIDDEN_CLASS: &str = "hidden";

/// One entry in a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarNode {
    /// Reference to an authored document.
    Doc(DocNode),
    /// Labeled group of child nodes, possibly nested.
    Category(CategoryNode),
    /// External hyperlink, not resolved to internal content.
    Link(LinkNode),
    /// Placeholder expanded from a content directory at build time.
    Autogenerated(AutogeneratedNode),
}

impl SidebarNode {
    /// Shorthand for a document reference with no label override.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(DocNode::new(id))
    }

    /// Discriminator string as it appears in configuration files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Doc(_) => "doc",
            Self::Category(_) => "category",
            Self::Link(_) => "link",
            Self::Autogenerated(_) => "autogenerated",
        }
    }

    /// Styling hint attached to the node, if any.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Doc(n) => n.class_name.as_deref(),
            Self::Category(n) => n.class_name.as_deref(),
            Self::Link(n) => n.class_name.as_deref(),
            Self::Autogenerated(n) => n.class_name.as_deref(),
        }
    }

    /// Whether the node is suppressed from sidebar display.
    pub fn is_hidden(&self) -> bool {
        self.class_name()
            .is_some_and(|c| c.split_whitespace().any(|part| part == HIDDEN_CLASS))
    }
}

/// Reference to an authored document by its slash-separated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    /// Document identifier, e.g. `versions/v0_3/index`.
    pub id: String,

    /// Display text override. Without one the site generator falls back to
    /// the document's own title.
    pub label: Option<String>,

    /// Styling hint.
    pub class_name: Option<String>,
}

impl DocNode {
    /// Create a bare document reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            class_name: None,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// True when nothing beyond the id is set, so the node can serialize
    /// back to the bare-string shorthand.
    pub fn is_bare(&self) -> bool {
        self.label.is_none() && self.class_name.is_none()
    }
}

/// Labeled group of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// Display label.
    pub label: String,

    /// Whether the category starts collapsed.
    pub collapsed: bool,

    /// Whether the user may toggle the category at all. An uncollapsible
    /// category is always open.
    pub collapsible: bool,

    /// Ordered children, rendered top to bottom.
    pub items: Vec<SidebarNode>,

    /// Optional landing target for the category label itself.
    pub link: Option<CategoryLink>,

    /// Styling hint.
    pub class_name: Option<String>,
}

impl CategoryNode {
    /// Create a category with the default open/toggle state.
    pub fn new(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self {
            label: label.into(),
            collapsed: true,
            collapsible: true,
            items,
            link: None,
            class_name: None,
        }
    }

    /// Attach a landing target.
    pub fn with_link(mut self, link: CategoryLink) -> Self {
        self.link = Some(link);
        self
    }
}

/// Landing target for a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLink {
    /// The label links to an authored document.
    Doc { id: String },
    /// The label links to an automatically produced listing page.
    GeneratedIndex {
        slug: String,
        title: Option<String>,
        description: Option<String>,
    },
}

/// External hyperlink rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    /// Display text.
    pub label: String,

    /// Absolute URL.
    pub href: String,

    /// Styling hint.
    pub class_name: Option<String>,
}

impl LinkNode {
    /// Create an external link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            class_name: None,
        }
    }
}

/// Placeholder the site generator expands by scanning a content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutogeneratedNode {
    /// Directory path relative to the content root.
    pub dir_name: String,

    /// Styling hint. `hidden` keeps the expanded routes out of the sidebar.
    pub class_name: Option<String>,
}

impl AutogeneratedNode {
    /// Create a placeholder for a content directory.
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
            class_name: None,
        }
    }
}
