//! Fail-fast configuration loading.
//!
//! Configurations are walked by hand over `serde_json::Value` rather than
//! derived with an untagged enum: a derive reports "did not match any
//! variant" while the walker can name the exact tree, labels, and indices
//! leading to a malformed node. YAML input is funneled through the same
//! walker by deserializing into JSON values, so both formats share one set
//! of rules.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ConfigError, NodePath, PathSegment};
use crate::node::{
    AutogeneratedNode, CategoryLink, CategoryNode, DocNode, LinkNode, SidebarNode,
};
use crate::set::SidebarSet;

impl SidebarSet {
    /// Load a configuration file, dispatching on its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(ConfigError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parse a YAML configuration.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Construct a set from an already-parsed configuration value.
    ///
    /// Any malformed node fails the whole load; no partially-valid set is
    /// ever returned.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(trees) = value else {
            return Err(ConfigError::RootShape);
        };

        let mut set = SidebarSet::new();
        for (name, tree) in trees {
            let path = NodePath::tree(&name);
            let Value::Array(items) = tree else {
                return Err(ConfigError::UnexpectedShape {
                    path,
                    expected: "an array of nodes",
                    found: kind_name(&tree),
                });
            };
            let nodes = nodes_from_array(&items, &path)?;
            set.insert_tree(name, nodes);
        }

        set.warn_duplicate_labels();
        Ok(set)
    }
}

fn nodes_from_array(items: &[Value], parent: &NodePath) -> Result<Vec<SidebarNode>, ConfigError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| node_from_value(item, parent.child(PathSegment::Index(i))))
        .collect()
}

fn node_from_value(value: &Value, path: NodePath) -> Result<SidebarNode, ConfigError> {
    let map = match value {
        // Bare strings are document-id shorthand.
        Value::String(id) => return Ok(SidebarNode::Doc(DocNode::new(id))),
        Value::Object(map) => map,
        other => {
            return Err(ConfigError::UnexpectedShape {
                path,
                expected: "a node object or document id string",
                found: kind_name(other),
            })
        }
    };

    let ty = match map.get("type") {
        None => {
            return Err(ConfigError::MissingField {
                path,
                field: "type",
            })
        }
        Some(Value::String(ty)) => ty.as_str(),
        Some(other) => {
            return Err(ConfigError::UnexpectedShape {
                path: path.child(PathSegment::Field("type")),
                expected: "a string",
                found: kind_name(other),
            })
        }
    };

    match ty {
        "doc" => doc_from_map(map, path),
        "category" => category_from_map(map, path),
        "link" => link_node_from_map(map, path),
        "autogenerated" => autogenerated_from_map(map, path),
        other => Err(ConfigError::UnknownType {
            path,
            found: other.to_string(),
        }),
    }
}

fn doc_from_map(map: &Map<String, Value>, path: NodePath) -> Result<SidebarNode, ConfigError> {
    check_fields(map, &["type", "id", "label", "className"], &path)?;

    Ok(SidebarNode::Doc(DocNode {
        id: require_str(map, "id", &path)?,
        label: optional_str(map, "label", &path)?,
        class_name: optional_str(map, "className", &path)?,
    }))
}

fn category_from_map(map: &Map<String, Value>, path: NodePath) -> Result<SidebarNode, ConfigError> {
    check_fields(
        map,
        &[
            "type",
            "label",
            "collapsed",
            "collapsible",
            "items",
            "link",
            "className",
        ],
        &path,
    )?;

    let label = require_str(map, "label", &path)?;
    let collapsible = optional_bool(map, "collapsible", true, &path)?;
    let collapsed = optional_bool(map, "collapsed", true, &path)?;
    // An uncollapsible category cannot start collapsed.
    let collapsed = collapsible && collapsed;

    let items = match map.get("items") {
        None => {
            return Err(ConfigError::MissingField {
                path,
                field: "items",
            })
        }
        Some(Value::Array(items)) => {
            nodes_from_array(items, &path.child(PathSegment::Label(label.clone())))?
        }
        Some(other) => {
            return Err(ConfigError::UnexpectedShape {
                path: path.child(PathSegment::Field("items")),
                expected: "an array of nodes",
                found: kind_name(other),
            })
        }
    };

    let link = map
        .get("link")
        .map(|value| link_from_value(value, path.child(PathSegment::Field("link"))))
        .transpose()?;

    Ok(SidebarNode::Category(CategoryNode {
        label,
        collapsed,
        collapsible,
        items,
        link,
        class_name: optional_str(map, "className", &path)?,
    }))
}

fn link_from_value(value: &Value, path: NodePath) -> Result<CategoryLink, ConfigError> {
    let Value::Object(map) = value else {
        return Err(ConfigError::UnexpectedShape {
            path,
            expected: "a link object",
            found: kind_name(value),
        });
    };

    let ty = match map.get("type") {
        None => {
            return Err(ConfigError::MissingField {
                path,
                field: "type",
            })
        }
        Some(Value::String(ty)) => ty.as_str(),
        Some(other) => {
            return Err(ConfigError::UnexpectedShape {
                path: path.child(PathSegment::Field("type")),
                expected: "a string",
                found: kind_name(other),
            })
        }
    };

    match ty {
        "doc" => {
            check_fields(map, &["type", "id"], &path)?;
            Ok(CategoryLink::Doc {
                id: require_str(map, "id", &path)?,
            })
        }
        "generated-index" => {
            check_fields(map, &["type", "slug", "title", "description"], &path)?;
            Ok(CategoryLink::GeneratedIndex {
                slug: require_str(map, "slug", &path)?,
                title: optional_str(map, "title", &path)?,
                description: optional_str(map, "description", &path)?,
            })
        }
        other => Err(ConfigError::UnknownType {
            path,
            found: other.to_string(),
        }),
    }
}

fn link_node_from_map(
    map: &Map<String, Value>,
    path: NodePath,
) -> Result<SidebarNode, ConfigError> {
    check_fields(map, &["type", "label", "href", "className"], &path)?;

    Ok(SidebarNode::Link(LinkNode {
        label: require_str(map, "label", &path)?,
        href: require_str(map, "href", &path)?,
        class_name: optional_str(map, "className", &path)?,
    }))
}

fn autogenerated_from_map(
    map: &Map<String, Value>,
    path: NodePath,
) -> Result<SidebarNode, ConfigError> {
    check_fields(map, &["type", "dirName", "className"], &path)?;

    Ok(SidebarNode::Autogenerated(AutogeneratedNode {
        dir_name: require_str(map, "dirName", &path)?,
        class_name: optional_str(map, "className", &path)?,
    }))
}

fn require_str(
    map: &Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<String, ConfigError> {
    match map.get(field) {
        None => Err(ConfigError::MissingField {
            path: path.clone(),
            field,
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ConfigError::UnexpectedShape {
            path: path.child(PathSegment::Field(field)),
            expected: "a string",
            found: kind_name(other),
        }),
    }
}

fn optional_str(
    map: &Map<String, Value>,
    field: &'static str,
    path: &NodePath,
) -> Result<Option<String>, ConfigError> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::UnexpectedShape {
            path: path.child(PathSegment::Field(field)),
            expected: "a string",
            found: kind_name(other),
        }),
    }
}

fn optional_bool(
    map: &Map<String, Value>,
    field: &'static str,
    default: bool,
    path: &NodePath,
) -> Result<bool, ConfigError> {
    match map.get(field) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ConfigError::UnexpectedShape {
            path: path.child(PathSegment::Field(field)),
            expected: "a boolean",
            found: kind_name(other),
        }),
    }
}

fn check_fields(
    map: &Map<String, Value>,
    allowed: &[&str],
    path: &NodePath,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(ConfigError::UnknownField {
                path: path.clone(),
                field: key.clone(),
            });
        }
    }
    Ok(())
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_string_shorthand_as_doc() {
        let set = SidebarSet::from_json_str(r#"{"docs": ["introduction"]}"#).unwrap();

        let docs = set.tree("docs").unwrap();
        assert_eq!(docs, [SidebarNode::doc("introduction")]);
    }

    #[test]
    fn loads_doc_object_with_label() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "doc", "id": "introduction", "label": "Introduction"}]}"#,
        )
        .unwrap();

        let SidebarNode::Doc(doc) = &set.tree("docs").unwrap()[0] else {
            panic!("expected doc node");
        };
        assert_eq!(doc.id, "introduction");
        assert_eq!(doc.label.as_deref(), Some("Introduction"));
    }

    #[test]
    fn loads_category_with_defaults() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "category", "label": "Guides", "items": ["guides/index"]}]}"#,
        )
        .unwrap();

        let SidebarNode::Category(cat) = &set.tree("docs").unwrap()[0] else {
            panic!("expected category node");
        };
        assert!(cat.collapsed);
        assert!(cat.collapsible);
        assert_eq!(cat.items.len(), 1);
    }

    #[test]
    fn uncollapsible_category_is_forced_open() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "category", "label": "Guides", "collapsible": false, "collapsed": true, "items": []}]}"#,
        )
        .unwrap();

        let SidebarNode::Category(cat) = &set.tree("docs").unwrap()[0] else {
            panic!("expected category node");
        };
        assert!(!cat.collapsible);
        assert!(!cat.collapsed);
    }

    #[test]
    fn loads_generated_index_link() {
        let set = SidebarSet::from_json_str(
            r#"{"docs": [{
                "type": "category",
                "label": "Embedding models",
                "items": [],
                "link": {"type": "generated-index", "slug": "/embeddings", "title": "Embedding models"}
            }]}"#,
        )
        .unwrap();

        let SidebarNode::Category(cat) = &set.tree("docs").unwrap()[0] else {
            panic!("expected category node");
        };
        assert_eq!(
            cat.link,
            Some(CategoryLink::GeneratedIndex {
                slug: "/embeddings".to_string(),
                title: Some("Embedding models".to_string()),
                description: None,
            })
        );
    }

    #[test]
    fn missing_discriminator_fails_with_position() {
        let err = SidebarSet::from_json_str(r#"{"docs": [{"id": "introduction"}]}"#).unwrap_err();

        match err {
            ConfigError::MissingField { path, field } => {
                assert_eq!(field, "type");
                assert_eq!(path.to_string(), "docs › [0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_type_fails_with_position() {
        let err = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "category", "label": "Guides", "items": [{"type": "panel"}]}]}"#,
        )
        .unwrap_err();

        match err {
            ConfigError::UnknownType { path, found } => {
                assert_eq!(found, "panel");
                assert_eq!(path.to_string(), "docs › [0] › \"Guides\" › [0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_dir_name_fails() {
        let err =
            SidebarSet::from_json_str(r#"{"docs": [{"type": "autogenerated"}]}"#).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "dirName",
                ..
            }
        ));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "autogenerated", "dirname": "guides"}]}"#,
        )
        .unwrap_err();

        match err {
            ConfigError::UnknownField { field, .. } => assert_eq!(field, "dirname"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_link_shape_names_the_link_field() {
        let err = SidebarSet::from_json_str(
            r#"{"docs": [{"type": "category", "label": "Guides", "items": [], "link": {"type": "web"}}]}"#,
        )
        .unwrap_err();

        match err {
            ConfigError::UnknownType { path, found } => {
                assert_eq!(found, "web");
                assert_eq!(path.to_string(), "docs › [0] › link");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_array_tree_is_rejected() {
        let err = SidebarSet::from_json_str(r#"{"docs": {"type": "doc"}}"#).unwrap_err();

        assert!(matches!(err, ConfigError::UnexpectedShape { .. }));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = SidebarSet::from_json_str(r#"["introduction"]"#).unwrap_err();

        assert!(matches!(err, ConfigError::RootShape));
    }

    #[test]
    fn loads_yaml_through_the_same_walker() {
        let set = SidebarSet::from_yaml_str(
            r#"
docs:
  - introduction
  - type: category
    label: Guides
    collapsed: false
    items:
      - type: autogenerated
        dirName: guides
"#,
        )
        .unwrap();

        let docs = set.tree("docs").unwrap();
        assert_eq!(docs[0], SidebarNode::doc("introduction"));
        let SidebarNode::Category(cat) = &docs[1] else {
            panic!("expected category node");
        };
        assert!(!cat.collapsed);
        assert_eq!(
            cat.items[0],
            SidebarNode::Autogenerated(AutogeneratedNode::new("guides"))
        );
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("sidebars.json");
        std::fs::write(&json, r#"{"docs": ["introduction"]}"#).unwrap();
        assert_eq!(SidebarSet::load(&json).unwrap().len(), 1);

        let yaml = dir.path().join("sidebars.yaml");
        std::fs::write(&yaml, "docs:\n  - introduction\n").unwrap();
        assert_eq!(SidebarSet::load(&yaml).unwrap().len(), 1);

        let toml = dir.path().join("sidebars.toml");
        std::fs::write(&toml, "docs = []\n").unwrap();
        assert!(matches!(
            SidebarSet::load(&toml),
            Err(ConfigError::UnsupportedExtension(_))
        ));
    }
}
