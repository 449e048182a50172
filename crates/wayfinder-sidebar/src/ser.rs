//! Canonical serialization back to the literal configuration form.
//!
//! A document reference carrying only an id collapses back to the
//! bare-string shorthand; every other node serializes as a tagged object
//! with absent optionals omitted. Reloading the emitted form yields a set
//! equal to the one serialized.

use serde_json::{json, Map, Value};

use crate::error::ConfigError;
use crate::node::{CategoryLink, CategoryNode, DocNode, SidebarNode};
use crate::set::SidebarSet;

impl SidebarSet {
    /// Emit the whole set as a configuration value.
    pub fn to_value(&self) -> Value {
        let mut trees = Map::new();
        for (name, nodes) in self.iter() {
            trees.insert(
                name.to_string(),
                Value::Array(nodes.iter().map(node_to_value).collect()),
            );
        }
        Value::Object(trees)
    }

    /// Emit pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        let mut out = serde_json::to_string_pretty(&self.to_value())?;
        out.push('\n');
        Ok(out)
    }

    /// Emit YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.to_value())?)
    }
}

fn node_to_value(node: &SidebarNode) -> Value {
    match node {
        SidebarNode::Doc(doc) => doc_to_value(doc),
        SidebarNode::Category(cat) => category_to_value(cat),
        SidebarNode::Link(link) => {
            let mut map = Map::new();
            map.insert("type".to_string(), json!("link"));
            map.insert("label".to_string(), json!(link.label));
            map.insert("href".to_string(), json!(link.href));
            if let Some(class) = &link.class_name {
                map.insert("className".to_string(), json!(class));
            }
            Value::Object(map)
        }
        SidebarNode::Autogenerated(auto) => {
            let mut map = Map::new();
            map.insert("type".to_string(), json!("autogenerated"));
            map.insert("dirName".to_string(), json!(auto.dir_name));
            if let Some(class) = &auto.class_name {
                map.insert("className".to_string(), json!(class));
            }
            Value::Object(map)
        }
    }
}

fn doc_to_value(doc: &DocNode) -> Value {
    if doc.is_bare() {
        return json!(doc.id);
    }

    let mut map = Map::new();
    map.insert("type".to_string(), json!("doc"));
    map.insert("id".to_string(), json!(doc.id));
    if let Some(label) = &doc.label {
        map.insert("label".to_string(), json!(label));
    }
    if let Some(class) = &doc.class_name {
        map.insert("className".to_string(), json!(class));
    }
    Value::Object(map)
}

fn category_to_value(cat: &CategoryNode) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), json!("category"));
    map.insert("label".to_string(), json!(cat.label));
    if !cat.collapsible {
        map.insert("collapsible".to_string(), json!(false));
    }
    // The consumer defaults collapsed to true; only deviations are written.
    if cat.collapsible && !cat.collapsed {
        map.insert("collapsed".to_string(), json!(false));
    }
    map.insert(
        "items".to_string(),
        Value::Array(cat.items.iter().map(node_to_value).collect()),
    );
    if let Some(link) = &cat.link {
        map.insert("link".to_string(), link_to_value(link));
    }
    if let Some(class) = &cat.class_name {
        map.insert("className".to_string(), json!(class));
    }
    Value::Object(map)
}

fn link_to_value(link: &CategoryLink) -> Value {
    match link {
        CategoryLink::Doc { id } => json!({"type": "doc", "id": id}),
        CategoryLink::GeneratedIndex {
            slug,
            title,
            description,
        } => {
            let mut map = Map::new();
            map.insert("type".to_string(), json!("generated-index"));
            map.insert("slug".to_string(), json!(slug));
            if let Some(title) = title {
                map.insert("title".to_string(), json!(title));
            }
            if let Some(description) = description {
                map.insert("description".to_string(), json!(description));
            }
            Value::Object(map)
        }
    }
}
