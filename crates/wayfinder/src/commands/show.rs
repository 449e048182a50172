//! Tree outline command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use wayfinder_sidebar::{SidebarNode, SidebarSet};

use crate::config::load_config;

/// Run the show command.
pub fn run(file: Option<PathBuf>, tree: Option<String>) -> Result<()> {
    let config = load_config()?;
    let file = file.unwrap_or(config.sidebars.file);

    let set = SidebarSet::load(&file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    match tree {
        Some(name) => {
            let nodes = set
                .tree(&name)
                .with_context(|| format!("No sidebar tree named \"{name}\""))?;
            print_tree(&name, nodes);
        }
        None => {
            for (name, nodes) in set.iter() {
                print_tree(name, nodes);
            }
        }
    }

    Ok(())
}

fn print_tree(name: &str, nodes: &[SidebarNode]) {
    println!("{name}");
    print_nodes(nodes, 1);
}

fn print_nodes(nodes: &[SidebarNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        let hidden = if node.is_hidden() { " (hidden)" } else { "" };
        match node {
            SidebarNode::Doc(doc) => match &doc.label {
                Some(label) => println!("{indent}{label} <{}>{hidden}", doc.id),
                None => println!("{indent}<{}>{hidden}", doc.id),
            },
            SidebarNode::Category(cat) => {
                println!("{indent}{}{hidden}", cat.label);
                print_nodes(&cat.items, depth + 1);
            }
            SidebarNode::Link(link) => {
                println!("{indent}{} -> {}{hidden}", link.label, link.href);
            }
            SidebarNode::Autogenerated(auto) => {
                println!("{indent}{}/*{hidden}", auto.dir_name);
            }
        }
    }
}
