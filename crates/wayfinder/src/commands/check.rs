//! Configuration validation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use wayfinder_expand::{check_references, FsProvider};
use wayfinder_sidebar::SidebarSet;

use crate::config::load_config;

/// Run the check command.
pub fn run(file: Option<PathBuf>, content_dir: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let file = file.unwrap_or(config.sidebars.file);

    let set = SidebarSet::load(&file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    tracing::info!("Loaded {} sidebar trees from {}", set.len(), file.display());
    for (name, nodes) in set.iter() {
        tracing::debug!("{}: {} top-level nodes", name, nodes.len());
    }

    if let Some(dir) = content_dir {
        let provider = FsProvider::new(&dir);
        let dangling = check_references(&set, &provider);

        if !dangling.is_empty() {
            for reference in &dangling {
                tracing::error!("{}", reference);
            }
            anyhow::bail!(
                "{} dangling references against {}",
                dangling.len(),
                dir.display()
            );
        }

        tracing::info!("All references resolve against {}", dir.display());
    }

    Ok(())
}
