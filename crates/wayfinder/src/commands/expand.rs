//! Autogenerated expansion command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wayfinder_expand::FsProvider;
use wayfinder_sidebar::SidebarSet;

use crate::commands::export::render;
use crate::config::{load_config, OutputFormat};

/// Run the expand command.
pub fn run(
    file: Option<PathBuf>,
    content_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config()?;
    let file = file.unwrap_or(config.sidebars.file);
    let content_dir = content_dir.unwrap_or(config.content.dir);
    let format = format.unwrap_or(config.output.format);

    let set = SidebarSet::load(&file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let provider = FsProvider::new(&content_dir);
    let expanded = wayfinder_expand::expand(&set, &provider)
        .with_context(|| format!("Failed to expand against {}", content_dir.display()))?;

    let rendered = render(&expanded, format)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
