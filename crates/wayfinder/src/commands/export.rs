//! Canonical re-serialization command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use wayfinder_sidebar::SidebarSet;

use crate::config::{load_config, OutputFormat};

/// Run the export command.
pub fn run(
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config()?;
    let file = file.unwrap_or(config.sidebars.file);
    let format = format.unwrap_or(config.output.format);

    let set = SidebarSet::load(&file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let rendered = render(&set, format)?;

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

pub fn render(set: &SidebarSet, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => set.to_json_string()?,
        OutputFormat::Yaml => set.to_yaml_string()?,
    })
}
