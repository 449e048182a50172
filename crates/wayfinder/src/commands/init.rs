//! Scaffold a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing wayfinder...");

    let config_path = Path::new("wayfinder.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write wayfinder.toml")?;
        tracing::info!("Created wayfinder.toml");
    } else {
        tracing::warn!("wayfinder.toml already exists. Use --yes to overwrite.");
    }

    let sidebars_path = Path::new("sidebars.json");
    if !sidebars_path.exists() || yes {
        fs::write(sidebars_path, STARTER_SIDEBARS).context("Failed to write sidebars.json")?;
        tracing::info!("Created sidebars.json");
    } else {
        tracing::warn!("sidebars.json already exists. Use --yes to overwrite.");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'wayfinder check' to validate the configuration.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Wayfinder configuration

[sidebars]
# Navigation configuration consumed by the site build
file = "sidebars.json"

[content]
# Root of the authored documentation tree
dir = "docs"

[output]
# Default export format: "json" or "yaml"
format = "json"
"#;

const STARTER_SIDEBARS: &str = r#"{
  "docs": [
    "index",
    {
      "type": "category",
      "label": "Guides",
      "collapsed": false,
      "items": [
        {
          "type": "autogenerated",
          "dirName": "guides"
        }
      ]
    },
    {
      "type": "link",
      "label": "Community",
      "href": "https://example.com/community"
    }
  ]
}
"#;
