//! Tool configuration (wayfinder.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (wayfinder.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub sidebars: SidebarsSection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize)]
pub struct SidebarsSection {
    /// Navigation configuration consumed by the site build
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for SidebarsSection {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentSection {
    /// Root of the authored documentation tree
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputSection {
    /// Default export format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Serialization format for exported configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

fn default_file() -> PathBuf {
    PathBuf::from("sidebars.json")
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("docs")
}

/// Load configuration from wayfinder.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config() -> Result<ToolConfig> {
    let config_path = Path::new("wayfinder.toml");
    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read wayfinder.toml: {}", e))?;
        let config: ToolConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wayfinder.toml: {}", e))?;
        tracing::debug!("Loaded config from wayfinder.toml");
        return Ok(config);
    }
    Ok(ToolConfig::default())
}
