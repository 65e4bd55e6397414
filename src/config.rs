use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    /// Prepended to user ids and room aliases to build mention links.
    pub permalink_base: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            permalink_base: "https://matrix.to/#/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HtmlConfig {
    /// Escape user-supplied text before embedding it in markup.
    pub escape: bool,
}

impl Config {
    /// The configuration bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // build.rs checks the bundled file parses
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::compiled_default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                Self::compiled_default()
            }
        }
    }
}
