use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use webidl_ast::{ParseOptions, RenderOptions};

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "idl-index.toml";

/// Application configuration with layered defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Accept `class` as an alias of `interface`
    pub allow_class: bool,

    /// Accept `extends` as an alternative to `:` for inheritance
    pub allow_extends: bool,

    /// Accept `typedef` members inside interface bodies
    pub allow_nested_typedefs: bool,

    /// Keep comments and whitespace from the fragments in the output
    pub capture_trivia: bool,

    /// Text inserted between two fragments
    pub separator: String,

    /// Fold partial definitions into their canonical definition
    pub merge_partials: bool,

    /// Lay the index out with aligned, indented members
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_class: false,
            allow_extends: false,
            allow_nested_typedefs: false,
            capture_trivia: false,
            separator: "\n".to_string(),
            merge_partials: true,
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence: defaults,
    /// then the given file (or `idl-index.toml` in the working directory if
    /// it exists).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let file_config = match path {
            Some(path) => Some(Self::load_from_file(path)?),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Some(Self::load_from_file(default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file_config) = file_config {
            config.merge(file_config);
        }

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    pub fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.allow_class {
            self.allow_class = val;
        }
        if let Some(val) = other.allow_extends {
            self.allow_extends = val;
        }
        if let Some(val) = other.allow_nested_typedefs {
            self.allow_nested_typedefs = val;
        }
        if let Some(val) = other.capture_trivia {
            self.capture_trivia = val;
        }
        if let Some(val) = other.separator {
            self.separator = val;
        }
        if let Some(val) = other.merge_partials {
            self.merge_partials = val;
        }
        if let Some(val) = other.pretty {
            self.pretty = val;
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow_class: self.allow_class,
            allow_extends: self.allow_extends,
            allow_nested_typedefs: self.allow_nested_typedefs,
            capture_trivia: self.capture_trivia,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            parse: self.parse_options(),
            merge_partials: self.merge_partials,
            pretty: self.pretty,
        }
    }
}

/// Partial configuration with optional fields, read from TOML or built
/// from command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialConfig {
    pub allow_class: Option<bool>,
    pub allow_extends: Option<bool>,
    pub allow_nested_typedefs: Option<bool>,
    pub capture_trivia: Option<bool>,
    pub separator: Option<String>,
    pub merge_partials: Option<bool>,
    pub pretty: Option<bool>,
}
