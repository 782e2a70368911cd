//! Process-wide configuration
//!
//! Layered lowest to highest: defaults, an optional TOML file, environment.
//! The result is frozen behind an `Arc` once the pipeline is built.

use crate::error::ForgeError;
use forge_deploy::HostingConfig;
use forge_generate::GenerativeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shortest accepted idea, in trimmed characters
pub const DEFAULT_MIN_IDEA_CHARS: usize = 10;

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_NETLIFY_TOKEN: &str = "NETLIFY_TOKEN";
pub const ENV_NETLIFY_API_BASE: &str = "NETLIFY_API_BASE";
pub const ENV_DEPLOY_ENABLED: &str = "PROMPTFORGE_DEPLOY_ENABLED";
pub const ENV_TEMPLATES_DIR: &str = "PROMPTFORGE_TEMPLATES_DIR";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub generative: GenerativeConfig,
    pub hosting: HostingConfig,
    /// Directory overlaying the built-in templates
    pub templates_dir: Option<PathBuf>,
    pub min_idea_chars: usize,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            generative: GenerativeConfig::default(),
            hosting: HostingConfig::default(),
            templates_dir: None,
            min_idea_chars: DEFAULT_MIN_IDEA_CHARS,
        }
    }
}

impl ForgeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ForgeError::Config`] on invalid TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ForgeError> {
        toml::from_str(text).map_err(|e| ForgeError::config(e.to_string()))
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// [`ForgeError::Io`] if unreadable, [`ForgeError::Config`] if invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ForgeError> {
        let text = std::fs::read_to_string(path).map_err(|source| ForgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
            .map_err(|e| ForgeError::config(format!("{}: {e}", path.display())))
    }

    /// File (if any), then process environment
    ///
    /// # Errors
    /// Propagates file errors and invalid environment values.
    pub fn load(path: Option<&Path>) -> Result<Self, ForgeError> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// # Errors
    /// Returns [`ForgeError::Config`] if the deploy switch is not a boolean.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ForgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(ENV_OPENAI_API_KEY) {
            self.generative.api_key = Some(key);
        }
        if let Some(url) = get(ENV_OPENAI_BASE_URL) {
            self.generative.base_url = url;
        }
        if let Some(model) = get(ENV_OPENAI_MODEL) {
            self.generative.model = model;
        }
        if let Some(token) = get(ENV_NETLIFY_TOKEN) {
            self.hosting.token = Some(token);
        }
        if let Some(base) = get(ENV_NETLIFY_API_BASE) {
            self.hosting.api_base = base;
        }
        if let Some(flag) = get(ENV_DEPLOY_ENABLED) {
            self.hosting.enabled = parse_flag(&flag).ok_or_else(|| {
                ForgeError::config(format!("{ENV_DEPLOY_ENABLED}: expected a boolean, got '{flag}'"))
            })?;
        }
        if let Some(dir) = get(ENV_TEMPLATES_DIR) {
            self.templates_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_generative(mut self, generative: GenerativeConfig) -> Self {
        self.generative = generative;
        self
    }

    #[must_use]
    pub fn with_hosting(mut self, hosting: HostingConfig) -> Self {
        self.hosting = hosting;
        self
    }

    #[must_use]
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_min_idea_chars(mut self, min: usize) -> Self {
        self.min_idea_chars = min;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
