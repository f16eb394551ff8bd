//! Generation requests loaded from TOML.
//!
//! # Example TOML
//!
//! ```toml
//! extensions = ["typingLabel", "pieMenu"]
//! platforms = ["core", "lwjgl3", "html"]
//!
//! [project]
//! name = "demo"
//! version = "0.0.1"
//! java_version = "8"
//! language = "java"
//!
//! [overrides]
//! typingLabel = "1.3.0"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::Platforms;

/// Source language of the generated modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Kotlin,
}

impl Language {
    /// Plugins every non-root module needs for this language.
    pub fn plugins(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["java-library"],
            Language::Kotlin => &["java-library", "kotlin"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => write!(f, "java"),
            Language::Kotlin => write!(f, "kotlin"),
        }
    }
}

/// Global project metadata consumed by the root build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMetadata {
    pub name: String,
    /// Semantic version of the generated project.
    #[serde(default = "default_project_version")]
    pub version: String,
    /// Source compatibility level.
    #[serde(default = "default_java_version")]
    pub java_version: String,
    #[serde(default)]
    pub language: Language,
}

impl ProjectMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_project_version(),
            java_version: default_java_version(),
            language: Language::default(),
        }
    }
}

fn default_project_version() -> String {
    "1.0.0".to_string()
}

fn default_java_version() -> String {
    "8".to_string()
}

fn default_platforms() -> Vec<String> {
    vec!["core".to_string(), "lwjgl3".to_string()]
}

/// Everything a generation run takes as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationRequest {
    pub project: ProjectMetadata,
    /// Active platform ids.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    /// Selected extension ids, in selection order.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// User version overrides keyed by extension id.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl GenerationRequest {
    /// Create a request with the default platforms and no selection.
    pub fn new(project: ProjectMetadata) -> Self {
        Self {
            project,
            platforms: default_platforms(),
            extensions: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_platforms<S: Into<String>>(mut self, platforms: impl IntoIterator<Item = S>) -> Self {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn select(mut self, id: impl Into<String>) -> Self {
        self.extensions.push(id.into());
        self
    }

    /// Override an extension version. A later override for the same id wins.
    pub fn with_override(mut self, id: impl Into<String>, version: impl Into<String>) -> Self {
        self.overrides.insert(id.into(), version.into());
        self
    }

    /// Parse and validate a request from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let request: Self = toml::from_str(content)?;
        request.validate()?;
        Ok(request)
    }

    /// Load and validate a request file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::RequestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check the project version and platform ids.
    pub fn validate(&self) -> Result<()> {
        semver::Version::parse(&self.project.version).map_err(|source| Error::InvalidVersion {
            version: self.project.version.clone(),
            source,
        })?;
        self.platforms()?;
        Ok(())
    }

    /// The active platform registry for this request.
    pub fn platforms(&self) -> Result<Platforms> {
        Platforms::from_ids(&self.platforms)
    }
}
