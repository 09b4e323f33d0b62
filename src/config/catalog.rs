//! Site catalog (_catalog.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site catalog
///
/// Maps category keys to their storage path, display label and file list,
/// plus a handful of site-level settings. Category order follows the
/// declaration order in the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    // Site
    pub title: String,
    pub language: String,

    // Directory
    pub data_dir: String,

    // Viewer
    /// Category shown on startup; empty means the first catalog entry
    pub default_category: String,
    #[serde(default)]
    pub player: PlayerConfig,

    // Content
    #[serde(default)]
    pub categories: IndexMap<String, CategoryConfig>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            title: "Meeting Notes".to_string(),
            language: "en".to_string(),

            data_dir: "data".to_string(),

            default_category: String::new(),
            player: PlayerConfig::default(),

            categories: IndexMap::new(),
            extra: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Load a catalog from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: CatalogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Look up a category by key
    pub fn category(&self, key: &str) -> Option<&CategoryConfig> {
        self.categories.get(key)
    }

    /// The configured default category, falling back to the first entry
    pub fn default_category(&self) -> Option<&str> {
        if !self.default_category.is_empty() {
            if self.categories.contains_key(&self.default_category) {
                return Some(self.default_category.as_str());
            }
            tracing::warn!(
                "default_category '{}' is not in the catalog",
                self.default_category
            );
        }
        self.categories.keys().next().map(|k| k.as_str())
    }
}

/// One category of note files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Storage directory under the data dir
    pub path: String,
    /// Display label shown in the viewer
    pub label: String,
    /// Note files, in display order
    #[serde(default)]
    pub files: Vec<String>,
}

/// Background-music player settings for the viewer page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub enable: bool,
    /// Site-relative path of the audio file
    pub src: String,
    #[serde(rename = "loop")]
    pub loop_: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            enable: false,
            src: String::new(),
            loop_: true,
        }
    }
}
