//! meetnotes: a tiny meeting-notes viewer
//!
//! This crate loads a catalog of categorized plain-text note files, fetches
//! and parses them into posts, and serves them as a single-page site with a
//! matching command-line interface.

pub mod commands;
pub mod config;
pub mod content;
pub mod fetch;
pub mod helpers;
pub mod server;
pub mod state;

use anyhow::Result;
use std::path::Path;

/// Name of the catalog file looked up in the site directory.
pub const CATALOG_FILE: &str = "_catalog.yml";

/// The main viewer application
#[derive(Clone)]
pub struct Viewer {
    /// Site catalog
    pub config: config::CatalogConfig,
    /// Site directory (holds the catalog and the data tree)
    pub base_dir: std::path::PathBuf,
    /// Data directory (note files, grouped by category path)
    pub data_dir: std::path::PathBuf,
}

impl Viewer {
    /// Create a new viewer instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let catalog_path = base_dir.join(CATALOG_FILE);

        let config = if catalog_path.exists() {
            config::CatalogConfig::load(&catalog_path)?
        } else {
            config::CatalogConfig::default()
        };

        let data_dir = base_dir.join(&config.data_dir);

        Ok(Self {
            config,
            base_dir,
            data_dir,
        })
    }

    /// The category key to show when none was asked for
    pub fn default_category(&self) -> Option<&str> {
        self.config.default_category()
    }
}
