//! Cross-check the catalog against the data directory

use anyhow::Result;
use std::collections::BTreeSet;
use walkdir::WalkDir;

use crate::Viewer;

/// Result of a catalog/data-directory comparison
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Listed in the catalog but absent on disk (relative to the data dir)
    pub missing: Vec<String>,
    /// Present on disk but not listed in any category
    pub unlisted: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unlisted.is_empty()
    }
}

/// Compare the catalog's file lists with the files actually on disk
pub fn scan(viewer: &Viewer) -> Result<CheckReport> {
    let mut listed = BTreeSet::new();
    let mut report = CheckReport::default();

    for category in viewer.config.categories.values() {
        for filename in &category.files {
            let rel = format!("{}/{}", category.path, filename);
            if !viewer.data_dir.join(&rel).is_file() {
                report.missing.push(rel.clone());
            }
            listed.insert(rel);
        }
    }

    if viewer.data_dir.exists() {
        for entry in WalkDir::new(&viewer.data_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let rel = path
                .strip_prefix(&viewer.data_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");

            // dotfiles and editor leftovers are not note files
            if rel.split('/').any(|part| part.starts_with('.')) || rel.ends_with('~') {
                continue;
            }

            if !listed.contains(&rel) {
                report.unlisted.push(rel);
            }
        }
    }

    Ok(report)
}

/// Run the check command and print the report
pub fn run(viewer: &Viewer) -> Result<()> {
    let report = scan(viewer)?;

    if report.is_clean() {
        println!("Catalog and data directory are consistent.");
        return Ok(());
    }

    if !report.missing.is_empty() {
        println!("Missing files ({}):", report.missing.len());
        for rel in &report.missing {
            println!("  {}", rel);
        }
    }

    if !report.unlisted.is_empty() {
        println!("Unlisted files ({}):", report.unlisted.len());
        for rel in &report.unlisted {
            println!("  {}", rel);
        }
    }

    Ok(())
}
