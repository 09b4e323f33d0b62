//! Fetch seam - how note files are retrieved
//!
//! The loader only ever sees the [`Fetch`] trait, so the same code path works
//! against a served site (HTTP), a directory on disk, or a stub in tests.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// A note file could not be retrieved
///
/// The single failure kind of the fetch layer; network errors, non-success
/// responses and filesystem errors all collapse into it.
#[derive(Debug, Error)]
#[error("file unavailable: {path} ({reason})")]
pub struct FileUnavailable {
    pub path: String,
    pub reason: String,
}

impl FileUnavailable {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Retrieves the text of a note file by site-relative path
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, rel: &str) -> Result<String, FileUnavailable>;
}

/// Fetches note files from a served site over HTTP
///
/// Any OK-range response counts as success; everything else is treated as
/// not-found.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: String,
}

impl HttpFetcher {
    /// Create a fetcher rooted at a base URL
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, rel: &str) -> Result<String, FileUnavailable> {
        let url = format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            rel.trim_start_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FileUnavailable::new(rel, e.to_string()))?;

        if !response.status().is_success() {
            return Err(FileUnavailable::new(
                rel,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| FileUnavailable::new(rel, e.to_string()))
    }
}

/// Fetches note files from a site directory on disk
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at a site directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Fetch for DirFetcher {
    async fn fetch(&self, rel: &str) -> Result<String, FileUnavailable> {
        let path = self.root.join(rel.trim_start_matches('/'));
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FileUnavailable::new(rel, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dir_fetcher_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data/english");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("meetup_001.txt"), "Title\nBody").unwrap();

        let fetcher = DirFetcher::new(dir.path());
        let text = fetcher.fetch("data/english/meetup_001.txt").await.unwrap();
        assert_eq!(text, "Title\nBody");
    }

    #[tokio::test]
    async fn test_dir_fetcher_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path());

        let err = fetcher.fetch("data/english/nope.txt").await.unwrap_err();
        assert_eq!(err.path, "data/english/nope.txt");
        assert!(err.to_string().contains("file unavailable"));
    }
}
