//! Category loader - fetches and parses the note files of one category

use futures::future::join_all;

use super::Post;
use crate::config::CategoryConfig;
use crate::fetch::Fetch;

/// Loads the posts of a category through a [`Fetch`] implementation
///
/// Files are fetched concurrently; the returned posts always follow the
/// category's file order, one post per listed file. A file that cannot be
/// fetched becomes an error placeholder instead of a missing entry.
pub struct PostLoader {
    fetcher: Box<dyn Fetch>,
    data_dir: String,
}

impl PostLoader {
    /// Create a new loader
    pub fn new(fetcher: Box<dyn Fetch>, data_dir: impl Into<String>) -> Self {
        Self {
            fetcher,
            data_dir: data_dir.into(),
        }
    }

    /// Load all posts of a category, in file order
    pub async fn load_category(&self, category: &CategoryConfig) -> Vec<Post> {
        let fetches = category
            .files
            .iter()
            .map(|filename| self.load_file(&category.path, filename));

        join_all(fetches).await
    }

    /// Load a single note file
    async fn load_file(&self, dir: &str, filename: &str) -> Post {
        let rel = format!("{}/{}/{}", self.data_dir, dir, filename);

        match self.fetcher.fetch(&rel).await {
            Ok(text) => Post::parse(filename, &text),
            Err(e) => {
                tracing::warn!("Failed to load note: {}", e);
                Post::unavailable(filename)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FileUnavailable;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// In-memory fetcher with per-file delays and a shared call counter
    struct StubFetcher {
        files: HashMap<String, String>,
        delays: HashMap<String, u64>,
        calls: Arc<AtomicUsize>,
    }

    impl StubFetcher {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                delays: HashMap::new(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn with_delay(mut self, rel: &str, millis: u64) -> Self {
            self.delays.insert(rel.to_string(), millis);
            self
        }

        fn counter(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn fetch(&self, rel: &str) -> Result<String, FileUnavailable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(millis) = self.delays.get(rel) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }
            self.files
                .get(rel)
                .cloned()
                .ok_or_else(|| FileUnavailable::new(rel, "not found"))
        }
    }

    fn category(files: &[&str]) -> CategoryConfig {
        CategoryConfig {
            path: "english".to_string(),
            label: "English".to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_posts_keep_file_order_despite_completion_order() {
        // the first file finishes last
        let stub = StubFetcher::new(&[
            ("data/english/a.txt", "A title\nA body"),
            ("data/english/b.txt", "B title\nB body"),
            ("data/english/c.txt", "C title\nC body"),
        ])
        .with_delay("data/english/a.txt", 40)
        .with_delay("data/english/b.txt", 20);

        let loader = PostLoader::new(Box::new(stub), "data");
        let posts = loader
            .load_category(&category(&["a.txt", "b.txt", "c.txt"]))
            .await;

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(posts[0].title, "A title");
    }

    #[tokio::test]
    async fn test_failed_file_becomes_placeholder() {
        let stub = StubFetcher::new(&[
            ("data/english/ok.txt", "Fine\nBody"),
            // gone.txt intentionally absent
        ]);

        let loader = PostLoader::new(Box::new(stub), "data");
        let posts = loader
            .load_category(&category(&["ok.txt", "gone.txt"]))
            .await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Fine");
        assert_eq!(posts[1].title, "Error");
        assert_eq!(posts[1].content, "File not found");
        // the placeholder still carries the filename as id
        assert_eq!(posts[1].id, "gone.txt");
    }

    #[tokio::test]
    async fn test_empty_file_list_loads_nothing() {
        let stub = StubFetcher::new(&[]);
        let loader = PostLoader::new(Box::new(stub), "data");

        let posts = loader.load_category(&category(&[])).await;
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_select_does_not_refetch() {
        let stub = StubFetcher::new(&[
            ("data/english/a.txt", "A\nx"),
            ("data/english/b.txt", "B\ny"),
        ]);
        let calls = stub.counter();
        let loader = PostLoader::new(Box::new(stub), "data");

        let mut state = crate::state::ViewerState::new();
        let ticket = state.begin_load("english");
        let posts = loader.load_category(&category(&["a.txt", "b.txt"])).await;
        state.finish_load(ticket, posts);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(state.select("b.txt"));
        assert_eq!(state.selected_post().unwrap().id, "b.txt");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_one_fetch_per_file() {
        let stub = StubFetcher::new(&[
            ("data/english/a.txt", "A\nx"),
            ("data/english/b.txt", "B\ny"),
        ]);
        let calls = stub.counter();
        let loader = PostLoader::new(Box::new(stub), "data");

        let posts = loader.load_category(&category(&["a.txt", "b.txt"])).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
