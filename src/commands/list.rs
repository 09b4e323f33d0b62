//! List catalog content

use anyhow::Result;
use serde_json::json;

use crate::content::PostLoader;
use crate::fetch::DirFetcher;
use crate::Viewer;

/// List categories, or the posts of one category
pub async fn run(viewer: &Viewer, category: Option<&str>, json: bool) -> Result<()> {
    match category {
        None => list_categories(viewer, json),
        Some(key) => list_posts(viewer, key, json).await,
    }
}

fn list_categories(viewer: &Viewer, json: bool) -> Result<()> {
    if json {
        let summary: Vec<_> = viewer
            .config
            .categories
            .iter()
            .map(|(key, cat)| {
                json!({
                    "key": key,
                    "label": cat.label,
                    "path": cat.path,
                    "files": cat.files,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Categories ({}):", viewer.config.categories.len());
    for (key, cat) in &viewer.config.categories {
        println!("  {} - {} ({} notes)", key, cat.label, cat.files.len());
    }

    Ok(())
}

async fn list_posts(viewer: &Viewer, key: &str, json: bool) -> Result<()> {
    let Some(category) = viewer.config.category(key) else {
        anyhow::bail!(
            "Unknown category: {}. Available: {}",
            key,
            viewer
                .config
                .categories
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    let fetcher = DirFetcher::new(&viewer.base_dir);
    let loader = PostLoader::new(Box::new(fetcher), viewer.config.data_dir.as_str());
    let posts = loader.load_category(category).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {}", post.id, post.title);
    }

    Ok(())
}
