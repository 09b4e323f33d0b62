//! Show a post in the terminal

use anyhow::Result;

use crate::content::PostLoader;
use crate::fetch::{DirFetcher, Fetch, HttpFetcher};
use crate::helpers::strip_html;
use crate::state::ViewerState;
use crate::Viewer;

/// Options for the show command
pub struct ShowOptions<'a> {
    /// Category key; defaults to the catalog's default category
    pub category: Option<&'a str>,
    /// Post id (filename); defaults to the first post
    pub post: Option<&'a str>,
    /// Fetch from a served site instead of the local directory
    pub url: Option<&'a str>,
    /// Print the selected post as JSON
    pub json: bool,
    /// Print the body verbatim instead of stripping HTML tags
    pub raw: bool,
}

/// Load a category and print the selected post
pub async fn run(viewer: &Viewer, opts: ShowOptions<'_>) -> Result<()> {
    let key = match opts.category.or_else(|| viewer.default_category()) {
        Some(key) => key,
        None => anyhow::bail!("The catalog has no categories"),
    };

    let Some(category) = viewer.config.category(key) else {
        anyhow::bail!("Unknown category: {}", key);
    };

    let fetcher: Box<dyn Fetch> = match opts.url {
        Some(base) => Box::new(HttpFetcher::new(base)),
        None => Box::new(DirFetcher::new(&viewer.base_dir)),
    };
    let loader = PostLoader::new(fetcher, viewer.config.data_dir.as_str());

    let mut state = ViewerState::new();
    let ticket = state.begin_load(key);
    let posts = loader.load_category(category).await;
    state.finish_load(ticket, posts);

    if let Some(id) = opts.post {
        if !state.select(id) {
            anyhow::bail!("Unknown post in {}: {}", key, id);
        }
    }

    let Some(post) = state.selected_post() else {
        println!("No meeting schedule yet.");
        return Ok(());
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    println!("{}", post.title);
    println!("{}", "=".repeat(post.title.chars().count().max(8)));
    if opts.raw {
        println!("{}", post.content);
    } else {
        println!("{}", strip_html(&post.content).trim());
    }

    Ok(())
}
