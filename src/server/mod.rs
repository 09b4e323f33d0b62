//! Site server
//!
//! Serves the site directory as static files and the embedded single-page
//! viewer at the root, with the catalog injected into the page as JSON.

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::config::CatalogConfig;
use crate::Viewer;

/// The embedded viewer page; `/*__BOOT__*/null` is replaced with the
/// serialized catalog when the page is served.
const VIEWER_PAGE: &str = include_str!("viewer.html");

const BOOT_PLACEHOLDER: &str = "/*__BOOT__*/null";

/// Server state
struct ServerState {
    base_dir: PathBuf,
    viewer_page: String,
}

/// Catalog data handed to the viewer page
#[derive(Serialize)]
struct BootData<'a> {
    title: &'a str,
    #[serde(rename = "dataDir")]
    data_dir: &'a str,
    #[serde(rename = "defaultCategory")]
    default_category: Option<&'a str>,
    categories: Vec<BootCategory<'a>>,
    player: BootPlayer<'a>,
}

#[derive(Serialize)]
struct BootCategory<'a> {
    key: &'a str,
    path: &'a str,
    label: &'a str,
    files: &'a [String],
}

#[derive(Serialize)]
struct BootPlayer<'a> {
    enable: bool,
    src: &'a str,
    #[serde(rename = "loop")]
    loop_: bool,
}

/// Start the site server
pub async fn start(viewer: &Viewer, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        base_dir: viewer.base_dir.clone(),
        viewer_page: render_viewer_page(&viewer.config)?,
    });

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .fallback(fallback_handler)
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Serving {} at {}", viewer.base_dir.display(), url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Substitute the catalog JSON into the embedded viewer page
fn render_viewer_page(config: &CatalogConfig) -> Result<String> {
    let boot = BootData {
        title: &config.title,
        data_dir: &config.data_dir,
        default_category: config.default_category(),
        categories: config
            .categories
            .iter()
            .map(|(key, cat)| BootCategory {
                key,
                path: &cat.path,
                label: &cat.label,
                files: &cat.files,
            })
            .collect(),
        player: BootPlayer {
            enable: config.player.enable,
            src: &config.player.src,
            loop_: config.player.loop_,
        },
    };

    let json = serde_json::to_string(&boot)?;
    Ok(VIEWER_PAGE.replace(BOOT_PLACEHOLDER, &json))
}

/// Serve the viewer page
async fn index_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(state.viewer_page.clone())
}

/// Serve everything else straight from the site directory
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let mut service = ServeDir::new(&state.base_dir);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_data_is_injected() {
        let yaml = r#"
title: Club Notes
categories:
  english:
    path: english
    label: ENGLISH MEETING
    files: [meetup_001.txt]
"#;
        let config: CatalogConfig = serde_yaml::from_str(yaml).unwrap();
        let page = render_viewer_page(&config).unwrap();

        assert!(!page.contains(BOOT_PLACEHOLDER));
        assert!(page.contains(r#""title":"Club Notes""#));
        assert!(page.contains(r#""defaultCategory":"english""#));
        assert!(page.contains("meetup_001.txt"));
    }

    #[test]
    fn test_viewer_page_has_placeholder() {
        assert!(VIEWER_PAGE.contains(BOOT_PLACEHOLDER));
    }
}
