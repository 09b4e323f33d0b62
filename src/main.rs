//! CLI entry point for meetnotes

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meetnotes")]
#[command(version = "0.1.0")]
#[command(about = "A tiny meeting-notes viewer", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new notes site with a sample catalog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List categories, or the posts of one category
    #[command(alias = "ls")]
    List {
        /// Category key
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post in the terminal
    Show {
        /// Category key (defaults to the catalog's default category)
        category: Option<String>,

        /// Post id (filename); defaults to the first post
        #[arg(short, long)]
        post: Option<String>,

        /// Fetch from a served site instead of the local directory
        #[arg(long)]
        url: Option<String>,

        /// Output the post as JSON
        #[arg(long)]
        json: bool,

        /// Print the body verbatim instead of stripping HTML tags
        #[arg(long)]
        raw: bool,
    },

    /// Cross-check the catalog against the data directory
    Check,

    /// Serve the site with the embedded viewer page
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "meetnotes=debug,info"
    } else {
        "meetnotes=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine site directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing notes site in {:?}", target_dir);
            meetnotes::commands::init::init_site(&target_dir)?;
            println!("Initialized notes site in {:?}", target_dir);
        }

        Commands::List { category, json } => {
            let viewer = meetnotes::Viewer::new(&base_dir)?;
            meetnotes::commands::list::run(&viewer, category.as_deref(), json).await?;
        }

        Commands::Show {
            category,
            post,
            url,
            json,
            raw,
        } => {
            let viewer = meetnotes::Viewer::new(&base_dir)?;
            let opts = meetnotes::commands::show::ShowOptions {
                category: category.as_deref(),
                post: post.as_deref(),
                url: url.as_deref(),
                json,
                raw,
            };
            meetnotes::commands::show::run(&viewer, opts).await?;
        }

        Commands::Check => {
            let viewer = meetnotes::Viewer::new(&base_dir)?;
            meetnotes::commands::check::run(&viewer)?;
        }

        Commands::Serve { port, ip, open } => {
            let viewer = meetnotes::Viewer::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            meetnotes::server::start(&viewer, &ip, port, open).await?;
        }

        Commands::Version => {
            println!("meetnotes version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
