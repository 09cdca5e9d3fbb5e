#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use digibazzar_core::{BlogConfig, BlogSession, PostCatalog};

/// Session every window starts from, set once from command line
static INITIAL_SESSION: OnceLock<BlogSession> = OnceLock::new();

/// Session settings resolved at startup
static BLOG_CONFIG: OnceLock<BlogConfig> = OnceLock::new();

/// Get a fresh blog session (built-in catalog if none was configured)
pub fn initial_session() -> BlogSession {
    INITIAL_SESSION
        .get()
        .cloned()
        .unwrap_or_else(BlogSession::with_seed)
}

/// Get the blog configuration (defaults if none was configured)
pub fn blog_config() -> BlogConfig {
    BLOG_CONFIG.get().cloned().unwrap_or_default()
}

/// The Digibazzar - Digital marketing agency site
#[derive(Parser, Debug)]
#[command(name = "digibazzar-desktop")]
#[command(about = "The Digibazzar - agency website with blog")]
struct Args {
    /// JSON catalog file (default: built-in posts)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Posts revealed per "load more"
    #[arg(short, long, default_value_t = digibazzar_core::config::DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let catalog = match args.catalog {
        Some(ref path) => PostCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog '{}'", path.display()))?,
        None => PostCatalog::seed(),
    };

    let config = BlogConfig::default().with_page_size(args.page_size);
    let session = BlogSession::new(Arc::new(catalog), &config)?;

    tracing::info!(
        posts = session.catalog().len(),
        page_size = config.page_size,
        "Starting The Digibazzar"
    );

    let _ = INITIAL_SESSION.set(session);
    let _ = BLOG_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("The Digibazzar")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
