//! The Digibazzar CLI
//!
//! Thin wrapper around digibazzar-core for browsing the blog from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # First page of the blog listing
//! digibazzar list
//!
//! # Everything visible after pressing "load more" twice
//! digibazzar list --pages 3
//!
//! # Read a post (synthesized article as Markdown)
//! digibazzar show 12
//!
//! # Every post in the catalog
//! digibazzar catalog
//!
//! # Check a custom catalog for malformed entries
//! digibazzar --catalog posts.json validate
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use digibazzar_core::{BlogCard, BlogConfig, BlogSession, DetailView, PostCatalog};

/// The Digibazzar - Blog browser
#[derive(Parser)]
#[command(name = "digibazzar")]
#[command(version = "0.1.0")]
#[command(about = "The Digibazzar - browse the agency blog")]
#[command(
    long_about = "Browse The Digibazzar blog catalog page by page and read synthesized articles from the command line."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON catalog file (default: built-in posts)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Posts per page
    #[arg(short, long, global = true, default_value_t = digibazzar_core::config::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the blog listing
    List {
        /// Number of pages revealed (1 = initial view)
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Open a single post
    Show {
        /// Zero-based catalog index
        index: usize,
        /// Print JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// List every post with its index and accent
    Catalog,

    /// Report malformed catalog entries
    Validate,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load the catalog from `--catalog` or fall back to the built-in posts
fn load_catalog(path: Option<&PathBuf>) -> Result<PostCatalog> {
    match path {
        Some(path) => PostCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog '{}'", path.display())),
        None => Ok(PostCatalog::seed()),
    }
}

fn print_card(card: &BlogCard) {
    println!("[{}] {}", card.index, card.title);
    match &card.date {
        Some(date) => println!("  {} ({}) | {}", card.category, card.accent, date),
        None => println!("  {} ({})", card.category, card.accent),
    }
    if let Some(desc) = &card.desc {
        println!("  {}", desc);
    }
}

fn print_detail(view: &DetailView) {
    println!("# {}", view.title);
    println!();
    println!("Category: {} ({})", view.category, view.accent);
    if !view.date.is_empty() {
        println!("Date: {}", view.date);
    }
    if !view.hero_image.is_empty() {
        println!("Image: {}", view.hero_image);
    }
    println!();
    print!("{}", view.article.to_markdown());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = Arc::new(load_catalog(cli.catalog.as_ref())?);
    tracing::debug!(posts = catalog.len(), "Catalog loaded");
    let config = BlogConfig::default().with_page_size(cli.page_size);
    let mut session = BlogSession::new(catalog, &config)?;

    match cli.command {
        Commands::List { pages, json } => {
            if pages == 0 {
                anyhow::bail!("--pages must be at least 1");
            }
            let listing = session.load_pages(pages);

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else if listing.cards.is_empty() {
                println!("No posts found.");
            } else {
                println!(
                    "Posts ({} of {}):",
                    listing.visible_count(),
                    listing.total
                );
                println!();
                for card in &listing.cards {
                    print_card(card);
                }
                println!();
                if listing.more_available {
                    println!(
                        "More posts available (use --pages {})",
                        pages.saturating_add(1)
                    );
                } else {
                    println!("All posts shown.");
                }
            }
        }

        Commands::Show { index, json } => {
            session.select(index)?;
            let view = session
                .detail()
                .context("Article view was not populated")?;

            if json {
                println!("{}", serde_json::to_string_pretty(view)?);
            } else {
                print_detail(view);
            }
        }

        Commands::Catalog => {
            let catalog = session.catalog();
            println!("Catalog ({} posts):", catalog.len());
            for (index, post) in catalog.posts().iter().enumerate() {
                println!(
                    "  {:>3}  {:<8} {:<14} {}",
                    index,
                    post.accent().as_str(),
                    post.category,
                    post.title
                );
            }
        }

        Commands::Validate => {
            let issues = session.catalog().validate();
            if issues.is_empty() {
                println!("Catalog OK ({} posts).", session.catalog().len());
            } else {
                for issue in &issues {
                    println!("{}", issue);
                }
                anyhow::bail!("{} malformed catalog entries", issues.len());
            }
        }
    }

    Ok(())
}
