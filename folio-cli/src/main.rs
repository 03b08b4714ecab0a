//! Folio CLI - Terminal front end for the book catalog

mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::types::{parse_assignment, Field};
use folio_core::{ClientConfig, HttpBookApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a `field=value` assignment for `edit --set`
fn parse_set(s: &str) -> Result<(Field, String), String> {
    parse_assignment(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog API base URL (overrides FOLIO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, 0 for none (overrides FOLIO_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all books in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of a book
    Show {
        /// ISBN of the book
        isbn: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a book and save the changes
    Edit {
        /// ISBN of the book
        isbn: String,

        /// Field assignment, e.g. --set title="Dune Messiah" (repeatable)
        #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_set)]
        set: Vec<(Field, String)>,

        /// Report errors for every field, not only the assigned ones
        #[arg(long)]
        touch_all: bool,
    },

    /// Open a screen by its route path, e.g. /books/<isbn>/edit
    Open {
        /// Route path; unknown paths show the book list
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()
        .and_then(|c| c.with_overrides(cli.api_url.as_deref(), cli.timeout.as_deref()))
        .context("Invalid configuration")?;
    tracing::debug!("using catalog API at {}", config.endpoint());

    let api = HttpBookApi::new(&config)?;

    match cli.command {
        Commands::List { json } => commands::list(&api, json).await,

        Commands::Show { isbn, json } => commands::show(&api, &isbn, json).await,

        Commands::Edit {
            isbn,
            set,
            touch_all,
        } => commands::edit(&api, &isbn, &set, touch_all).await,

        Commands::Open { path, json } => commands::open(&api, &path, json).await,
    }
}
