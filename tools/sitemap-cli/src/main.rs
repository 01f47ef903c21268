//! Turbo Sitemap CLI - build sitemap.xml from a route manifest.
//!
//! Commands:
//! - `turbo-sitemap generate` - Render the sitemap to a file or stdout
//! - `turbo-sitemap paths` - List candidate paths in traversal order

mod commands;
mod config;
mod context;
mod manifest;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{GenerateArgs, PathsArgs};

/// Turbo Sitemap - Generate sitemaps from flattened route tables
#[derive(Parser)]
#[command(name = "turbo-sitemap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Environment whose config overrides apply
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap.xml from a route manifest
    Generate(GenerateArgs),

    /// Print candidate paths before deduplication
    Paths(PathsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(if cli.verbose { "debug" } else { "warn" });

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), cli.env.as_deref(), output)?;

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &ctx).await,
        Commands::Paths(args) => commands::paths::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr using RUST_LOG, falling back to the given default filter.
fn setup_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
