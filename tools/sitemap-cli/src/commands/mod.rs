//! CLI command implementations.

pub mod generate;
pub mod paths;

use anyhow::{Context as _, Result};
use clap::Args;
use http::Request;
use turbo_sitemap::{RouteTable, SitemapOptions};

use crate::config::{resolve_base_url, BASE_URL_ENV};
use crate::context::Context;
use crate::manifest::load_manifest;

/// Inputs shared by every command.
#[derive(Args)]
pub struct SourceArgs {
    /// Route manifest (JSON or TOML). Overrides `sitemap.manifest`.
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Base URL for absolute locations. Overrides SITEMAP_BASE_URL and config.
    #[arg(short, long)]
    pub base_url: Option<String>,
}

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (default: stdout). Overrides `sitemap.output`.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the paths command.
#[derive(Args)]
pub struct PathsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Drop duplicate paths, keeping first-seen order.
    #[arg(short, long)]
    pub unique: bool,
}

impl SourceArgs {
    /// Load the route table named by the flag or config.
    pub fn routes(&self, ctx: &Context) -> Result<RouteTable> {
        let manifest = self
            .manifest
            .as_deref()
            .or(ctx.config.manifest.as_deref())
            .context("No route manifest given. Pass --manifest or set sitemap.manifest in sitemap.toml")?;
        ctx.output.debug(&format!("Loading routes from {}", manifest));
        load_manifest(&ctx.resolve_path(manifest))
    }

    /// Resolve the base URL, if one is configured anywhere.
    pub fn base_url(&self, ctx: &Context) -> Option<String> {
        resolve_base_url(
            self.base_url.as_deref(),
            std::env::var(BASE_URL_ENV).ok(),
            &ctx.config,
        )
    }

    /// Resolve and validate the base URL, failing if none is configured.
    pub fn options(&self, ctx: &Context) -> Result<SitemapOptions> {
        let base_url = self.base_url(ctx).with_context(|| {
            format!(
                "No base URL given. Pass --base-url, set {} or set sitemap.base_url in sitemap.toml",
                BASE_URL_ENV
            )
        })?;
        Ok(SitemapOptions::new(&base_url)?)
    }
}

/// The request handed to entry generators, as if `/sitemap.xml` were fetched.
pub fn sitemap_request(options: Option<&SitemapOptions>) -> Result<Request<()>> {
    let uri = match options {
        Some(options) => options.resolve("/sitemap.xml")?.to_string(),
        None => "/sitemap.xml".to_string(),
    };
    Request::get(uri)
        .body(())
        .context("Failed to build sitemap request")
}
