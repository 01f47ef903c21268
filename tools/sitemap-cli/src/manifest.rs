//! Route manifest loading.
//!
//! A manifest maps route ids to descriptors, as emitted by the router build:
//!
//! ```json
//! {
//!   "root": { "id": "root", "path": "" },
//!   "routes/about": { "id": "routes/about", "parentId": "root", "path": "about" },
//!   "routes/blog.$slug": {
//!     "id": "routes/blog.$slug",
//!     "parentId": "root",
//!     "path": "blog/:slug",
//!     "handle": { "seo": { "entries": [{ "path": "/blog/hello" }] } }
//!   }
//! }
//! ```
//!
//! TOML manifests use one table per route id.

use std::path::Path;

use anyhow::{Context, Result};
use turbo_sitemap::RouteTable;

/// Load a route table from a JSON or TOML file.
pub fn load_manifest(path: &Path) -> Result<RouteTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route manifest: {}", path.display()))?;

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let routes: RouteTable = if is_toml {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML manifest: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON manifest: {}", path.display()))?
    };

    tracing::debug!(routes = routes.len(), path = %path.display(), "route manifest loaded");
    Ok(routes)
}
