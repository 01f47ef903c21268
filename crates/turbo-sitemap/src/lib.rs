//! Sitemap generation for TurboCommerce.
//!
//! Turns the flattened route table produced by the server-side router into
//! a `sitemap.xml` response:
//! - `RouteTree` - Rebuilds the route hierarchy from parent ids
//! - `generate_paths` - Enumerates crawlable paths, expanding optional segments
//! - `EntryGenerator` - Per-route override for dynamic pages
//! - `serialize` - Deduplicates paths and renders the XML response
//!
//! # Example
//!
//! ```
//! use turbo_sitemap::{generate_sitemap, RouteDescriptor, RouteTable, SitemapOptions};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut routes = RouteTable::new();
//! routes.insert("root".into(), Some(RouteDescriptor::new("root", "")));
//! routes.insert(
//!     "home".into(),
//!     Some(RouteDescriptor::new("home", "about?").with_parent("root")),
//! );
//!
//! let request = http::Request::get("https://example.com/sitemap.xml").body(()).unwrap();
//! let options = SitemapOptions::new("https://example.com").unwrap();
//!
//! let response = generate_sitemap(&request, &routes, &options).await.unwrap();
//! assert!(response.body().contains("<loc>https://example.com/about</loc>"));
//! assert!(response.body().contains("<loc>https://example.com/</loc>"));
//! # });
//! ```

mod error;
mod generator;
mod paths;
mod route;
mod tree;
mod xml;

pub use error::*;
pub use generator::*;
pub use paths::*;
pub use route::*;
pub use tree::*;
pub use xml::*;

use http::{Request, Response};

/// Build the sitemap response for a route table.
///
/// Generators receive a body-less copy of `request`. Any structural,
/// generator or URL error aborts the whole sitemap.
pub async fn generate_sitemap<'a, B, I>(
    request: &Request<B>,
    routes: I,
    options: &SitemapOptions,
) -> Result<Response<String>>
where
    I: IntoIterator<Item = (&'a String, &'a Option<RouteDescriptor>)>,
{
    let head = request_head(request);
    let tree = RouteTree::build(routes)?;
    let paths = generate_paths(&tree, &head).await?;
    tracing::debug!(candidates = paths.len(), "sitemap paths enumerated");
    serialize(paths, options)
}

/// Copy method, URI, version and headers into a body-less request.
pub fn request_head<B>(request: &Request<B>) -> Request<()> {
    let mut head = Request::new(());
    *head.method_mut() = request.method().clone();
    *head.uri_mut() = request.uri().clone();
    *head.version_mut() = request.version();
    *head.headers_mut() = request.headers().clone();
    head
}
