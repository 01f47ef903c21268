//! Custom sitemap entry generators.
//!
//! A leaf route can replace default path derivation with its own list of
//! entries, typically to materialize dynamic routes such as one page per
//! product. Every generator is awaited through the same async interface,
//! whether it does I/O or just returns a fixed list.

use async_trait::async_trait;
use http::Request;
use serde::{Deserialize, Serialize};

use crate::route::SitemapEntry;

/// Produces explicit sitemap entries for a leaf route.
///
/// Returned paths are emitted verbatim: they are not checked for dynamic
/// segments and may point anywhere under the base URL.
#[async_trait]
pub trait EntryGenerator: Send + Sync {
    /// Generate entries for the originating request.
    async fn generate(&self, request: &Request<()>) -> anyhow::Result<Vec<SitemapEntry>>;
}

/// Generator backed by a synchronous closure.
pub struct FnGenerator<F> {
    f: F,
}

/// Wrap a synchronous closure as an [`EntryGenerator`].
///
/// ```
/// use turbo_sitemap::{entries_fn, SitemapEntry};
///
/// let generator = entries_fn(|_req| {
///     Ok(vec![SitemapEntry::new("/products/1"), SitemapEntry::new("/products/2")])
/// });
/// # let _ = generator;
/// ```
pub fn entries_fn<F>(f: F) -> FnGenerator<F>
where
    F: Fn(&Request<()>) -> anyhow::Result<Vec<SitemapEntry>> + Send + Sync,
{
    FnGenerator { f }
}

#[async_trait]
impl<F> EntryGenerator for FnGenerator<F>
where
    F: Fn(&Request<()>) -> anyhow::Result<Vec<SitemapEntry>> + Send + Sync,
{
    async fn generate(&self, request: &Request<()>) -> anyhow::Result<Vec<SitemapEntry>> {
        (self.f)(request)
    }
}

/// A fixed list of entries, independent of the request.
///
/// This is the form a custom generator takes in a route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticEntries(pub Vec<SitemapEntry>);

impl StaticEntries {
    /// Build from anything that yields paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(SitemapEntry::new).collect())
    }
}

#[async_trait]
impl EntryGenerator for StaticEntries {
    async fn generate(&self, _request: &Request<()>) -> anyhow::Result<Vec<SitemapEntry>> {
        Ok(self.0.clone())
    }
}
