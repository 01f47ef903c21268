//! Error types for sitemap generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = SitemapError> = std::result::Result<T, E>;

/// The route table cannot be turned into a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// No descriptor without a parent.
    #[error("route table has no root route")]
    MissingRoot,

    /// More than one descriptor without a parent.
    #[error("route table has more than one root route: '{first}' and '{second}'")]
    MultipleRoots { first: String, second: String },

    /// A descriptor names a parent that is not in the table.
    #[error("route '{route}' references missing parent '{parent}'")]
    MissingParent { route: String, parent: String },
}

/// Errors that abort sitemap generation.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// Malformed route table.
    #[error(transparent)]
    Structure(#[from] StructuralError),

    /// A custom entry generator failed.
    #[error("sitemap entry generator for route '{route}' failed: {source}")]
    Generator {
        route: String,
        #[source]
        source: anyhow::Error,
    },

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL '{base}': {source}")]
    InvalidBaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// A path could not be resolved against the base URL.
    #[error("cannot resolve path '{path}' against base URL: {source}")]
    UrlResolution {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP response could not be assembled.
    #[error("failed to build sitemap response: {0}")]
    Response(#[from] http::Error),
}
