//! Sitemap XML rendering and response assembly.

use std::collections::HashSet;

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Response, StatusCode};
use quick_xml::escape::escape;
use url::Url;

use crate::error::{Result, SitemapError};

/// Sitemap protocol namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Content type of the sitemap response.
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Options controlling how paths become absolute locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapOptions {
    base_url: Url,
}

impl SitemapOptions {
    /// Parse and validate the base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|source| SitemapError::InvalidBaseUrl {
            base: base_url.to_string(),
            source,
        })?;
        Self::from_url(url).map_err(|source| SitemapError::InvalidBaseUrl {
            base: base_url.to_string(),
            source,
        })
    }

    /// Use an already parsed base URL. It must be able to act as a base.
    pub fn from_url(base_url: Url) -> std::result::Result<Self, url::ParseError> {
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        Ok(Self { base_url })
    }

    /// The base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|source| SitemapError::UrlResolution {
                path: path.to_string(),
                source,
            })
    }
}

/// Remove duplicate paths, keeping first-seen order.
pub fn dedupe_paths<I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Render a `<urlset>` document for the given paths, in order.
pub fn render_sitemap(paths: &[String], options: &SitemapOptions) -> Result<String> {
    let mut xml = String::with_capacity(128 + paths.len() * 64);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE));
    xml.push('\n');

    for path in paths {
        let loc = options.resolve(path)?;
        xml.push_str("<url><loc>");
        xml.push_str(&escape(loc.as_str()));
        xml.push_str("</loc></url>\n");
    }

    xml.push_str("</urlset>");
    Ok(xml)
}

/// Wrap a rendered document in a `200 OK` XML response.
///
/// `Content-Length` is the UTF-8 byte length of the body.
pub fn sitemap_response(body: String) -> Result<Response<String>> {
    let length = body.len();
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, SITEMAP_CONTENT_TYPE)
        .header(CONTENT_LENGTH, length)
        .body(body)?;
    Ok(response)
}

/// Deduplicate, render and wrap paths in a response.
pub fn serialize(paths: Vec<String>, options: &SitemapOptions) -> Result<Response<String>> {
    let paths = dedupe_paths(paths);
    let body = render_sitemap(&paths, options)?;
    tracing::info!(
        urls = paths.len(),
        bytes = body.len(),
        base_url = %options.base_url(),
        "sitemap rendered"
    );
    sitemap_response(body)
}
