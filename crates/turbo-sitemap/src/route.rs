//! Route descriptors as supplied by the server-side router.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::generator::{EntryGenerator, StaticEntries};

/// Flat route table keyed by route id.
///
/// `None` entries are tolerated and skipped when building the tree.
pub type RouteTable = BTreeMap<String, Option<RouteDescriptor>>;

/// One explicit sitemap entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Absolute path, emitted as-is.
    pub path: String,
}

impl SitemapEntry {
    /// Create an entry for a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// A single route from the flattened routing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Unique route id.
    pub id: String,
    /// Parent route id. Absent only for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Raw `/`-delimited path, relative to the parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Route module metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<RouteHandle>,
}

impl RouteDescriptor {
    /// Create a descriptor with the given id and raw path.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            path: Some(path.into()),
            handle: None,
        }
    }

    /// Set the parent route id.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Attach SEO directives.
    pub fn with_seo(mut self, seo: SeoDirective) -> Self {
        self.handle = Some(RouteHandle { seo: Some(seo) });
        self
    }

    /// Opt this route out of the sitemap.
    pub fn excluded(self) -> Self {
        self.with_seo(SeoDirective::new().with_sitemap(false))
    }

    /// Replace default path derivation with a custom generator.
    pub fn with_generator(self, generator: impl EntryGenerator + 'static) -> Self {
        self.with_seo(SeoDirective::new().with_generator(generator))
    }

    /// Raw path, `""` when absent.
    pub fn raw_path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// SEO directives, if any.
    pub fn seo(&self) -> Option<&SeoDirective> {
        self.handle.as_ref().and_then(|h| h.seo.as_ref())
    }

    /// Resolve how this route behaves when it is a leaf.
    pub fn leaf_policy(&self) -> LeafPolicy<'_> {
        self.seo()
            .map(SeoDirective::leaf_policy)
            .unwrap_or(LeafPolicy::Derived)
    }
}

/// Route module metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteHandle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoDirective>,
}

/// Per-route sitemap directives.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SeoDirective {
    /// `Some(false)` removes the route from the sitemap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<bool>,
    /// Fixed entries replacing default derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<StaticEntries>,
    /// Programmatic generator replacing default derivation. Wins over `entries`.
    #[serde(skip)]
    pub generator: Option<Arc<dyn EntryGenerator>>,
}

impl SeoDirective {
    /// Create empty directives (route included, default derivation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sitemap inclusion flag.
    pub fn with_sitemap(mut self, include: bool) -> Self {
        self.sitemap = Some(include);
        self
    }

    /// Set fixed entries.
    pub fn with_entries(mut self, entries: StaticEntries) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Set a custom generator.
    pub fn with_generator(mut self, generator: impl EntryGenerator + 'static) -> Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Resolve the leaf policy: exclusion beats generator beats default.
    pub fn leaf_policy(&self) -> LeafPolicy<'_> {
        if self.sitemap == Some(false) {
            return LeafPolicy::Excluded;
        }
        if let Some(generator) = &self.generator {
            return LeafPolicy::Custom(generator.as_ref());
        }
        if let Some(entries) = &self.entries {
            return LeafPolicy::Custom(entries);
        }
        LeafPolicy::Derived
    }
}

impl fmt::Debug for SeoDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeoDirective")
            .field("sitemap", &self.sitemap)
            .field("entries", &self.entries)
            .field("generator", &self.generator.as_ref().map(|_| "<dyn EntryGenerator>"))
            .finish()
    }
}

/// How a leaf route contributes to the sitemap.
#[derive(Clone, Copy)]
pub enum LeafPolicy<'a> {
    /// Contributes nothing.
    Excluded,
    /// Contributes exactly what the generator returns.
    Custom(&'a dyn EntryGenerator),
    /// Contributes its joined path if it has no dynamic segments.
    Derived,
}

impl LeafPolicy<'_> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::Custom(_) => "custom",
            Self::Derived => "derived",
        }
    }
}

impl fmt::Debug for LeafPolicy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
