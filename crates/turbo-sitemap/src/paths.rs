//! Path enumeration over a route tree.

use http::Request;

use crate::error::{Result, SitemapError};
use crate::route::LeafPolicy;
use crate::tree::{RouteNode, RouteTree};

/// Expand optional segments (trailing `?`) into every include/omit combination.
///
/// Non-optional segments appear in every variant. Each optional segment
/// doubles the variant count, so `k` optional segments yield `2^k` variants.
/// Variants omitting a segment come before those including it. A bare `?`
/// segment has nothing to include and is dropped.
///
/// ```
/// use turbo_sitemap::expand_optionals;
///
/// let variants = expand_optionals(&["a", "b?"]);
/// assert_eq!(variants, vec![vec!["a"], vec!["a", "b"]]);
/// ```
pub fn expand_optionals<'s>(segments: &[&'s str]) -> Vec<Vec<&'s str>> {
    let mut variants: Vec<Vec<&'s str>> = vec![Vec::new()];

    for &segment in segments {
        match segment.strip_suffix('?') {
            Some("") => {}
            Some(base) => {
                let len = variants.len();
                for i in 0..len {
                    let mut with_segment = variants[i].clone();
                    with_segment.push(base);
                    variants.push(with_segment);
                }
            }
            None => {
                for variant in &mut variants {
                    variant.push(segment);
                }
            }
        }
    }

    variants
}

/// True if the segment is a literal: not a `:param` and not a wildcard.
pub fn is_static_segment(segment: &str) -> bool {
    !segment.starts_with(':') && !segment.contains('*')
}

/// Join segments into an absolute path.
pub fn join_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

/// Enumerate candidate sitemap paths, depth-first.
///
/// Only leaves contribute paths. Children are visited in child-list order
/// and each child's optional-segment variants in [`expand_optionals`]
/// order. Custom generators are awaited one at a time. The result may
/// contain duplicates.
pub async fn generate_paths(tree: &RouteTree<'_>, request: &Request<()>) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    let mut stack = vec![(tree.root(), Vec::new())];

    while let Some((id, full_path)) = stack.pop() {
        let node = tree.node(id);
        if node.is_leaf() {
            collect_leaf(node, &full_path, request, &mut paths).await?;
            continue;
        }

        // Pushed in reverse so the first child's first variant pops next.
        for &child in node.children().iter().rev() {
            for variant in expand_optionals(tree.node(child).segments()).into_iter().rev() {
                let mut child_path = full_path.clone();
                child_path.extend(variant);
                stack.push((child, child_path));
            }
        }
    }

    Ok(paths)
}

async fn collect_leaf(
    node: &RouteNode<'_>,
    full_path: &[&str],
    request: &Request<()>,
    paths: &mut Vec<String>,
) -> Result<()> {
    let policy = node.leaf_policy();
    tracing::trace!(route = node.id(), policy = policy.name(), "visiting leaf");

    match policy {
        LeafPolicy::Excluded => {}
        LeafPolicy::Custom(generator) => {
            let entries = generator.generate(request).await.map_err(|source| {
                tracing::warn!(route = node.id(), error = %source, "sitemap entry generator failed");
                SitemapError::Generator {
                    route: node.id().to_string(),
                    source,
                }
            })?;
            tracing::debug!(route = node.id(), entries = entries.len(), "custom sitemap entries");
            paths.extend(entries.into_iter().map(|entry| entry.path));
        }
        LeafPolicy::Derived => {
            if full_path.iter().all(|s| is_static_segment(s)) {
                paths.push(join_path(full_path));
            } else {
                tracing::debug!(route = node.id(), path = %join_path(full_path), "skipping dynamic path");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::generator::{entries_fn, StaticEntries};
    use crate::route::{RouteDescriptor, RouteTable, SeoDirective, SitemapEntry};

    fn table(routes: Vec<RouteDescriptor>) -> RouteTable {
        routes.into_iter().map(|r| (r.id.clone(), Some(r))).collect()
    }

    fn request() -> Request<()> {
        Request::builder().uri("https://example.com/sitemap.xml").body(()).unwrap()
    }

    async fn paths_for(routes: &RouteTable) -> Vec<String> {
        let tree = RouteTree::build(routes).unwrap();
        generate_paths(&tree, &request()).await.unwrap()
    }

    // === Optional Expansion Tests ===

    #[test]
    fn test_expand_optionals_two_optional() {
        let variants = expand_optionals(&["a", "b?", "c?"]);
        assert_eq!(variants.len(), 4);

        let set: HashSet<Vec<&str>> = variants.into_iter().collect();
        let expected: HashSet<Vec<&str>> = [
            vec!["a", "b", "c"],
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["a"],
        ]
        .into_iter()
        .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_expand_optionals_order() {
        let variants = expand_optionals(&["a", "b?", "c?"]);
        assert_eq!(
            variants,
            vec![
                vec!["a"],
                vec!["a", "b"],
                vec!["a", "c"],
                vec!["a", "b", "c"],
            ]
        );
    }

    #[test]
    fn test_expand_optionals_no_optional() {
        assert_eq!(expand_optionals(&["a", ":id"]), vec![vec!["a", ":id"]]);
    }

    #[test]
    fn test_expand_optionals_empty() {
        assert_eq!(expand_optionals(&[]), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_expand_optionals_trailing_static_after_optional() {
        let variants = expand_optionals(&["lang?", "docs"]);
        assert_eq!(variants, vec![vec!["docs"], vec!["lang", "docs"]]);
    }

    #[test]
    fn test_expand_optionals_bare_question_mark() {
        assert_eq!(expand_optionals(&["?", "a"]), vec![vec!["a"]]);
    }

    #[test]
    fn test_expand_optionals_many() {
        let segments = ["a?", "b?", "c?", "d?", "e?", "f?", "g?", "h?"];
        let variants = expand_optionals(&segments);
        assert_eq!(variants.len(), 256);
        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 256);
    }

    // === Segment Tests ===

    #[test]
    fn test_is_static_segment() {
        assert!(is_static_segment("about"));
        assert!(is_static_segment("v1.2"));
        assert!(!is_static_segment(":id"));
        assert!(!is_static_segment("*"));
        assert!(!is_static_segment("files*"));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&[]), "/");
        assert_eq!(join_path(&["blog", "hello"]), "/blog/hello");
    }

    // === Traversal Tests ===

    #[tokio::test]
    async fn test_optional_leaf_yields_both_variants() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("home", "about?").with_parent("root"),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/", "/about"]);
    }

    #[tokio::test]
    async fn test_dynamic_leaf_is_skipped() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("item", "items/:id").with_parent("root"),
            RouteDescriptor::new("files", "files/*").with_parent("root"),
        ]);

        assert!(paths_for(&routes).await.is_empty());
    }

    #[tokio::test]
    async fn test_dynamic_ancestor_prunes_leaf() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("user", "users/:user").with_parent("root"),
            RouteDescriptor::new("user.settings", "settings").with_parent("user"),
        ]);

        assert!(paths_for(&routes).await.is_empty());
    }

    #[tokio::test]
    async fn test_internal_nodes_are_not_emitted() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("blog", "blog").with_parent("root"),
            RouteDescriptor::new("blog.index", "").with_parent("blog"),
            RouteDescriptor::new("blog.archive", "archive").with_parent("blog"),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/blog/archive", "/blog"]);
    }

    #[tokio::test]
    async fn test_depth_first_order() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("a", "a").with_parent("root"),
            RouteDescriptor::new("a.x", "x?").with_parent("a"),
            RouteDescriptor::new("b", "b").with_parent("root"),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/a", "/a/x", "/b"]);
    }

    #[tokio::test]
    async fn test_ancestor_optionals_combine_with_leaf() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("lang", "lang?").with_parent("root"),
            RouteDescriptor::new("lang.docs", "docs/intro?").with_parent("lang"),
        ]);

        assert_eq!(
            paths_for(&routes).await,
            vec!["/docs", "/docs/intro", "/lang/docs", "/lang/docs/intro"]
        );
    }

    // === Leaf Policy Tests ===

    #[tokio::test]
    async fn test_excluded_leaf() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("admin", "admin").with_parent("root").excluded(),
            RouteDescriptor::new("home", "home").with_parent("root"),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/home"]);
    }

    #[tokio::test]
    async fn test_excluded_leaf_ignores_generator() {
        let seo = SeoDirective::new()
            .with_sitemap(false)
            .with_generator(StaticEntries::from_paths(["/never"]));
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("item", "items/:id").with_parent("root").with_seo(seo),
        ]);

        assert!(paths_for(&routes).await.is_empty());
    }

    #[tokio::test]
    async fn test_generator_overrides_own_path() {
        let generator = entries_fn(|_| Ok(vec![SitemapEntry::new("/a"), SitemapEntry::new("/b")]));
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("static", "ignored/path").with_parent("root").with_generator(generator),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/a", "/b"]);
    }

    #[tokio::test]
    async fn test_generator_paths_are_not_filtered() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("item", "items/:id")
                .with_parent("root")
                .with_generator(StaticEntries::from_paths(["/items/:raw", "/items/42"])),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/items/:raw", "/items/42"]);
    }

    #[tokio::test]
    async fn test_generator_called_per_variant() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let generator = entries_fn(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![SitemapEntry::new("/dynamic")])
        });
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("item", "lang?/items").with_parent("root").with_generator(generator),
        ]);

        assert_eq!(paths_for(&routes).await, vec!["/dynamic", "/dynamic"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_generator_error_aborts() {
        let routes = table(vec![
            RouteDescriptor::new("root", ""),
            RouteDescriptor::new("home", "home").with_parent("root"),
            RouteDescriptor::new("products", "products/:id")
                .with_parent("root")
                .with_generator(entries_fn(|_| Err(anyhow::anyhow!("db down")))),
        ]);
        let tree = RouteTree::build(&routes).unwrap();

        let err = generate_paths(&tree, &request()).await.unwrap_err();
        match err {
            SitemapError::Generator { route, source } => {
                assert_eq!(route, "products");
                assert_eq!(source.to_string(), "db down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
