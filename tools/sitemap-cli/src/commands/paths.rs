//! List candidate sitemap paths.

use anyhow::Result;
use turbo_sitemap::{dedupe_paths, generate_paths, RouteTree, SitemapOptions};

use super::{sitemap_request, PathsArgs};
use crate::context::Context;

/// Run the paths command.
pub async fn run(args: PathsArgs, ctx: &Context) -> Result<()> {
    let routes = args.source.routes(ctx)?;
    let options = match args.source.base_url(ctx) {
        Some(base_url) => Some(SitemapOptions::new(&base_url)?),
        None => None,
    };
    let request = sitemap_request(options.as_ref())?;

    let tree = RouteTree::build(&routes)?;
    let mut paths = generate_paths(&tree, &request).await?;
    let candidates = paths.len();
    if args.unique {
        paths = dedupe_paths(paths);
    }

    if ctx.output.is_json() {
        ctx.output.json(&paths);
        return Ok(());
    }

    for path in &paths {
        println!("{}", path);
    }
    ctx.output.info(&format!(
        "{} paths from {} routes ({} candidates)",
        paths.len(),
        tree.len(),
        candidates
    ));

    Ok(())
}
