//! Generate sitemap.xml from a route manifest.

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_sitemap::generate_sitemap;

use super::{sitemap_request, GenerateArgs};
use crate::context::Context;
use crate::output::format_bytes;

#[derive(Serialize)]
struct GenerateSummary {
    output: String,
    urls: usize,
    bytes: usize,
}

/// Run the generate command.
pub async fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let routes = args.source.routes(ctx)?;
    let options = args.source.options(ctx)?;
    let request = sitemap_request(Some(&options))?;

    ctx.output.debug(&format!("Resolving {} routes against {}", routes.len(), options.base_url()));

    let response = generate_sitemap(&request, &routes, &options).await?;
    let body = response.into_body();
    let urls = body.matches("<url>").count();

    let Some(output) = args.output.as_deref().or(ctx.config.output.as_deref()) else {
        println!("{}", body);
        return Ok(());
    };

    let path = ctx.resolve_path(output);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&path, &body)
        .with_context(|| format!("Failed to write sitemap: {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&GenerateSummary {
            output: path.display().to_string(),
            urls,
            bytes: body.len(),
        });
        return Ok(());
    }

    ctx.output.success("Sitemap generated");
    ctx.output.kv("File", &path.display().to_string());
    ctx.output.kv("URLs", &urls.to_string());
    ctx.output.kv("Size", &format_bytes(body.len() as u64));

    Ok(())
}
