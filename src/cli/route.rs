//! `route` command.

use super::RouteArgs;
use anyhow::Result;
use sitelink::config::SiteConfig;
use sitelink::{PageRoute, debug, is_markdown_file};
use std::io::Write;

/// Print `source -> url` for each source document.
///
/// The canonical URL is appended when `site.url` is configured.
pub fn run_route(args: &RouteArgs, config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let style = config.url_style();
    for source in &args.sources {
        let route = PageRoute::new(source, style);
        if !is_markdown_file(&route.source) {
            debug!("route"; "{} is not a markdown page, copied as-is", route.source);
        }

        let url = if route.url.is_empty() { "./" } else { route.url.as_str() };
        match config.site_url().and_then(|site| route.canonical_url(site)) {
            Some(canonical) => writeln!(out, "{} -> {url} ({canonical})", route.source)?,
            None => writeln!(out, "{} -> {url}", route.source)?,
        }
    }
    Ok(())
}
