//! `rewrite` command.
//!
//! Text output groups references by page:
//!
//! ```text
//! foo/bar.md (foo/bar/)
//!   image.png -> ../../image.png
//!   #top -> #top
//! ```
//!
//! `--json` prints one `{ "source", "url", "urls" }` record per page, in
//! page order. Several sources may share a URL (`index.md`, `README.md`).

use super::RewriteArgs;
use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use sitelink::config::SiteConfig;
use sitelink::{PageRoute, debug, rewrite_pages};
use std::io::Write;

/// Rewrite `args.urls` for every page in `args.pages`.
pub fn run_rewrite(args: &RewriteArgs, config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let style = config.url_style();
    let routes: Vec<PageRoute> = args
        .pages
        .iter()
        .map(|source| PageRoute::new(source, style))
        .collect();

    debug!(
        "rewrite"; "{} references for {} pages ({} urls)",
        args.urls.len(), routes.len(), style
    );
    let rewritten = rewrite_pages(&routes, &args.urls);

    if args.json {
        write_json(&routes, rewritten, out)
    } else {
        write_text(&routes, &args.urls, &rewritten, out)
    }
}

/// Rewritten references of a single page
#[derive(Debug, Serialize)]
struct PageRewrite<'a> {
    source: &'a str,
    url: &'a str,
    urls: Vec<String>,
}

fn write_json(routes: &[PageRoute], rewritten: Vec<Vec<String>>, out: &mut impl Write) -> Result<()> {
    let pages: Vec<PageRewrite<'_>> = routes
        .iter()
        .zip(rewritten)
        .map(|(route, urls)| PageRewrite {
            source: &route.source,
            url: &route.url,
            urls,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &pages)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(
    routes: &[PageRoute],
    urls: &[String],
    rewritten: &[Vec<String>],
    out: &mut impl Write,
) -> Result<()> {
    for (route, page_urls) in routes.iter().zip(rewritten) {
        let header = format!("{} ({})", route.source, route.url);
        writeln!(
            out,
            "{}",
            header.if_supports_color(Stream::Stdout, |h| h.bold())
        )?;
        for (url, result) in urls.iter().zip(page_urls) {
            writeln!(out, "  {url} -> {result}")?;
        }
    }
    Ok(())
}
