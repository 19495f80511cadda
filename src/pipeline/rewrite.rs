//! Reference rewriting for generated pages.
//!
//! Turns the raw references a page carries (media, scripts, stylesheets,
//! links) into the strings embedded in its markup.
//!
//! | LinkKind           | Example            | Result                     |
//! |--------------------|--------------------|----------------------------|
//! | `External`         | `https://...`      | Preserved as-is            |
//! | `ProtocolRelative` | `//cdn.org/a.js`   | Preserved as-is            |
//! | `Fragment`         | `#section`         | Preserved as-is            |
//! | `SiteRelative`     | `img/a.png`        | Relative to the page       |
//!
//! Backslash separators are converted to `/` first, so references collected
//! from a filesystem behave the same on every host.

use rayon::prelude::*;

use crate::core::LinkKind;
use crate::page::PageRoute;
use crate::utils::path::route::to_url_separators;
use crate::utils::path::{ResolutionContext, normalize, resolve};

/// Rewrite a batch of references for one page. One output per input, in order.
///
/// # Examples
/// ```
/// use sitelink::{ResolutionContext, UrlStyle, rewrite_urls};
///
/// let page = ResolutionContext::for_page("foo/bar/", UrlStyle::Directory);
/// let urls = rewrite_urls(["image.png", "https://cdn.org/x.js", "#top"], &page);
/// assert_eq!(urls, ["../../image.png", "https://cdn.org/x.js", "#top"]);
/// ```
pub fn rewrite_urls<I, S>(urls: I, page: &ResolutionContext) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .map(|url| normalize_url(url.as_ref(), Some(page), ""))
        .collect()
}

/// Rewrite a batch of references for the page at `route`.
pub fn rewrite_page_urls<I, S>(urls: I, route: &PageRoute) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rewrite_urls(urls, &route.context())
}

/// Rewrite the same references for many pages.
///
/// Pages are processed in parallel; results follow the order of `pages`.
pub fn rewrite_pages<S>(pages: &[PageRoute], urls: &[S]) -> Vec<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    pages
        .par_iter()
        .map(|route| rewrite_page_urls(urls, route))
        .collect()
}

/// Rewrite a single reference.
///
/// With a page, site-relative references are resolved against its
/// directory. Without one, they are appended to `base`, a directory prefix
/// such as `../` or `/docs/`.
///
/// An empty reference is read as `.`, the site root.
pub fn normalize_url(url: &str, page: Option<&ResolutionContext>, base: &str) -> String {
    let url = if url.is_empty() {
        ".".into()
    } else {
        to_url_separators(url)
    };

    match LinkKind::parse(&url) {
        LinkKind::SiteRelative(path) => match page {
            Some(context) => resolve(&normalize(path), context),
            None => join_base(base, path),
        },
        kind => kind.as_str().to_owned(),
    }
}

/// Append `path` to the `base` directory prefix.
fn join_base(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with('/') {
        return path.to_owned();
    }
    if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
