//! Relative path resolution between two site locations.
//!
//! Given a normalized target and the directory of the referencing page,
//! [`resolve`] emits the shortest relative reference: one `..` per directory
//! level left below the shared ancestor, followed by the remaining target
//! segments.
//!
//! ```text
//! target:  a/b/c/d/ee
//! context: a/b/z/d/        (from "a/b/z/d/e", a directory)
//! common:  a/b
//! result:  ../../../c/d/ee
//! ```

use std::iter;

use super::normalize::{PathRef, normalize};
use super::route::split_suffix;
use crate::core::UrlStyle;

/// Directory a reference is resolved from.
///
/// Segments are compared by exact string equality. A `..` that survives
/// normalization (leading run) is treated as an ordinary name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResolutionContext {
    dir: Vec<String>,
}

impl ResolutionContext {
    /// Context from a URL shaped the way page URLs are shaped.
    ///
    /// The last component is a file, and is dropped, when it contains a `.`
    /// (`foo/bar.html`, `b/..`). A trailing `/` or a dotless last component
    /// marks a directory.
    ///
    /// The drop happens before normalization, so `b/..` resolves from `b/`.
    pub fn from_url(other: &str) -> Self {
        let (path, _) = split_suffix(other);
        let dir = match path.rsplit_once('/') {
            Some((parent, name)) if name.contains('.') => parent,
            None if path.contains('.') => "",
            _ => path,
        };
        Self::from_dir(normalize(dir))
    }

    /// Context for a page URL under the site's URL style.
    ///
    /// Directory-style page URLs are directories. Flat page URLs name a
    /// file whose siblings live in its parent, unless the URL already ends
    /// with `/`.
    pub fn for_page(url: &str, style: UrlStyle) -> Self {
        let (path, _) = split_suffix(url);
        let location = normalize(path);
        if style.is_directory() || location.is_directory() {
            return Self::from_dir(location);
        }
        let mut dir = location.segments().to_vec();
        dir.pop();
        Self { dir }
    }

    /// Directory segments of this context.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.dir
    }

    /// How many directory levels below the site root this context sits.
    #[inline]
    pub fn depth(&self) -> usize {
        self.dir.len()
    }

    fn from_dir(path: PathRef) -> Self {
        Self {
            dir: path.segments().to_vec(),
        }
    }
}

impl From<&str> for ResolutionContext {
    fn from(other: &str) -> Self {
        Self::from_url(other)
    }
}

/// Resolve `target` relative to `context`.
///
/// # Examples
/// ```
/// use sitelink::{ResolutionContext, normalize, resolve};
///
/// let context = ResolutionContext::from_url("a/b/z/d/e");
/// assert_eq!(resolve(&normalize("a/b/c/d/ee"), &context), "../../../c/d/ee");
///
/// let context = ResolutionContext::from_url("foo/");
/// assert_eq!(resolve(&normalize("foo/"), &context), "./");
/// ```
pub fn resolve(target: &PathRef, context: &ResolutionContext) -> String {
    let dir = context.segments();
    let segments = target.segments();

    let common = dir
        .iter()
        .zip(segments)
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = iter::repeat_n("..", dir.len() - common)
        .chain(segments[common..].iter().map(String::as_str))
        .collect();

    let mut url = if parts.is_empty() {
        String::from(".")
    } else {
        parts.join("/")
    };
    if target.is_directory() {
        url.push('/');
    }
    url.push_str(target.suffix());
    url
}

/// Return `url` relative to the location `other`.
///
/// Both are site-relative; a leading `/` on either is ignored.
///
/// # Examples
/// ```
/// use sitelink::relative_url;
///
/// assert_eq!(relative_url("foo/bar", "foo"), "bar");
/// assert_eq!(relative_url("foo", "foo/bar"), "..");
/// assert_eq!(relative_url("foo", "foo/bar.txt"), ".");
/// assert_eq!(relative_url("style.css?v=1", "page.md"), "style.css?v=1");
/// ```
pub fn relative_url(url: &str, other: &str) -> String {
    resolve(&normalize(url), &ResolutionContext::from_url(other))
}
