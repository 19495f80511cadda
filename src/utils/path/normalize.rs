//! Site path normalization.
//!
//! [`normalize`] turns any slash-separated reference into a [`PathRef`]:
//! `.` and empty segments are dropped, `..` pops the previous segment, and
//! the `?query` / `#fragment` suffix is set aside untouched.
//!
//! Every string is a valid input. Climbing above the site root is kept as a
//! leading run of `..` segments instead of being clamped or rejected.

use std::fmt;

use super::route::split_suffix;

const PARENT: &str = "..";

/// Normalized site-relative locator.
///
/// Invariants:
/// - `segments` never contains `.` or empty entries
/// - `..` entries only appear as a leading run
/// - `suffix` is empty or starts with `?` / `#`
///
/// `is_directory` is set only by an explicit trailing `/`. A final `.`
/// segment does not set it (`foo/.` is `foo`), and the site root is no
/// exception: `""`, `"."` and `"/."` are the root as a non-directory, while
/// `"/"` and `"./"` are the root as a directory. The two differ in their
/// emitted form (`.` vs `./`), not in where they point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathRef {
    segments: Vec<String>,
    is_directory: bool,
    suffix: String,
}

impl PathRef {
    /// Path components in order, without separators.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the raw path ended with `/`.
    #[inline]
    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Query and/or fragment, including the leading `?` or `#`.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether this is the site root (no segments).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of leading `..` segments (levels above the site root).
    pub fn escape_depth(&self) -> usize {
        self.segments.iter().take_while(|s| *s == PARENT).count()
    }
}

impl fmt::Display for PathRef {
    /// Canonical string form. Normalizing it yields the same `PathRef`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str(".")?;
        } else {
            f.write_str(&self.segments.join("/"))?;
        }
        if self.is_directory {
            f.write_str("/")?;
        }
        f.write_str(&self.suffix)
    }
}

impl From<&str> for PathRef {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

/// Normalize a raw site-relative reference.
///
/// # Examples
/// ```
/// use sitelink::normalize;
///
/// let path = normalize("/foo//./bar/../baz/?v=1");
/// assert_eq!(path.segments(), ["foo", "baz"]);
/// assert!(path.is_directory());
/// assert_eq!(path.suffix(), "?v=1");
///
/// // Root spellings without a trailing slash are interchangeable
/// assert_eq!(normalize(""), normalize("/."));
/// ```
pub fn normalize(raw: &str) -> PathRef {
    let (path, suffix) = split_suffix(raw);
    let is_directory = path.ends_with('/');
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut segments: Vec<String> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            PARENT => {
                if segments.last().is_some_and(|top| top != PARENT) {
                    segments.pop();
                } else {
                    segments.push(PARENT.to_owned());
                }
            }
            name => segments.push(name.to_owned()),
        }
    }

    PathRef {
        segments,
        is_directory,
        suffix: suffix.to_owned(),
    }
}
