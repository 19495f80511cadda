//! URL string helpers.
//!
//! Provides consistent URL handling across the codebase:
//! - Link type detection (scheme, protocol-relative)
//! - Query/fragment suffix splitting
//! - Platform separator normalization

use std::borrow::Cow;

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Start with an ASCII letter
/// - Only contain ASCII alphanumeric or `+`, `-`, `.` after that
///
/// # Examples
/// ```
/// use sitelink::utils::path::route::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        let scheme = link[..pos].as_bytes();
        scheme.first().is_some_and(u8::is_ascii_alphabetic)
            && scheme[1..]
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
    })
}

/// Check if a link is protocol-relative (`//host/path`).
#[inline]
pub fn is_protocol_relative(link: &str) -> bool {
    link.starts_with("//")
}

/// Split a reference into its path and its `?`/`#` suffix.
///
/// The suffix starts at the first `?` or `#` and keeps its marker, so
/// `path + suffix` always reassembles the input.
///
/// # Examples
/// ```
/// use sitelink::utils::path::route::split_suffix;
/// assert_eq!(split_suffix("style.css?v=1"), ("style.css", "?v=1"));
/// assert_eq!(split_suffix("about#team"), ("about", "#team"));
/// assert_eq!(split_suffix("about"), ("about", ""));
/// ```
#[inline]
pub fn split_suffix(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    }
}

/// Convert platform path separators (`\`) to URL separators (`/`).
///
/// Borrows when there is nothing to convert.
#[inline]
pub fn to_url_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}
