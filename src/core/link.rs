//! Link classification utilities.

use crate::utils::path::route::{is_external_link, is_protocol_relative};

/// Syntactic classification of a raw reference.
///
/// Computed before any normalization. Only [`LinkKind::SiteRelative`] carries
/// a path that the resolver may touch; the other kinds are emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Link with a URL scheme (https://, mailto:, data:, etc.)
    External(&'a str),
    /// Scheme-less network reference (//cdn.example.com/lib.js)
    ProtocolRelative(&'a str),
    /// Pure fragment/anchor link (#section). Value keeps the `#`.
    Fragment(&'a str),
    /// Path relative to the site root (img/logo.png, /about, ../other)
    SiteRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if is_protocol_relative(link) {
            Self::ProtocolRelative(link)
        } else if link.starts_with('#') {
            Self::Fragment(link)
        } else {
            Self::SiteRelative(link)
        }
    }

    /// The raw reference this kind was parsed from.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        match *self {
            Self::External(s) | Self::ProtocolRelative(s) | Self::Fragment(s) | Self::SiteRelative(s) => s,
        }
    }

    /// Whether the reference is emitted unchanged.
    #[inline]
    pub const fn is_passthrough(&self) -> bool {
        !matches!(self, Self::SiteRelative(_))
    }
}
