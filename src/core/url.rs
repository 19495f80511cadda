//! Page URL style.

use serde::{Deserialize, Serialize};

/// How generated page addresses are shaped.
///
/// | Style       | `foo/bar.md` | `index.md`   |
/// |-------------|--------------|--------------|
/// | `Flat`      | `foo/bar.html` | `index.html` |
/// | `Directory` | `foo/bar/`   | (empty)      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStyle {
    /// `.../page.html`
    Flat,
    /// `.../page/` with an implicit `index.html`
    #[default]
    Directory,
}

impl UrlStyle {
    /// Map the `use_directory_urls` switch to a style.
    #[inline]
    pub const fn from_directory_urls(enabled: bool) -> Self {
        if enabled { Self::Directory } else { Self::Flat }
    }

    /// Whether page URLs are directories.
    #[inline]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl std::fmt::Display for UrlStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Directory => f.write_str("directory"),
        }
    }
}
