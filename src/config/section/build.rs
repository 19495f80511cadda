//! `[build]` configuration.

use crate::config::FieldPath;
use crate::core::UrlStyle;
use serde::{Deserialize, Serialize};

/// Page output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Serve pages as `page/` instead of `page.html`.
    pub use_directory_urls: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            use_directory_urls: true,
        }
    }
}

impl BuildSection {
    pub const USE_DIRECTORY_URLS: FieldPath = FieldPath::new("build.use_directory_urls");

    #[inline]
    pub const fn url_style(&self) -> UrlStyle {
        UrlStyle::from_directory_urls(self.use_directory_urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_directory_urls() {
        let section = BuildSection::default();
        assert!(section.use_directory_urls);
        assert_eq!(section.url_style(), UrlStyle::Directory);
    }

    #[test]
    fn test_flat_urls() {
        let section: BuildSection = toml::from_str("use_directory_urls = false").unwrap();
        assert_eq!(section.url_style(), UrlStyle::Flat);
    }
}
