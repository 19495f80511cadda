//! `[site]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Public site information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site URL, path used as prefix (e.g., "https://example.com/docs").
    pub url: Option<String>,
}

impl SiteSection {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - scheme must be http or https, and a host must be present
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.invalid(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none_or(str::is_empty) {
                    diag.invalid(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.invalid(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
