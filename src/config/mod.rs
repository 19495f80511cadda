//! Site configuration management for `sitelink.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[site]`  | Site URL, used for canonical page addresses      |
//! | `[build]` | `use_directory_urls` (page URL shape)            |
//!
//! A missing config file is not an error: every field has a default.

pub mod section;
pub mod types;
mod util;

pub use section::{BuildSection, SiteSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};
pub use util::find_config_file;

use crate::core::UrlStyle;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::with_trailing_slash;

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "sitelink.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitelink.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path of the loaded file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site information
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,
}

impl SiteConfig {
    /// Load configuration for the current directory.
    ///
    /// Searches upward from cwd for `config_name`. Falls back to defaults
    /// when no file is found.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match find_config_file(config_name, &cwd) {
            Some(path) => Self::from_path(&path)
                .with_context(|| format!("Failed to load config `{}`", path.display())),
            None => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        // Show only filename (sitelink.toml) in warnings
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        let mut config = Self::parse(&content, &display_path)?;
        config.config_path = Some(path.to_path_buf());
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, CONFIG_FILE)
    }

    /// Parse, report unknown fields, validate, then finalize.
    fn parse(content: &str, source: &str) -> Result<Self, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.unknown(field);
        }
        config.validate_into(&mut diag);
        diag.report_warnings(source);
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        config.finalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Normalize values after validation.
    fn finalize(&mut self) {
        if let Some(url) = self.site.url.take() {
            self.site.url = Some(with_trailing_slash(&url));
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// URL style for page routes.
    #[inline]
    pub const fn url_style(&self) -> UrlStyle {
        self.build.url_style()
    }

    /// Configured site URL, always ending with `/`.
    #[inline]
    pub fn site_url(&self) -> Option<&str> {
        self.site.url.as_deref()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply the `--directory-urls` flag.
    pub fn apply_directory_urls(&mut self, directory_urls: Option<bool>) {
        Self::update_option(&mut self.build.use_directory_urls, directory_urls.as_ref());
        if directory_urls.is_some() {
            debug!(
                "config";
                "{} = {} (from command line)",
                BuildSection::USE_DIRECTORY_URLS.as_str(),
                self.build.use_directory_urls
            );
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
    }
}

/// Report a config error the way the CLI shows it.
pub fn report_error(err: &ConfigError) {
    match err {
        ConfigError::Diagnostics(diag) => eprintln!("{diag}"),
        other => {
            log!("error"; "{}", other);
            if let Some(source) = std::error::Error::source(other) {
                eprintln!("{source}");
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.config_path.is_none());
        assert!(config.site.url.is_none());
        assert!(config.build.use_directory_urls);
        assert_eq!(config.url_style(), UrlStyle::Directory);
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            "[site]\nurl = \"https://example.com/docs\"\n[build]\nuse_directory_urls = false",
        )
        .unwrap();
        assert_eq!(config.site_url(), Some("https://example.com/docs/"));
        assert_eq!(config.url_style(), UrlStyle::Flat);
    }

    #[test]
    fn test_from_str_empty() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nurl = \"https://example.com\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_str_wrong_type() {
        let result = SiteConfig::from_str("[build]\nuse_directory_urls = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_str_invalid_url() {
        let result = SiteConfig::from_str("[site]\nurl = \"ftp://example.com\"");
        let Err(ConfigError::Diagnostics(diag)) = result else {
            panic!("expected diagnostics");
        };
        let fields: Vec<&str> = diag.errors().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, [SiteSection::URL.as_str()]);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://example.com\"\ntitle = \"Docs\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));

        assert!(ignored.iter().any(|f| f == "site.title"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_unknown_fields_not_fatal() {
        let config = SiteConfig::from_str("[theme]\nname = \"material\"").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nurl = \"https://example.com\"\n[build]\nuse_directory_urls = true";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[build]\nuse_directory_urls = false").unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.url_style(), UrlStyle::Flat);
        assert_eq!(config.config_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::from_path(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_apply_directory_urls() {
        let mut config = SiteConfig::default();
        config.apply_directory_urls(None);
        assert_eq!(config.url_style(), UrlStyle::Directory);

        config.apply_directory_urls(Some(false));
        assert_eq!(config.url_style(), UrlStyle::Flat);

        config.apply_directory_urls(Some(true));
        assert_eq!(config.url_style(), UrlStyle::Directory);
    }

    #[test]
    fn test_validate_default() {
        assert!(SiteConfig::default().validate().is_ok());
    }
}
