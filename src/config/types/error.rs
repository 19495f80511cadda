//! Configuration errors and diagnostics.
//!
//! Loading collects every problem before giving up:
//!
//! | Severity  | Source                           | Effect            |
//! |-----------|----------------------------------|-------------------|
//! | `Error`   | field fails validation           | loading fails     |
//! | `Warning` | field unknown to `sitelink.toml` | logged, ignored   |

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`sitelink.toml` is not valid TOML")]
    Toml(#[from] toml::de::Error),

    // Printed as-is, the diagnostics carry their own detail
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One problem found in the config, tied to a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    /// e.g. `site.url`, or the path of an unknown field
    pub field: String,
    pub message: String,
    pub hint: Option<&'static str>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.cyan(), self.message)?;
        if let Some(hint) = self.hint {
            write!(f, "\n  {} {hint}", "hint:".yellow())?;
        }
        Ok(())
    }
}

/// Diagnostics gathered while loading one config file.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A declared field holds an unusable value.
    pub fn invalid(&mut self, field: FieldPath, message: impl Into<String>, hint: &'static str) {
        self.items.push(ConfigDiagnostic {
            severity: Severity::Error,
            field: field.as_str().to_owned(),
            message: message.into(),
            hint: Some(hint),
        });
    }

    /// A field the config schema does not know.
    pub fn unknown(&mut self, path: impl Into<String>) {
        self.items.push(ConfigDiagnostic {
            severity: Severity::Warning,
            field: path.into(),
            message: "unknown field, ignored".into(),
            hint: None,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.of(Severity::Warning)
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.items.iter().filter(move |d| d.severity == severity)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Log warnings for `source` (a file name).
    pub fn report_warnings(&self, source: &str) {
        for warning in self.warnings() {
            crate::log!("warning"; "{}: {}", source, warning);
        }
    }

    /// `Err(self)` when any error was collected; warnings alone pass.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors().count();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{}", format!("invalid config ({count} {noun})").red().bold())?;
        for error in self.errors() {
            write!(f, "\n{} {error}", "→".red())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
