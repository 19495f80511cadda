//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← start
/// /home/user/site/sitelink.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Append a trailing slash to a URL path that lacks one.
///
/// The configured site URL always denotes a directory.
pub fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_owned()
    } else {
        format!("{url}/")
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("sitelink.toml"), "").unwrap();

        let found = find_config_file(Path::new("sitelink.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("sitelink.toml"));
    }

    #[test]
    fn test_find_config_file_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("sitelink.toml"), "").unwrap();
        fs::write(nested.join("sitelink.toml"), "").unwrap();

        let found = find_config_file(Path::new("sitelink.toml"), &nested).unwrap();
        assert_eq!(found, nested.join("sitelink.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("definitely-not-a-sitelink-config.toml");
        assert!(find_config_file(name, dir.path()).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file(&path, Path::new("/")).is_none());

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_with_trailing_slash() {
        assert_eq!(with_trailing_slash("https://example.com"), "https://example.com/");
        assert_eq!(with_trailing_slash("https://example.com/docs/"), "https://example.com/docs/");
    }
}
