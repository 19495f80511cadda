//! Page route - source to output path mapping.

use crate::core::UrlStyle;
use crate::utils::path::ResolutionContext;
use crate::utils::path::route::to_url_separators;

/// Recognized markdown source extensions (case-sensitive).
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkdn", "mkd"];

const INDEX_HTML: &str = "index.html";

/// Check whether a source path is a markdown document.
///
/// Leading dots belong to the stem, so `.md` is a dotfile, not a page.
///
/// # Examples
/// ```
/// use sitelink::page::is_markdown_file;
/// assert!(is_markdown_file("index.md"));
/// assert!(is_markdown_file("guide/setup.markdown"));
/// assert!(!is_markdown_file("index.MARKDOWN"));
/// assert!(!is_markdown_file("indexmd"));
/// assert!(!is_markdown_file("foo/.md"));
/// ```
pub fn is_markdown_file(path: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    markdown_stem(name).is_some()
}

/// Stem of a markdown file name; never empty.
fn markdown_stem(name: &str) -> Option<&str> {
    let dots = name.len() - name.trim_start_matches('.').len();
    let (stem, ext) = name[dots..].rsplit_once('.')?;
    MARKDOWN_EXTENSIONS
        .contains(&ext)
        .then(|| &name[..dots + stem.len()])
}

/// Source -> output path mapping for a page
///
/// Contains the path information link resolution needs: where the page is
/// written and which URL it is served at.
///
/// # Example
///
/// ```text
/// Source: foo/bar.md
///
/// Directory style:  dest = foo/bar/index.html   url = foo/bar/
/// Flat style:       dest = foo/bar.html         url = foo/bar.html
/// ```
///
/// `index.md` and `README.md` are index pages of their directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageRoute {
    /// Site-relative source path with `/` separators (e.g., foo/bar.md)
    pub source: String,
    /// Whether this is an index page (index.md or README.md)
    pub is_index: bool,
    /// Site-relative output file (e.g., foo/bar/index.html)
    pub dest: String,
    /// Site-relative page URL (e.g., foo/bar/), empty for the site root
    pub url: String,
    /// URL style the route was built with
    pub style: UrlStyle,
}

impl PageRoute {
    /// Build the route for a source path.
    ///
    /// Non-markdown sources are copied as-is, so their destination is their
    /// source path.
    pub fn new(source: &str, style: UrlStyle) -> Self {
        let source = to_url_separators(source).trim_start_matches('/').to_owned();
        let (parent, name) = source.rsplit_once('/').unwrap_or(("", source.as_str()));

        let (dest, is_index) = if let Some(stem) = markdown_stem(name) {
            let is_index = matches!(stem, "index" | "README");
            let file = if is_index {
                INDEX_HTML.to_owned()
            } else if style.is_directory() {
                format!("{stem}/{INDEX_HTML}")
            } else {
                format!("{stem}.html")
            };
            (join(parent, &file), is_index)
        } else {
            (source.clone(), false)
        };

        let url = page_url(&dest, style);

        Self {
            source,
            is_index,
            dest,
            url,
            style,
        }
    }

    /// Directory that references on this page resolve from.
    #[inline]
    pub fn context(&self) -> ResolutionContext {
        ResolutionContext::for_page(&self.url, self.style)
    }

    /// Absolute URL of this page under `site_url`.
    ///
    /// `site_url` denotes a directory; a missing trailing slash is implied.
    /// Returns `None` when `site_url` is not a valid absolute URL.
    pub fn canonical_url(&self, site_url: &str) -> Option<String> {
        let mut base = url::Url::parse(site_url).ok()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&self.url).ok().map(String::from)
    }
}

/// Join a parent directory and a file name with `/`.
fn join(parent: &str, file: &str) -> String {
    if parent.is_empty() {
        file.to_owned()
    } else {
        format!("{parent}/{file}")
    }
}

/// Page URL for an output file.
///
/// Directory style serves `dir/index.html` as `dir/` and the root index as
/// the empty URL.
fn page_url(dest: &str, style: UrlStyle) -> String {
    if style.is_directory() {
        if dest == INDEX_HTML {
            return String::new();
        }
        if let Some(dir) = dest.strip_suffix(INDEX_HTML)
            && dir.ends_with('/')
        {
            return dir.to_owned();
        }
    }
    dest.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown_file() {
        let expected_results = [
            ("index.md", true),
            ("index.markdown", true),
            ("notes.mdown", true),
            ("notes.mkdn", true),
            ("notes.mkd", true),
            ("index.MARKDOWN", false),
            ("index.txt", false),
            ("indexmd", false),
            ("dir.md/file", false),
            (".md", false),
            ("foo/..md", false),
            ("foo/.hidden.md", true),
            ("foo\\bar.md", true),
        ];
        for (path, expected) in expected_results {
            assert_eq!(is_markdown_file(path), expected, "{path}");
        }
    }

    #[test]
    fn test_route_directory_style() {
        let route = PageRoute::new("foo/bar.md", UrlStyle::Directory);
        assert_eq!(route.dest, "foo/bar/index.html");
        assert_eq!(route.url, "foo/bar/");
        assert!(!route.is_index);

        let route = PageRoute::new("about.md", UrlStyle::Directory);
        assert_eq!(route.url, "about/");

        let route = PageRoute::new("index.md", UrlStyle::Directory);
        assert_eq!(route.dest, "index.html");
        assert_eq!(route.url, "");
        assert!(route.is_index);

        let route = PageRoute::new("guide/README.md", UrlStyle::Directory);
        assert_eq!(route.dest, "guide/index.html");
        assert_eq!(route.url, "guide/");
        assert!(route.is_index);
    }

    #[test]
    fn test_route_flat_style() {
        let route = PageRoute::new("foo/bar.md", UrlStyle::Flat);
        assert_eq!(route.dest, "foo/bar.html");
        assert_eq!(route.url, "foo/bar.html");

        let route = PageRoute::new("index.md", UrlStyle::Flat);
        assert_eq!(route.url, "index.html");
        assert!(route.is_index);

        let route = PageRoute::new("guide/index.md", UrlStyle::Flat);
        assert_eq!(route.url, "guide/index.html");
    }

    #[test]
    fn test_route_assets() {
        let route = PageRoute::new("img/logo.png", UrlStyle::Directory);
        assert_eq!(route.dest, "img/logo.png");
        assert_eq!(route.url, "img/logo.png");

        // Raw HTML files named index.html are served as their directory
        let route = PageRoute::new("raw/index.html", UrlStyle::Directory);
        assert_eq!(route.url, "raw/");
        let route = PageRoute::new("raw/myindex.html", UrlStyle::Directory);
        assert_eq!(route.url, "raw/myindex.html");
    }

    #[test]
    fn test_route_dotfile_is_not_a_page() {
        for style in [UrlStyle::Directory, UrlStyle::Flat] {
            let route = PageRoute::new("foo/.md", style);
            assert_eq!(route.dest, "foo/.md");
            assert_eq!(route.url, "foo/.md");
            assert!(!route.url.contains("//"));
        }

        let route = PageRoute::new("foo/.hidden.md", UrlStyle::Directory);
        assert_eq!(route.dest, "foo/.hidden/index.html");
        assert_eq!(route.url, "foo/.hidden/");
    }

    #[test]
    fn test_route_normalizes_source() {
        let route = PageRoute::new("foo\\bar.md", UrlStyle::Flat);
        assert_eq!(route.source, "foo/bar.md");
        assert_eq!(route.url, "foo/bar.html");

        let route = PageRoute::new("/about.md", UrlStyle::Directory);
        assert_eq!(route.source, "about.md");
        assert_eq!(route.url, "about/");
    }

    #[test]
    fn test_route_context() {
        let depth = |source: &str, style| PageRoute::new(source, style).context().depth();
        assert_eq!(depth("index.md", UrlStyle::Flat), 0);
        assert_eq!(depth("about.md", UrlStyle::Flat), 0);
        assert_eq!(depth("foo/bar.md", UrlStyle::Flat), 1);
        assert_eq!(depth("index.md", UrlStyle::Directory), 0);
        assert_eq!(depth("about.md", UrlStyle::Directory), 1);
        assert_eq!(depth("foo/bar.md", UrlStyle::Directory), 2);
    }

    #[test]
    fn test_canonical_url() {
        let route = PageRoute::new("foo/bar.md", UrlStyle::Directory);
        assert_eq!(
            route.canonical_url("https://example.com/docs/").as_deref(),
            Some("https://example.com/docs/foo/bar/")
        );
        // Missing trailing slash on the site URL is implied
        assert_eq!(
            route.canonical_url("https://example.com/docs").as_deref(),
            Some("https://example.com/docs/foo/bar/")
        );

        let home = PageRoute::new("index.md", UrlStyle::Directory);
        assert_eq!(
            home.canonical_url("https://example.com").as_deref(),
            Some("https://example.com/")
        );

        assert_eq!(route.canonical_url("not a url"), None);
    }
}
