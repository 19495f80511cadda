//! Default navigation - source paths grouped by directory.
//!
//! Sites without an explicit nav get one built from their page list:
//!
//! ```text
//! index.md                    index.md
//! user-guide/setup.md   ──►   User guide: [user-guide/setup.md]
//! about/license.md            About: [about/license.md]
//! ```

use serde::Serialize;
use serde::ser::SerializeMap;

/// One entry of a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// A page, by its source path as given
    Page(String),
    /// A directory, titled from its name
    Section { title: String, children: Vec<NavItem> },
}

impl NavItem {
    pub fn page(path: impl Into<String>) -> Self {
        Self::Page(path.into())
    }

    pub fn section(title: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }
}

/// Pages serialize as their path, sections as `{ "<title>": [..] }`.
impl Serialize for NavItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            NavItem::Page(path) => serializer.serialize_str(path),
            NavItem::Section { title, children } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(title, children)?;
                map.end()
            }
        }
    }
}

/// Title for a directory name.
///
/// `-` and `_` become spaces. An all-lowercase name gets its first letter
/// capitalized; any other casing is kept.
///
/// # Examples
/// ```
/// use sitelink::page::dirname_to_title;
/// assert_eq!(dirname_to_title("user-guide"), "User guide");
/// assert_eq!(dirname_to_title("API_reference"), "API reference");
/// ```
pub fn dirname_to_title(dirname: &str) -> String {
    let title = dirname.replace(['-', '_'], " ");
    if title.to_lowercase() != title {
        return title;
    }
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => title,
    }
}

/// Group source paths into sections by their parent directories.
///
/// Order is first appearance, both for pages and for sections. Leaves keep
/// the path exactly as given, separators included; `/` and `\` both
/// separate directories.
pub fn nest_paths<I, S>(paths: I) -> Vec<NavItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut nested = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let parents: Vec<&str> = match path.rsplit_once(['/', '\\']) {
            Some((parent, _)) => parent
                .split(['/', '\\'])
                .filter(|part| !part.is_empty() && *part != ".")
                .collect(),
            None => Vec::new(),
        };
        insert(&mut nested, &parents, path);
    }
    nested
}

fn insert(branch: &mut Vec<NavItem>, parents: &[&str], path: &str) {
    let Some((dir, rest)) = parents.split_first() else {
        branch.push(NavItem::page(path));
        return;
    };

    let title = dirname_to_title(dir);
    for item in branch.iter_mut() {
        if let NavItem::Section { title: existing, children } = item
            && *existing == title
        {
            return insert(children, rest, path);
        }
    }

    let mut children = Vec::new();
    insert(&mut children, rest, path);
    branch.push(NavItem::Section { title, children });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site(sep: &str) -> Vec<String> {
        [
            "index.md",
            "user-guide/configuration.md",
            "user-guide/styling-your-docs.md",
            "user-guide/writing-your-docs.md",
            "about/contributing.md",
            "about/license.md",
            "about/release-notes.md",
        ]
        .iter()
        .map(|p| p.replace('/', sep))
        .collect()
    }

    #[test]
    fn test_dirname_to_title() {
        assert_eq!(dirname_to_title("about"), "About");
        assert_eq!(dirname_to_title("release_notes"), "Release notes");
        assert_eq!(dirname_to_title("FAQ"), "FAQ");
        assert_eq!(dirname_to_title("camelCase-dir"), "camelCase dir");
        assert_eq!(dirname_to_title("2024"), "2024");
        assert_eq!(dirname_to_title("überblick"), "Überblick");
        assert_eq!(dirname_to_title(""), "");
    }

    #[test]
    fn test_nest_paths() {
        for sep in ["/", "\\"] {
            let paths = site(sep);
            let p = |i: usize| NavItem::page(&paths[i]);
            assert_eq!(
                nest_paths(&paths),
                [
                    p(0),
                    NavItem::section("User guide", vec![p(1), p(2), p(3)]),
                    NavItem::section("About", vec![p(4), p(5), p(6)]),
                ],
                "separator {sep:?}"
            );
        }
    }

    #[test]
    fn test_nest_paths_deep_and_interleaved() {
        let nav = nest_paths(["a/b/one.md", "top.md", "a/two.md", "a/b/three.md"]);
        assert_eq!(
            nav,
            [
                NavItem::section(
                    "A",
                    vec![
                        NavItem::section("B", vec![NavItem::page("a/b/one.md"), NavItem::page("a/b/three.md")]),
                        NavItem::page("a/two.md"),
                    ]
                ),
                NavItem::page("top.md"),
            ]
        );
    }

    #[test]
    fn test_nest_paths_same_title() {
        // Directories that title the same share a section
        let nav = nest_paths(["user-guide/a.md", "user_guide/b.md"]);
        assert_eq!(
            nav,
            [NavItem::section(
                "User guide",
                vec![NavItem::page("user-guide/a.md"), NavItem::page("user_guide/b.md")]
            )]
        );
    }

    #[test]
    fn test_nest_paths_empty() {
        assert!(nest_paths(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_nav_json() {
        let nav = nest_paths(site("/"));
        assert_eq!(
            serde_json::to_value(&nav).unwrap(),
            json!([
                "index.md",
                { "User guide": [
                    "user-guide/configuration.md",
                    "user-guide/styling-your-docs.md",
                    "user-guide/writing-your-docs.md"
                ] },
                { "About": ["about/contributing.md", "about/license.md", "about/release-notes.md"] }
            ])
        );
    }
}
