//! Sitelink - link resolution for static site generators.
//!
//! Every generated page carries references to other pages and assets. They
//! are authored relative to the site root and must be emitted relative to
//! the page that contains them, so the output works from any mount point.
//!
//! ```text
//! raw reference ──► LinkKind ──► normalize ──► resolve ──► emitted reference
//!                      │                          ▲
//!                      │ external / // / #        │ ResolutionContext
//!                      └──────── verbatim         │ (from the page URL)
//! ```
//!
//! # Example
//!
//! ```
//! use sitelink::{PageRoute, UrlStyle, relative_url, rewrite_page_urls};
//!
//! assert_eq!(relative_url("a/b/c/d/ee", "a/b/z/d/e"), "../../../c/d/ee");
//!
//! let page = PageRoute::new("foo/bar.md", UrlStyle::Directory);
//! assert_eq!(page.url, "foo/bar/");
//! assert_eq!(rewrite_page_urls(["css/site.css"], &page), ["../../css/site.css"]);
//! ```

pub mod config;
pub mod core;
pub mod logger;
pub mod page;
pub mod pipeline;
pub mod utils;

pub use crate::core::{LinkKind, UrlStyle};
pub use page::{NavItem, PageRoute, is_markdown_file, nest_paths};
pub use pipeline::{normalize_url, rewrite_page_urls, rewrite_pages, rewrite_urls};
pub use utils::path::{PathRef, ResolutionContext, normalize, relative_url, resolve};
