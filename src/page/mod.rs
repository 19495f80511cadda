//! Page addressing.
//!
//! Maps source documents to their output files and page URLs, which decide
//! the directory a page's references are resolved from, and groups them
//! into the default navigation.

mod nav;
mod route;

pub use nav::{NavItem, dirname_to_title, nest_paths};
pub use route::{PageRoute, is_markdown_file};
