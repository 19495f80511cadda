//! Page output pipeline.
//!
//! The link-rewriting stage consumed by page rendering. Pure: no I/O, no
//! caching, safe to call from any number of rendering workers.

pub mod rewrite;

pub use rewrite::{normalize_url, rewrite_page_urls, rewrite_pages, rewrite_urls};
