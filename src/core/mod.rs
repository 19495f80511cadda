//! Core types - pure abstractions shared across the codebase.
//!
//! | Module | Purpose                                        |
//! |--------|------------------------------------------------|
//! | `link` | Classification of raw references (`LinkKind`)  |
//! | `url`  | Page URL shape (`UrlStyle`)                    |

mod link;
mod url;

pub use link::LinkKind;
pub use url::UrlStyle;
