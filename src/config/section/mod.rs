//! Configuration section definitions.
//!
//! | Section   | Purpose                                 |
//! |-----------|-----------------------------------------|
//! | `[site]`  | Public site address                     |
//! | `[build]` | Page URL shape                          |

mod build;
mod site;

pub use build::BuildSection;
pub use site::SiteSection;
