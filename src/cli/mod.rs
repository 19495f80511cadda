//! Command-line interface module.
//!
//! | Command   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `resolve` | Relative URL between two site URLs               |
//! | `rewrite` | Rewrite a batch of references for several pages  |
//! | `route`   | Source document to page URL mapping              |
//! | `nav`     | Default navigation grouped by directory          |

mod args;
pub mod nav;
pub mod resolve;
pub mod rewrite;
pub mod route;

pub use args::{Cli, Commands, CommonArgs, NavArgs, ResolveArgs, RewriteArgs, RouteArgs};
