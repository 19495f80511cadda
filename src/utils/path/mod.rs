//! Path and URL utilities.
//!
//! Pure functions for site path manipulation. No side effects.
//!
//! - [`normalize`]: canonical [`PathRef`] form (`normalize`)
//! - [`relative`]: shortest relative reference (`resolve`, `relative_url`)
//! - [`route`]: URL string helpers (`is_external_link`, `split_suffix`)

pub mod normalize;
pub mod relative;
pub mod route;

pub use normalize::{PathRef, normalize};
pub use relative::{ResolutionContext, relative_url, resolve};
