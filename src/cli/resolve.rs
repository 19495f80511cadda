//! `resolve` command.

use super::ResolveArgs;
use anyhow::Result;
use sitelink::{debug, relative_url};
use std::io::Write;

/// Print the URL of `args.url` as seen from `args.from`.
pub fn run_resolve(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let resolved = relative_url(&args.url, &args.from);
    debug!("resolve"; "{} from {} -> {}", args.url, args.from, resolved);
    writeln!(out, "{resolved}")?;
    Ok(())
}
