//! `nav` command.
//!
//! Text output indents each section's children by two spaces:
//!
//! ```text
//! index.md
//! User guide/
//!   user-guide/setup.md
//! ```

use super::NavArgs;
use anyhow::Result;
use sitelink::{NavItem, debug, nest_paths};
use std::io::Write;

pub fn run_nav(args: &NavArgs, out: &mut impl Write) -> Result<()> {
    let nav = nest_paths(&args.sources);
    debug!("nav"; "{} sources, {} top-level entries", args.sources.len(), nav.len());

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &nav)?;
        writeln!(out)?;
    } else {
        write_tree(&nav, 0, out)?;
    }
    Ok(())
}

fn write_tree(items: &[NavItem], depth: usize, out: &mut impl Write) -> Result<()> {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            NavItem::Page(path) => writeln!(out, "{indent}{path}")?,
            NavItem::Section { title, children } => {
                writeln!(out, "{indent}{title}/")?;
                write_tree(children, depth + 1, out)?;
            }
        }
    }
    Ok(())
}
