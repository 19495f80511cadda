//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use sitelink::config::CONFIG_FILE;
use std::path::PathBuf;

/// Sitelink - resolve and rewrite links of a static site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a site-relative URL against another URL
    #[command(visible_alias = "res")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Rewrite page references relative to each page
    #[command(visible_alias = "rw")]
    Rewrite {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// Show the output URL of source documents
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Build the default navigation from source documents
    Nav {
        #[command(flatten)]
        args: NavArgs,
    },
}

impl Commands {
    /// Options shared by every subcommand.
    pub const fn common(&self) -> &CommonArgs {
        match self {
            Self::Resolve { args } => &args.common,
            Self::Rewrite { args } => &args.common,
            Self::Route { args } => &args.common,
            Self::Nav { args } => &args.common,
        }
    }
}

/// Shared arguments for all subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Target URL, relative to the site root
    pub url: String,

    /// URL of the referencing page
    #[arg(long, short, value_name = "PAGE_URL")]
    pub from: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Rewrite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Source document of a page (repeatable), e.g. `foo/bar.md`
    #[arg(long = "page", short, value_name = "SOURCE", required = true)]
    pub pages: Vec<String>,

    /// References to rewrite, in order
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Serve pages as `page/` instead of `page.html`
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub directory_urls: Option<bool>,

    /// Print JSON records (source, url, rewritten urls) per page
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Route command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// Source documents, relative to the site root
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<String>,

    /// Serve pages as `page/` instead of `page.html`
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub directory_urls: Option<bool>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Nav command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NavArgs {
    /// Source documents, in nav order
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<String>,

    /// Print the nav as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}
