//! Sitelink - resolve and rewrite links of a static site.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use sitelink::config::{self, ConfigError, SiteConfig};
use sitelink::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.command.common().verbose);

    let mut config = match SiteConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => match err.downcast_ref::<ConfigError>() {
            Some(config_err) => {
                config::report_error(config_err);
                std::process::exit(1);
            }
            None => return Err(err),
        },
    };

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &mut stdout),
        Commands::Rewrite { args } => {
            config.apply_directory_urls(args.directory_urls);
            cli::rewrite::run_rewrite(args, &config, &mut stdout)
        }
        Commands::Route { args } => {
            config.apply_directory_urls(args.directory_urls);
            cli::route::run_route(args, &config, &mut stdout)
        }
        Commands::Nav { args } => cli::nav::run_nav(args, &mut stdout),
    }
}
