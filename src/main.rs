//! Papersite - site configuration registry for a static blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use papersite::cli::{self, Cli, Commands};
use papersite::config::Registry;
use papersite::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init {
            name,
            example,
            force,
        } => cli::init::new_site(name.as_deref(), *example, *force).map(|_| ()),
        Commands::Check => cli::check::check_config(&load_registry(&cli)?),
        Commands::Show { args } => cli::show::show_config(&load_registry(&cli)?, args),
        Commands::Posts { args } => cli::posts::list_posts(&load_registry(&cli)?, args),
    }
}

fn load_registry(cli: &Cli) -> Result<Registry> {
    let registry = Registry::load(&cli.config)?;
    debug!("config"; "loaded {}", registry.config().config_path.display());
    Ok(registry)
}
