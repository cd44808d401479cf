//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Site configuration registry for a static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a new site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Write the populated example instead of the commented template
        #[arg(short, long)]
        example: bool,

        /// Overwrite an existing site.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the configuration as the JSON build artifact
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// List visible posts for one page of a posts manifest
    #[command(visible_alias = "p")]
    Posts {
        #[command(flatten)]
        args: PostsArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print the JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Drop inactive social links from the output
    #[arg(short, long)]
    pub active_only: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Posts command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PostsArgs {
    /// JSON array of post frontmatter
    #[arg(value_name = "MANIFEST", value_hint = clap::ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Listing page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Include draft posts
    #[arg(short, long)]
    pub drafts: bool,

    /// Include scheduled posts regardless of the margin
    #[arg(long)]
    pub preview: bool,

    /// Evaluate visibility at this time instead of now (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_datetime)]
    pub now: Option<crate::utils::DateTimeUtc>,
}

fn parse_datetime(s: &str) -> Result<crate::utils::DateTimeUtc, String> {
    crate::utils::DateTimeUtc::parse(s)
        .ok_or_else(|| format!("'{s}' is not a date (expected RFC 3339 or YYYY-MM-DD)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::DateTimeUtc;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_posts() {
        let cli = Cli::parse_from([
            "papersite",
            "posts",
            "posts.json",
            "--page",
            "2",
            "--drafts",
            "--now",
            "2024-06-15T12:00:00Z",
        ]);
        let Commands::Posts { args } = cli.command else {
            panic!("expected posts command");
        };
        assert_eq!(args.page, 2);
        assert!(args.drafts);
        assert!(!args.preview);
        assert_eq!(args.now, Some(DateTimeUtc::new(2024, 6, 15, 12, 0, 0)));
    }

    #[test]
    fn test_parse_bad_now() {
        let result = Cli::try_parse_from(["papersite", "posts", "p.json", "--now", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["papersite", "show", "-C", "custom.toml", "-v", "--pretty"]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show { args } if args.pretty));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["papersite", "init", "blog", "--example"]);
        let Commands::Init {
            name,
            example,
            force,
        } = cli.command
        else {
            panic!("expected init command");
        };
        assert_eq!(name, Some(PathBuf::from("blog")));
        assert!(example);
        assert!(!force);
    }
}
