//! Showcase CLI
//!
//! Static landing page generator built from pluggable content sections.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Showcase.
#[derive(Parser)]
#[command(
    name = "showcase",
    version,
    about = "Build a static landing page from content sections"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Command to run; builds the site when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Include draft items
        #[arg(long)]
        drafts: bool,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate configuration, capabilities and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Create a new content item
    New {
        /// Path for the new content (e.g., posts/launch)
        path: std::path::PathBuf,
        /// Title written to the frontmatter
        #[arg(short, long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    showcase::init_tracing(cli.verbose);

    match cli.command {
        None => {
            showcase::cmd::build::run(&cli.config, None, false, None)?;
        }
        Some(Commands::Build {
            output,
            drafts,
            base_url,
        }) => {
            showcase::cmd::build::run(&cli.config, output.as_deref(), drafts, base_url.as_deref())?;
        }
        Some(Commands::Check { strict }) => {
            showcase::cmd::check::run(&cli.config, strict)?;
        }
        Some(Commands::New { path, title }) => {
            showcase::cmd::new::run(&cli.config, &path, title.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_without_command_builds() {
        let cli = Cli::parse_from(["showcase"]);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["showcase", "build", "--output", "dist", "--drafts"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Some(Commands::Build {
                output,
                drafts,
                base_url,
            }) => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(drafts);
                assert!(base_url.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_base_url() {
        let args = ["showcase", "build", "--base-url", "https://example.com"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Some(Commands::Build {
                output, base_url, ..
            }) => {
                assert!(output.is_none());
                assert_eq!(base_url.as_deref(), Some("https://example.com"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["showcase", "check", "--strict"]);

        match cli.command {
            Some(Commands::Check { strict }) => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_new_command_parsing() {
        let args = ["showcase", "new", "posts/launch", "--title", "We are live"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Some(Commands::New { path, title }) => {
                assert_eq!(path, std::path::PathBuf::from("posts/launch"));
                assert_eq!(title.as_deref(), Some("We are live"));
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_verbosity_and_config() {
        let args = ["showcase", "-vv", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
