//! CLI entry point for entmoot

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "entmoot")]
#[command(about = "Static site generator for entmoot.io", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site
    #[command(alias = "g")]
    Generate,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name without extension (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts, newest first
    List,

    /// Display version information
    Version,
}

impl Cli {
    /// The subcommand to run; `generate` when none was given
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "entmoot=debug,info"
    } else {
        "entmoot=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.into_command() {
        Commands::Generate => {
            let site = entmoot::Site::new(&base_dir)?;
            let report = site.generate()?;
            println!(
                "Generated {} posts ({} files) successfully!",
                report.posts,
                report.written.len()
            );
        }

        Commands::New { title, slug } => {
            let site = entmoot::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = site.new_post(&title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List => {
            let site = entmoot::Site::new(&base_dir)?;
            entmoot::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("entmoot version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults_to_generate() {
        let cli = Cli::try_parse_from(["entmoot"]).unwrap();
        assert!(matches!(cli.into_command(), Commands::Generate));

        let cli = Cli::try_parse_from(["entmoot", "--cwd", "/tmp/site", "--debug"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp/site")));
        assert!(cli.debug);
        assert!(matches!(cli.into_command(), Commands::Generate));
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["entmoot", "g"]).unwrap();
        assert!(matches!(cli.into_command(), Commands::Generate));

        let cli = Cli::try_parse_from(["entmoot", "new", "My Post", "--slug", "mine"]).unwrap();
        match cli.into_command() {
            Commands::New { title, slug } => {
                assert_eq!(title, "My Post");
                assert_eq!(slug.as_deref(), Some("mine"));
            }
            _ => panic!("expected new"),
        }

        let cli = Cli::try_parse_from(["entmoot", "version"]).unwrap();
        assert!(matches!(cli.into_command(), Commands::Version));
    }

    #[test]
    fn test_version_is_a_subcommand_only() {
        let err = Cli::try_parse_from(["entmoot", "--version"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
