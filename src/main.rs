//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "A static blog generator for Markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the blog
    #[command(alias = "b")]
    Build,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Remove generated files
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build => {
            let blog = mdblog::Blog::new(&base_dir)?;
            tracing::info!("Building blog in {:?}", base_dir);
            blog.generate()?;
            println!("Blog generation complete!");
        }

        Commands::New { title } => {
            let blog = mdblog::Blog::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            blog.new_post(&title)?;
        }

        Commands::Clean => {
            let blog = mdblog::Blog::new(&base_dir)?;
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("mdblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
