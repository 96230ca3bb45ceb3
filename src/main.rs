//! Ripple CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(about = "Change-impact analysis over project import graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Project root path (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dependency graph and save it to the cache
    Graph,
    /// Show files affected by the given changed paths
    Affected {
        /// Changed file paths, relative to the project root
        paths: Vec<String>,
    },
    /// List files that import the given file
    Dependents {
        path: String,

        /// Maximum traversal depth
        #[arg(short, long, default_value_t = ripple_core::DEFAULT_MAX_DEPTH)]
        depth: usize,
    },
    /// Parse a unified diff and print a per-file summary
    Diff {
        /// Diff file to read instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List test files related to a source file
    Tests { source: String },
    /// Clear the cache
    Clear,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("ripple={}", log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Ripple v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Project root: {}", cli.root.display());

    match cli.command {
        Commands::Graph => commands::graph(cli.root),
        Commands::Affected { paths } => commands::affected(cli.root, paths),
        Commands::Dependents { path, depth } => commands::dependents(cli.root, path, depth),
        Commands::Diff { file } => commands::diff(file),
        Commands::Tests { source } => commands::tests(cli.root, source),
        Commands::Clear => commands::clear(cli.root),
        Commands::Version => {
            println!("Ripple v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
