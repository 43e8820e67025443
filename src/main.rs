//! Apexmap CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "apexmap")]
#[command(about = "Topic-graph navigator for Apex documentation corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Manifest file path
    #[arg(short, long, default_value = "manifest.json")]
    manifest: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the manifest, then print a summary
    Validate,
    /// Show one topic's metadata as JSON
    Show {
        /// Topic name (case-sensitive)
        name: String,
    },
    /// Print the recommended learning path ending at a topic
    Path {
        /// Topic name (case-sensitive)
        name: String,
    },
    /// List topics, optionally filtered
    List {
        /// Keep only topics with this difficulty
        #[arg(long)]
        difficulty: Option<String>,

        /// Keep only topics carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Keep only topics naming this use case
        #[arg(long)]
        use_case: Option<String>,
    },
    /// Print a topic's documentation body verbatim
    Doc {
        /// Topic name (case-sensitive)
        name: String,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "apexmap={},apexmap_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Validate => commands::validate(cli.manifest),
        Commands::Show { name } => commands::show(cli.manifest, name),
        Commands::Path { name } => commands::path(cli.manifest, name),
        Commands::List {
            difficulty,
            tag,
            use_case,
        } => commands::list(cli.manifest, difficulty, tag, use_case),
        Commands::Doc { name } => commands::doc(cli.manifest, name),
        Commands::Version => {
            println!("apexmap v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
