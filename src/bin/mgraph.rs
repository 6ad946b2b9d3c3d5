//! CLI entry point for the `mgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mention_graph::cli::commands;
use mention_graph::{load_config, Config, GraphError};

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Build mention graphs from tweet search results"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export nodes and index-linked edges as JSON for visualization
    Export {
        /// Path to the JSON tweet file
        file: PathBuf,
        /// Single-line JSON, overriding the config file
        #[arg(long)]
        compact: bool,
    },
    /// List every edge as "[source, target] of strength S - tags: ..."
    List {
        /// Path to the JSON tweet file
        file: PathBuf,
    },
    /// Show importance, neighbours and tags of one user
    Node {
        /// Path to the JSON tweet file
        file: PathBuf,
        /// Screen name
        user: String,
    },
    /// Summary statistics about the graph
    Stats {
        /// Path to the JSON tweet file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(3);
            }
        },
        None => Config::default(),
    };

    let result = match cli.command {
        Commands::Export { file, compact } => {
            commands::cmd_export(&file, config.export.pretty && !compact)
        }
        Commands::List { file } => commands::cmd_list(&file),
        Commands::Node { file, user } => commands::cmd_node(&file, &user, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MissingAuthor { .. }
            | GraphError::MalformedRecord { .. }
            | GraphError::InvalidEncoding(_)
            | GraphError::Json(_) => 2,
            GraphError::Config(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
