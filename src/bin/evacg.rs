//! CLI entry point for the `evacg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use evacuation_graph::cli::commands;
use evacuation_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "evacg",
    about = "Road-network graphs for flood evacuation simulations"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display summary information about a network file
    Info {
        /// Path to the network description
        file: PathBuf,
    },
    /// Print the graph's textual rendering
    Show {
        /// Path to the network description
        file: PathBuf,
    },
    /// Enumerate simple paths between two vertices
    Paths {
        /// Path to the network description
        file: PathBuf,
        /// Source vertex (V3 or 3)
        from: String,
        /// Destination vertex (V3 or 3)
        to: String,
        /// Try every vertex ordering instead of following roads
        #[arg(long)]
        every_ordering: bool,
    },
    /// List the neighbours of a vertex
    Neighbours {
        /// Path to the network description
        file: PathBuf,
        /// Vertex (V3 or 3)
        vertex: String,
    },
    /// Block roads and print the remaining network
    Prune {
        /// Path to the network description
        file: PathBuf,
        /// Comma-separated edge labels to block (E1,E4)
        #[arg(long, value_delimiter = ',')]
        block: Vec<String>,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the network description
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Rewrite a network file in canonical form
    Normalize {
        /// Path to the network description
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file),
        Commands::Paths {
            file,
            from,
            to,
            every_ordering,
        } => commands::cmd_paths(&file, &from, &to, every_ordering, json),
        Commands::Neighbours { file, vertex } => commands::cmd_neighbours(&file, &vertex, json),
        Commands::Prune { file, block } => commands::cmd_prune(&file, &block, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
        Commands::Normalize { file, output } => commands::cmd_normalize(&file, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            e if e.is_malformed_input() => 2,
            GraphError::NoEdge { .. }
            | GraphError::IndexOutOfBounds { .. }
            | GraphError::InvalidLabel(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
