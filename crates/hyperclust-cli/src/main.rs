use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    clustering::{self, ClusteringArgs},
    fill::{self, FillArgs},
    summary::{self, SummaryArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hyperclust", about = "Clustering and fill statistics for hypergraph datasets")]
struct Cli {
    /// Log debug output from the analysis passes.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute node clustering coefficients.
    Clustering(ClusteringArgs),
    /// Compute hyperedge fill coefficients.
    Fill(FillArgs),
    /// Print node, edge, degree and facet counts for a dataset.
    Summary(SummaryArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Clustering(args) => clustering::run(&args),
        Command::Fill(args) => fill::run(&args),
        Command::Summary(args) => summary::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
