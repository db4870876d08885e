use std::error::Error;

use clap::Args;
use hyperclust_cli::report::{write_clustering_csv, write_json};
use hyperclust_cli::{clustering_report, load_hypergraph, AnalysisConfig, OutputFormat};
use hyperclust_core::NodeId;
use tracing::info;

use super::{open_output, DatasetArgs, OutputArgs};

#[derive(Args, Debug)]
pub struct ClusteringArgs {
    #[command(flatten)]
    pub input: DatasetArgs,
    /// Report only these nodes (repeatable); every node when omitted.
    #[arg(long = "node", value_name = "ID")]
    pub nodes: Vec<u64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &ClusteringArgs) -> Result<(), Box<dyn Error>> {
    let mut config = AnalysisConfig::resolve(args.input.config.as_deref())?;
    config.apply_overrides(args.input.name.as_deref(), &args.nodes, args.output.format);

    let graph = load_hypergraph(&args.input.dataset, config.name.as_deref())?;
    let nodes: Vec<NodeId> = config.nodes.iter().copied().map(NodeId::from_raw).collect();
    let dataset = args.input.dataset.display().to_string();
    let report = clustering_report(&dataset, &graph, &nodes)?;
    info!(
        rows = report.rows.len(),
        mean = report.summary.mean_clustering,
        "clustering report ready"
    );

    let mut out = open_output(args.output.out.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => write_clustering_csv(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}
