use std::error::Error;

use clap::Args;
use hyperclust_cli::report::{write_fill_csv, write_json};
use hyperclust_cli::{fill_report, load_hypergraph, AnalysisConfig, OutputFormat};
use tracing::info;

use super::{open_output, DatasetArgs, OutputArgs};

#[derive(Args, Debug)]
pub struct FillArgs {
    #[command(flatten)]
    pub input: DatasetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &FillArgs) -> Result<(), Box<dyn Error>> {
    let mut config = AnalysisConfig::resolve(args.input.config.as_deref())?;
    config.apply_overrides(args.input.name.as_deref(), &[], args.output.format);

    let graph = load_hypergraph(&args.input.dataset, config.name.as_deref())?;
    let report = fill_report(&args.input.dataset.display().to_string(), &graph);
    info!(rows = report.rows.len(), mean = report.mean_fill, "fill report ready");

    let mut out = open_output(args.output.out.as_deref())?;
    match config.format {
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => write_fill_csv(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}
