use std::error::Error;
use std::io::{self, Write};

use clap::Args;
use hyperclust_cli::report::write_json;
use hyperclust_cli::{graph_summary, load_hypergraph, AnalysisConfig};

use super::DatasetArgs;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: DatasetArgs,
}

pub fn run(args: &SummaryArgs) -> Result<(), Box<dyn Error>> {
    let mut config = AnalysisConfig::resolve(args.input.config.as_deref())?;
    config.apply_overrides(args.input.name.as_deref(), &[], None);

    let graph = load_hypergraph(&args.input.dataset, config.name.as_deref())?;
    let summary = graph_summary(&args.input.dataset.display().to_string(), &graph);
    let mut stdout = io::stdout().lock();
    write_json(&mut stdout, &summary)?;
    stdout.flush()?;
    Ok(())
}
