#![deny(missing_docs)]
#![doc = "Dataset loading, configuration and report writers behind the `hyperclust` binary."]

/// YAML analysis configuration and command line overrides.
pub mod config;
/// Loader for `<name>-nverts.txt` / `<name>-simplices.txt` datasets.
pub mod dataset;
/// Clustering, fill and summary reports with JSON and CSV writers.
pub mod report;

pub use config::{AnalysisConfig, OutputFormat};
pub use dataset::{dataset_paths, load_hypergraph, parse_edges, DatasetPaths};
pub use report::{
    clustering_report, fill_report, graph_summary, ClusteringReport, FillReport, GraphSummary,
};
