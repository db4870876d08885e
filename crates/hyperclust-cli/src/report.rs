use std::collections::BTreeMap;
use std::io::Write;

use hyperclust_core::errors::{ErrorInfo, HyperError};
use hyperclust_core::provenance::{RunProvenance, SchemaVersion};
use hyperclust_core::{Hypergraph, NodeId};
use hyperclust_graph::{
    canonical_hash, fill_coefficients, maximal_facets, Analyzer, DegreeSummary, HypergraphImpl,
};
use serde::{Deserialize, Serialize};

/// Schema written into every report.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Clustering coefficient of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    /// Raw node identifier.
    pub node: u64,
    /// Number of hyperedges containing the node.
    pub degree: usize,
    /// Clustering coefficient.
    pub clustering: f64,
}

/// Aggregate figures accompanying a clustering report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringSummary {
    /// Distinct nodes in the graph.
    pub nodes: usize,
    /// Distinct hyperedges in the graph.
    pub edges: usize,
    /// Degree statistics of the graph.
    pub degree: DegreeSummary,
    /// Mean clustering over every node of the graph, whatever rows are
    /// reported.
    pub mean_clustering: f64,
}

/// Per-node clustering coefficients with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringReport {
    /// Where the numbers came from.
    pub provenance: RunProvenance,
    /// Aggregate figures.
    pub summary: ClusteringSummary,
    /// One row per reported node, ordered by node identifier.
    pub rows: Vec<NodeRow>,
}

/// Fill coefficient of one hyperedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRow {
    /// Member nodes in ascending order.
    pub nodes: Vec<u64>,
    /// Number of member nodes.
    pub size: usize,
    /// Fill coefficient.
    pub fill: f64,
}

/// Per-edge fill coefficients with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillReport {
    /// Where the numbers came from.
    pub provenance: RunProvenance,
    /// Distinct hyperedges in the graph.
    pub edges: usize,
    /// Mean fill over hyperedges with at least three nodes, zero when none.
    pub mean_fill: f64,
    /// One row per hyperedge, largest first.
    pub rows: Vec<FillRow>,
}

/// Structural overview of a loaded graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Dataset location.
    pub dataset: String,
    /// Canonical graph hash.
    pub graph_hash: String,
    /// Distinct nodes.
    pub nodes: usize,
    /// Distinct hyperedges.
    pub edges: usize,
    /// Hyperedges not contained in any other hyperedge.
    pub facets: usize,
    /// Degree statistics.
    pub degree: DegreeSummary,
}

fn provenance(dataset: &str, graph: &HypergraphImpl) -> RunProvenance {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    RunProvenance {
        dataset: dataset.to_string(),
        graph_hash: canonical_hash(graph),
        schema_version: REPORT_SCHEMA,
        tool_versions,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Computes clustering coefficients for `nodes`, or for every node when
/// `nodes` is empty. The summary mean always covers every node.
pub fn clustering_report(
    dataset: &str,
    graph: &HypergraphImpl,
    nodes: &[NodeId],
) -> Result<ClusteringReport, HyperError> {
    let analyzer = Analyzer::new(graph);
    let all = analyzer.clustering()?;
    let mean_clustering = mean(all.values().copied());
    let coefficients = if nodes.is_empty() {
        all
    } else {
        let mut selected = BTreeMap::new();
        for node in nodes {
            selected.insert(*node, analyzer.clustering_of(*node)?);
        }
        selected
    };
    let rows: Vec<NodeRow> = coefficients
        .into_iter()
        .map(|(node, clustering)| NodeRow {
            node: node.as_raw(),
            degree: graph.degree(node),
            clustering,
        })
        .collect();
    Ok(ClusteringReport {
        provenance: provenance(dataset, graph),
        summary: ClusteringSummary {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            degree: graph.degree_summary(),
            mean_clustering,
        },
        rows,
    })
}

/// Computes the fill coefficient of every hyperedge.
pub fn fill_report(dataset: &str, graph: &HypergraphImpl) -> FillReport {
    let mut rows: Vec<FillRow> = fill_coefficients(graph)
        .into_iter()
        .map(|(edge, fill)| FillRow {
            nodes: edge.raw_nodes(),
            size: edge.len(),
            fill,
        })
        .collect();
    rows.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.nodes.cmp(&b.nodes)));
    FillReport {
        provenance: provenance(dataset, graph),
        edges: graph.edge_count(),
        mean_fill: mean(rows.iter().filter(|row| row.size >= 3).map(|row| row.fill)),
        rows,
    }
}

/// Summarises the structure of a graph.
pub fn graph_summary(dataset: &str, graph: &HypergraphImpl) -> GraphSummary {
    GraphSummary {
        dataset: dataset.to_string(),
        graph_hash: canonical_hash(graph),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        facets: maximal_facets(graph).len(),
        degree: graph.degree_summary(),
    }
}

/// Writes any report as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), HyperError> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|err| HyperError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
    writeln!(writer).map_err(io_error)
}

/// Writes clustering rows as CSV with a `node,degree,clustering` header.
pub fn write_clustering_csv<W: Write>(
    writer: W,
    report: &ClusteringReport,
) -> Result<(), HyperError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &report.rows {
        csv.serialize(row).map_err(csv_error)?;
    }
    csv.flush().map_err(io_error)
}

/// Writes fill rows as CSV; members are space separated in the `nodes` column.
pub fn write_fill_csv<W: Write>(writer: W, report: &FillReport) -> Result<(), HyperError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["nodes", "size", "fill"]).map_err(csv_error)?;
    for row in &report.rows {
        let nodes = row
            .nodes
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        csv.write_record([nodes, row.size.to_string(), row.fill.to_string()])
            .map_err(csv_error)?;
    }
    csv.flush().map_err(io_error)
}

fn csv_error(err: csv::Error) -> HyperError {
    HyperError::Serde(ErrorInfo::new("serialize-csv", err.to_string()))
}

fn io_error(err: std::io::Error) -> HyperError {
    HyperError::Serde(ErrorInfo::new("io", err.to_string()))
}
