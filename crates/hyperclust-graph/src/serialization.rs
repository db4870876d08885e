use hyperclust_core::errors::{ErrorInfo, HyperError};
use hyperclust_core::provenance::SchemaVersion;
use hyperclust_core::{Hyperedge, Hypergraph};
use serde::{Deserialize, Serialize};

use crate::hypergraph::HypergraphImpl;

/// Schema written into every serialized graph payload.
pub const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &HypergraphImpl) -> Result<Vec<u8>, HyperError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| HyperError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<HypergraphImpl, HyperError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| HyperError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &HypergraphImpl) -> Result<String, HyperError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| HyperError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<HypergraphImpl, HyperError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| HyperError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    schema_version: SchemaVersion,
    edges: Vec<Vec<u64>>,
}

impl SerializableGraph {
    fn from_graph(graph: &HypergraphImpl) -> Self {
        Self {
            schema_version: GRAPH_SCHEMA,
            edges: graph.hyperedges().map(Hyperedge::raw_nodes).collect(),
        }
    }

    fn into_graph(self) -> Result<HypergraphImpl, HyperError> {
        if !GRAPH_SCHEMA.is_compatible(&self.schema_version) {
            return Err(HyperError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported graph schema")
                    .with_context("found", self.schema_version)
                    .with_context("supported", GRAPH_SCHEMA),
            ));
        }
        let mut graph = HypergraphImpl::new();
        for (position, raw) in self.edges.into_iter().enumerate() {
            let edge = Hyperedge::from_raw(raw).map_err(|err| err.with_context("edge", position))?;
            graph.add_edge(edge);
        }
        Ok(graph)
    }
}
