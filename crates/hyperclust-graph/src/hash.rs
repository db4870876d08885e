use hyperclust_core::{Hyperedge, Hypergraph};
use sha2::{Digest, Sha256};

use crate::hypergraph::HypergraphImpl;
use crate::serialization::GRAPH_SCHEMA;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the schema version and the sorted edge list, so it does
/// not depend on insertion order.
pub fn canonical_hash(graph: &HypergraphImpl) -> String {
    let mut hasher = Sha256::new();
    hasher.update(GRAPH_SCHEMA.major.to_le_bytes());
    hasher.update(GRAPH_SCHEMA.minor.to_le_bytes());

    let mut edges: Vec<&Hyperedge> = graph.hyperedges().collect();
    edges.sort();
    hasher.update((graph.node_count() as u64).to_le_bytes());
    hasher.update((edges.len() as u64).to_le_bytes());
    for edge in edges {
        hasher.update((edge.len() as u64).to_le_bytes());
        for node in edge.nodes() {
            hasher.update(node.as_raw().to_le_bytes());
        }
    }

    format!("{:x}", hasher.finalize())
}
