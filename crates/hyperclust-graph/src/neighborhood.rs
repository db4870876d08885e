use std::collections::{BTreeMap, BTreeSet};

use hyperclust_core::errors::{ErrorInfo, HyperError};
use hyperclust_core::{Hypergraph, NodeId};
use tracing::debug;

use crate::hypergraph::HypergraphImpl;

/// Immutable table of open neighborhoods, one entry per node of the graph it
/// was built from.
///
/// The index is stamped with the identity and revision of the graph it was
/// built from. Edges added to the graph afterwards are not reflected, and an
/// index built from another graph describes different edges;
/// [`NeighborhoodIndex::ensure_current`] rejects both instead of answering
/// from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodIndex {
    neighbors: BTreeMap<NodeId, BTreeSet<NodeId>>,
    graph_id: u64,
    revision: u64,
}

impl NeighborhoodIndex {
    /// Computes the neighborhood of every node in a single pass over the edges.
    pub fn build(graph: &HypergraphImpl) -> Self {
        let mut neighbors: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
        for edge in graph.hyperedges() {
            for node in edge.nodes() {
                neighbors
                    .entry(*node)
                    .or_default()
                    .extend(edge.nodes().iter().filter(|other| *other != node));
            }
        }
        debug!(
            nodes = neighbors.len(),
            edges = graph.edge_count(),
            revision = graph.revision(),
            "built neighborhood index"
        );
        Self {
            neighbors,
            graph_id: graph.instance_id(),
            revision: graph.revision(),
        }
    }

    /// Revision of the graph this index was built from.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns whether the index holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns whether the index was built from `graph` itself.
    pub fn belongs_to(&self, graph: &HypergraphImpl) -> bool {
        self.graph_id == graph.instance_id()
    }

    /// Returns whether the index was built from `graph` and reflects every
    /// edge currently in it.
    pub fn is_current(&self, graph: &HypergraphImpl) -> bool {
        self.belongs_to(graph) && self.revision == graph.revision()
    }

    /// Fails with `foreign-index` when the index was built from another
    /// graph, and with `stale-index` when `graph` changed since the build.
    pub fn ensure_current(&self, graph: &HypergraphImpl) -> Result<(), HyperError> {
        if !self.belongs_to(graph) {
            return Err(HyperError::Index(
                ErrorInfo::new("foreign-index", "neighborhood index was built from another graph")
                    .with_context("index_graph", self.graph_id)
                    .with_context("graph", graph.instance_id())
                    .with_hint("build the index from the graph being analysed"),
            ));
        }
        if self.revision == graph.revision() {
            return Ok(());
        }
        Err(HyperError::Index(
            ErrorInfo::new("stale-index", "neighborhood index predates graph changes")
                .with_context("index_revision", self.revision)
                .with_context("graph_revision", graph.revision())
                .with_hint("rebuild the index after the last edge insertion"),
        ))
    }

    /// Nodes other than `node` that share at least one hyperedge with it.
    pub fn neighbors_of(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, HyperError> {
        self.neighbors.get(&node).ok_or_else(|| {
            HyperError::Graph(
                ErrorInfo::new("unknown-node", "node does not exist")
                    .with_context("node", node.as_raw()),
            )
        })
    }

    /// Union of the neighborhoods of every node in `nodes`. An empty slice
    /// yields an empty set.
    pub fn neighborhood_of(&self, nodes: &[NodeId]) -> Result<BTreeSet<NodeId>, HyperError> {
        let mut union = BTreeSet::new();
        for node in nodes {
            union.extend(self.neighbors_of(*node)?.iter().copied());
        }
        Ok(union)
    }
}
