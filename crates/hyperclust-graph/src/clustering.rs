use std::collections::{BTreeMap, BTreeSet};

use hyperclust_core::errors::HyperError;
use hyperclust_core::{Hyperedge, Hypergraph, NodeId};
use itertools::Itertools;
use tracing::debug;

use crate::hypergraph::HypergraphImpl;
use crate::neighborhood::NeighborhoodIndex;
use crate::overlap;

/// Read-only analysis view pairing a graph with a current neighborhood index.
///
/// The graph stays borrowed for the lifetime of the analyzer, so the index
/// cannot fall out of date while queries are answered.
#[derive(Debug, Clone)]
pub struct Analyzer<'g> {
    graph: &'g HypergraphImpl,
    index: NeighborhoodIndex,
}

impl<'g> Analyzer<'g> {
    /// Builds the neighborhood index for `graph`.
    pub fn new(graph: &'g HypergraphImpl) -> Self {
        Self {
            graph,
            index: NeighborhoodIndex::build(graph),
        }
    }

    /// Reuses a prebuilt index, rejecting it when it does not match `graph`.
    pub fn with_index(
        graph: &'g HypergraphImpl,
        index: NeighborhoodIndex,
    ) -> Result<Self, HyperError> {
        index.ensure_current(graph)?;
        Ok(Self { graph, index })
    }

    /// The analysed graph.
    pub fn graph(&self) -> &'g HypergraphImpl {
        self.graph
    }

    /// The neighborhood index backing the queries.
    pub fn index(&self) -> &NeighborhoodIndex {
        &self.index
    }

    /// See [`NeighborhoodIndex::neighbors_of`].
    pub fn neighbors_of(&self, node: NodeId) -> Result<&BTreeSet<NodeId>, HyperError> {
        self.index.neighbors_of(node)
    }

    /// See [`NeighborhoodIndex::neighborhood_of`].
    pub fn neighborhood_of(&self, nodes: &[NodeId]) -> Result<BTreeSet<NodeId>, HyperError> {
        self.index.neighborhood_of(nodes)
    }

    /// Extra overlap between two hyperedges of the graph.
    ///
    /// Fails with `unknown-edge` when either edge is not stored in the graph.
    pub fn extra_overlap(&self, a: &Hyperedge, b: &Hyperedge) -> Result<f64, HyperError> {
        self.graph.ensure_edge(a)?;
        self.graph.ensure_edge(b)?;
        overlap::extra_overlap(&self.index, a, b)
    }

    /// Clustering coefficient of a single node.
    ///
    /// Sums the extra overlap over every unordered pair of hyperedges
    /// containing `node` and divides by `C(deg, 2)`. Nodes of degree below two,
    /// including nodes absent from the graph, score exactly zero.
    pub fn clustering_of(&self, node: NodeId) -> Result<f64, HyperError> {
        let degree = self.graph.degree(node);
        if degree < 2 {
            return Ok(0.0);
        }
        let incident: Vec<&Hyperedge> = self.graph.hyperedges_of(node).collect();
        let mut total = 0.0;
        for (a, b) in incident.iter().tuple_combinations() {
            total += overlap::extra_overlap(&self.index, a, b)?;
        }
        let pairs = (degree * (degree - 1)) as f64 / 2.0;
        Ok(total / pairs)
    }

    /// Clustering coefficient of every node, ordered by node identifier.
    pub fn clustering(&self) -> Result<BTreeMap<NodeId, f64>, HyperError> {
        let mut coefficients = BTreeMap::new();
        for node in self.graph.nodes() {
            coefficients.insert(node, self.clustering_of(node)?);
        }
        debug!(nodes = coefficients.len(), "computed clustering coefficients");
        Ok(coefficients)
    }
}
