use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use hyperclust_core::{
    errors::{ErrorInfo, HyperError},
    EdgeId, Hyperedge, Hypergraph, NodeId,
};
use serde::{Deserialize, Serialize};

use crate::ids::{edge_index, make_edge};

/// Degree statistics over all nodes of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    /// Smallest degree observed, `None` for an empty graph.
    pub min_degree: Option<usize>,
    /// Largest degree observed, `None` for an empty graph.
    pub max_degree: Option<usize>,
    /// Mean degree over all nodes, zero for an empty graph.
    pub mean_degree: f64,
    /// Size of the largest hyperedge, zero for an empty graph.
    pub max_edge_size: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeRecord {
    edges: BTreeSet<EdgeId>,
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

fn next_graph_id() -> u64 {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Undirected hypergraph with set semantics on hyperedges.
///
/// Hyperedges are stored once in insertion order and deduplicated through
/// their canonical form. Every node keeps the identifiers of the edges it
/// belongs to, so the node set and the degree map always follow from the
/// stored edges.
///
/// Each instance carries a process-unique identity, assigned on construction
/// and on clone, that derived indexes are stamped with.
#[derive(Debug)]
pub struct HypergraphImpl {
    id: u64,
    nodes: BTreeMap<NodeId, NodeRecord>,
    edges: Vec<Hyperedge>,
    signatures: BTreeMap<Hyperedge, EdgeId>,
    revision: u64,
}

impl Default for HypergraphImpl {
    fn default() -> Self {
        Self {
            id: next_graph_id(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            signatures: BTreeMap::new(),
            revision: 0,
        }
    }
}

impl Clone for HypergraphImpl {
    fn clone(&self) -> Self {
        Self {
            id: next_graph_id(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            signatures: self.signatures.clone(),
            revision: self.revision,
        }
    }
}

impl HypergraphImpl {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-unique identity of this graph instance. Clones get a new one.
    pub fn instance_id(&self) -> u64 {
        self.id
    }

    /// Builds a hypergraph by inserting every edge of the collection in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Hyperedge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Number of effective insertions applied so far.
    ///
    /// Duplicate insertions leave the revision untouched.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct hyperedges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether `node` belongs to at least one hyperedge.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Returns the identifier a hyperedge is stored under.
    pub fn edge_id(&self, edge: &Hyperedge) -> Option<EdgeId> {
        self.signatures.get(edge).copied()
    }

    /// Returns the hyperedge stored under `id`.
    pub fn edge(&self, id: EdgeId) -> Result<&Hyperedge, HyperError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            HyperError::Graph(
                ErrorInfo::new("unknown-edge", "edge does not exist").with_context("edge", id.as_raw()),
            )
        })
    }

    /// Fails with `unknown-edge` unless the hyperedge is stored.
    pub(crate) fn ensure_edge(&self, edge: &Hyperedge) -> Result<(), HyperError> {
        if self.signatures.contains_key(edge) {
            return Ok(());
        }
        Err(HyperError::Graph(
            ErrorInfo::new("unknown-edge", "hyperedge is not part of the graph")
                .with_context("edge", edge),
        ))
    }

    /// Computes degree statistics over all nodes.
    pub fn degree_summary(&self) -> DegreeSummary {
        let mut min_degree: Option<usize> = None;
        let mut max_degree: Option<usize> = None;
        let mut total = 0usize;
        for record in self.nodes.values() {
            let degree = record.edges.len();
            min_degree = Some(min_degree.map(|v| v.min(degree)).unwrap_or(degree));
            max_degree = Some(max_degree.map(|v| v.max(degree)).unwrap_or(degree));
            total += degree;
        }
        let mean_degree = if self.nodes.is_empty() {
            0.0
        } else {
            total as f64 / self.nodes.len() as f64
        };
        DegreeSummary {
            min_degree,
            max_degree,
            mean_degree,
            max_edge_size: self.edges.iter().map(Hyperedge::len).max().unwrap_or(0),
        }
    }
}

impl Hypergraph for HypergraphImpl {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    fn hyperedges(&self) -> Box<dyn ExactSizeIterator<Item = &Hyperedge> + '_> {
        Box::new(self.edges.iter())
    }

    fn hyperedges_of(&self, node: NodeId) -> Box<dyn ExactSizeIterator<Item = &Hyperedge> + '_> {
        match self.nodes.get(&node) {
            Some(record) => Box::new(
                record
                    .edges
                    .iter()
                    .map(move |id| &self.edges[edge_index(*id)]),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn degree(&self, node: NodeId) -> usize {
        self.nodes
            .get(&node)
            .map(|record| record.edges.len())
            .unwrap_or(0)
    }

    fn contains_edge(&self, edge: &Hyperedge) -> bool {
        self.signatures.contains_key(edge)
    }

    fn add_edge(&mut self, edge: Hyperedge) -> EdgeId {
        if let Some(existing) = self.signatures.get(&edge) {
            return *existing;
        }
        let id = make_edge(self.edges.len());
        for node in edge.nodes() {
            self.nodes.entry(*node).or_default().edges.insert(id);
        }
        self.signatures.insert(edge.clone(), id);
        self.edges.push(edge);
        self.revision += 1;
        id
    }
}
