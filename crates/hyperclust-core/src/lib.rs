#![deny(missing_docs)]
#![doc = "Core identifiers, canonical hyperedges and error types shared by the hyperclust crates."]

use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

mod edge;
pub mod errors;
pub mod provenance;
pub mod rng;

pub use edge::Hyperedge;
pub use errors::{ErrorInfo, HyperError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a [`Hypergraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a distinct hyperedge within a [`Hypergraph`].
///
/// Edge identifiers are insertion indices. Re-inserting an existing
/// hyperedge yields the identifier it was first stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Structural contract for undirected hypergraphs without multi-edges.
pub trait Hypergraph: Send + Sync {
    /// Returns an iterator over all node identifiers in ascending order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all distinct hyperedges in insertion order.
    fn hyperedges(&self) -> Box<dyn ExactSizeIterator<Item = &Hyperedge> + '_>;

    /// Returns the hyperedges containing `node`. Unknown nodes have none.
    fn hyperedges_of(&self, node: NodeId) -> Box<dyn ExactSizeIterator<Item = &Hyperedge> + '_>;

    /// Returns the number of distinct hyperedges containing `node`, or zero
    /// when the node was never inserted.
    fn degree(&self, node: NodeId) -> usize;

    /// Returns whether the exact hyperedge is stored.
    fn contains_edge(&self, edge: &Hyperedge) -> bool;

    /// Inserts a hyperedge, collapsing duplicates onto the stored copy.
    fn add_edge(&mut self, edge: Hyperedge) -> EdgeId;
}
