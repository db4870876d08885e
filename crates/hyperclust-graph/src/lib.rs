#![deny(missing_docs)]
#![doc = include_str!("../docs/graph-api.md")]

//! Undirected hypergraph storage and the clustering and fill statistics
//! computed over it.

mod clustering;
mod facets;
mod fill;
mod generators;
mod hash;
mod hypergraph;
mod ids;
mod neighborhood;
mod overlap;
mod serialization;

pub use clustering::Analyzer;
pub use facets::maximal_facets;
pub use fill::{fill_coefficient_of, fill_coefficients};
pub use generators::gen_random_hypergraph;
pub use hash::canonical_hash;
pub use hypergraph::{DegreeSummary, HypergraphImpl};
pub use neighborhood::NeighborhoodIndex;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, GRAPH_SCHEMA,
};
