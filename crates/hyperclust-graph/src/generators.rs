use hyperclust_core::errors::{ErrorInfo, HyperError};
use hyperclust_core::rng::RngHandle;
use hyperclust_core::{Hyperedge, Hypergraph, NodeId};
use rand::seq::index::sample;
use rand::Rng;

use crate::hypergraph::HypergraphImpl;

/// Generates a hypergraph of `n_edges` insertions over `n_nodes` nodes.
///
/// Each insertion draws a size uniformly from `1..=max_edge_size` (capped at
/// `n_nodes`) and then that many distinct nodes. Duplicate draws collapse, so
/// the result may hold fewer than `n_edges` hyperedges. Identical seeds yield
/// identical graphs.
pub fn gen_random_hypergraph(
    n_nodes: usize,
    n_edges: usize,
    max_edge_size: usize,
    rng: &mut RngHandle,
) -> Result<HypergraphImpl, HyperError> {
    if n_nodes == 0 || max_edge_size == 0 {
        return Err(HyperError::Graph(
            ErrorInfo::new(
                "invalid-generator",
                "random generator requires nodes and a positive edge size",
            )
            .with_context("n_nodes", n_nodes)
            .with_context("max_edge_size", max_edge_size),
        ));
    }
    let size_cap = max_edge_size.min(n_nodes);
    let mut graph = HypergraphImpl::new();
    for _ in 0..n_edges {
        let size = rng.gen_range(1..=size_cap);
        let members = sample(rng.inner_mut(), n_nodes, size)
            .into_iter()
            .map(|idx| NodeId::from_raw(idx as u64));
        graph.add_edge(Hyperedge::new(members)?);
    }
    Ok(graph)
}
