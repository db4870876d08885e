use hyperclust_core::Hyperedge;

use crate::fill::by_size_descending;
use crate::hypergraph::HypergraphImpl;

/// Hyperedges not properly contained in any other hyperedge.
///
/// These are the facets of the simplicial complex generated by the graph.
/// Returned largest first, ties in canonical node order.
pub fn maximal_facets(graph: &HypergraphImpl) -> Vec<Hyperedge> {
    let mut facets: Vec<Hyperedge> = Vec::new();
    for edge in by_size_descending(graph) {
        // any larger superset is covered by an already accepted facet
        if facets.iter().any(|facet| edge.is_proper_subset(facet)) {
            continue;
        }
        facets.push(edge.clone());
    }
    facets
}
