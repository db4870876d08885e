use std::collections::BTreeMap;

use hyperclust_core::{Hyperedge, Hypergraph};
use tracing::debug;

use crate::hypergraph::HypergraphImpl;

/// Number of subsets of an `size`-element edge that could count towards its
/// fill: everything except the empty set, the edge itself and the singletons.
fn subset_capacity(size: usize) -> f64 {
    let exponent = i32::try_from(size).unwrap_or(i32::MAX);
    2f64.powi(exponent) - 2.0 - size as f64
}

/// Orders edges by size descending, then by canonical node order.
pub(crate) fn by_size_descending(graph: &HypergraphImpl) -> Vec<&Hyperedge> {
    let mut ordered: Vec<&Hyperedge> = graph.hyperedges().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ordered
}

/// Fill coefficient of every hyperedge.
///
/// Edges are visited largest first; each edge of size three or more counts
/// the non-singleton edges that come after it in that order and are contained
/// in it. Only later edges are compared, so an equal-sized edge that sorts
/// earlier is never counted. With duplicate edges collapsed this can only
/// exclude the edge itself, so the forward scan counts exactly the stored
/// proper subsets with at least two nodes.
pub fn fill_coefficients(graph: &HypergraphImpl) -> BTreeMap<Hyperedge, f64> {
    let ordered = by_size_descending(graph);
    let mut fills = BTreeMap::new();
    for (position, edge) in ordered.iter().enumerate() {
        let fill = if edge.len() < 3 {
            0.0
        } else {
            let contained = ordered[position + 1..]
                .iter()
                .filter(|candidate| candidate.len() > 1 && candidate.is_subset(edge))
                .count();
            contained as f64 / subset_capacity(edge.len())
        };
        fills.insert((*edge).clone(), fill);
    }
    debug!(edges = fills.len(), "computed fill coefficients");
    fills
}

/// Fill coefficient of a single hyperedge, scanning every stored edge.
///
/// The edge does not have to be stored in the graph itself.
pub fn fill_coefficient_of(graph: &HypergraphImpl, edge: &Hyperedge) -> f64 {
    if edge.len() < 3 {
        return 0.0;
    }
    let contained = graph
        .hyperedges()
        .filter(|candidate| candidate.len() > 1 && candidate.is_proper_subset(edge))
        .count();
    contained as f64 / subset_capacity(edge.len())
}
