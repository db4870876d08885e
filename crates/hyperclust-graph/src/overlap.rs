use hyperclust_core::errors::HyperError;
use hyperclust_core::{Hyperedge, NodeId};

use crate::neighborhood::NeighborhoodIndex;

/// Extra overlap between two hyperedges, given a neighborhood index of the
/// graph that holds them.
///
/// With `d1 = a - b` and `d2 = b - a`, the value is
/// `(|N(d1) ∩ d2| + |N(d2) ∩ d1|) / (|d1| + |d2|)` and lies in `[0, 2]`.
/// Identical edges have no extra overlap.
pub(crate) fn extra_overlap(
    index: &NeighborhoodIndex,
    a: &Hyperedge,
    b: &Hyperedge,
) -> Result<f64, HyperError> {
    if a == b {
        return Ok(0.0);
    }
    let only_a = a.difference(b);
    let only_b = b.difference(a);
    let denominator = only_a.len() + only_b.len();
    if denominator == 0 {
        return Ok(0.0);
    }
    let numerator = reachable(index, &only_a, &only_b)? + reachable(index, &only_b, &only_a)?;
    Ok(numerator as f64 / denominator as f64)
}

/// Counts the members of `targets` adjacent to at least one member of `from`.
fn reachable(
    index: &NeighborhoodIndex,
    from: &[NodeId],
    targets: &[NodeId],
) -> Result<usize, HyperError> {
    if from.is_empty() || targets.is_empty() {
        return Ok(0);
    }
    let closure = index.neighborhood_of(from)?;
    Ok(targets.iter().filter(|node| closure.contains(*node)).count())
}
