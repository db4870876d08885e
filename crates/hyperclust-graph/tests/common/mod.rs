#![allow(dead_code)]

use hyperclust_core::{Hyperedge, NodeId};
use hyperclust_graph::HypergraphImpl;

pub fn edge(raw: &[u64]) -> Hyperedge {
    Hyperedge::from_raw(raw.iter().copied()).unwrap()
}

pub fn node(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

pub fn graph(edges: &[&[u64]]) -> HypergraphImpl {
    HypergraphImpl::from_edges(edges.iter().map(|raw| edge(raw)))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}
