mod common;

use std::collections::BTreeSet;

use common::{edge, graph, node};
use hyperclust_core::{errors::HyperError, Hypergraph};
use hyperclust_graph::{Analyzer, NeighborhoodIndex};

fn set(raw: &[u64]) -> BTreeSet<hyperclust_core::NodeId> {
    raw.iter().copied().map(node).collect()
}

#[test]
fn neighbors_exclude_the_node_itself() {
    let graph = graph(&[&[1, 2, 3], &[3, 4], &[5]]);
    let index = NeighborhoodIndex::build(&graph);
    assert_eq!(index.len(), 5);
    assert_eq!(index.neighbors_of(node(1)).unwrap(), &set(&[2, 3]));
    assert_eq!(index.neighbors_of(node(3)).unwrap(), &set(&[1, 2, 4]));
    assert!(index.neighbors_of(node(5)).unwrap().is_empty());
}

#[test]
fn neighborhood_of_is_a_union() {
    let graph = graph(&[&[1, 2, 3], &[3, 4], &[4, 6]]);
    let index = NeighborhoodIndex::build(&graph);

    assert!(index.neighborhood_of(&[]).unwrap().is_empty());
    assert_eq!(
        &index.neighborhood_of(&[node(4)]).unwrap(),
        index.neighbors_of(node(4)).unwrap()
    );

    let mut expected = index.neighbors_of(node(1)).unwrap().clone();
    expected.extend(index.neighbors_of(node(4)).unwrap().iter().copied());
    assert_eq!(index.neighborhood_of(&[node(1), node(4)]).unwrap(), expected);
}

#[test]
fn unknown_node_is_an_error() {
    let graph = graph(&[&[1, 2]]);
    let index = NeighborhoodIndex::build(&graph);
    assert!(matches!(
        index.neighbors_of(node(9)),
        Err(HyperError::Graph(info)) if info.code == "unknown-node"
    ));
    assert!(index.neighborhood_of(&[node(1), node(9)]).is_err());
}

#[test]
fn stale_index_is_rejected() {
    let mut graph = graph(&[&[1, 2]]);
    let index = NeighborhoodIndex::build(&graph);
    assert!(index.is_current(&graph));

    graph.add_edge(edge(&[2, 1]));
    assert!(index.is_current(&graph), "duplicates leave the index valid");

    graph.add_edge(edge(&[2, 3]));
    assert!(!index.is_current(&graph));
    let err = Analyzer::with_index(&graph, index.clone()).unwrap_err();
    assert_eq!(err.code(), "stale-index");
    assert_eq!(err.info().context.get("index_revision"), Some(&"1".to_string()));

    let rebuilt = NeighborhoodIndex::build(&graph);
    let analyzer = Analyzer::with_index(&graph, rebuilt).unwrap();
    assert_eq!(analyzer.neighbors_of(node(2)).unwrap(), &set(&[1, 3]));
}

#[test]
fn index_from_another_graph_is_rejected() {
    let triangle = graph(&[&[1, 2], &[1, 3], &[2, 3]]);
    let other = graph(&[&[1, 2], &[1, 3], &[5, 6]]);
    assert_eq!(triangle.revision(), other.revision());

    let foreign = NeighborhoodIndex::build(&other);
    assert!(!foreign.is_current(&triangle));
    let err = Analyzer::with_index(&triangle, foreign).unwrap_err();
    assert!(matches!(
        &err,
        HyperError::Index(info) if info.code == "foreign-index"
    ));

    let own = NeighborhoodIndex::build(&triangle);
    let analyzer = Analyzer::with_index(&triangle, own).unwrap();
    assert_eq!(analyzer.clustering_of(node(1)).unwrap(), 1.0);
}

#[test]
fn clones_do_not_share_indexes() {
    let original = graph(&[&[1, 2, 3], &[3, 4]]);
    let copy = original.clone();
    assert_ne!(original.instance_id(), copy.instance_id());

    let index = NeighborhoodIndex::build(&original);
    assert!(index.is_current(&original));
    assert!(!index.is_current(&copy));
    assert_eq!(index.ensure_current(&copy).unwrap_err().code(), "foreign-index");
}
