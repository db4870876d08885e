mod common;

use common::{assert_close, edge, graph, node};
use hyperclust_core::Hypergraph;
use hyperclust_graph::{Analyzer, HypergraphImpl};

#[test]
fn worked_example_matches_hand_computation() {
    let graph = graph(&[&[1, 2, 3], &[1, 2], &[2, 3]]);
    let analyzer = Analyzer::new(&graph);

    // {1,2,3} vs {1,2}: only {3} is exclusive, nothing to reach
    assert_close(analyzer.extra_overlap(&edge(&[1, 2, 3]), &edge(&[1, 2])).unwrap(), 0.0);
    assert_close(analyzer.extra_overlap(&edge(&[1, 2, 3]), &edge(&[2, 3])).unwrap(), 0.0);
    // {1,2} vs {2,3}: 1 and 3 see each other through {1,2,3}
    assert_close(analyzer.extra_overlap(&edge(&[1, 2]), &edge(&[2, 3])).unwrap(), 1.0);

    assert_eq!(graph.degree(node(2)), 3);
    assert_close(analyzer.clustering_of(node(2)).unwrap(), 1.0 / 3.0);
    assert_close(analyzer.clustering_of(node(1)).unwrap(), 0.0);
    assert_close(analyzer.clustering_of(node(3)).unwrap(), 0.0);
}

#[test]
fn triangle_of_pairs_is_fully_clustered() {
    let graph = graph(&[&[1, 2], &[1, 3], &[2, 3]]);
    let coefficients = Analyzer::new(&graph).clustering().unwrap();
    assert_eq!(coefficients.len(), 3);
    for value in coefficients.values() {
        assert_close(*value, 1.0);
    }
}

#[test]
fn open_path_has_no_clustering() {
    let graph = graph(&[&[1, 2], &[1, 3], &[3, 4]]);
    let analyzer = Analyzer::new(&graph);
    assert_close(analyzer.clustering_of(node(1)).unwrap(), 0.0);
    // {1,3} vs {3,4}: 4 is not adjacent to 1, 1 is not adjacent to 4
    assert_close(analyzer.clustering_of(node(3)).unwrap(), 0.0);
}

#[test]
fn wider_edges_reach_across_their_differences() {
    let graph = graph(&[&[1, 2, 5], &[1, 3, 4], &[2, 3], &[4, 5]]);
    let analyzer = Analyzer::new(&graph);
    // d1 = {2,5}, d2 = {3,4}; N({2,5}) ∩ {3,4} = {3,4}, N({3,4}) ∩ {2,5} = {2,5}
    let value = analyzer
        .extra_overlap(&edge(&[1, 2, 5]), &edge(&[1, 3, 4]))
        .unwrap();
    assert_close(value, 1.0);
    assert_close(analyzer.clustering_of(node(1)).unwrap(), 1.0);
}

#[test]
fn low_degree_nodes_score_zero() {
    let graph = graph(&[&[1, 2, 3], &[7]]);
    let analyzer = Analyzer::new(&graph);
    assert_eq!(analyzer.clustering_of(node(1)).unwrap(), 0.0);
    assert_eq!(analyzer.clustering_of(node(7)).unwrap(), 0.0);
    assert_eq!(analyzer.clustering_of(node(99)).unwrap(), 0.0);
}

#[test]
fn self_overlap_is_zero_and_foreign_edges_are_rejected() {
    let graph = graph(&[&[1, 2, 3], &[3, 4]]);
    let analyzer = Analyzer::new(&graph);
    assert_eq!(analyzer.extra_overlap(&edge(&[1, 2, 3]), &edge(&[3, 2, 1])).unwrap(), 0.0);

    let err = analyzer
        .extra_overlap(&edge(&[1, 2, 3]), &edge(&[8, 9]))
        .unwrap_err();
    assert_eq!(err.code(), "unknown-edge");
}

#[test]
fn global_clustering_is_idempotent() {
    let graph = graph(&[&[1, 2, 3], &[1, 2], &[2, 3], &[3, 4, 5], &[1, 5]]);
    let analyzer = Analyzer::new(&graph);
    let first = analyzer.clustering().unwrap();
    let second = analyzer.clustering().unwrap();
    assert_eq!(first, second);

    let fresh = Analyzer::new(&graph).clustering().unwrap();
    assert_eq!(first, fresh);
}

#[test]
fn empty_graph_has_no_coefficients() {
    let graph = HypergraphImpl::new();
    assert!(Analyzer::new(&graph).clustering().unwrap().is_empty());
}
