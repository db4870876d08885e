mod common;

use common::{edge, graph};
use hyperclust_core::{errors::HyperError, Hypergraph};
use hyperclust_graph::{
    canonical_hash, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json,
    HypergraphImpl,
};

#[test]
fn json_round_trip_preserves_edges_and_ids() {
    let graph = graph(&[&[3, 1, 2], &[4, 5], &[9]]);
    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();

    let before: Vec<_> = graph.hyperedges().cloned().collect();
    let after: Vec<_> = restored.hyperedges().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(restored.edge_id(&edge(&[4, 5])), graph.edge_id(&edge(&[4, 5])));
    assert_eq!(canonical_hash(&graph), canonical_hash(&restored));
}

#[test]
fn bytes_round_trip_preserves_hash() {
    let graph = graph(&[&[1, 2, 3, 4], &[1, 2, 3], &[2, 4]]);
    let restored = graph_from_bytes(&graph_to_bytes(&graph).unwrap()).unwrap();
    assert_eq!(canonical_hash(&graph), canonical_hash(&restored));
}

#[test]
fn hash_ignores_insertion_order() {
    let a = graph(&[&[1, 2], &[2, 3, 4], &[5]]);
    let b = graph(&[&[5], &[4, 3, 2], &[2, 1], &[1, 2]]);
    assert_eq!(canonical_hash(&a), canonical_hash(&b));

    let c = graph(&[&[1, 2], &[2, 3, 4]]);
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
    assert_ne!(canonical_hash(&HypergraphImpl::new()), canonical_hash(&c));
}

#[test]
fn unsupported_schema_is_rejected() {
    let json = r#"{"schema_version":{"major":9,"minor":0,"patch":0},"edges":[[1,2]]}"#;
    assert!(matches!(
        graph_from_json(json),
        Err(HyperError::Serde(info)) if info.code == "schema-mismatch"
    ));
}

#[test]
fn empty_edges_in_payload_are_rejected() {
    let json = r#"{"schema_version":{"major":1,"minor":0,"patch":0},"edges":[[1,2],[]]}"#;
    let err = graph_from_json(json).unwrap_err();
    assert_eq!(err.code(), "empty-hyperedge");
    assert_eq!(err.info().context.get("edge"), Some(&"1".to_string()));
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        graph_from_json("{not json"),
        Err(HyperError::Serde(info)) if info.code == "deserialize-json"
    ));
}
