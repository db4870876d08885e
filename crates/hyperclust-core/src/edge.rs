use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HyperError};
use crate::NodeId;

/// Immutable set of distinct nodes stored in canonical (sorted) order.
///
/// Equality, ordering and hashing all follow the canonical form, so two
/// hyperedges built from the same node set in any order compare equal and can
/// be used interchangeably as map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Hyperedge {
    nodes: Box<[NodeId]>,
}

impl Hyperedge {
    /// Builds a hyperedge from arbitrary node identifiers, removing duplicates.
    pub fn new<I>(nodes: I) -> Result<Self, HyperError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let set: BTreeSet<NodeId> = nodes.into_iter().collect();
        if set.is_empty() {
            return Err(HyperError::Graph(ErrorInfo::new(
                "empty-hyperedge",
                "hyperedges require at least one node",
            )));
        }
        Ok(Self {
            nodes: set.into_iter().collect(),
        })
    }

    /// Convenience constructor from raw integer identifiers.
    pub fn from_raw<I>(raw: I) -> Result<Self, HyperError>
    where
        I: IntoIterator<Item = u64>,
    {
        Self::new(raw.into_iter().map(NodeId::from_raw))
    }

    /// Returns the member nodes in ascending order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the raw identifiers of the member nodes in ascending order.
    pub fn raw_nodes(&self) -> Vec<u64> {
        self.nodes.iter().map(|node| node.as_raw()).collect()
    }

    /// Number of member nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns whether `node` is a member.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// Returns whether every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Hyperedge) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut rest = other.nodes.iter();
        'outer: for node in self.nodes.iter() {
            for candidate in rest.by_ref() {
                match candidate.cmp(node) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Returns whether `self` is a subset of `other` and strictly smaller.
    pub fn is_proper_subset(&self, other: &Hyperedge) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Members of `self` that are not members of `other`, in ascending order.
    pub fn difference(&self, other: &Hyperedge) -> Vec<NodeId> {
        self.nodes
            .iter()
            .copied()
            .filter(|node| !other.contains(*node))
            .collect()
    }
}

impl<'de> Deserialize<'de> for Hyperedge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Vec<NodeId> = Vec::deserialize(deserializer)?;
        Hyperedge::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Hyperedge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(raw: &[u64]) -> Hyperedge {
        Hyperedge::from_raw(raw.iter().copied()).unwrap()
    }

    #[test]
    fn subset_walk_handles_gaps() {
        assert!(edge(&[2, 5]).is_subset(&edge(&[1, 2, 3, 5, 8])));
        assert!(!edge(&[2, 4]).is_subset(&edge(&[1, 2, 3, 5, 8])));
        assert!(!edge(&[9]).is_subset(&edge(&[1, 2, 3])));
        assert!(edge(&[1, 2]).is_subset(&edge(&[1, 2])));
        assert!(!edge(&[1, 2]).is_proper_subset(&edge(&[1, 2])));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(edge(&[3, 1, 2]).to_string(), "{1,2,3}");
    }
}
