use hyperclust_core::EdgeId;

/// Converts an [`EdgeId`] into its position within the edge list.
pub(crate) fn edge_index(id: EdgeId) -> usize {
    id.as_raw() as usize
}

/// Creates an [`EdgeId`] from a position within the edge list.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}
