use std::fs;
use std::path::{Path, PathBuf};

use hyperclust_core::errors::{ErrorInfo, HyperError};
use hyperclust_core::{Hyperedge, NodeId};
use hyperclust_graph::HypergraphImpl;
use tracing::{debug, info};

/// Locations of the two files making up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// One hyperedge size per line.
    pub nverts: PathBuf,
    /// Flattened member list, one node identifier per line.
    pub simplices: PathBuf,
}

/// Resolves `<dir>/<name>-nverts.txt` and `<dir>/<name>-simplices.txt`.
///
/// `name` defaults to the final component of `dir`.
pub fn dataset_paths(dir: &Path, name: Option<&str>) -> Result<DatasetPaths, HyperError> {
    let name = match name {
        Some(name) => name.to_string(),
        None => dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                dataset_error("invalid-path", "cannot derive dataset name from directory")
                    .with_context("dir", dir.display())
                    .with_hint("pass the dataset name explicitly")
            })?,
    };
    Ok(DatasetPaths {
        nverts: dir.join(format!("{name}-nverts.txt")),
        simplices: dir.join(format!("{name}-simplices.txt")),
    })
}

/// Loads a dataset directory into a hypergraph.
pub fn load_hypergraph(dir: &Path, name: Option<&str>) -> Result<HypergraphImpl, HyperError> {
    let paths = dataset_paths(dir, name)?;
    let nverts = read_file(&paths.nverts)?;
    let simplices = read_file(&paths.simplices)?;
    let edges = parse_edges(&nverts, &simplices)?;
    let records = edges.len();
    let graph = HypergraphImpl::from_edges(edges);
    info!(
        dataset = %dir.display(),
        records,
        edges = graph.edge_count(),
        nodes = graph.node_count(),
        "loaded hypergraph"
    );
    Ok(graph)
}

/// Splits the flattened member list into hyperedges using the size list.
///
/// Blank lines are ignored. Duplicate records are kept here; they collapse
/// once inserted into a graph.
pub fn parse_edges(nverts: &str, simplices: &str) -> Result<Vec<Hyperedge>, HyperError> {
    let sizes = parse_integers(nverts, "nverts")?;
    let members = parse_integers(simplices, "simplices")?;

    let expected = sizes
        .iter()
        .try_fold(0u64, |total, size| total.checked_add(*size))
        .ok_or_else(|| {
            dataset_error("count-mismatch", "hyperedge sizes overflow the node count")
                .with_context("found", members.len())
        })?;
    if expected != members.len() as u64 {
        return Err(dataset_error(
            "count-mismatch",
            "hyperedge sizes do not add up to the number of listed nodes",
        )
        .with_context("expected", expected)
        .with_context("found", members.len()));
    }

    let mut edges = Vec::with_capacity(sizes.len());
    let mut cursor = 0usize;
    for (position, size) in sizes.into_iter().enumerate() {
        if size == 0 {
            return Err(dataset_error("empty-hyperedge", "hyperedge of size zero")
                .with_context("edge", position));
        }
        let slice = usize::try_from(size)
            .ok()
            .and_then(|size| cursor.checked_add(size))
            .and_then(|end| members.get(cursor..end).map(|slice| (slice, end)));
        let Some((slice, end)) = slice else {
            return Err(dataset_error(
                "count-mismatch",
                "hyperedge extends past the listed nodes",
            )
            .with_context("edge", position)
            .with_context("size", size)
            .with_context("found", members.len()));
        };
        cursor = end;
        edges.push(Hyperedge::new(slice.iter().copied().map(NodeId::from_raw))?);
    }
    debug!(records = edges.len(), "parsed dataset records");
    Ok(edges)
}

fn read_file(path: &Path) -> Result<String, HyperError> {
    fs::read_to_string(path).map_err(|err| {
        dataset_error("io", err.to_string()).with_context("path", path.display())
    })
}

fn parse_integers(contents: &str, file: &str) -> Result<Vec<u64>, HyperError> {
    let mut values = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<u64>().map_err(|err| {
            dataset_error("parse", err.to_string())
                .with_context("file", file)
                .with_context("line", idx + 1)
                .with_context("value", trimmed)
        })?;
        values.push(value);
    }
    Ok(values)
}

fn dataset_error(code: &str, message: impl Into<String>) -> HyperError {
    HyperError::Dataset(ErrorInfo::new(code, message))
}
