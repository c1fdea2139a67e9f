//! Core graph types: nodes, relationships, paths, and algorithm selection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::property::PropertyMap;
use crate::error::GraphError;

/// Composite key identifying a relationship within one source node's
/// relationship set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RelKey {
    pub(crate) rel_type: String,
    pub(crate) dst: String,
}

impl RelKey {
    pub(crate) fn new(rel_type: &str, dst: &str) -> Self {
        Self {
            rel_type: rel_type.to_string(),
            dst: dst.to_string(),
        }
    }
}

/// A node in the graph.
///
/// Nodes are identified by a unique, immutable name and own their outgoing
/// relationship set. Incoming relationships are not indexed; they are
/// discoverable only by scanning other nodes.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique node name
    pub name: String,
    /// User-visible metadata
    pub properties: PropertyMap,
    // Keyed by (type, destination); at most one relationship per key.
    pub(crate) relationships: IndexMap<RelKey, Relationship>,
}

impl Node {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: PropertyMap::new(),
            relationships: IndexMap::new(),
        }
    }

    /// Iterate this node's outgoing relationships in insertion order.
    pub fn outgoing(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    /// Look up one outgoing relationship by type and destination.
    pub fn relationship(&self, rel_type: &str, dst: &str) -> Option<&Relationship> {
        self.relationships.get(&RelKey::new(rel_type, dst))
    }

    /// Number of outgoing relationships.
    pub fn degree(&self) -> usize {
        self.relationships.len()
    }
}

/// A directed, typed edge between two nodes.
///
/// The destination is held by name; the destination node itself is owned
/// solely by the store.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship type name (e.g. `"10G"`)
    pub rel_type: String,
    /// Destination node name
    pub dst: String,
    /// Caller-supplied weight; stored but not interpreted by traversal
    pub weight: f64,
    /// User-visible metadata
    pub properties: PropertyMap,
}

impl Relationship {
    pub(crate) fn new(rel_type: &str, dst: &str, weight: f64) -> Self {
        Self {
            rel_type: rel_type.to_string(),
            dst: dst.to_string(),
            weight,
            properties: PropertyMap::new(),
        }
    }
}

/// One step of a traversal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    /// Source node name
    pub src: String,
    /// Relationship type followed
    pub rel_type: String,
    /// Destination node name
    pub dst: String,
}

impl Hop {
    /// Create a hop from borrowed parts.
    pub fn new(src: &str, rel_type: &str, dst: &str) -> Self {
        Self {
            src: src.to_string(),
            rel_type: rel_type.to_string(),
            dst: dst.to_string(),
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-[{}]->({})", self.src, self.rel_type, self.dst)
    }
}

/// Outcome of a traversal or loop check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    /// True when the search reached its target
    pub found: bool,
    /// Hops leading to the target; empty when nothing was found
    pub path: Vec<Hop>,
}

impl Traversal {
    pub(crate) fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
        }
    }

    pub(crate) fn found_via(path: Vec<Hop>) -> Self {
        Self { found: true, path }
    }

    /// Number of hops in the discovered path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True when the discovered path has no hops.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Traversal algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Breadth-first search: shortest path by hop count
    #[default]
    Bfs,
    /// Depth-first search: first discovered path, not necessarily shortest
    Dfs,
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bfs") {
            Ok(Algorithm::Bfs)
        } else if s.eq_ignore_ascii_case("dfs") {
            Ok(Algorithm::Dfs)
        } else {
            Err(GraphError::UnknownAlgorithm {
                name: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_display() {
        let hop = Hop::new("A", "10G", "B");
        assert_eq!(hop.to_string(), "(A)-[10G]->(B)");
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!("dfs".parse::<Algorithm>().unwrap(), Algorithm::Dfs);

        let err = "SPF".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, GraphError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_algorithm_default_is_bfs() {
        assert_eq!(Algorithm::default(), Algorithm::Bfs);
    }
}
