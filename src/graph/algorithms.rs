//! Graph traversal and loop detection.
//!
//! BFS finds the shortest path by hop count; DFS reports the first path it
//! discovers, which may be longer. The two are distinct contracts, not two
//! attempts at the same answer. Loop detection is a BFS variant that stops
//! at the first revisit of an already-seen node.
//!
//! All algorithms read the store and never mutate it; every node is visited
//! at most once, so they terminate on any finite graph, cycles included.

use std::collections::{HashMap, VecDeque};

use log::trace;

use super::store::TopoGraph;
use super::types::{Algorithm, Hop, Traversal};
use crate::error::Result;

/// BFS bookkeeping for one visited node.
struct Visit {
    /// Hop count from the start node
    distance: usize,
    /// Parent node and the relationship type that led here; `None` for the
    /// start node
    parent: Option<(String, String)>,
}

/// Search for a path from `start` to `end`.
///
/// `allowed_types` restricts which relationship types may be followed;
/// `None` follows all types. When equally short paths exist, BFS keeps the
/// first one discovered in relationship insertion order.
///
/// # Errors
///
/// Returns [`crate::GraphError::NodeNotFound`] if either endpoint is absent.
pub fn traverse(
    graph: &TopoGraph,
    start: &str,
    end: &str,
    allowed_types: Option<&[&str]>,
    algorithm: Algorithm,
) -> Result<Traversal> {
    graph.node(start)?;
    graph.node(end)?;

    match algorithm {
        Algorithm::Bfs => bfs(graph, start, Some(end), allowed_types, false),
        Algorithm::Dfs => dfs(graph, start, end, allowed_types),
    }
}

/// Check whether any walk from `start` runs into an already-visited node.
///
/// Runs BFS toward an unreachable target with revisit reporting enabled;
/// the returned path ends with the hop that closed the revisit.
///
/// # Errors
///
/// Returns [`crate::GraphError::NodeNotFound`] if `start` is absent.
pub fn has_loop(graph: &TopoGraph, start: &str) -> Result<Traversal> {
    graph.node(start)?;
    bfs(graph, start, None, None, true)
}

/// Breadth-first search from `start`.
///
/// `end` is the target node, or `None` when only revisits are of interest.
/// With `detect_revisits` set, the first edge leading to an already-visited
/// node terminates the search with the evidence path.
fn bfs(
    graph: &TopoGraph,
    start: &str,
    end: Option<&str>,
    allowed_types: Option<&[&str]>,
    detect_revisits: bool,
) -> Result<Traversal> {
    let mut visited: HashMap<String, Visit> = HashMap::new();
    visited.insert(
        start.to_string(),
        Visit {
            distance: 0,
            parent: None,
        },
    );

    let mut queue = VecDeque::new();
    queue.push_back(start.to_string());

    while let Some(cur) = queue.pop_front() {
        let distance = visited.get(&cur).map_or(0, |visit| visit.distance);

        for rel in graph.node(&cur)?.outgoing() {
            if !type_allowed(&rel.rel_type, allowed_types) {
                continue;
            }

            if !visited.contains_key(&rel.dst) {
                trace!("BFS visiting {} at distance {}", rel.dst, distance + 1);
                visited.insert(
                    rel.dst.clone(),
                    Visit {
                        distance: distance + 1,
                        parent: Some((cur.clone(), rel.rel_type.clone())),
                    },
                );
                if end == Some(rel.dst.as_str()) {
                    return Ok(Traversal::found_via(path_to(&visited, &rel.dst)));
                }
                queue.push_back(rel.dst.clone());
            } else if detect_revisits {
                let mut path = path_to(&visited, &cur);
                path.push(Hop::new(&cur, &rel.rel_type, &rel.dst));
                return Ok(Traversal::found_via(path));
            } else if end == Some(start) && rel.dst == start {
                // Self-loop query: start and end coincide, and some walk
                // has returned to the start node.
                let mut path = path_to(&visited, &cur);
                path.push(Hop::new(&cur, &rel.rel_type, start));
                return Ok(Traversal::found_via(path));
            }
        }
    }

    Ok(Traversal::not_found())
}

/// Depth-first search from `start` to `end`.
///
/// Reports a path only once a non-empty path to the current node has been
/// recorded, so the walk must leave the start node before the target
/// counts as reached; for `start == end` this means at least one hop has
/// been taken. A node is never expanded twice, so at most one path is
/// found and it need not be the shortest.
fn dfs(
    graph: &TopoGraph,
    start: &str,
    end: &str,
    allowed_types: Option<&[&str]>,
) -> Result<Traversal> {
    let mut stack = vec![start.to_string()];
    // Path recorded for each node reached so far. The start node gets an
    // entry only if some walk re-enters it.
    let mut paths: HashMap<String, Vec<Hop>> = HashMap::new();

    while let Some(cur) = stack.pop() {
        for rel in graph.node(&cur)?.outgoing() {
            if !type_allowed(&rel.rel_type, allowed_types) {
                continue;
            }

            if rel.dst == end && paths.contains_key(&cur) {
                let mut path = paths.get(&cur).cloned().unwrap_or_default();
                path.push(Hop::new(&cur, &rel.rel_type, &rel.dst));
                return Ok(Traversal::found_via(path));
            } else if !paths.contains_key(&rel.dst) {
                let mut path = paths.get(&cur).cloned().unwrap_or_default();
                path.push(Hop::new(&cur, &rel.rel_type, &rel.dst));
                trace!("DFS pushing {} with {} hops", rel.dst, path.len());
                paths.insert(rel.dst.clone(), path);
                stack.push(rel.dst.clone());
            }
        }
    }

    Ok(Traversal::not_found())
}

fn type_allowed(rel_type: &str, allowed_types: Option<&[&str]>) -> bool {
    match allowed_types {
        Some(types) => types.contains(&rel_type),
        None => true,
    }
}

/// Reconstruct the hop path from the start node to `node` by walking
/// parent pointers backwards.
fn path_to(visited: &HashMap<String, Visit>, node: &str) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut cur = node;

    while let Some(Visit {
        parent: Some((parent, rel_type)),
        ..
    }) = visited.get(cur)
    {
        hops.push(Hop::new(parent, rel_type, cur));
        cur = parent;
    }

    hops.reverse();
    hops
}
