//! Tests for BFS/DFS traversal and loop detection.
//!
//! Covers the shortest-path contract of BFS, the first-discovered-path
//! contract of DFS, relationship type filtering, self-loop queries, and
//! revisit-based loop detection.

use topograph::{Algorithm, GraphError, Hop, PropertyMap, TopoGraph};

fn hop(src: &str, rel_type: &str, dst: &str) -> Hop {
    Hop::new(src, rel_type, dst)
}

// Four nodes where a single 1G hop bypasses a three-hop 10G chain, and the
// chain closes a cycle back through B.
fn square_with_bypass() -> TopoGraph {
    let mut graph = TopoGraph::new();
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name, PropertyMap::new()).unwrap();
    }
    graph.add_relationship("10G", "A", "B", PropertyMap::new()).unwrap();
    graph.add_relationship("10G", "B", "C", PropertyMap::new()).unwrap();
    graph.add_relationship("10G", "C", "D", PropertyMap::new()).unwrap();
    graph.add_relationship("10G", "D", "B", PropertyMap::new()).unwrap();
    graph
        .add_relationship_weighted("1G", "A", "D", PropertyMap::new(), 10.0)
        .unwrap();
    graph
}

// The sample router/switch network: two link speeds, one ring through A,
// an isolated downstream chain G -> H, and F feeding into A and G.
fn sample_network() -> TopoGraph {
    let mut graph = TopoGraph::new();
    for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        graph.add_node(name, PropertyMap::new()).unwrap();
    }

    let links = [
        ("10G", "A", "B", 1.0),
        ("1G", "A", "D", 10.0),
        ("10G", "B", "C", 1.0),
        ("1G", "B", "E", 1.0),
        ("10G", "C", "D", 1.0),
        ("1G", "D", "B", 10.0),
        ("10G", "D", "E", 1.0),
        ("10G", "E", "A", 1.0),
        ("1G", "E", "A", 1.0),
        ("10G", "F", "A", 1.0),
        ("10G", "F", "G", 1.0),
        ("10G", "A", "G", 1.0),
        ("10G", "G", "H", 1.0),
    ];
    for (rel_type, src, dst, weight) in links {
        graph
            .add_relationship_weighted(rel_type, src, dst, PropertyMap::new(), weight)
            .unwrap();
    }
    graph
}

// Verify a path is a contiguous chain of real edges from `start` to `end`.
fn assert_valid_route(graph: &TopoGraph, path: &[Hop], start: &str, end: &str) {
    assert!(!path.is_empty());
    assert_eq!(path[0].src, start);
    assert_eq!(path[path.len() - 1].dst, end);
    for window in path.windows(2) {
        assert_eq!(window[0].dst, window[1].src);
    }
    for hop in path {
        assert!(graph.relationship(&hop.rel_type, &hop.src, &hop.dst).is_ok());
    }
}

#[test]
fn test_bfs_prefers_fewest_hops() {
    let graph = square_with_bypass();

    // One 1G hop beats the three-hop 10G chain
    let result = graph.traverse("A", "D", None, Algorithm::Bfs).unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec![hop("A", "1G", "D")]);
}

#[test]
fn test_dfs_may_return_longer_route_than_bfs() {
    let graph = square_with_bypass();

    let bfs = graph.traverse("A", "D", None, Algorithm::Bfs).unwrap();
    let dfs = graph.traverse("A", "D", None, Algorithm::Dfs).unwrap();

    assert!(bfs.found);
    assert!(dfs.found);
    assert_eq!(bfs.len(), 1);
    assert_eq!(
        dfs.path,
        vec![hop("A", "10G", "B"), hop("B", "10G", "C"), hop("C", "10G", "D")]
    );
    assert_valid_route(&graph, &dfs.path, "A", "D");
}

#[test]
fn test_bfs_respects_allowed_types() {
    let graph = square_with_bypass();

    // No 10G edge leads back to A
    let result = graph.traverse("D", "A", Some(&["10G"]), Algorithm::Bfs).unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
}

#[test]
fn test_loop_detection_reports_cycle_through_start() {
    let graph = square_with_bypass();

    let result = graph.has_loop("B").unwrap();
    assert!(result.found);
    assert_eq!(
        result.path,
        vec![hop("B", "10G", "C"), hop("C", "10G", "D"), hop("D", "10G", "B")]
    );
}

#[test]
fn test_bfs_two_hop_route_in_sample_network() {
    let graph = sample_network();

    let result = graph
        .traverse("A", "E", Some(&["1G", "10G"]), Algorithm::Bfs)
        .unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec![hop("A", "10G", "B"), hop("B", "1G", "E")]);
}

#[test]
fn test_dfs_finds_some_valid_route() {
    let graph = sample_network();

    let result = graph.traverse("A", "E", None, Algorithm::Dfs).unwrap();
    assert!(result.found);
    assert_valid_route(&graph, &result.path, "A", "E");
}

#[test]
fn test_unreachable_target_returns_empty_path() {
    let graph = sample_network();

    // Nothing leads from E back out to F
    let result = graph.traverse("E", "F", None, Algorithm::Bfs).unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());

    // The reverse direction works
    let result = graph.traverse("F", "E", None, Algorithm::Bfs).unwrap();
    assert!(result.found);
    assert_valid_route(&graph, &result.path, "F", "E");
}

#[test]
fn test_bfs_self_loop_query() {
    let graph = sample_network();

    let result = graph.traverse("A", "A", None, Algorithm::Bfs).unwrap();
    assert!(result.found);
    assert_eq!(
        result.path,
        vec![hop("A", "10G", "B"), hop("B", "1G", "E"), hop("E", "10G", "A")]
    );
}

#[test]
fn test_bfs_self_loop_query_restricted_to_10g() {
    let graph = sample_network();

    let result = graph.traverse("A", "A", Some(&["10G"]), Algorithm::Bfs).unwrap();
    assert!(result.found);
    assert_eq!(
        result.path,
        vec![
            hop("A", "10G", "B"),
            hop("B", "10G", "C"),
            hop("C", "10G", "D"),
            hop("D", "10G", "E"),
            hop("E", "10G", "A"),
        ]
    );
}

#[test]
fn test_dfs_self_loop_query_restricted_to_1g() {
    let graph = sample_network();

    let result = graph.traverse("A", "A", Some(&["1G"]), Algorithm::Dfs).unwrap();
    assert!(result.found);
    assert_eq!(
        result.path,
        vec![
            hop("A", "1G", "D"),
            hop("D", "1G", "B"),
            hop("B", "1G", "E"),
            hop("E", "1G", "A"),
        ]
    );
}

#[test]
fn test_direct_self_edge() {
    let mut graph = TopoGraph::new();
    graph.add_node("a", PropertyMap::new()).unwrap();
    graph.add_relationship("link", "a", "a", PropertyMap::new()).unwrap();

    let result = graph.traverse("a", "a", None, Algorithm::Bfs).unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec![hop("a", "link", "a")]);

    let result = graph.has_loop("a").unwrap();
    assert!(result.found);
}

#[test]
fn test_loop_detection_on_acyclic_chain() {
    let graph = sample_network();

    // G only reaches H, which is a dead end
    let result = graph.has_loop("G").unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
}

#[test]
fn test_loop_detection_stops_at_first_revisit() {
    let graph = sample_network();

    // From F both A and G are discovered directly, then A's link to G
    // revisits G and ends the search.
    let result = graph.has_loop("F").unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec![hop("F", "10G", "A"), hop("A", "10G", "G")]);
    for hop in &result.path {
        assert!(graph.relationship(&hop.rel_type, &hop.src, &hop.dst).is_ok());
    }
}

#[test]
fn test_traverse_requires_existing_endpoints() {
    let graph = sample_network();

    let err = graph.traverse("A", "Z", None, Algorithm::Bfs).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { name } if name == "Z"));

    let err = graph.traverse("Z", "A", None, Algorithm::Dfs).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { name } if name == "Z"));

    let err = graph.has_loop("Z").unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { name } if name == "Z"));
}

#[test]
fn test_algorithm_selection_from_strings() {
    let graph = square_with_bypass();

    let algorithm: Algorithm = "dfs".parse().unwrap();
    let result = graph.traverse("A", "D", None, algorithm).unwrap();
    assert_eq!(result.len(), 3);

    let err = "dijkstra".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, GraphError::UnknownAlgorithm { name } if name == "dijkstra"));
}

#[test]
fn test_traversal_does_not_mutate_store() {
    let graph = sample_network();
    let nodes_before = graph.node_count();
    let rels_before = graph.relationship_count();

    graph.traverse("A", "E", None, Algorithm::Bfs).unwrap();
    graph.traverse("A", "A", None, Algorithm::Dfs).unwrap();
    graph.has_loop("F").unwrap();

    assert_eq!(graph.node_count(), nodes_before);
    assert_eq!(graph.relationship_count(), rels_before);
}
