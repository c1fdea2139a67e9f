//! Network topology demo for topograph
//!
//! This example demonstrates:
//! - Building a small router/switch network
//! - Reading node and link properties
//! - Running BFS/DFS traversals and loop checks
//! - Rendering the graph as Graphviz DOT

use topograph::{export, helpers, Algorithm, PropertyMap, TopoGraph, Traversal};

fn main() -> topograph::Result<()> {
    let mut graph = TopoGraph::new();

    println!("Building the sample network...\n");

    // Core devices with properties, plus a few bare nodes filled in later
    helpers::add_device(&mut graph, "A", "router", "N7700")?;
    helpers::add_device(&mut graph, "B", "switch", "N5600")?;
    helpers::add_device(&mut graph, "C", "router", "N7700")?;
    helpers::add_device(&mut graph, "D", "switch", "N5600")?;
    for name in ["E", "F", "G", "H"] {
        graph.add_node(name, PropertyMap::new())?;
    }

    graph.merge_node_properties(
        "E",
        PropertyMap::new().with("type", "router").with("model", "N7700"),
    )?;
    graph.merge_node_properties(
        "F",
        PropertyMap::new().with("type", "switch").with("model", "N5600"),
    )?;
    graph.merge_node_properties("A", PropertyMap::new().with("role", "core"))?;

    // Links between devices; the 1G paths carry weight 10
    helpers::add_link(&mut graph, "10G", "A", "B", 1500)?;
    helpers::add_link_weighted(&mut graph, "1G", "A", "D", 1500, 10.0)?;
    helpers::add_link(&mut graph, "10G", "B", "C", 1500)?;
    helpers::add_link(&mut graph, "1G", "B", "E", 1500)?;
    helpers::add_link(&mut graph, "10G", "C", "D", 1500)?;
    helpers::add_link_weighted(&mut graph, "1G", "D", "B", 9000, 10.0)?;
    helpers::add_link(&mut graph, "10G", "D", "E", 9000)?;
    helpers::add_link(&mut graph, "10G", "E", "A", 9000)?;
    helpers::add_link(&mut graph, "1G", "E", "A", 1500)?;
    helpers::add_link(&mut graph, "10G", "F", "A", 1500)?;
    helpers::add_link(&mut graph, "10G", "F", "G", 1500)?;
    helpers::add_link(&mut graph, "10G", "A", "G", 1500)?;
    helpers::add_link(&mut graph, "10G", "G", "H", 1500)?;

    // Update an existing link in place
    graph.merge_relationship_properties(
        "10G",
        "A",
        "B",
        PropertyMap::new().with("type", "Ethernet").with("MTU", 9000),
    );

    println!(
        "✓ {} devices, {} links\n",
        graph.node_count(),
        graph.relationship_count()
    );

    println!("Properties of A:");
    for (key, value) in graph.node_properties("A")?.iter() {
        println!("  {key}: {value}");
    }

    println!("\nProperties of (D)-[1G]->(B):");
    for (key, value) in graph.relationship_properties("1G", "D", "B")?.iter() {
        println!("  {key}: {value}");
    }

    println!("\nLinks from A:");
    for (link_type, dst) in graph.relationships("A")? {
        println!("  (A)-[{link_type}]->({dst})");
    }

    println!(
        "\nRouters in the network: {:?}",
        helpers::devices_of_type(&graph, "router")
    );

    println!("\n--- Traversals ---\n");

    let route = graph.traverse("A", "E", Some(&["1G", "10G"]), Algorithm::Bfs)?;
    print_route("BFS A -> E over 1G/10G", &route);

    let route = graph.traverse("A", "E", None, Algorithm::Dfs)?;
    print_route("DFS A -> E over any link", &route);

    let route = graph.traverse("E", "F", None, Algorithm::Bfs)?;
    print_route("BFS E -> F (no route back)", &route);

    let route = graph.traverse("A", "A", None, Algorithm::Bfs)?;
    print_route("BFS A -> A (ring)", &route);

    let route = graph.traverse("A", "A", Some(&["10G"]), Algorithm::Bfs)?;
    print_route("BFS A -> A over 10G only", &route);

    let route = graph.has_loop("F")?;
    print_route("Loop check from F", &route);

    let route = graph.has_loop("G")?;
    print_route("Loop check from G", &route);

    println!("\n--- Graphviz DOT ---\n");
    println!("{}", export::export_dot(&graph));

    Ok(())
}

fn print_route(label: &str, route: &Traversal) {
    if route.found {
        let hops: Vec<String> = route.path.iter().map(ToString::to_string).collect();
        println!("{label}: {}", hops.join(" "));
    } else {
        println!("{label}: no route");
    }
}
