//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use serde_json::{json, Value};
use std::collections::HashSet;

use crate::graph::{Node, PropertyMap, PropertyValue, TopoGraph};

/// Export graph to D3.js-compatible JSON format
pub fn export_json(graph: &TopoGraph) -> String {
    let nodes_array: Vec<Value> = graph.nodes().map(node_to_json).collect();

    let mut links_array = Vec::new();
    for node in graph.nodes() {
        for rel in node.outgoing() {
            links_array.push(json!({
                "source": &node.name,
                "target": &rel.dst,
                "type": &rel.rel_type,
                "weight": rel.weight,
                "properties": properties_to_json(&rel.properties.public_view()),
            }));
        }
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&result).expect("Failed to serialize JSON")
}

/// Export filtered subset of graph to JSON
pub fn export_json_filtered(
    graph: &TopoGraph,
    node_filter: impl Fn(&Node) -> bool,
    include_edges: bool,
) -> String {
    let mut nodes_array = Vec::new();
    let mut filtered_names: HashSet<&str> = HashSet::new();

    for node in graph.nodes() {
        if node_filter(node) {
            nodes_array.push(node_to_json(node));
            filtered_names.insert(node.name.as_str());
        }
    }

    // Only include edges between filtered nodes
    let mut links_array = Vec::new();
    if include_edges {
        for node in graph.nodes() {
            if !filtered_names.contains(node.name.as_str()) {
                continue;
            }
            for rel in node.outgoing() {
                if filtered_names.contains(rel.dst.as_str()) {
                    links_array.push(json!({
                        "source": &node.name,
                        "target": &rel.dst,
                        "type": &rel.rel_type,
                        "weight": rel.weight,
                        "properties": properties_to_json(&rel.properties.public_view()),
                    }));
                }
            }
        }
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty should never fail for our data structures
    serde_json::to_string_pretty(&result).expect("Failed to serialize JSON")
}

/// Convert node to JSON object
fn node_to_json(node: &Node) -> Value {
    json!({
        "name": &node.name,
        "properties": properties_to_json(&node.properties.public_view()),
    })
}

/// Convert PropertyMap to JSON object
fn properties_to_json(props: &PropertyMap) -> Value {
    let mut obj = serde_json::Map::new();

    for (key, value) in props.iter() {
        let json_value = match value {
            PropertyValue::String(s) => json!(s),
            PropertyValue::Int(i) => json!(i),
            PropertyValue::Float(f) => json!(f),
            PropertyValue::Bool(b) => json!(b),
            PropertyValue::Null => json!(null),
        };
        obj.insert(key.clone(), json_value);
    }

    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_to_json() {
        let mut props = PropertyMap::new();
        props.insert("model", "N7700");
        props.insert("ports", 48);

        let json = properties_to_json(&props);
        assert!(json.is_object());
        assert_eq!(json["model"], "N7700");
        assert_eq!(json["ports"], 48);
    }

    #[test]
    fn test_export_hides_underscored_keys() {
        let mut graph = TopoGraph::new();
        graph
            .add_node("core1", PropertyMap::new().with("type", "router").with("_seen", true))
            .unwrap();

        let doc: Value = serde_json::from_str(&export_json(&graph)).unwrap();
        let props = &doc["nodes"][0]["properties"];
        assert_eq!(props["type"], "router");
        assert!(props.get("_seen").is_none());
    }

    #[test]
    fn test_export_filtered_keeps_edges_between_kept_nodes() {
        let mut graph = TopoGraph::new();
        for name in ["a", "b", "c"] {
            graph.add_node(name, PropertyMap::new()).unwrap();
        }
        graph.add_relationship("link", "a", "b", PropertyMap::new()).unwrap();
        graph.add_relationship("link", "b", "c", PropertyMap::new()).unwrap();

        let out = export_json_filtered(&graph, |node| node.name != "c", true);
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["nodes"].as_array().unwrap().len(), 2);
        let links = doc["links"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["source"], "a");
        assert_eq!(links[0]["target"], "b");
    }
}
