//! DOT format export for Graphviz visualization.
//!
//! Generates Graphviz DOT format for rendering graphs as images or
//! interactive visualizations.

use std::collections::HashMap;

use crate::graph::TopoGraph;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Node fill colors keyed by the node's `type` property value
    pub node_colors: HashMap<String, String>,
    /// Edge colors keyed by relationship type name
    pub edge_colors: HashMap<String, String>,
    /// Node shapes keyed by the node's `type` property value
    pub node_shapes: HashMap<String, String>,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Property names to show in node labels
    pub show_properties: Vec<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        let mut node_colors = HashMap::new();
        node_colors.insert("router".to_string(), "#90CAF9".to_string());
        node_colors.insert("switch".to_string(), "#FFE082".to_string());

        let mut node_shapes = HashMap::new();
        node_shapes.insert("router".to_string(), "box".to_string());
        node_shapes.insert("switch".to_string(), "component".to_string());

        DotOptions {
            node_colors,
            edge_colors: HashMap::new(),
            node_shapes,
            rankdir: "LR".to_string(),
            show_properties: vec![],
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &TopoGraph) -> String {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &TopoGraph, options: DotOptions) -> String {
    let mut output = String::new();

    // Header
    output.push_str("digraph topograph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    // Export nodes
    for node in graph.nodes() {
        let id = escape_dot_label(&node.name);
        let mut label = escape_dot_label(&node.name);

        // Add properties to label if requested
        let props = node.properties.public_view();
        for prop_name in &options.show_properties {
            if let Some(value) = props.get(prop_name) {
                label.push_str(&format!("\\n{prop_name}:{value}"));
            }
        }

        // Styling follows the node's "type" property
        let node_type = props.get_string("type").unwrap_or("");

        let color = options
            .node_colors
            .get(node_type)
            .map(|s| s.as_str())
            .unwrap_or("#FFFFFF");

        let shape = options
            .node_shapes
            .get(node_type)
            .map(|s| s.as_str())
            .unwrap_or("box");

        output.push_str(&format!(
            "    \"{id}\" [label=\"{label}\", shape={shape}, fillcolor=\"{color}\"];\n"
        ));
    }

    output.push('\n');

    // Export edges
    for node in graph.nodes() {
        for rel in node.outgoing() {
            let color = options
                .edge_colors
                .get(&rel.rel_type)
                .map(|c| format!(", color=\"{c}\""))
                .unwrap_or_default();

            output.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
                escape_dot_label(&node.name),
                escape_dot_label(&rel.dst),
                escape_dot_label(&rel.rel_type),
                color
            ));
        }
    }

    output.push_str("}\n");

    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
