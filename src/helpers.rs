//! Convenience helpers for common network-topology entities.
//!
//! This module provides higher-level wrappers for working with graphs that
//! model networks, reducing boilerplate for common operations like adding
//! devices and the links between them.

use crate::error::Result;
use crate::graph::{Algorithm, PropertyMap, TopoGraph};

/// Add a device node to the graph.
///
/// Creates a node with `type` and `model` properties.
///
/// # Arguments
///
/// * `graph` - The graph to add the device to
/// * `name` - Device name (e.g., "core1")
/// * `device_type` - Device class (e.g., "router", "switch")
/// * `model` - Hardware model (e.g., "N7700")
pub fn add_device(
    graph: &mut TopoGraph,
    name: &str,
    device_type: &str,
    model: &str,
) -> Result<()> {
    let props = PropertyMap::new()
        .with("type", device_type)
        .with("model", model);

    graph.add_node(name, props)
}

/// Add a link of the given type between two devices.
///
/// Creates a relationship with the default weight of `1.0` and an `MTU`
/// property. Both devices must already exist.
pub fn add_link(
    graph: &mut TopoGraph,
    link_type: &str,
    src: &str,
    dst: &str,
    mtu: i64,
) -> Result<()> {
    let props = PropertyMap::new().with("MTU", mtu);

    graph.add_relationship(link_type, src, dst, props)
}

/// Add a link with an explicit path-selection weight.
///
/// Like [`add_link`], but for links that should be less (or more)
/// preferred than their weight-1 siblings.
pub fn add_link_weighted(
    graph: &mut TopoGraph,
    link_type: &str,
    src: &str,
    dst: &str,
    mtu: i64,
    weight: f64,
) -> Result<()> {
    let props = PropertyMap::new().with("MTU", mtu);

    graph.add_relationship_weighted(link_type, src, dst, props, weight)
}

/// Check whether a directed path of any link type leads from `src` to `dst`.
///
/// # Errors
///
/// Returns [`crate::GraphError::NodeNotFound`] if either device is absent.
pub fn reachable(graph: &TopoGraph, src: &str, dst: &str) -> Result<bool> {
    Ok(graph.traverse(src, dst, None, Algorithm::Bfs)?.found)
}

/// Names of all devices whose `type` property equals `device_type`.
pub fn devices_of_type(graph: &TopoGraph, device_type: &str) -> Vec<String> {
    graph.query().property("type", device_type).execute()
}
