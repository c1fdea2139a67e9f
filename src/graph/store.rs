//! Main TopoGraph interface for graph operations.

use indexmap::IndexMap;
use log::{debug, trace};

use super::algorithms;
use super::property::PropertyMap;
use super::types::{Algorithm, Node, RelKey, Relationship, Traversal};
use crate::error::{GraphError, Result};

/// The main graph store.
///
/// `TopoGraph` owns every node and is the only component that mutates the
/// topology. All operations are explicit with no hidden behavior: nodes are
/// never auto-created, relationships require both endpoints to exist, and
/// nothing is ever deleted.
///
/// The store is plain mutable state with no internal locking; Rust's
/// borrow rules enforce the single-writer model within safe code.
#[derive(Debug, Default)]
pub struct TopoGraph {
    nodes: IndexMap<String, Node>,
}

impl TopoGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Add a node to the graph.
    ///
    /// The node starts with an empty relationship set; `properties` are
    /// merged into its (empty) property map.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeAlreadyExists`] if `name` is taken. The
    /// store is unchanged on failure.
    pub fn add_node(&mut self, name: &str, properties: PropertyMap) -> Result<()> {
        if self.nodes.contains_key(name) {
            return Err(GraphError::NodeAlreadyExists {
                name: name.to_string(),
            });
        }

        debug!("Adding node: {name}");
        let mut node = Node::new(name);
        node.properties.merge(properties);
        self.nodes.insert(name.to_string(), node);
        trace!("Node {name} added successfully");

        Ok(())
    }

    /// Merge properties into an existing node.
    ///
    /// Existing keys are overwritten, new keys inserted; an empty map is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn merge_node_properties(&mut self, name: &str, properties: PropertyMap) -> Result<()> {
        debug!("Merging properties into node: {name}");
        let node = self.node_mut(name)?;
        node.properties.merge(properties);
        Ok(())
    }

    /// Get the user-visible properties of a node.
    ///
    /// Hidden (`_`-prefixed) keys are never included.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node_properties(&self, name: &str) -> Result<PropertyMap> {
        Ok(self.node(name)?.properties.public_view())
    }

    /// Add a relationship with the default weight of `1.0`.
    ///
    /// See [`TopoGraph::add_relationship_weighted`].
    pub fn add_relationship(
        &mut self,
        rel_type: &str,
        src: &str,
        dst: &str,
        properties: PropertyMap,
    ) -> Result<()> {
        self.add_relationship_weighted(rel_type, src, dst, properties, 1.0)
    }

    /// Add a relationship of `rel_type` from `src` to `dst` with an
    /// explicit weight.
    ///
    /// Both endpoints must already exist; neither is created implicitly. A
    /// source node holds at most one relationship per `(type, destination)`
    /// pair, so a second relationship of the same type to the same
    /// destination is rejected while other types or other destinations are
    /// fine.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent,
    /// or [`GraphError::RelationshipAlreadyExists`] on a duplicate
    /// `(type, destination)` pair.
    pub fn add_relationship_weighted(
        &mut self,
        rel_type: &str,
        src: &str,
        dst: &str,
        properties: PropertyMap,
        weight: f64,
    ) -> Result<()> {
        debug!("Adding relationship: type={rel_type}, src={src}, dst={dst}");

        // Both endpoints must exist before the source node is touched
        if !self.nodes.contains_key(dst) {
            return Err(GraphError::NodeNotFound {
                name: dst.to_string(),
            });
        }

        let node = self.node_mut(src)?;
        let key = RelKey::new(rel_type, dst);
        if node.relationships.contains_key(&key) {
            return Err(GraphError::RelationshipAlreadyExists {
                rel_type: rel_type.to_string(),
                src: src.to_string(),
                dst: dst.to_string(),
            });
        }

        let mut rel = Relationship::new(rel_type, dst, weight);
        rel.properties.merge(properties);
        node.relationships.insert(key, rel);
        trace!("Relationship ({src})-[{rel_type}]->({dst}) added successfully");

        Ok(())
    }

    /// Merge properties into an existing relationship.
    ///
    /// Missing endpoints or a missing relationship are ignored: the call
    /// does nothing rather than erroring, unlike
    /// [`TopoGraph::merge_node_properties`].
    pub fn merge_relationship_properties(
        &mut self,
        rel_type: &str,
        src: &str,
        dst: &str,
        properties: PropertyMap,
    ) {
        debug!("Merging properties into relationship: type={rel_type}, src={src}, dst={dst}");
        if !self.nodes.contains_key(dst) {
            trace!("Destination {dst} not present, merge skipped");
            return;
        }
        let Some(node) = self.nodes.get_mut(src) else {
            trace!("Source {src} not present, merge skipped");
            return;
        };
        let Some(rel) = node.relationships.get_mut(&RelKey::new(rel_type, dst)) else {
            trace!("Relationship ({src})-[{rel_type}]->({dst}) not present, merge skipped");
            return;
        };
        rel.properties.merge(properties);
    }

    /// Get the user-visible properties of a relationship.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent,
    /// or [`GraphError::RelationshipNotFound`] if the endpoints exist but
    /// no such relationship connects them.
    pub fn relationship_properties(
        &self,
        rel_type: &str,
        src: &str,
        dst: &str,
    ) -> Result<PropertyMap> {
        Ok(self
            .relationship(rel_type, src, dst)?
            .properties
            .public_view())
    }

    /// Look up a relationship by type and endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent,
    /// or [`GraphError::RelationshipNotFound`] if the endpoints exist but
    /// no such relationship connects them.
    pub fn relationship(&self, rel_type: &str, src: &str, dst: &str) -> Result<&Relationship> {
        self.node(dst)?;
        let node = self.node(src)?;
        node.relationship(rel_type, dst)
            .ok_or_else(|| GraphError::RelationshipNotFound {
                rel_type: rel_type.to_string(),
                src: src.to_string(),
                dst: dst.to_string(),
            })
    }

    /// List a node's outgoing relationships as `(type, destination)` pairs
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn relationships(&self, name: &str) -> Result<Vec<(String, String)>> {
        let node = self.node(name)?;
        Ok(node
            .outgoing()
            .map(|rel| (rel.rel_type.clone(), rel.dst.clone()))
            .collect())
    }

    /// Get a node by name (immutable).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node(&self, name: &str) -> Result<&Node> {
        self.nodes.get(name).ok_or_else(|| GraphError::NodeNotFound {
            name: name.to_string(),
        })
    }

    /// Check whether a node exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Iterate all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of relationships in the graph.
    pub fn relationship_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Search for a path from `start` to `end`.
    ///
    /// `allowed_types` restricts which relationship types may be followed
    /// (`None` follows all). [`Algorithm::Bfs`] returns the shortest path
    /// by hop count; [`Algorithm::Dfs`] returns the first path discovered.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn traverse(
        &self,
        start: &str,
        end: &str,
        allowed_types: Option<&[&str]>,
        algorithm: Algorithm,
    ) -> Result<Traversal> {
        algorithms::traverse(self, start, end, allowed_types, algorithm)
    }

    /// Check whether any walk from `start` runs into an already-visited
    /// node, which is evidence of a loop in the reachable subgraph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is absent.
    pub fn has_loop(&self, start: &str) -> Result<Traversal> {
        algorithms::has_loop(self, start)
    }

    /// Create a new query builder for this graph.
    ///
    /// Returns a [`crate::query::QueryBuilder`] that allows fluent chaining
    /// of property filters to find specific nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph::{PropertyMap, TopoGraph};
    ///
    /// # fn example() -> topograph::Result<()> {
    /// let mut graph = TopoGraph::new();
    /// graph.add_node("core1", PropertyMap::new().with("type", "router"))?;
    ///
    /// let routers = graph.query().property("type", "router").execute();
    /// assert_eq!(routers, vec!["core1".to_string()]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn query(&self) -> crate::query::QueryBuilder<'_> {
        crate::query::QueryBuilder::new(self)
    }

    // Private helper methods

    fn node_mut(&mut self, name: &str) -> Result<&mut Node> {
        self.nodes
            .get_mut(name)
            .ok_or_else(|| GraphError::NodeNotFound {
                name: name.to_string(),
            })
    }
}
