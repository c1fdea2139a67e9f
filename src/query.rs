//! Query builder for fluent graph queries.
//!
//! Provides a fluent interface for constructing and evaluating property
//! predicates over nodes, with multiple chained filters.

use crate::graph::{Node, PropertyValue, TopoGraph};

/// A filter predicate that can be applied to nodes.
type FilterFn = Box<dyn Fn(&Node) -> bool>;

/// Fluent query builder for graph operations.
///
/// Allows chaining multiple filters to find specific nodes in the graph.
/// Filters combine as a logical AND; results come back in node insertion
/// order.
///
/// # Examples
///
/// ```
/// use topograph::{PropertyMap, TopoGraph};
///
/// # fn example() -> topograph::Result<()> {
/// let mut graph = TopoGraph::new();
/// // ... populate graph ...
///
/// // Find all core routers
/// let results = graph.query()
///     .property("type", "router")
///     .property("role", "core")
///     .execute();
/// # Ok(())
/// # }
/// ```
pub struct QueryBuilder<'a> {
    graph: &'a TopoGraph,
    filters: Vec<FilterFn>,
    limit_value: Option<usize>,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder for the given graph.
    pub(crate) fn new(graph: &'a TopoGraph) -> Self {
        Self {
            graph,
            filters: Vec::new(),
            limit_value: None,
        }
    }

    /// Filter nodes by exact property match.
    ///
    /// Supports string, int, float, and bool property values; floats match
    /// within epsilon.
    pub fn property<V: Into<PropertyValue>>(mut self, key: &str, value: V) -> Self {
        let key = key.to_string();
        let value = value.into();

        self.filters.push(Box::new(move |node| {
            if let Some(prop_value) = node.properties.get(&key) {
                match (&value, prop_value) {
                    (PropertyValue::String(v1), PropertyValue::String(v2)) => v1 == v2,
                    (PropertyValue::Int(v1), PropertyValue::Int(v2)) => v1 == v2,
                    (PropertyValue::Float(v1), PropertyValue::Float(v2)) => {
                        (v1 - v2).abs() < f64::EPSILON
                    }
                    (PropertyValue::Bool(v1), PropertyValue::Bool(v2)) => v1 == v2,
                    _ => false,
                }
            } else {
                false
            }
        }));
        self
    }

    /// Filter nodes that have a specific property (regardless of value).
    pub fn property_exists(mut self, key: &str) -> Self {
        let key = key.to_string();
        self.filters
            .push(Box::new(move |node| node.properties.contains_key(&key)));
        self
    }

    /// Filter nodes by name containing a substring (case-insensitive).
    pub fn name_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.filters
            .push(Box::new(move |node| node.name.to_lowercase().contains(&substring)));
        self
    }

    /// Filter nodes using a custom predicate function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use topograph::TopoGraph;
    /// # let graph = TopoGraph::new();
    /// // Find heavily connected nodes
    /// let results = graph.query()
    ///     .custom(|node| node.degree() > 4)
    ///     .execute();
    /// ```
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + 'static,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Limit the number of results returned.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    /// Evaluate the query and return matching node names.
    pub fn execute(&self) -> Vec<String> {
        let limit = self.limit_value.unwrap_or(usize::MAX);

        self.graph
            .nodes()
            .filter(|node| self.matches_filters(node))
            .take(limit)
            .map(|node| node.name.clone())
            .collect()
    }

    /// Count the number of matching nodes without allocating a result vector.
    pub fn count(&self) -> usize {
        self.graph
            .nodes()
            .filter(|node| self.matches_filters(node))
            .count()
    }

    /// Check if any nodes match the query (short-circuits on first match).
    pub fn exists(&self) -> bool {
        self.graph.nodes().any(|node| self.matches_filters(node))
    }

    /// Check if a node matches all filters.
    fn matches_filters(&self, node: &Node) -> bool {
        self.filters.iter().all(|filter| filter(node))
    }
}
