//! # topograph
//!
//! An in-memory directed property graph with breadth-first, depth-first,
//! and loop-detecting traversal, built for small, programmatically
//! constructed graphs such as network topologies.
//!
//! ## Core Principles
//!
//! - **Explicit Mutation**: nodes and relationships are created only through
//!   the store; nothing is auto-created or deleted behind your back
//! - **Deterministic Enumeration**: insertion-ordered containers keep
//!   listings and traversal tie-breaks stable within a run
//! - **Read-Only Traversal**: search algorithms never mutate the store
//! - **Zero Magic**: explicit over implicit, always
//!
//! ## Architecture
//!
//! topograph is organized in layers:
//!
//! ```text
//! User Tools (demos, analysis)
//!     ↓
//! Helpers (device/link convenience API)
//!     ↓
//! Query Builder (fluent interface)
//!     ↓
//! Core Graph (nodes, relationships, algorithms)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use topograph::{Algorithm, PropertyMap, TopoGraph};
//!
//! let mut graph = TopoGraph::new();
//! graph.add_node("core1", PropertyMap::new().with("type", "router")).unwrap();
//! graph.add_node("edge1", PropertyMap::new().with("type", "switch")).unwrap();
//! graph.add_relationship("10G", "core1", "edge1", PropertyMap::new()).unwrap();
//!
//! let route = graph.traverse("core1", "edge1", None, Algorithm::Bfs).unwrap();
//! assert!(route.found);
//! assert_eq!(route.len(), 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod query;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{
    Algorithm, Hop, Node, PropertyMap, PropertyValue, Relationship, TopoGraph, Traversal,
};
pub use query::QueryBuilder;
