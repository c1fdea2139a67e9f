//! Export module for visualizing graphs in external tools.
//!
//! Supports two industry-standard formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//!
//! Exports are read-only consumers of the public API; only public property
//! views appear in the output.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_filtered};
