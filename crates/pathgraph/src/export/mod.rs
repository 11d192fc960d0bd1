//! Export of graph snapshots for external tools.
//!
//! - **JSON**: `{ "nodes": [...], "edges": [...] }`, stable across runs

pub mod json;

pub use json::export_json;
