//! Commit graph data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper, terminal detection)
//! - `graph`: Lane registry and the commit graph layout engine
//! - `objects`: Commit ids and history entries
//! - `render`: SVG and terminal renderers for laid-out histories

pub mod core;
pub mod graph;
pub mod objects;
pub mod render;
