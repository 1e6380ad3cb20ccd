//! Renderers for laid-out histories
//!
//! - `palette`: lane colours (lane id modulo palette size)
//! - `row_height`: per-commit row heights (regular and expanded rows)
//! - `svg_path`: builder for SVG path data (`M`, `L`, `C` commands)
//! - `svg`: standalone SVG documents
//! - `text`: terminal output in the style of `git log --graph`
//!
//! Renderers consume the layout nodes together with the commits they were
//! produced from; both lists have the same length and order.

pub mod palette;
pub mod row_height;
pub mod svg;
pub mod svg_path;
pub mod text;
