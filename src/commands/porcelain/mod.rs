//! Porcelain commands (user-facing renderings)
//!
//! ## Commands
//!
//! - `log`: Show the history as a text graph, like `git log --graph`
//! - `svg`: Render the history graph as an SVG document

pub mod log;
pub mod svg;
