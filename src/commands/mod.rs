//! Command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: Raw output meant for scripts and other tools (layout)
//! - `porcelain`: User-facing renderings of the history (log, svg)
//!
//! Every command is implemented on [`crate::areas::viewer::GraphViewer`] and
//! writes to the viewer's writer.

pub mod plumbing;
pub mod porcelain;
