//! Commit graph layout
//!
//! This module turns an ordered commit list into the lanes and connecting
//! routes a renderer needs to draw a branch/merge graph, the visual
//! equivalent of `git log --graph`:
//!
//! - `lane`: lane identifiers and the registry of currently open lanes
//! - `layout`: the layout engine and its output nodes
//! - `error`: malformed-history errors reported by the engine
//!
//! ## Algorithm
//!
//! Commits are processed most-recent-first in a single pass. Every commit
//! either inherits the lane reserved for it by a child or opens a new lane.
//! Its parents then decide what happens to the lane:
//! - a root commit emits nothing
//! - a single parent either continues the lane or, when the parent is already
//!   expected by another lane, closes the lane into that one
//! - a merge continues the lane into the first parent and draws the second
//!   parent's lane into the commit's column
//!
//! ## Debug Logging
//!
//! Lane registry transitions are written to stderr when the crate is built
//! with the `debug_layout` feature (`cargo build --features debug_layout`).

/// Macro for debug logging that is enabled with the debug_layout feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Opened lane {} for {}", lane, oid);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_layout")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod error;
pub mod lane;
pub mod layout;
