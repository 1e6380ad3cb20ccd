//! Plumbing commands (machine-readable output)
//!
//! ## Commands
//!
//! - `layout`: Dump the raw layout nodes, one line per commit

pub mod layout;
