//! Malformed history errors
//!
//! The layout engine validates its input while it walks the history and stops
//! at the first commit whose shape it cannot lay out, instead of producing a
//! plausible-looking but meaningless graph.

use crate::artifacts::graph::lane::LaneId;
use crate::artifacts::objects::object_id::ObjectId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The same commit appears twice in the history
    DuplicateCommit { oid: ObjectId },
    /// Merges with more than two parents are not supported
    OctopusMerge { oid: ObjectId, parents: usize },
    /// A commit lists the same parent more than once
    DuplicateParent { oid: ObjectId, parent: ObjectId },
    /// A parent was listed before its child (or a commit names itself)
    ParentBeforeChild { oid: ObjectId, parent: ObjectId },
    /// The row height lookup returned a non-positive or non-finite height
    InvalidRowHeight { oid: ObjectId, height: f64 },
    /// A lane that should be open is missing from the registry
    LaneNotOpen { oid: ObjectId, lane: LaneId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DuplicateCommit { oid } => {
                write!(f, "commit {oid} appears more than once in the history")
            }
            LayoutError::OctopusMerge { oid, parents } => write!(
                f,
                "commit {oid} has {parents} parents; merges of more than two parents are not supported"
            ),
            LayoutError::DuplicateParent { oid, parent } => {
                write!(f, "commit {oid} lists parent {parent} more than once")
            }
            LayoutError::ParentBeforeChild { oid, parent } => write!(
                f,
                "parent {parent} of commit {oid} appears before its child in the history"
            ),
            LayoutError::InvalidRowHeight { oid, height } => {
                write!(f, "invalid row height {height} for commit {oid}")
            }
            LayoutError::LaneNotOpen { oid, lane } => {
                write!(f, "lane {lane} of commit {oid} is not open")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
