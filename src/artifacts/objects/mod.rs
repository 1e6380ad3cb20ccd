//! Commit types read from a history listing
//!
//! - **ObjectId**: a validated hexadecimal commit hash, full or abbreviated
//! - **Commit**: one history entry (id, parent ids, subject line)
//!
//! Listings are produced by the history source, most-recent-first, one
//! commit per line (see [`commit::CommitLineParser::parse_line`]).

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest abbreviation accepted for a commit id
pub const MIN_OBJECT_ID_LENGTH: usize = 4;

/// Length of the abbreviated form used for display
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
