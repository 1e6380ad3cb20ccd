//! Commit identifier (hexadecimal SHA-1 hash)
//!
//! History listings name commits either by their full 40-character hash
//! (`git log --format=%H`) or by an abbreviation (`%h`). Both are accepted as
//! long as they are at least [`MIN_OBJECT_ID_LENGTH`] hex digits long.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc1234")
//!
//! Ids are normalised to lower case so that `ABC1234` and `abc1234` name the
//! same commit.

use crate::artifacts::objects::{MIN_OBJECT_ID_LENGTH, OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};

/// Commit identifier
///
/// A validated, lower-case hexadecimal string that uniquely identifies a
/// commit inside one history listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 4 to 40 hexadecimal characters
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() < MIN_OBJECT_ID_LENGTH || id.len() > OBJECT_ID_LENGTH {
            anyhow::bail!("Invalid object ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid object ID characters: {}", id);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard Git abbreviation), or the
    /// whole id when it is already shorter than that
    pub fn to_short_oid(&self) -> String {
        self.0
            .chars()
            .take(SHORT_OBJECT_ID_LENGTH)
            .collect::<String>()
    }

    /// Whether this id starts with the given (case-insensitive) hex prefix
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(&prefix.to_ascii_lowercase())
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
