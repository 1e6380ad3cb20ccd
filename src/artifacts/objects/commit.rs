//! History entry
//!
//! A commit as the layout engine sees it: its id, the ids of its parents (none
//! for a root commit, one for a regular commit, two for a merge) and the
//! subject line used for labels.
//!
//! ## Format
//!
//! One commit per line, as printed by `git log --format='%H %P%x09%s'`:
//! ```text
//! <oid> [<parent-oid> ...][<TAB><subject>]
//! ```
//!
//! Blank lines and lines starting with `#` carry no commit.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;

/// Regex describing a history line: whitespace separated hex ids, then an
/// optional tab-separated subject
const HISTORY_LINE_REGEX: &str =
    r"^(?P<ids>[0-9A-Fa-f]+(?: +[0-9A-Fa-f]+)*) *(?:\t(?P<subject>.*))?$";

/// Marker for comment lines in a history listing
const COMMENT_PREFIX: char = '#';

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    subject: String,
}

impl Commit {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Parser for history listings
///
/// Holds the compiled line pattern so a whole listing is parsed with a single
/// regex compilation.
#[derive(Debug, Clone)]
pub struct CommitLineParser {
    re: regex::Regex,
}

impl CommitLineParser {
    pub fn new() -> anyhow::Result<Self> {
        let re = regex::Regex::new(HISTORY_LINE_REGEX)
            .with_context(|| format!("invalid history line regex: {HISTORY_LINE_REGEX}"))?;

        Ok(Self { re })
    }

    /// Parse a single history line
    ///
    /// # Returns
    ///
    /// `None` for blank and comment lines, the parsed commit otherwise
    pub fn parse_line(&self, line: &str) -> anyhow::Result<Option<Commit>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let captures = self
            .re
            .captures(line.trim_start_matches(' '))
            .ok_or_else(|| anyhow::anyhow!("malformed history line: {line:?}"))?;

        let mut ids = captures["ids"]
            .split_whitespace()
            .map(|id| ObjectId::try_parse(id.to_string()));
        let oid = ids
            .next()
            .ok_or_else(|| anyhow::anyhow!("history line without commit id: {line:?}"))??;
        let parents = ids.collect::<anyhow::Result<Vec<_>>>()?;
        let subject = captures
            .name("subject")
            .map(|subject| subject.as_str().trim().to_string())
            .unwrap_or_default();

        Ok(Some(Commit::new(oid, parents, subject)))
    }
}
