//! Commit history listing
//!
//! The history is the input of every command: an ordered, most-recent-first
//! list of commits read from a file or from stdin. It is typically produced
//! with
//!
//! ```text
//! git log --format='%H %P%x09%s' > history.txt
//! ```
//!
//! See [`CommitLineParser`] for the line format.

use crate::artifacts::objects::commit::{Commit, CommitLineParser};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::io::BufRead;
use std::path::Path;

/// Source name that selects stdin
pub const STDIN_SOURCE: &str = "-";

#[derive(Debug, Clone, Default, new)]
pub struct History {
    commits: Vec<Commit>,
}

impl History {
    /// Load a history listing from a file, or from stdin for `-`
    pub fn load(source: &str) -> anyhow::Result<Self> {
        if source == STDIN_SOURCE {
            let stdin = std::io::stdin();
            return Self::parse(stdin.lock()).context("failed to read history from stdin");
        }

        let path = Path::new(source);
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open history file {}", path.display()))?;

        Self::parse(std::io::BufReader::new(file))
            .with_context(|| format!("failed to read history file {}", path.display()))
    }

    /// Parse a history listing, one commit per line
    pub fn parse<R: BufRead>(reader: R) -> anyhow::Result<Self> {
        let parser = CommitLineParser::new()?;
        let mut commits = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(commit) = parser
                .parse_line(&line)
                .with_context(|| format!("line {}", index + 1))?
            {
                commits.push(commit);
            }
        }

        Ok(Self { commits })
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Resolve an abbreviated commit id to the single commit it names
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid object id: {}", prefix);
        }

        let matches = self
            .commits
            .iter()
            .map(Commit::oid)
            .filter(|oid| oid.matches_prefix(prefix))
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => anyhow::bail!("unknown revision '{}': not in the history", prefix),
            [oid] => Ok((*oid).clone()),
            candidates => {
                let mut error_msg = format!(
                    "short SHA1 {} is ambiguous\nhint: The candidates are:",
                    prefix
                );
                for oid in candidates {
                    error_msg.push_str(&format!("\nhint:   {} commit", oid.to_short_oid()));
                }
                anyhow::bail!(error_msg)
            }
        }
    }
}
