use derive_new::new;
use rstest::fixture;
use sha1::{Digest, Sha1};
use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "history.txt";

/// A commit of a test history, named by a human readable label
#[derive(Debug, Clone, new)]
pub struct CommitSpec {
    pub name: String,
    pub parents: Vec<String>,
    pub subject: String,
}

impl CommitSpec {
    pub fn oid(&self) -> String {
        commit_oid(&self.name)
    }

    pub fn short_oid(&self) -> String {
        self.oid()[..7].to_string()
    }

    fn to_line(&self) -> String {
        let ids = std::iter::once(self.oid())
            .chain(self.parents.iter().map(|parent| commit_oid(parent)))
            .collect::<Vec<_>>()
            .join(" ");

        if self.subject.is_empty() {
            ids
        } else {
            format!("{}\t{}", ids, self.subject)
        }
    }
}

/// Deterministic 40-character object id for a commit label
pub fn commit_oid(name: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn fake_subject() -> String {
    use fake::{Fake, faker::lorem::en::Words};

    let words = Words(2..6).fake::<Vec<String>>().join(" ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => words,
    }
}

pub fn commit_spec(name: &str, parents: &[&str], subject: &str) -> CommitSpec {
    CommitSpec::new(
        name.to_string(),
        parents.iter().map(|parent| parent.to_string()).collect(),
        subject.to_string(),
    )
}

pub fn render_history(commits: &[CommitSpec]) -> String {
    let mut listing = String::from("# git log --format='%H %P%x09%s'\n");
    for commit in commits {
        listing.push_str(&commit.to_line());
        listing.push('\n');
    }
    listing
}

pub fn write_history(dir: &Path, commits: &[CommitSpec]) -> PathBuf {
    let path = dir.join(HISTORY_FILE);
    std::fs::write(&path, render_history(commits))
        .unwrap_or_else(|e| panic!("Failed to write history {:?}: {}", path, e));
    path
}

#[fixture]
pub fn linear_history() -> Vec<CommitSpec> {
    let c2 = fake_subject();
    let c1 = fake_subject();

    vec![
        commit_spec("C2", &["C1"], &c2),
        commit_spec("C1", &["C0"], &c1),
        commit_spec("C0", &[], "Initial commit"),
    ]
}

#[fixture]
pub fn branch_and_merge_history() -> Vec<CommitSpec> {
    vec![
        commit_spec("C3", &["C2", "C1b"], "Merge branch 'feature'"),
        commit_spec("C2", &["C1a"], "Update docs"),
        commit_spec("C1b", &["C0"], "Add feature"),
        commit_spec("C1a", &["C0"], "Fix build"),
        commit_spec("C0", &[], "Initial commit"),
    ]
}
