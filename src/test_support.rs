//! Test fixtures: throw-away git repositories and a fake blame source.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use git2::Repository;

use crate::blame::DEFAULT_REV;
use crate::report::{Rules, Snapshot};
use crate::stats::{LanguageBucket, to_records};

pub fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();

    (dir, repo)
}

/// Write `files`, stage them and commit as `email` on top of HEAD.
pub fn commit_as(repo: &Repository, email: &str, files: &[(&str, &str)], message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }

    commit_index(repo, &mut index, email, message)
}

/// Delete `paths` from the work tree and the index, then commit as `email`.
pub fn remove_as(repo: &Repository, email: &str, paths: &[&str], message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();

    for path in paths {
        fs::remove_file(repo.workdir().unwrap().join(path)).unwrap();
        index.remove_path(Path::new(path)).unwrap();
    }

    commit_index(repo, &mut index, email, message)
}

fn commit_index(repo: &Repository, index: &mut git2::Index, email: &str, message: &str) -> git2::Oid {
    let name = email.split('@').next().unwrap_or(email);
    let sig = git2::Signature::new(name, email, &git2::Time::new(1_700_000_000, 0)).unwrap();

    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// `n` distinct lines, newline terminated.
pub fn lines(n: usize) -> String {
    (0..n).map(|i| format!("line {i}\n")).collect()
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// In-memory attribution: each file maps to `(identity, lines)` runs.
/// Files it does not know fail like untracked files.
#[derive(Default)]
pub struct FakeBlame {
    files: std::collections::HashMap<std::path::PathBuf, Vec<String>>,
}

impl FakeBlame {
    pub fn with(mut self, file: &str, runs: &[(&str, usize)]) -> Self {
        let identities = runs
            .iter()
            .flat_map(|(id, n)| std::iter::repeat_n(id.to_string(), *n))
            .collect();
        self.files.insert(file.into(), identities);
        self
    }
}

impl crate::blame::LineAttribution for FakeBlame {
    fn attribute_lines(&self, path: &Path) -> crate::error::Result<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| crate::error::ContribError::Attribution {
                path: path.to_path_buf(),
                reason: "no such path in HEAD".to_string(),
            })
    }
}

fn bucket(language: &str, files: &[&str], counts: &[(&str, usize)]) -> LanguageBucket {
    let total_lines = counts.iter().map(|(_, n)| n).sum();
    LanguageBucket {
        language: language.to_string(),
        files: files.iter().map(PathBuf::from).collect(),
        total_lines,
        contributions: to_records(
            counts.iter().map(|(id, n)| (id.to_string(), *n)),
            total_lines,
        ),
    }
}

/// Two languages, five people: alice dominates, bob is small but above the
/// people bounds, erin, carol and dave form the long tail.
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        name: "demo".to_string(),
        root: PathBuf::from("/src/demo"),
        rev: DEFAULT_REV.to_string(),
        generated_at: Local::now(),
        buckets: vec![
            bucket(
                "Go",
                &["main.go", "util.go"],
                &[
                    ("alice@example.com", 900),
                    ("bob@example.com", 60),
                    ("carol@example.com", 30),
                    ("dave@example.com", 10),
                ],
            ),
            bucket(
                "Markdown",
                &["README.md"],
                &[("alice@example.com", 60), ("erin@example.com", 40)],
            ),
        ],
        rules: Rules::default(),
    }
}
