use std::path::{Path, PathBuf};
use std::process::Command;

use super::LineAttribution;
use crate::error::{ContribError, Result};

/// Attribution through the `git` command line tool.
pub struct GitBlame {
    root: PathBuf,
    rev: String,
}

impl GitBlame {
    /// Check that `rev` names a commit in the repository containing `root`.
    pub fn open(root: &Path, rev: &str) -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("{rev}^{{commit}}"))
            .current_dir(root)
            .output()
            .map_err(|e| ContribError::Repository(format!("cannot run git: {e}")))?;

        if !output.status.success() {
            return Err(ContribError::Repository(format!(
                "cannot resolve revision {rev} in {}",
                root.display()
            )));
        }

        Ok(Self {
            root: root.to_path_buf(),
            rev: rev.to_string(),
        })
    }
}

impl LineAttribution for GitBlame {
    fn attribute_lines(&self, path: &Path) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["blame", "--line-porcelain", &self.rev, "--"])
            .arg(path)
            .current_dir(&self.root)
            .output()
            .map_err(|e| ContribError::Attribution {
                path: path.to_path_buf(),
                reason: format!("cannot run git blame: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ContribError::Attribution {
                path: path.to_path_buf(),
                reason: format!("git blame failed: {}", stderr.trim()),
            });
        }

        Ok(parse_porcelain(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Pull one identity per line out of `--line-porcelain` output. Every line
/// of the blamed file produces a full header block, each with exactly one
/// `author-mail <...>` record. File content lines start with a tab, so they
/// can never be mistaken for a header.
pub(super) fn parse_porcelain(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("author-mail "))
        .map(|mail| {
            let mail = mail.trim();
            mail.strip_prefix('<')
                .and_then(|m| m.strip_suffix('>'))
                .unwrap_or(mail)
                .to_string()
        })
        .collect()
}
