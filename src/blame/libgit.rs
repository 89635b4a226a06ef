use std::path::Path;

use git2::{BlameOptions, Oid};

use super::LineAttribution;
use crate::error::{ContribError, Result};
use crate::git::GitRepo;

/// In-process attribution against a resolved commit.
pub struct Libgit2Blame {
    git: GitRepo,
    commit: Oid,
}

impl Libgit2Blame {
    pub fn open(root: &Path, rev: &str) -> Result<Self> {
        let git = GitRepo::open(root)?;
        let commit = git.resolve(rev)?.id();
        Ok(Self { git, commit })
    }
}

impl LineAttribution for Libgit2Blame {
    fn attribute_lines(&self, path: &Path) -> Result<Vec<String>> {
        // `git blame` rewrites identities through `.mailmap`
        let mut opts = BlameOptions::new();
        opts.newest_commit(self.commit).use_mailmap(true);

        let blame = self
            .git
            .repo()
            .blame_file(&self.git.to_git_path(path), Some(&mut opts))
            .map_err(|e| ContribError::Attribution {
                path: path.to_path_buf(),
                reason: e.message().to_string(),
            })?;

        let mut identities = Vec::new();
        for hunk in blame.iter() {
            let sig = hunk.final_signature();
            let email = String::from_utf8_lossy(sig.email_bytes()).into_owned();
            identities.extend(std::iter::repeat_n(email, hunk.lines_in_hunk()));
        }
        Ok(identities)
    }
}
