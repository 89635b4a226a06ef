use std::path::{Path, PathBuf};

use git2::{Commit, Repository};

use crate::error::{ContribError, Result};

/// A repository opened from an analysed root, which may be any directory
/// inside the work tree.
pub struct GitRepo {
    repo: Repository,
    /// Location of the analysed root relative to the work tree.
    prefix: PathBuf,
}

impl GitRepo {
    pub fn open(root: &Path) -> Result<Self> {
        let repo = Repository::discover(root).map_err(|e| {
            ContribError::Repository(format!(
                "not a git repository (or any parent): {}: {}",
                root.display(),
                e.message()
            ))
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| ContribError::Repository("bare repositories are not supported".into()))?
            .to_path_buf();
        let prefix = work_tree_prefix(&workdir, root)?;
        Ok(Self { repo, prefix })
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Resolve `rev` (branch, tag, sha, `HEAD~2`, ...) to a commit.
    pub fn resolve(&self, rev: &str) -> Result<Commit<'_>> {
        self.repo
            .revparse_single(rev)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| {
                ContribError::Repository(format!("cannot resolve revision {rev}: {}", e.message()))
            })
    }

    /// Translate a path relative to the analysed root into a path relative
    /// to the work tree.
    pub fn to_git_path(&self, rel_path: &Path) -> PathBuf {
        self.prefix.join(rel_path)
    }

    /// Inverse of [`to_git_path`](Self::to_git_path). `None` for paths
    /// outside the analysed root.
    pub fn from_git_path(&self, git_path: &Path) -> Option<PathBuf> {
        git_path.strip_prefix(&self.prefix).ok().map(Path::to_path_buf)
    }
}

fn work_tree_prefix(workdir: &Path, root: &Path) -> Result<PathBuf> {
    let workdir = workdir.canonicalize()?;
    let root = root.canonicalize()?;
    root.strip_prefix(&workdir)
        .map(Path::to_path_buf)
        .map_err(|_| {
            ContribError::Repository(format!(
                "{} is outside the work tree {}",
                root.display(),
                workdir.display()
            ))
        })
}
