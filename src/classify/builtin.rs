use std::path::{Path, PathBuf};

use git2::{Blob, ObjectType, Oid, TreeWalkMode, TreeWalkResult};

use super::{Classifier, RepoContents};
use crate::classify::language::{LanguageSpec, detect, detect_by_shebang};
use crate::error::Result;
use crate::git::GitRepo;

const SYMLINK_MODE: i32 = 0o120000;

/// Lists the files of the attributed revision under the analysed root and
/// detects their language. The work tree is never read, so untracked files
/// are skipped and files deleted since the revision are still counted.
pub struct BuiltinClassifier {
    rev: String,
}

impl BuiltinClassifier {
    pub fn new(rev: &str) -> Self {
        Self {
            rev: rev.to_string(),
        }
    }
}

impl Classifier for BuiltinClassifier {
    fn classify(&self, root: &Path) -> Result<RepoContents> {
        let git = GitRepo::open(root)?;
        let tree = git.resolve(&self.rev)?.tree()?;

        let mut blobs: Vec<(PathBuf, Oid)> = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(ObjectType::Blob) && entry.filemode() != SYMLINK_MODE {
                if let Some(name) = entry.name() {
                    blobs.push((Path::new(dir).join(name), entry.id()));
                }
            }
            TreeWalkResult::Ok
        })?;

        let mut contents = RepoContents::new();
        for (git_path, oid) in blobs {
            let Some(rel_path) = git.from_git_path(&git_path) else {
                continue;
            };

            let spec = match detect(&rel_path) {
                Some(spec) => Some(spec),
                None => shebang_language(&git.repo().find_blob(oid)?),
            };
            let Some(spec) = spec else {
                log::debug!("no language for {}", rel_path.display());
                continue;
            };
            contents
                .entry(spec.name.to_string())
                .or_default()
                .push(rel_path);
        }

        for files in contents.values_mut() {
            files.sort();
        }
        Ok(contents)
    }
}

/// Detect a language from the `#!` line of a committed file.
fn shebang_language(blob: &Blob<'_>) -> Option<&'static LanguageSpec> {
    let first_line = blob.content().split(|&b| b == b'\n').next()?;
    detect_by_shebang(std::str::from_utf8(first_line).ok()?)
}
