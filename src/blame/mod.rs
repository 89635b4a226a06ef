//! Line attribution: who is responsible for each line of a file.
//!
//! Two sources answer the same question. [`GitBlame`] shells out to
//! `git blame --line-porcelain`, [`Libgit2Blame`] reads the repository
//! in-process through libgit2. Both resolve the same revision and return one
//! author e-mail per line, so the aggregation engine never needs to know
//! which one is in use.

mod libgit;
mod porcelain;

use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;

pub use libgit::Libgit2Blame;
pub use porcelain::GitBlame;

/// Revision attributed when none is given.
pub const DEFAULT_REV: &str = "HEAD";

/// A source of per-line authorship for files at a fixed revision.
pub trait LineAttribution {
    /// Return the identity of the author of every line of `path`, in line
    /// order. `path` is relative to the analysed root.
    fn attribute_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Which attribution source to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BlameKind {
    /// Run the `git` binary once per file
    Git,
    /// Use libgit2 in-process
    Libgit2,
}

/// Open the attribution source of the given kind against `root` at `rev`.
pub fn open(kind: BlameKind, root: &Path, rev: &str) -> Result<Box<dyn LineAttribution>> {
    Ok(match kind {
        BlameKind::Git => Box::new(GitBlame::open(root, rev)?),
        BlameKind::Libgit2 => Box::new(Libgit2Blame::open(root, rev)?),
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
