//! Language classification: partition a repository's files by language.
//!
//! The classifier runs once per report. Its result maps a language name to
//! the files of that language, with paths relative to the analysed root.

mod builtin;
pub mod language;
mod linguist;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::Result;

pub use builtin::BuiltinClassifier;
pub use linguist::Linguist;

/// Language name → files, ordered by language name.
pub type RepoContents = BTreeMap<String, Vec<PathBuf>>;

pub trait Classifier {
    fn classify(&self, root: &Path) -> Result<RepoContents>;
}

/// Which classifier to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierKind {
    /// Walk the work tree and detect languages by name, extension and shebang
    Builtin,
    /// Run the external `linguist` tool
    Linguist,
}

/// Build the classifier of the given kind. The builtin classifier only
/// reports files that exist at `rev`, so that every file it returns can be
/// attributed.
pub fn classifier(kind: ClassifierKind, rev: &str) -> Box<dyn Classifier> {
    match kind {
        ClassifierKind::Builtin => Box::new(BuiltinClassifier::new(rev)),
        ClassifierKind::Linguist => Box::new(Linguist::default()),
    }
}
