//! `.contribignore` loading and glob-based file exclusion.
//!
//! One glob per line. Blank lines and `#` comments are skipped. `*` stays
//! inside a path segment, `**` crosses directory separators.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{ContribError, Result};

/// Default ignore file name, looked up at the repository root.
pub const IGNORE_FILE: &str = ".contribignore";

/// A compiled set of exclusion patterns.
#[derive(Debug)]
pub struct IgnoreList {
    patterns: Vec<String>,
    set: GlobSet,
}

impl IgnoreList {
    /// Compile the given patterns. Fails on the first pattern that is not a
    /// valid glob.
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| ContribError::Config(format!("bad ignore pattern {pattern:?}: {e}")))?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| ContribError::Config(format!("cannot build ignore set: {e}")))?;
        Ok(Self { patterns, set })
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }

    /// Load `<root>/<file_name>`. A missing file yields an empty list.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::empty()),
            Err(e) => {
                return Err(ContribError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        let list = Self::new(parse_patterns(&content))?;
        log::debug!(
            "loaded {} ignore patterns from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_ignored(&self, file: &Path) -> bool {
        self.set.is_match(file)
    }

    /// Keep the files that match none of the patterns, preserving order.
    pub fn filter(&self, files: &[PathBuf]) -> Vec<PathBuf> {
        files
            .iter()
            .filter(|f| !self.is_ignored(f))
            .cloned()
            .collect()
    }
}

/// Extract the pattern lines from the ignore file content.
fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "exclude_test.rs"]
mod tests;
