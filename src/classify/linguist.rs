use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use super::{Classifier, RepoContents};
use crate::error::{ContribError, Result};

/// Runs `linguist <root> --json`.
pub struct Linguist {
    program: String,
}

impl Default for Linguist {
    fn default() -> Self {
        Self {
            program: "linguist".to_string(),
        }
    }
}

impl Linguist {
    #[cfg(test)]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

/// Older releases print a bare file list per language, newer ones print a
/// breakdown object that carries the list under `files`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageEntry {
    Files(Vec<PathBuf>),
    Breakdown { files: Vec<PathBuf> },
}

impl Classifier for Linguist {
    fn classify(&self, root: &Path) -> Result<RepoContents> {
        log::debug!("running {} {} --json", self.program, root.display());
        let output = Command::new(&self.program)
            .arg(root)
            .arg("--json")
            .output()
            .map_err(|e| ContribError::Classifier(format!("cannot run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ContribError::Classifier(format!(
                "{} failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        decode(&output.stdout)
    }
}

pub(super) fn decode(stdout: &[u8]) -> Result<RepoContents> {
    let raw: std::collections::BTreeMap<String, LanguageEntry> = serde_json::from_slice(stdout)
        .map_err(|e| ContribError::Classifier(format!("cannot decode linguist output: {e}")))?;

    Ok(raw
        .into_iter()
        .map(|(language, entry)| {
            let files = match entry {
                LanguageEntry::Files(files) | LanguageEntry::Breakdown { files } => files,
            };
            (language, files)
        })
        .collect())
}
