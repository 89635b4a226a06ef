//! Run configuration: command line flags layered over an optional
//! `.contribs.toml` at the repository root.
//!
//! ```toml
//! ignore_file = ".contribignore"
//! threshold = 15
//!
//! [people]
//! min_lines = 50
//! min_percent = 10.0
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::blame::BlameKind;
use crate::classify::ClassifierKind;
use crate::cli::AnalysisArgs;
use crate::error::{ContribError, Result};
use crate::exclude::IGNORE_FILE;
use crate::report::collapse::{
    CollapseRule, LANGUAGE_THRESHOLD, PEOPLE_MIN_LINES, PEOPLE_MIN_PERCENT, Rules,
};

pub const CONFIG_FILE: &str = ".contribs.toml";

/// Contents of `.contribs.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub ignore_file: Option<String>,
    pub threshold: Option<usize>,
    pub people: PeopleConfig,
}

/// Collapse bounds for the cross-language people table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PeopleConfig {
    pub min_lines: Option<usize>,
    pub min_percent: Option<f64>,
}

impl FileConfig {
    /// Read `<root>/.contribs.toml`. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ContribError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        toml::from_str(&content)
            .map_err(|e| ContribError::Config(format!("invalid {}: {e}", path.display())))
    }
}

/// Everything one analysis run needs to know.
#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub name: String,
    pub rev: String,
    pub classifier: ClassifierKind,
    pub blame: BlameKind,
    pub ignore_file: String,
    pub rules: Rules,
}

impl Config {
    pub fn from_args(args: &AnalysisArgs) -> Result<Self> {
        let root = resolve_root(args.path.as_deref())?;
        let file = FileConfig::load(&root)?;

        let rules = Rules {
            people: CollapseRule::Minor {
                lines: file.people.min_lines.unwrap_or(PEOPLE_MIN_LINES),
                percent: file.people.min_percent.unwrap_or(PEOPLE_MIN_PERCENT),
            },
            language: CollapseRule::BelowLines(
                args.threshold
                    .or(file.threshold)
                    .unwrap_or(LANGUAGE_THRESHOLD),
            ),
        };

        Ok(Self {
            name: project_name(&root),
            root,
            rev: args.rev.clone(),
            classifier: args.classifier,
            blame: args.blame,
            ignore_file: file.ignore_file.unwrap_or_else(|| IGNORE_FILE.to_string()),
            rules,
        })
    }
}

/// Make the repository path absolute and check that it is a directory.
pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.unwrap_or(Path::new("."));
    let root = path
        .canonicalize()
        .map_err(|e| ContribError::Config(format!("root {}: {e}", path.display())))?;
    if !root.is_dir() {
        return Err(ContribError::Config(format!(
            "root {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
