//! Report generation: run the whole pipeline once into an immutable
//! [`Snapshot`], then render it as console text, JSON or HTML.
//!
//! Rendering never touches the repository. The people table is rebuilt from
//! the buckets on every render, so it cannot drift from them.

pub mod collapse;
mod export;
pub mod html;
pub mod json;
pub mod text;

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::blame;
use crate::classify;
use crate::config::Config;
use crate::error::Result;
use crate::exclude::IgnoreList;
use crate::stats::{self, GlobalAuthorRecord, LanguageBucket};

pub use collapse::Rules;
pub use export::export;

/// Everything a renderer needs, computed once per run.
#[derive(Debug)]
pub struct Snapshot {
    pub name: String,
    pub root: PathBuf,
    pub rev: String,
    pub generated_at: DateTime<Local>,
    pub buckets: Vec<LanguageBucket>,
    pub rules: Rules,
}

impl Snapshot {
    pub fn grand_total(&self) -> usize {
        stats::grand_total(&self.buckets)
    }

    pub fn people(&self) -> Vec<GlobalAuthorRecord> {
        stats::rollup(&self.buckets)
    }
}

/// Classify, filter and blame the repository described by `config`.
pub fn analyse(config: &Config) -> Result<Snapshot> {
    log::info!("analysing the repository {}", config.root.display());

    let ignore = IgnoreList::load(&config.root, &config.ignore_file)?;
    let source = blame::open(config.blame, &config.root, &config.rev)?;
    let contents = classify::classifier(config.classifier, &config.rev).classify(&config.root)?;
    let buckets = stats::aggregate(&contents, &ignore, source.as_ref())?;

    Ok(Snapshot {
        name: config.name.clone(),
        root: config.root.clone(),
        rev: config.rev.clone(),
        generated_at: Local::now(),
        buckets,
        rules: config.rules,
    })
}

/// Percentages under 10 get two decimals, the rest one.
pub fn format_percent(percent: f64) -> String {
    if percent < 10.0 {
        format!("{percent:.2}")
    } else {
        format!("{percent:.1}")
    }
}

/// Short display name for an identity: the part before the `@`.
pub fn display_name(identity: &str) -> &str {
    match identity.split_once('@') {
        Some((local, _)) if !local.is_empty() => local,
        _ => identity,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
