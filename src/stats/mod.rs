//! Contribution aggregation: blame every file of every language bucket and
//! count how many current lines each author is responsible for.
//!
//! The result set is ordered by bucket size (largest first, language name on
//! ties) and each bucket's contributors by line count (largest first,
//! identity on ties), so the same repository always produces the same
//! report.

mod collector;
mod rollup;

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Serialize;

use crate::blame::LineAttribution;
use crate::classify::RepoContents;
use crate::error::Result;
use crate::exclude::IgnoreList;

pub use collector::collect;
pub use rollup::{grand_total, language_share, rollup};

/// Lines of one bucket attributed to one author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionRecord {
    pub identity: String,
    pub lines: usize,
    pub percentage: f64,
}

/// Cross-language total for one author. Same shape as a bucket record, with
/// the percentage taken over every bucket.
pub type GlobalAuthorRecord = ContributionRecord;

/// Files and attribution totals of one language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageBucket {
    pub language: String,
    pub files: Vec<PathBuf>,
    pub total_lines: usize,
    pub contributions: Vec<ContributionRecord>,
}

/// Turn per-identity line counts into records sorted by lines descending,
/// then identity ascending.
pub(crate) fn to_records(
    counts: impl IntoIterator<Item = (String, usize)>,
    total: usize,
) -> Vec<ContributionRecord> {
    let mut records: Vec<ContributionRecord> = counts
        .into_iter()
        .map(|(identity, lines)| ContributionRecord {
            identity,
            lines,
            percentage: percentage(lines, total),
        })
        .collect();
    records.sort_by(|a, b| {
        b.lines
            .cmp(&a.lines)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    records
}

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn bucket_order(a: &LanguageBucket, b: &LanguageBucket) -> Ordering {
    b.total_lines
        .cmp(&a.total_lines)
        .then_with(|| a.language.cmp(&b.language))
}

/// Build one bucket per classified language: drop ignored files, blame the
/// rest, and sort the buckets. The first failure aborts the whole run.
pub fn aggregate(
    contents: &RepoContents,
    ignore: &IgnoreList,
    source: &dyn LineAttribution,
) -> Result<Vec<LanguageBucket>> {
    let mut buckets = Vec::with_capacity(contents.len());

    for (language, files) in contents {
        let files = ignore.filter(files);
        log::info!("analysing {language} ({} files)", files.len());

        let (contributions, total_lines) =
            collect(&files, source).map_err(|e| e.in_language(language))?;

        buckets.push(LanguageBucket {
            language: language.clone(),
            files,
            total_lines,
            contributions,
        });
    }

    buckets.sort_by(bucket_order);
    Ok(buckets)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
