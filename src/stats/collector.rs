use std::collections::HashMap;
use std::path::PathBuf;

use super::{ContributionRecord, to_records};
use crate::blame::LineAttribution;
use crate::error::Result;

/// Blame every file and count lines per identity across the whole list.
///
/// Returns the sorted contribution records and the number of attributed
/// lines. Stops at the first file the source cannot attribute.
pub fn collect(
    files: &[PathBuf],
    source: &dyn LineAttribution,
) -> Result<(Vec<ContributionRecord>, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total_lines = 0usize;

    for file in files {
        let identities = source.attribute_lines(file)?;
        log::debug!("{}: {} lines", file.display(), identities.len());

        total_lines += identities.len();
        for identity in identities {
            *counts.entry(identity).or_insert(0) += 1;
        }
    }

    Ok((to_records(counts, total_lines), total_lines))
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
