//! Long-tail collapse: replace the minor contributors at the bottom of a
//! sorted table with a single "N others" row.

use crate::stats::ContributionRecord;

pub const PEOPLE_MIN_LINES: usize = 50;
pub const PEOPLE_MIN_PERCENT: f64 = 10.0;
pub const LANGUAGE_THRESHOLD: usize = 15;

/// When a contributor counts as minor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollapseRule {
    /// Fewer than `lines` lines and less than `percent` percent.
    Minor { lines: usize, percent: f64 },
    /// Fewer than this many lines.
    BelowLines(usize),
}

impl CollapseRule {
    pub fn is_minor(&self, record: &ContributionRecord) -> bool {
        match *self {
            Self::Minor { lines, percent } => record.lines < lines && record.percentage < percent,
            Self::BelowLines(lines) => record.lines < lines,
        }
    }
}

/// The people table and the per-language tables collapse with different
/// rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub people: CollapseRule,
    pub language: CollapseRule,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            people: CollapseRule::Minor {
                lines: PEOPLE_MIN_LINES,
                percent: PEOPLE_MIN_PERCENT,
            },
            language: CollapseRule::BelowLines(LANGUAGE_THRESHOLD),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Row<'a> {
    Entry(&'a ContributionRecord),
    /// Everyone from the first minor contributor down. The percentage is
    /// what is left of 100 after the listed rows, so the column always adds
    /// up.
    Others { count: usize, percentage: f64 },
}

/// Walk `records` (sorted by lines, descending) and cut at the first minor
/// contributor. The last record is never folded on its own: a tail of one
/// is listed.
pub fn collapse<'a>(records: &'a [ContributionRecord], rule: &CollapseRule) -> Vec<Row<'a>> {
    let mut rows = Vec::with_capacity(records.len());
    let mut remaining = 100.0;
    let last = records.len().saturating_sub(1);

    for (i, record) in records.iter().enumerate() {
        if i < last && rule.is_minor(record) {
            rows.push(Row::Others {
                count: records.len() - i,
                percentage: remaining,
            });
            break;
        }
        remaining -= record.percentage;
        rows.push(Row::Entry(record));
    }

    rows
}

#[cfg(test)]
#[path = "collapse_test.rs"]
mod tests;
