use std::collections::HashMap;

use super::{GlobalAuthorRecord, LanguageBucket, percentage, to_records};

/// Lines attributed across every bucket.
pub fn grand_total(buckets: &[LanguageBucket]) -> usize {
    buckets.iter().map(|b| b.total_lines).sum()
}

/// Share of all attributed lines that belong to `bucket`, in percent.
pub fn language_share(bucket: &LanguageBucket, grand_total: usize) -> f64 {
    percentage(bucket.total_lines, grand_total)
}

/// Fold every bucket's contributors into one total per identity, ignoring
/// language. Empty when nothing was attributed.
pub fn rollup(buckets: &[LanguageBucket]) -> Vec<GlobalAuthorRecord> {
    let total = grand_total(buckets);
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in buckets.iter().flat_map(|b| &b.contributions) {
        *counts.entry(record.identity.as_str()).or_insert(0) += record.lines;
    }

    to_records(
        counts
            .into_iter()
            .map(|(identity, lines)| (identity.to_string(), lines)),
        total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ContributionRecord;
    use std::path::PathBuf;

    fn bucket(language: &str, contributors: &[(&str, usize)]) -> LanguageBucket {
        let total: usize = contributors.iter().map(|(_, n)| n).sum();
        LanguageBucket {
            language: language.to_string(),
            files: vec![PathBuf::from(format!("f.{}", language.to_lowercase()))],
            total_lines: total,
            contributions: contributors
                .iter()
                .map(|(id, n)| ContributionRecord {
                    identity: id.to_string(),
                    lines: *n,
                    percentage: percentage(*n, total),
                })
                .collect(),
        }
    }

    #[test]
    fn same_author_across_languages_merges() {
        let buckets = vec![
            bucket("Go", &[("alice@x", 90)]),
            bucket("Markdown", &[("alice@x", 10)]),
        ];
        let global = rollup(&buckets);
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].identity, "alice@x");
        assert_eq!(global[0].lines, 100);
        assert!((global[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rollup_sums_to_grand_total_and_sorts() {
        let buckets = vec![
            bucket("Go", &[("alice@x", 60), ("bob@x", 20)]),
            bucket("Rust", &[("bob@x", 50), ("carol@x", 5)]),
            bucket("YAML", &[("carol@x", 1)]),
        ];
        let global = rollup(&buckets);

        let sum: usize = global.iter().map(|r| r.lines).sum();
        assert_eq!(sum, grand_total(&buckets));
        assert_eq!(sum, 136);

        let ids: Vec<&str> = global.iter().map(|r| r.identity.as_str()).collect();
        assert_eq!(ids, vec!["bob@x", "alice@x", "carol@x"]);
        assert!(global.windows(2).all(|w| w[0].lines >= w[1].lines));

        let pct: f64 = global.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn identities_are_not_normalised() {
        let buckets = vec![
            bucket("Go", &[("alice@x", 1)]),
            bucket("Rust", &[("Alice@x", 1)]),
        ];
        assert_eq!(rollup(&buckets).len(), 2);
    }

    #[test]
    fn empty_when_nothing_attributed() {
        let buckets = vec![bucket("Go", &[]), bucket("Rust", &[])];
        assert!(rollup(&buckets).is_empty());
        assert!(rollup(&[]).is_empty());
    }

    #[test]
    fn ties_are_ordered_by_identity() {
        let buckets = vec![
            bucket("Go", &[("zed@x", 5)]),
            bucket("Rust", &[("amy@x", 5)]),
        ];
        let ids: Vec<String> = rollup(&buckets).into_iter().map(|r| r.identity).collect();
        assert_eq!(ids, vec!["amy@x", "zed@x"]);
    }

    #[test]
    fn language_share_of_total() {
        let go = bucket("Go", &[("alice@x", 90)]);
        let md = bucket("Markdown", &[("alice@x", 10)]);
        let total = grand_total(&[go.clone(), md.clone()]);
        assert!((language_share(&go, total) - 90.0).abs() < 1e-9);
        assert!((language_share(&md, total) - 10.0).abs() < 1e-9);
        assert_eq!(language_share(&go, 0), 0.0);
    }
}
