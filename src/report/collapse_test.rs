use super::*;

fn records(lines: &[usize]) -> Vec<ContributionRecord> {
    let total: usize = lines.iter().sum();
    lines
        .iter()
        .enumerate()
        .map(|(i, &n)| ContributionRecord {
            identity: format!("dev{i}@x"),
            lines: n,
            percentage: n as f64 / total as f64 * 100.0,
        })
        .collect()
}

fn others(rows: &[Row]) -> Vec<(usize, f64)> {
    rows.iter()
        .filter_map(|r| match r {
            Row::Others { count, percentage } => Some((*count, *percentage)),
            Row::Entry(_) => None,
        })
        .collect()
}

const PEOPLE: CollapseRule = CollapseRule::Minor {
    lines: PEOPLE_MIN_LINES,
    percent: PEOPLE_MIN_PERCENT,
};

#[test]
fn exactly_ten_percent_is_not_minor() {
    let recs = records(&[5; 10]);
    let rows = collapse(&recs, &PEOPLE);
    assert_eq!(rows.len(), 10);
    assert!(others(&rows).is_empty());
}

#[test]
fn minor_last_entry_is_listed() {
    // nine at 5 lines, one at 4: the 4-line contributor sorts last
    let mut lines = vec![5; 9];
    lines.push(4);
    let recs = records(&lines);
    assert!(PEOPLE.is_minor(&recs[9]));

    let rows = collapse(&recs, &PEOPLE);
    assert_eq!(rows.len(), 10);
    assert!(others(&rows).is_empty());
    assert_eq!(rows[9], Row::Entry(&recs[9]));
}

#[test]
fn tail_of_minor_entries_becomes_one_row() {
    let recs = records(&[400, 300, 200, 40, 30, 20, 10]);
    let rows = collapse(&recs, &PEOPLE);

    assert_eq!(rows.len(), 4);
    let tail = others(&rows);
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].0, 4);
    // 100 - (40 + 30 + 20)
    assert!((tail[0].1 - 10.0).abs() < 1e-9);
}

#[test]
fn displayed_percentages_sum_to_hundred() {
    let recs = records(&[97, 51, 3, 3, 2, 1, 1]);
    let rows = collapse(&recs, &CollapseRule::BelowLines(15));

    let sum: f64 = rows
        .iter()
        .map(|r| match r {
            Row::Entry(rec) => rec.percentage,
            Row::Others { percentage, .. } => *percentage,
        })
        .sum();
    assert!((sum - 100.0).abs() < 1e-9);
    assert_eq!(others(&rows)[0].0, 5);
}

#[test]
fn both_bounds_must_hold_for_people() {
    // 30 lines but 30%: few lines, not a small share
    let recs = records(&[40, 30, 30]);
    assert!(others(&collapse(&recs, &PEOPLE)).is_empty());

    // 60 lines but 5%: a small share, not few lines
    let recs = records(&[1020, 60, 60, 60]);
    assert!(others(&collapse(&recs, &PEOPLE)).is_empty());
}

#[test]
fn lines_rule_ignores_percentage() {
    let recs = records(&[10, 5, 5]);
    let rows = collapse(&recs, &CollapseRule::BelowLines(15));
    assert_eq!(rows.len(), 1);
    assert_eq!(others(&rows), vec![(3, 100.0)]);
}

#[test]
fn cut_at_second_to_last_folds_two() {
    let recs = records(&[100, 3, 2]);
    let rows = collapse(&recs, &CollapseRule::BelowLines(15));
    assert_eq!(rows.len(), 2);
    assert_eq!(others(&rows)[0].0, 2);
}

#[test]
fn single_minor_entry_is_listed() {
    let recs = records(&[1]);
    let rows = collapse(&recs, &CollapseRule::BelowLines(15));
    assert_eq!(rows, vec![Row::Entry(&recs[0])]);
}

#[test]
fn empty_input() {
    assert!(collapse(&[], &PEOPLE).is_empty());
}

#[test]
fn nothing_minor_lists_everyone() {
    let recs = records(&[300, 200, 100]);
    let rows = collapse(&recs, &CollapseRule::BelowLines(15));
    assert_eq!(rows.len(), 3);
    assert!(others(&rows).is_empty());
}
