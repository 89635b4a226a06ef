use std::io::{self, Write};

use super::collapse::{CollapseRule, Row, collapse};
use super::{Snapshot, display_name, format_percent};
use crate::report_helpers::{max_width, pad, separator};
use crate::stats::{ContributionRecord, language_share};

pub fn print_report(snapshot: &Snapshot) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, snapshot)
}

pub fn write_report(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(
        out,
        "Contributions to {} at {} ({})",
        snapshot.name,
        snapshot.rev,
        snapshot.generated_at.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out)?;

    if snapshot.buckets.is_empty() {
        writeln!(out, "No recognized source files found.")?;
        return Ok(());
    }

    write_languages(out, snapshot)?;

    writeln!(out)?;
    writeln!(out, "People")?;
    write_contributors(out, &snapshot.people(), &snapshot.rules.people)?;

    for bucket in &snapshot.buckets {
        writeln!(out)?;
        let noun = if bucket.files.len() == 1 { "file" } else { "files" };
        writeln!(out, "{} ({} {noun})", bucket.language, bucket.files.len())?;
        write_contributors(out, &bucket.contributions, &snapshot.rules.language)?;
    }
    Ok(())
}

fn write_languages(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    let total = snapshot.grand_total();
    let lang_w = max_width(snapshot.buckets.iter().map(|b| b.language.as_str()), 8);
    let separator = separator(lang_w + 30);

    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " {} {:>8} {:>10} {:>9}",
        pad("Language", lang_w),
        "Files",
        "Lines",
        "Share"
    )?;
    writeln!(out, "{separator}")?;
    for bucket in &snapshot.buckets {
        writeln!(
            out,
            " {} {:>8} {:>10} {:>8}%",
            pad(&bucket.language, lang_w),
            bucket.files.len(),
            bucket.total_lines,
            format_percent(language_share(bucket, total))
        )?;
    }
    writeln!(out, "{separator}")?;
    let files: usize = snapshot.buckets.iter().map(|b| b.files.len()).sum();
    writeln!(out, " {} {:>8} {:>10}", pad("Total", lang_w), files, total)?;
    writeln!(out, "{separator}")
}

fn write_contributors(
    out: &mut impl Write,
    records: &[ContributionRecord],
    rule: &CollapseRule,
) -> io::Result<()> {
    let rows = collapse(records, rule);
    let labels: Vec<String> = rows
        .iter()
        .map(|row| match row {
            Row::Entry(r) => display_name(&r.identity).to_string(),
            Row::Others { count, .. } => format!("{count} others"),
        })
        .collect();
    let name_w = max_width(labels.iter().map(String::as_str), 6);
    let separator = separator(name_w + 21);

    writeln!(out, "{separator}")?;
    writeln!(out, " {} {:>10} {:>8}", pad("Person", name_w), "Lines", "%")?;
    writeln!(out, "{separator}")?;
    if rows.is_empty() {
        writeln!(out, " (no attributed lines)")?;
    }
    for (row, label) in rows.iter().zip(&labels) {
        let (lines, percentage) = match row {
            Row::Entry(r) => (r.lines.to_string(), r.percentage),
            Row::Others { percentage, .. } => ("-".to_string(), *percentage),
        };
        writeln!(
            out,
            " {} {:>10} {:>7}%",
            pad(label, name_w),
            lines,
            format_percent(percentage)
        )?;
    }
    writeln!(out, "{separator}")
}
