//! Single-page HTML report: language summary, people, and one section per
//! language with its file list and contributor table.

use std::fmt::Write;

use super::collapse::{CollapseRule, Row, collapse};
use super::{Snapshot, display_name, format_percent};
use crate::stats::{ContributionRecord, LanguageBucket, language_share};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { padding: 0.2em 0.8em; border-bottom: 1px solid #ddd; }
td:nth-child(n+2) { text-align: right; }
caption { text-align: left; font-weight: bold; }
footer { color: #888; font-size: 0.8em; }";

/// Escape text for use in element content and quoted attributes.
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_page(&mut out, snapshot);
    out
}

fn write_page(out: &mut String, snapshot: &Snapshot) -> std::fmt::Result {
    let title = escape_html(&format!("Contributions to {}", snapshot.name));

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<style>\n{STYLE}\n</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{title}</h1>")?;

    writeln!(out, "<h2>Languages</h2>")?;
    write_languages(out, snapshot)?;

    writeln!(out, "<h2>People</h2>")?;
    write_contributors(out, &snapshot.people(), &snapshot.rules.people, "Person")?;

    writeln!(out, "<h2>Contributions by language</h2>")?;
    for bucket in &snapshot.buckets {
        write_bucket(out, bucket, &snapshot.rules.language)?;
    }

    writeln!(
        out,
        "<footer>{} at {}, generated {}</footer>",
        escape_html(&snapshot.root.display().to_string()),
        escape_html(&snapshot.rev),
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S %Z")
    )?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_languages(out: &mut String, snapshot: &Snapshot) -> std::fmt::Result {
    let total = snapshot.grand_total();
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<thead><tr><th>Language</th><th>Files</th><th>Lines</th><th>Percentage</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for bucket in &snapshot.buckets {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}%</td></tr>",
            escape_html(&bucket.language),
            bucket.files.len(),
            bucket.total_lines,
            format_percent(language_share(bucket, total))
        )?;
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")
}

fn write_bucket(out: &mut String, bucket: &LanguageBucket, rule: &CollapseRule) -> std::fmt::Result {
    writeln!(out, "<h3>{}</h3>", escape_html(&bucket.language))?;
    writeln!(out, "<details>")?;
    writeln!(out, "<summary>Files</summary>")?;
    writeln!(out, "<ul>")?;
    for file in &bucket.files {
        writeln!(out, "<li>{}</li>", escape_html(&file.display().to_string()))?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, "</details>")?;
    write_contributors(out, &bucket.contributions, rule, "E-mail")
}

fn write_contributors(
    out: &mut String,
    records: &[ContributionRecord],
    rule: &CollapseRule,
    heading: &str,
) -> std::fmt::Result {
    writeln!(out, "<table>")?;
    writeln!(out, "<caption>Contributors</caption>")?;
    writeln!(
        out,
        "<thead><tr><th>{heading}</th><th>Lines</th><th>Percent</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for row in collapse(records, rule) {
        match row {
            Row::Entry(r) => writeln!(
                out,
                "<tr><td><span title=\"{}\">{}</span></td><td>{}</td><td>{}%</td></tr>",
                escape_html(&r.identity),
                escape_html(display_name(&r.identity)),
                r.lines,
                format_percent(r.percentage)
            )?,
            Row::Others { count, percentage } => writeln!(
                out,
                "<tr><td>{count} others</td><td>-</td><td>{}%</td></tr>",
                format_percent(percentage)
            )?,
        }
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")
}
