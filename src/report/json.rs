use std::io::{self, Write};

use chrono::{DateTime, Local};
use serde::Serialize;

use super::Snapshot;
use crate::stats::{GlobalAuthorRecord, LanguageBucket, language_share};

/// Raw JSON document: every bucket and every person, nothing collapsed.
#[derive(Serialize)]
struct Document<'a> {
    name: &'a str,
    root: String,
    rev: &'a str,
    generated_at: &'a DateTime<Local>,
    total_lines: usize,
    languages: Vec<LanguageEntry<'a>>,
    people: Vec<GlobalAuthorRecord>,
}

#[derive(Serialize)]
struct LanguageEntry<'a> {
    #[serde(flatten)]
    bucket: &'a LanguageBucket,
    share: f64,
}

fn document(snapshot: &Snapshot) -> Document<'_> {
    let total_lines = snapshot.grand_total();
    Document {
        name: &snapshot.name,
        root: snapshot.root.display().to_string(),
        rev: &snapshot.rev,
        generated_at: &snapshot.generated_at,
        total_lines,
        languages: snapshot
            .buckets
            .iter()
            .map(|bucket| LanguageEntry {
                bucket,
                share: language_share(bucket, total_lines),
            })
            .collect(),
        people: snapshot.people(),
    }
}

pub fn render(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&document(snapshot))
}

pub fn print_json(snapshot: &Snapshot) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, snapshot)
}

pub fn write_json(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "{}", render(snapshot)?)
}
