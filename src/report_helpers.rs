use unicode_width::UnicodeWidthStr;

/// Compute the max display width of `cells`, with a minimum of `min`.
pub fn max_width<'a>(cells: impl Iterator<Item = &'a str>, min: usize) -> usize {
    cells.map(|c| c.width()).max().unwrap_or(min).max(min)
}

/// Pad `s` with spaces to `width` terminal columns.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
