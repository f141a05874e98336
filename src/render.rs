// src/render.rs
use std::io::{self, Write};

use crate::feed::Entry;

pub const NO_ENTRIES: &str = "No entries found in RSS feed.";
pub const NO_TITLE: &str = "No title available";
pub const NO_LINK: &str = "No link available";
pub const NO_SUMMARY: &str = "No summary available";

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

pub fn resolve_title(entry: &Entry) -> &str {
    present(&entry.title).unwrap_or(NO_TITLE)
}

/// `link`, then `id`, then the first of `links`.
pub fn resolve_link(entry: &Entry) -> &str {
    present(&entry.link)
        .or_else(|| present(&entry.id))
        .or_else(|| {
            entry
                .links
                .first()
                .map(|l| l.href.as_str())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or(NO_LINK)
}

pub fn resolve_summary(entry: &Entry) -> &str {
    present(&entry.summary)
        .or_else(|| present(&entry.description))
        .unwrap_or(NO_SUMMARY)
}

/// How many entries get printed. Negative limits mean "no limit"; zero is zero.
pub fn effective_count(total: usize, limit: Option<i64>) -> usize {
    match limit {
        Some(n) if n >= 0 => total.min(usize::try_from(n).unwrap_or(usize::MAX)),
        _ => total,
    }
}

/// Write the first `limit` entries, in document order, one block each.
pub fn render<W: Write>(out: &mut W, entries: &[Entry], limit: Option<i64>) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{NO_ENTRIES}")?;
        return Ok(());
    }

    let count = effective_count(entries.len(), limit);
    for (idx, entry) in entries.iter().take(count).enumerate() {
        writeln!(out, "{}. {}", idx + 1, resolve_title(entry))?;
        writeln!(out, "   Link: {}", resolve_link(entry))?;
        writeln!(out, "   Summary: {}", resolve_summary(entry))?;
        writeln!(out)?;
    }
    out.flush()
}

/// Convenience for tests and callers that want the text.
pub fn render_to_string(entries: &[Entry], limit: Option<i64>) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = render(&mut buf, entries, limit);
    String::from_utf8_lossy(&buf).into_owned()
}
