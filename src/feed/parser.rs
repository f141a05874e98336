// src/feed/parser.rs
//
// Grammar work (RSS 0.9x/1.0/2.0, Atom, JSON Feed) is done by feed-rs; this
// module only maps its model onto our optional-field `Entry`.

use std::time::Instant;

use feed_rs::model::{self, Link as FeedLink, Text};
use feed_rs::parser::{Builder, ParseFeedError};

use super::{Entry, Feed, FeedFormat, Link};
use crate::error::FeedError;

/// Parse raw response bytes into a [`Feed`].
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, FeedError> {
    let t0 = Instant::now();

    let raw = String::from_utf8_lossy(bytes);
    let xml = scrub_html_entities_for_xml(&raw);

    // feed-rs invents ids for entries that have none; keep absence visible
    let parser = Builder::new()
        .id_generator(|_links: &[FeedLink], _title: &Option<Text>, _uri: Option<&str>| {
            String::new()
        })
        .build();
    let parsed = parser.parse(xml.as_bytes()).map_err(parse_error)?;

    let feed = Feed {
        format: format_of(&parsed.feed_type),
        title: parsed.title.map(|t| t.content).and_then(non_empty),
        entries: parsed.entries.into_iter().map(map_entry).collect(),
    };

    tracing::debug!(
        format = feed.format.as_str(),
        entries = feed.entries.len(),
        title = feed.title.as_deref().unwrap_or_default(),
        parse_ms = t0.elapsed().as_secs_f64() * 1_000.0,
        "parsed feed"
    );
    Ok(feed)
}

fn parse_error(e: ParseFeedError) -> FeedError {
    FeedError::Parse(e.to_string())
}

fn format_of(t: &model::FeedType) -> FeedFormat {
    match t {
        model::FeedType::Atom => FeedFormat::Atom,
        model::FeedType::RSS1 => FeedFormat::Rdf,
        model::FeedType::JSON => FeedFormat::Json,
        model::FeedType::RSS0 | model::FeedType::RSS2 => FeedFormat::Rss,
    }
}

fn non_empty(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else if t.len() == s.len() {
        Some(s)
    } else {
        Some(t.to_string())
    }
}

fn map_entry(e: model::Entry) -> Entry {
    // Atom: rel-less or rel="alternate" is the entry's own page; RSS <link> has no rel
    let link = e
        .links
        .iter()
        .find(|l| l.rel.as_deref().map_or(true, |r| r == "alternate"))
        .map(|l| l.href.clone())
        .and_then(non_empty);

    let links = e
        .links
        .into_iter()
        .filter_map(|l| non_empty(l.href))
        .map(|href| Link { href })
        .collect();

    Entry {
        title: e.title.map(|t| t.content).and_then(non_empty),
        link,
        id: non_empty(e.id),
        links,
        summary: e.summary.map(|t| t.content).and_then(non_empty),
        description: e.content.and_then(|c| c.body).and_then(non_empty),
    }
}

/// HTML named entities show up in feeds but are undefined in XML.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", "\u{00A0}")
        .replace("&ndash;", "\u{2013}")
        .replace("&mdash;", "\u{2014}")
        .replace("&hellip;", "\u{2026}")
        .replace("&ldquo;", "\u{201C}")
        .replace("&rdquo;", "\u{201D}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&rsquo;", "\u{2019}")
        .replace("&copy;", "\u{00A9}")
}
