// src/feed/mod.rs
pub mod parser;

pub use parser::parse_feed;

/// One `<link href="...">` of an Atom entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

/// A single item/entry as it appeared in the document.
///
/// Every field is optional: feeds in the wild are not schema-guaranteed, and
/// display code decides what to show when something is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub id: Option<String>,
    pub links: Vec<Link>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// Which grammar the parser detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Rss,
    Rdf,
    Atom,
    Json,
}

impl FeedFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedFormat::Rss => "rss",
            FeedFormat::Rdf => "rdf",
            FeedFormat::Atom => "atom",
            FeedFormat::Json => "json",
        }
    }
}

/// Parsed document: entries in document order plus the little metadata we log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub format: FeedFormat,
    pub title: Option<String>,
    pub entries: Vec<Entry>,
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
