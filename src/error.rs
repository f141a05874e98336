// src/error.rs
use thiserror::Error;

/// Failure of a single fetch-and-parse run.
///
/// Both variants abort before anything is rendered; the `Display` text is what
/// the binary prints to stderr.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Network failure, timeout, non-2xx status or unreadable body.
    #[error("Error fetching RSS feed: {0}")]
    Fetch(String),

    /// The body is not a well-formed RSS/Atom document.
    #[error("Error parsing RSS feed: {0}")]
    Parse(String),
}

impl FeedError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, FeedError::Fetch(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FeedError::Parse(_))
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Fetch(e.to_string())
    }
}
