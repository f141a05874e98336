// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod render;

pub use crate::config::{AppConfig, FetchConfig};
pub use crate::error::FeedError;
pub use crate::feed::{Entry, Feed, Link};
pub use crate::fetch::FeedFetcher;

use std::io::Write;

/// Fetch `url` and write its entries to `out`.
///
/// Nothing is written unless both the fetch and the parse succeed.
pub async fn run<W: Write>(
    fetcher: &FeedFetcher,
    url: &str,
    limit: Option<i64>,
    out: &mut W,
) -> anyhow::Result<()> {
    let feed = fetcher.fetch(url).await?;
    if let Some(n) = limit.filter(|n| *n < 0) {
        tracing::warn!(limit = n, "negative limit ignored, showing all entries");
    }
    tracing::debug!(
        entries = feed.len(),
        title = feed.title.as_deref().unwrap_or_default(),
        "rendering feed"
    );
    render::render(out, &feed.entries, limit)?;
    Ok(())
}
