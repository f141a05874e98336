// tests/common/mod.rs
//
// In-process feed server on 127.0.0.1:0 for HTTP-level tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};

pub const RSS2_XML: &str = include_str!("../fixtures/rss2.xml");
pub const ATOM_XML: &str = include_str!("../fixtures/atom.xml");
pub const EMPTY_XML: &str = include_str!("../fixtures/empty.xml");
pub const MALFORMED_XML: &str = include_str!("../fixtures/malformed.xml");

/// How long `/slow.xml` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(15);

fn feed_router() -> Router {
    Router::new()
        .route(
            "/rss.xml",
            get(|| async { ([(header::CONTENT_TYPE, "application/rss+xml")], RSS2_XML) }),
        )
        .route(
            "/atom.xml",
            get(|| async { ([(header::CONTENT_TYPE, "application/atom+xml")], ATOM_XML) }),
        )
        .route("/empty.xml", get(|| async { EMPTY_XML }))
        .route("/broken.xml", get(|| async { MALFORMED_XML }))
        .route(
            "/page.html",
            get(|| async { "<!DOCTYPE html><html><body>not a feed</body></html>" }),
        )
        .route(
            "/error.xml",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/ua.xml", get(echo_user_agent))
        .route(
            "/slow.xml",
            get(|| async {
                tokio::time::sleep(SLOW_DELAY).await;
                RSS2_XML
            }),
        )
}

/// One-item feed whose title is the request's User-Agent.
async fn echo_user_agent(headers: HeaderMap) -> String {
    let ua = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none");
    format!(
        r#"<rss version="2.0"><channel><title>ua</title><item><title>{ua}</title></item></channel></rss>"#
    )
}

/// Spawn the server on the current runtime and return its address.
/// Unknown paths answer 404.
pub async fn spawn_feed_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, feed_router())
            .await
            .expect("serve feeds");
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}
