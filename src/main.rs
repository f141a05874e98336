//! rss-reader — Binary Entrypoint
//! Fetches one RSS/Atom feed and prints its entries to stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rss_reader::{AppConfig, FeedFetcher};

/// Fetch and display RSS/Atom feed entries from a given URL.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// The URL of the RSS or Atom feed to fetch.
    url: String,

    /// Maximum number of entries to display (default: all).
    #[arg(short = 'n', long = "number", allow_negative_numbers = true)]
    number: Option<i64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr; stdout carries only the rendered entries.
fn init_tracing(config: &AppConfig, verbose: u8) {
    let fallback = match verbose {
        0 => config.log_filter.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = match AppConfig::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config, args.verbose);

    let fetcher = match FeedFetcher::new(config.fetch.clone()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match rss_reader::run(&fetcher, &args.url, args.number, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
