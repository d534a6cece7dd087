//! Agenda site for the Rwanda Anesthesia and Critical Care Conference.
//!
//! Serves a single page: the hand-authored two-day schedule table plus the
//! detailed programme decoded from the conference spreadsheet, with
//! downloadable PDF and spreadsheet copies.

mod agenda;
mod cli;
mod config;
mod export;
mod server;
mod workbook;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "raccc_agenda=info"
    } else {
        "raccc_agenda=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
