//! Library Desk - dashboard snapshot
//!
//! Builds a library from configuration and prints its dashboard snapshot as
//! JSON on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::{config::AppConfig, LibraryStore};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting Library Desk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Loan period: {} days, seed sample data: {}",
        config.library.loan_period_days,
        config.library.seed_sample_data
    );

    let store = LibraryStore::from_settings(config.library);
    let stats = store.stats();
    tracing::info!(
        "{} copies ({} on the shelf), {} members, {} issued, {} overdue",
        stats.total_books,
        stats.available_books,
        stats.total_members,
        stats.books_issued,
        stats.overdue_books
    );

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);

    Ok(())
}
