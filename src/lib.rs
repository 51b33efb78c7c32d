//! # Channelpack
//!
//! A Rust library and CLI for scraping public Telegram channels and
//! preparing Amharic message text for NLP ingestion.
//!
//! ## Overview
//!
//! Channelpack is two small pipelines sharing a CSV schema:
//!
//! - **Export** — resolve each configured channel handle, pull its most
//!   recent messages (newest first, up to a fixed count), download photo
//!   attachments, and append one row per message to a flat CSV file.
//! - **Clean** — load an export, run a deterministic Amharic text-cleaning
//!   pipeline over the `Message` column (URL and noise removal, whitespace
//!   normalization, tokenization, character-variant folding, optional
//!   stopword removal), and write a new CSV with every other column
//!   untouched.
//!
//! The stages run independently, in order, with no shared runtime state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use channelpack::clean::clean_file;
//! use channelpack::config::CleanConfig;
//!
//! fn main() -> channelpack::Result<()> {
//!     let config = CleanConfig::new().with_remove_stopwords(true);
//!     let summary = clean_file(
//!         "data/raw/telegram_data.csv".as_ref(),
//!         "data/processed/telegram_data_cleaned.csv".as_ref(),
//!         &config,
//!     )?;
//!     println!("cleaned {} rows", summary.rows);
//!     Ok(())
//! }
//! ```
//!
//! Exporting needs an authorized Telegram session and API credentials in the
//! environment:
//!
//! ```rust,no_run
//! use channelpack::config::{ApiCredentials, ScrapeConfig};
//! use channelpack::export::Exporter;
//! use channelpack::telegram::TelegramSource;
//!
//! # async fn run() -> channelpack::Result<()> {
//! let credentials = ApiCredentials::from_env()?;
//! let config = ScrapeConfig::new().with_message_limit(500);
//! let source = TelegramSource::connect(&credentials, &config.session_file).await?;
//! let summary = Exporter::new(source, config).run().await?;
//! println!("{} rows from {} channels", summary.rows_written, summary.channels_scraped);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] — the channel export pipeline ([`Exporter`](export::Exporter))
//! - [`clean`] — the text-cleaning pipeline ([`Cleaner`](clean::Cleaner),
//!   [`clean_file`](clean::clean_file))
//! - [`telegram`] — the client seam ([`ChannelSource`](telegram::ChannelSource))
//!   and its grammers-backed implementation
//! - [`record`] — CSV row types ([`ChannelRecord`], [`RawRecord`](record::RawRecord))
//! - [`config`] — explicit configuration ([`ScrapeConfig`](config::ScrapeConfig),
//!   [`CleanConfig`](config::CleanConfig), [`ApiCredentials`](config::ApiCredentials))
//! - [`cli`] — clap argument types for the binary
//! - [`error`] — unified error type ([`ChannelpackError`], [`Result`])

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod telegram;

// Re-export the main types at the crate root for convenience
pub use error::{ChannelpackError, Result};
pub use record::ChannelRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use channelpack::prelude::*;
/// ```
pub mod prelude {
    // Core row type
    pub use crate::ChannelRecord;

    // Error types
    pub use crate::error::{ChannelpackError, Result};

    // Configuration
    pub use crate::config::{ApiCredentials, CleanConfig, ScrapeConfig};

    // Pipelines
    pub use crate::clean::{CleanSummary, Cleaner, clean_file};
    pub use crate::export::{ExportSummary, Exporter};

    // Client seam
    pub use crate::telegram::{Channel, ChannelSource, Post, TelegramSource};
}
