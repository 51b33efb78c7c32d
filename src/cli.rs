//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - top-level argument structure
//! - [`Command`] - the `scrape` and `clean` subcommands
//! - [`ScrapeArgs`] / [`CleanArgs`] - per-subcommand options
//!
//! Every option has a working-directory-relative default, so
//! `channelpack scrape` followed by `channelpack clean` reproduces the full
//! pipeline with no flags at all.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{CleanConfig, ScrapeConfig};

/// Scrape public Telegram channels and prepare Amharic text for NLP
/// ingestion.
#[derive(Parser, Debug, Clone)]
#[command(name = "channelpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    channelpack scrape
    channelpack scrape -c @ZemenExpress -c @Leyueqa --limit 200
    channelpack scrape --skip-media -o export.csv
    channelpack clean
    channelpack clean -i export.csv -o cleaned.csv --stopwords")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// The two pipeline stages, run independently and in order.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export messages and photos from public channels to a CSV file
    Scrape(ScrapeArgs),

    /// Clean and normalize the Message column of an exported CSV
    Clean(CleanArgs),
}

/// Options for the `scrape` subcommand.
///
/// Credentials are not flags: `TELEGRAM_APP_ID` and `TELEGRAM_API_HASH` come
/// from the environment (a `.env` file is honored).
#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Channel handle to scrape; repeat for several. Defaults to the
    /// built-in Amharic e-commerce list
    #[arg(short = 'c', long = "channel", value_name = "HANDLE")]
    pub channels: Vec<String>,

    /// Path of the output CSV
    #[arg(short, long, default_value = "data/raw/telegram_data.csv")]
    pub output: PathBuf,

    /// Directory for downloaded photos
    #[arg(long, value_name = "DIR", default_value = "data/raw/photos")]
    pub media_dir: PathBuf,

    /// Session file of an already-authorized Telegram account
    #[arg(long, value_name = "FILE", default_value = "scraping.session")]
    pub session: PathBuf,

    /// Most recent messages to fetch per channel
    #[arg(short, long, default_value_t = 1000)]
    pub limit: usize,

    /// Skip photo downloads, export text only
    #[arg(long)]
    pub skip_media: bool,
}

/// Options for the `clean` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Path of the raw export CSV
    #[arg(short, long, default_value = "data/raw/telegram_data.csv")]
    pub input: PathBuf,

    /// Path of the cleaned output CSV
    #[arg(
        short,
        long,
        default_value = "data/processed/telegram_data_cleaned.csv"
    )]
    pub output: PathBuf,

    /// Remove Amharic stopwords and emit the Tokens / Filtered Tokens columns
    #[arg(long)]
    pub stopwords: bool,
}

impl From<ScrapeArgs> for ScrapeConfig {
    fn from(args: ScrapeArgs) -> Self {
        let mut config = ScrapeConfig::new()
            .with_output_path(args.output)
            .with_media_dir(args.media_dir)
            .with_session_file(args.session)
            .with_message_limit(args.limit)
            .with_download_media(!args.skip_media);
        if !args.channels.is_empty() {
            config = config.with_channels(args.channels);
        }
        config
    }
}

impl From<&CleanArgs> for CleanConfig {
    fn from(args: &CleanArgs) -> Self {
        CleanConfig::new().with_remove_stopwords(args.stopwords)
    }
}
