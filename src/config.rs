//! Configuration types for scraping and cleaning.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies. Everything the scripts used to
//! hard-code (client globals, absolute paths, channel lists) is carried here
//! explicitly instead.
//!
//! # Example
//!
//! ```rust
//! use channelpack::config::ScrapeConfig;
//!
//! let config = ScrapeConfig::new()
//!     .with_channels(vec!["@ZemenExpress".into(), "@Leyueqa".into()])
//!     .with_message_limit(500)
//!     .with_download_media(false);
//!
//! assert_eq!(config.message_limit, 500);
//! ```

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ChannelpackError, Result};

/// Environment variable holding the Telegram application id.
pub const ENV_APP_ID: &str = "TELEGRAM_APP_ID";

/// Environment variable holding the Telegram API hash.
pub const ENV_API_HASH: &str = "TELEGRAM_API_HASH";

/// The Amharic e-commerce channels scraped by default.
pub const DEFAULT_CHANNELS: [&str; 10] = [
    "@ZemenExpress",
    "@nevacomputer",
    "@meneshayeofficial",
    "@ethio_brand_collection",
    "@Leyueqa",
    "@sinayelj",
    "@Shewabrand",
    "@helloomarketethiopia",
    "@modernshoppingcenter",
    "@qnashcom",
];

/// Telegram API application credentials.
///
/// Obtained from <https://my.telegram.org> and supplied through the process
/// environment (a `.env` file is honored by the binary). The credentials are
/// passed explicitly into [`TelegramSource::connect`]; there is no ambient
/// global client.
///
/// [`TelegramSource::connect`]: crate::telegram::TelegramSource::connect
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// Application id (`TELEGRAM_APP_ID`).
    pub api_id: i32,
    /// Application secret (`TELEGRAM_API_HASH`).
    pub api_hash: String,
}

impl ApiCredentials {
    /// Reads credentials from `TELEGRAM_APP_ID` and `TELEGRAM_API_HASH`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when either variable is unset, empty, or
    /// when the app id is not an integer.
    pub fn from_env() -> Result<Self> {
        let raw_id = read_env(ENV_APP_ID)?;
        let api_id = raw_id.parse::<i32>().map_err(|_| {
            ChannelpackError::invalid_env(ENV_APP_ID, raw_id.clone(), "expected an integer")
        })?;
        let api_hash = read_env(ENV_API_HASH)?;
        Ok(Self { api_id, api_hash })
    }
}

fn read_env(var: &'static str) -> Result<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ChannelpackError::missing_env(var)),
    }
}

/// Configuration for one export run.
///
/// Paths are working-directory-relative by default and fully overridable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Channel handles to scrape, in order.
    pub channels: Vec<String>,

    /// Most-recent-message cutoff per channel (default: 1000).
    pub message_limit: usize,

    /// Destination CSV file (default: `data/raw/telegram_data.csv`).
    pub output_path: PathBuf,

    /// Directory for downloaded photos (default: `data/raw/photos`).
    pub media_dir: PathBuf,

    /// Session file for the MTProto client (default: `scraping.session`).
    pub session_file: PathBuf,

    /// Whether photo attachments are downloaded (default: true).
    pub download_media: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS.iter().map(|s| (*s).to_string()).collect(),
            message_limit: 1000,
            output_path: PathBuf::from("data/raw/telegram_data.csv"),
            media_dir: PathBuf::from("data/raw/photos"),
            session_file: PathBuf::from("scraping.session"),
            download_media: true,
        }
    }
}

impl ScrapeConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the channel list.
    #[must_use]
    pub fn with_channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the per-channel message cutoff.
    #[must_use]
    pub fn with_message_limit(mut self, limit: usize) -> Self {
        self.message_limit = limit;
        self
    }

    /// Sets the destination CSV path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the photo download directory.
    #[must_use]
    pub fn with_media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.media_dir = dir.into();
        self
    }

    /// Sets the session file path.
    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    /// Enables or disables photo downloads.
    #[must_use]
    pub fn with_download_media(mut self, enabled: bool) -> Self {
        self.download_media = enabled;
        self
    }
}

/// Configuration for the text-cleaning pipeline.
///
/// # Example
///
/// ```rust
/// use channelpack::config::CleanConfig;
///
/// let config = CleanConfig::new().with_remove_stopwords(true);
/// assert!(config.remove_stopwords);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Drop tokens from the fixed Amharic stopword set and emit the
    /// `Tokens` / `Filtered Tokens` columns (default: false).
    pub remove_stopwords: bool,
}

impl CleanConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables stopword removal.
    #[must_use]
    pub fn with_remove_stopwords(mut self, enabled: bool) -> Self {
        self.remove_stopwords = enabled;
        self
    }
}
