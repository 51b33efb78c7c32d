//! The channel export pipeline.
//!
//! [`Exporter`] walks a fixed list of channel handles strictly one after
//! another, pulls each channel's most recent messages through a
//! [`ChannelSource`], downloads photo attachments, and appends one CSV row
//! per message. A single writer stays open for the whole run.
//!
//! # Failure semantics
//!
//! A channel that fails to resolve or iterate is logged and skipped; the run
//! continues with the next handle and the summary reports the skip.
//! Filesystem errors are fatal and abort the run immediately. There is no
//! retry, no rollback: rows and media files already written stay on disk.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::record::{ChannelRecord, EXPORT_HEADERS};
use crate::telegram::{Channel, ChannelSource};

/// Derives the local filename for a photo attachment.
///
/// Deterministic per (handle, message id) so re-runs overwrite instead of
/// accumulating copies. The handle is used verbatim, including any leading
/// `@`, matching the `Channel Username` column.
///
/// ```
/// use channelpack::export::media_filename;
///
/// assert_eq!(media_filename("@ZemenExpress", 1042), "@ZemenExpress_1042.jpg");
/// ```
pub fn media_filename(handle: &str, message_id: i64) -> String {
    format!("{handle}_{message_id}.jpg")
}

/// Counters reported at the end of an export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Channels fully scraped.
    pub channels_scraped: usize,
    /// Channels skipped after an API failure.
    pub channels_skipped: usize,
    /// Rows appended to the output CSV.
    pub rows_written: usize,
    /// Photos downloaded into the media directory.
    pub photos_downloaded: usize,
}

/// Per-channel counters, folded into the run summary.
#[derive(Debug, Clone, Copy, Default)]
struct ChannelStats {
    rows: usize,
    photos: usize,
}

/// Exports messages from public channels to a CSV file.
///
/// Generic over the [`ChannelSource`] so the pipeline can be exercised
/// without a network; production runs use
/// [`TelegramSource`](crate::telegram::TelegramSource).
pub struct Exporter<S: ChannelSource> {
    source: S,
    config: ScrapeConfig,
}

impl<S: ChannelSource> Exporter<S> {
    /// Creates an exporter over the given source and configuration.
    pub fn new(source: S, config: ScrapeConfig) -> Self {
        Self { source, config }
    }

    /// Returns the configuration this exporter runs with.
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Runs the export: one pass over every configured channel.
    ///
    /// Overwrites the output file; there is no dedup across runs.
    pub async fn run(&self) -> Result<ExportSummary> {
        if let Some(parent) = self.config.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if self.config.download_media {
            fs::create_dir_all(&self.config.media_dir)?;
        }

        // Write the header up front so a run where every channel is skipped
        // still leaves a valid, header-only file behind.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.config.output_path)?;
        writer.write_record(EXPORT_HEADERS)?;
        let mut summary = ExportSummary::default();

        for handle in &self.config.channels {
            match self.scrape_channel(handle, &mut writer).await {
                Ok(stats) => {
                    info!(channel = %handle, rows = stats.rows, "scraped channel");
                    summary.channels_scraped += 1;
                    summary.rows_written += stats.rows;
                    summary.photos_downloaded += stats.photos;
                }
                // API failures are recoverable at channel granularity; anything
                // else (filesystem, CSV) aborts the run.
                Err(error) if error.is_api() => {
                    warn!(channel = %handle, %error, "skipping channel");
                    summary.channels_skipped += 1;
                }
                Err(error) => return Err(error),
            }
        }

        writer.flush()?;
        Ok(summary)
    }

    /// Scrapes one channel into the shared writer.
    async fn scrape_channel(
        &self,
        handle: &str,
        writer: &mut csv::Writer<File>,
    ) -> Result<ChannelStats> {
        let channel = self.source.resolve(handle).await?;
        let posts = self
            .source
            .posts(&channel, self.config.message_limit)
            .await?;

        let mut stats = ChannelStats::default();
        for post in posts {
            let media_path = match &post.photo {
                Some(photo) if self.config.download_media => {
                    let dest = self.media_dest(&channel, post.id);
                    self.source.download_photo(photo, &dest).await?;
                    stats.photos += 1;
                    Some(dest.display().to_string())
                }
                _ => None,
            };

            let mut record =
                ChannelRecord::new(&channel.title, &channel.handle, post.id, post.date);
            record.message = post.text;
            record.media_path = media_path;
            record.view_count = post.views;

            writer.serialize(&record)?;
            stats.rows += 1;
        }

        Ok(stats)
    }

    fn media_dest(&self, channel: &Channel<S::Chat>, message_id: i64) -> PathBuf {
        self.config
            .media_dir
            .join(media_filename(&channel.handle, message_id))
    }
}
