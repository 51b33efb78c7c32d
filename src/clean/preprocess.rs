//! Whole-file cleaning job: export CSV in, cleaned CSV out.
//!
//! Loads the entire input into memory, transforms row-wise, writes the whole
//! output at once. Single pass, no suspension points. Row count and row
//! identity (by message id) are preserved 1:1; metadata columns pass through
//! byte-for-byte.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::clean::{CleanedMessage, Cleaner};
use crate::config::CleanConfig;
use crate::error::{ChannelpackError, Result};
use crate::record::{EXPORT_HEADERS, RawRecord};

/// The column the pipeline rewrites.
const TEXT_COLUMN: &str = "Message";

/// Counters reported at the end of a cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Rows read and written (always equal).
    pub rows: usize,
}

/// Cleans the `Message` column of `input` and writes the result to `output`.
///
/// The output keeps the input's seven columns; with stopword removal enabled
/// two extra columns, `Tokens` and `Filtered Tokens`, carry the space-joined
/// token sequences. The output's parent directory is created if absent.
///
/// # Errors
///
/// Fails fast when the input has no `Message` column. A malformed row aborts
/// the whole run; rows are not individually skippable.
pub fn clean_file(input: &Path, output: &Path, config: &CleanConfig) -> Result<CleanSummary> {
    let mut reader = csv::Reader::from_path(input)?;

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|name| name == TEXT_COLUMN) {
        return Err(ChannelpackError::missing_column(TEXT_COLUMN, input));
    }

    let rows: Vec<RawRecord> = reader
        .deserialize()
        .collect::<std::result::Result<_, csv::Error>>()?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let cleaner = Cleaner::new(config.clone());
    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(build_header(config))?;

    for row in &rows {
        let cleaned = cleaner.process(row.message.as_deref());
        writer.write_record(build_record(row, &cleaned, config))?;
    }
    writer.flush()?;

    info!(rows = rows.len(), output = %output.display(), "wrote cleaned file");
    Ok(CleanSummary { rows: rows.len() })
}

/// Builds the output header for the given configuration.
fn build_header(config: &CleanConfig) -> Vec<&'static str> {
    let mut header: Vec<&'static str> = EXPORT_HEADERS.to_vec();
    if config.remove_stopwords {
        header.push("Tokens");
        header.push("Filtered Tokens");
    }
    header
}

/// Builds one output row: metadata verbatim, text column replaced.
fn build_record(row: &RawRecord, cleaned: &CleanedMessage, config: &CleanConfig) -> Vec<String> {
    let mut record = vec![
        row.channel_title.clone(),
        row.channel_username.clone(),
        row.id.clone(),
        cleaned.text.clone(),
        row.date.clone(),
        row.media_path.clone(),
        row.view_count.clone(),
    ];
    if config.remove_stopwords {
        record.push(cleaned.tokens.join(" "));
        record.push(cleaned.filtered_tokens.join(" "));
    }
    record
}
