//! Tabular record types for the export and cleaning pipelines.
//!
//! This module provides [`ChannelRecord`], the typed row the exporter writes,
//! and [`RawRecord`], the string-passthrough row the cleaner reads back. Both
//! map onto the same fixed CSV schema:
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `Channel Title` | string | Display title of the channel |
//! | `Channel Username` | string | Handle as configured (e.g. `@ZemenExpress`) |
//! | `ID` | integer | Message id, unique within a channel |
//! | `Message` | string, nullable | Raw message text |
//! | `Date` | datetime | When the message was posted (RFC 3339) |
//! | `Media Path` | string, nullable | Local path of the downloaded photo |
//! | `View Count` | integer, nullable | View counter, when the API supplies one |
//!
//! The cleaner deliberately reads everything except `Message` as opaque
//! strings so metadata columns survive byte-for-byte, whatever tool produced
//! the export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column names of the export file, in writing order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Channel Title",
    "Channel Username",
    "ID",
    "Message",
    "Date",
    "Media Path",
    "View Count",
];

/// One exported message from a public channel.
///
/// # Construction
///
/// Use [`ChannelRecord::new`] for the required fields and builder methods for
/// the nullable ones:
///
/// ```
/// use channelpack::record::ChannelRecord;
/// use chrono::Utc;
///
/// let record = ChannelRecord::new("Zemen Express", "@ZemenExpress", 1042, Utc::now())
///     .with_message("ዋጋ 1200 ብር")
///     .with_view_count(5300);
///
/// assert!(record.media_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRecord {
    /// Display title of the channel, as resolved from the API.
    #[serde(rename = "Channel Title")]
    pub channel_title: String,

    /// Channel handle exactly as configured, including any leading `@`.
    #[serde(rename = "Channel Username")]
    pub channel_username: String,

    /// Message id. Unique within a channel, not across channels.
    #[serde(rename = "ID")]
    pub id: i64,

    /// Raw message text. `None` for media-only or service messages.
    #[serde(rename = "Message")]
    pub message: Option<String>,

    /// When the message was posted.
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,

    /// Local path of the downloaded photo, present only when the message
    /// carried one and media download was enabled.
    #[serde(rename = "Media Path")]
    pub media_path: Option<String>,

    /// View counter. Absent for channels that don't expose it.
    #[serde(rename = "View Count")]
    pub view_count: Option<i64>,
}

impl ChannelRecord {
    /// Creates a record with the required fields; nullable fields start empty.
    pub fn new(
        channel_title: impl Into<String>,
        channel_username: impl Into<String>,
        id: i64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            channel_title: channel_title.into(),
            channel_username: channel_username.into(),
            id,
            message: None,
            date,
            media_path: None,
            view_count: None,
        }
    }

    /// Builder method to set the message text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builder method to set the local media path.
    #[must_use]
    pub fn with_media_path(mut self, path: impl Into<String>) -> Self {
        self.media_path = Some(path.into());
        self
    }

    /// Builder method to set the view count.
    #[must_use]
    pub fn with_view_count(mut self, views: i64) -> Self {
        self.view_count = Some(views);
        self
    }

    /// Returns `true` if this message carried a downloaded photo.
    pub fn has_media(&self) -> bool {
        self.media_path.is_some()
    }
}

/// One row of an export file read back as raw strings.
///
/// Only `Message` is interpreted; the other columns pass through the cleaner
/// unchanged. Reading them as strings (rather than re-parsing dates and
/// counters) keeps the output rows byte-identical to the input outside the
/// text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Channel Title")]
    pub channel_title: String,

    #[serde(rename = "Channel Username")]
    pub channel_username: String,

    #[serde(rename = "ID")]
    pub id: String,

    /// Free-text column the cleaning pipeline rewrites. `None` when the field
    /// is empty in the source file.
    #[serde(rename = "Message")]
    pub message: Option<String>,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Media Path")]
    pub media_path: String,

    #[serde(rename = "View Count")]
    pub view_count: String,
}
