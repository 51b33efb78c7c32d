//! The seam between the export pipeline and the Telegram client.
//!
//! [`ChannelSource`] abstracts the three things the exporter needs from the
//! platform: resolve a handle to a channel, list its recent posts, and fetch
//! a photo attachment to disk. The production implementation is
//! [`TelegramSource`], backed by the `grammers` MTProto client; tests swap in
//! an in-memory fake.
//!
//! The client's transport, authentication and rate limiting live entirely
//! behind this boundary.

mod grammers;

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

pub use grammers::TelegramSource;

/// A channel handle resolved to a platform entity.
///
/// `C` is the implementation's chat handle, threaded back into
/// [`ChannelSource::posts`] so history can be fetched without re-resolving.
#[derive(Debug, Clone)]
pub struct Channel<C> {
    /// The handle exactly as configured (e.g. `@ZemenExpress`).
    pub handle: String,
    /// Display title extracted from the resolved entity.
    pub title: String,
    /// Implementation-specific chat reference.
    pub chat: C,
}

/// One message pulled from a channel's history.
///
/// `P` is the implementation's media handle for the photo attachment, passed
/// to [`ChannelSource::download_photo`] when downloads are enabled.
#[derive(Debug, Clone)]
pub struct Post<P> {
    /// Message id, unique within the channel.
    pub id: i64,
    /// Message text. `None` for media-only and service messages.
    pub text: Option<String>,
    /// When the message was posted.
    pub date: DateTime<Utc>,
    /// View counter, when the platform exposes one.
    pub views: Option<i64>,
    /// Photo attachment, when the message carries one.
    pub photo: Option<P>,
}

impl<P> Post<P> {
    /// Returns `true` if this post carries a photo attachment.
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// Read access to a messaging platform's public channels.
///
/// One suspension point per network call: resolution, each history page, each
/// media download. Implementations are expected to surface transport errors
/// as [`ChannelpackError::Api`](crate::error::ChannelpackError::Api) so the
/// exporter can treat them as skippable.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Implementation-specific chat reference carried by [`Channel`].
    type Chat: Send + Sync;
    /// Implementation-specific photo handle carried by [`Post`].
    type Photo: Send + Sync;

    /// Resolves a handle to a readable channel entity.
    async fn resolve(&self, handle: &str) -> Result<Channel<Self::Chat>>;

    /// Returns the channel's most recent posts, newest first, truncated to
    /// `limit`. Each call re-fetches from the network; nothing is cached.
    async fn posts(
        &self,
        channel: &Channel<Self::Chat>,
        limit: usize,
    ) -> Result<Vec<Post<Self::Photo>>>;

    /// Downloads a photo attachment to `dest`.
    async fn download_photo(&self, photo: &Self::Photo, dest: &Path) -> Result<()>;
}
