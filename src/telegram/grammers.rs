//! grammers-backed [`ChannelSource`] implementation.
//!
//! Thin adapter from the MTProto client's types to channelpack's domain
//! types. All transport errors are stringified into
//! [`ChannelpackError::Api`]; their concrete types stay private to this
//! module.

use std::path::Path;

use async_trait::async_trait;
use grammers_client::types::{Chat, Downloadable, Media};
use grammers_client::{Client, Config, InitParams};
use grammers_session::Session;
use tracing::debug;

use crate::config::ApiCredentials;
use crate::error::{ChannelpackError, Result};

use super::{Channel, ChannelSource, Post};

/// Telegram client wrapper implementing [`ChannelSource`].
///
/// # Example
///
/// ```rust,no_run
/// use channelpack::config::ApiCredentials;
/// use channelpack::telegram::TelegramSource;
///
/// # async fn run() -> channelpack::error::Result<()> {
/// let credentials = ApiCredentials::from_env()?;
/// let source = TelegramSource::connect(&credentials, "scraping.session".as_ref()).await?;
/// # Ok(())
/// # }
/// ```
pub struct TelegramSource {
    client: Client,
}

impl TelegramSource {
    /// Connects to Telegram with explicit credentials and a session file.
    ///
    /// The session must already be signed in: interactive login is outside
    /// channelpack's scope, so an unauthorized session is an error rather
    /// than a prompt.
    pub async fn connect(credentials: &ApiCredentials, session_file: &Path) -> Result<Self> {
        let session = Session::load_file_or_create(session_file)
            .map_err(|e| ChannelpackError::api(format!("failed to load session: {e}")))?;

        let client = Client::connect(Config {
            session,
            api_id: credentials.api_id,
            api_hash: credentials.api_hash.clone(),
            params: InitParams::default(),
        })
        .await
        .map_err(|e| ChannelpackError::api(e.to_string()))?;

        let authorized = client
            .is_authorized()
            .await
            .map_err(|e| ChannelpackError::api(e.to_string()))?;
        if !authorized {
            return Err(ChannelpackError::not_authorized(session_file));
        }

        debug!(session = %session_file.display(), "connected to Telegram");
        Ok(Self { client })
    }
}

#[async_trait]
impl ChannelSource for TelegramSource {
    type Chat = Chat;
    type Photo = Media;

    async fn resolve(&self, handle: &str) -> Result<Channel<Chat>> {
        // resolve_username wants the bare name; the configured handle keeps
        // its leading '@' everywhere else (CSV column, media filenames).
        let username = handle.trim_start_matches('@');
        let chat = self
            .client
            .resolve_username(username)
            .await
            .map_err(|e| ChannelpackError::api(e.to_string()))?
            .ok_or_else(|| ChannelpackError::channel_not_found(handle))?;

        Ok(Channel {
            handle: handle.to_string(),
            title: chat.name().to_string(),
            chat,
        })
    }

    async fn posts(&self, channel: &Channel<Chat>, limit: usize) -> Result<Vec<Post<Media>>> {
        let mut history = self.client.iter_messages(&channel.chat).limit(limit);
        let mut posts = Vec::new();

        while let Some(message) = history
            .next()
            .await
            .map_err(|e| ChannelpackError::api(e.to_string()))?
        {
            let text = message.text();
            let photo = message
                .media()
                .filter(|media| matches!(media, Media::Photo(_)));

            posts.push(Post {
                id: i64::from(message.id()),
                text: (!text.is_empty()).then(|| text.to_string()),
                date: message.date(),
                views: message.view_count().map(i64::from),
                photo,
            });
        }

        debug!(channel = %channel.handle, count = posts.len(), "fetched channel history");
        Ok(posts)
    }

    async fn download_photo(&self, photo: &Media, dest: &Path) -> Result<()> {
        self.client
            .download_media(&Downloadable::Media(photo.clone()), dest)
            .await
            .map_err(|e| ChannelpackError::api(e.to_string()))?;
        Ok(())
    }
}
