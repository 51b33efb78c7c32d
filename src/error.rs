//! Unified error types for channelpack.
//!
//! This module provides a single [`ChannelpackError`] enum that covers all
//! error cases in the library, in the style of popular crates like `csv` and
//! `reqwest`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Telegram API failures are recoverable at the granularity of "skip this
//! channel" (the exporter logs and continues); filesystem and data-shape
//! failures are fatal and surface immediately.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for channelpack operations.
///
/// # Example
///
/// ```rust
/// use channelpack::error::Result;
///
/// fn my_function() -> Result<()> {
///     // ... operations that may fail
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChannelpackError>;

/// The error type for all channelpack operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChannelpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input CSV doesn't exist
    /// - The media directory can't be created
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading or writing error.
    ///
    /// A malformed input row aborts the whole cleaning run; rows are not
    /// individually skippable.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The Telegram API reported a failure.
    ///
    /// Covers connection, entity resolution, history iteration, and media
    /// download failures. The transport error is carried as text because the
    /// client's error types are an implementation detail of the API layer.
    #[error("Telegram API error: {message}")]
    Api {
        /// Description of the failure from the client library
        message: String,
    },

    /// A channel handle did not resolve to any Telegram entity.
    #[error("channel '{handle}' did not resolve to a Telegram entity")]
    ChannelNotFound {
        /// The handle as configured (e.g. `@ZemenExpress`)
        handle: String,
    },

    /// The session file exists but is not signed in.
    ///
    /// Interactive login is outside channelpack's scope; the session must be
    /// authorized ahead of time.
    #[error(
        "session '{}' is not authorized; sign in with your Telegram account first",
        session.display()
    )]
    NotAuthorized {
        /// Path of the session file that was loaded
        session: PathBuf,
    },

    /// A required column is missing from the input CSV.
    #[error("input file {} has no '{column}' column", path.display())]
    MissingColumn {
        /// The column that was expected (e.g. `Message`)
        column: String,
        /// The file that was being read
        path: PathBuf,
    },

    /// A required environment variable is missing or empty.
    #[error("environment variable {var} is not set")]
    MissingEnv {
        /// Name of the variable (e.g. `TELEGRAM_APP_ID`)
        var: &'static str,
    },

    /// An environment variable is present but has an unusable value.
    #[error("environment variable {var} has invalid value '{value}': {message}")]
    InvalidEnv {
        /// Name of the variable
        var: &'static str,
        /// The value that failed to parse
        value: String,
        /// Why the value was rejected
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChannelpackError {
    /// Creates an API error from any displayable transport error.
    pub fn api(message: impl Into<String>) -> Self {
        ChannelpackError::Api {
            message: message.into(),
        }
    }

    /// Creates a channel-not-found error.
    pub fn channel_not_found(handle: impl Into<String>) -> Self {
        ChannelpackError::ChannelNotFound {
            handle: handle.into(),
        }
    }

    /// Creates a not-authorized error for the given session file.
    pub fn not_authorized(session: impl Into<PathBuf>) -> Self {
        ChannelpackError::NotAuthorized {
            session: session.into(),
        }
    }

    /// Creates a missing-column error.
    pub fn missing_column(column: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ChannelpackError::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    /// Creates a missing-environment-variable error.
    pub fn missing_env(var: &'static str) -> Self {
        ChannelpackError::MissingEnv { var }
    }

    /// Creates an invalid-environment-variable error.
    pub fn invalid_env(
        var: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ChannelpackError::InvalidEnv {
            var,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChannelpackError::Io(_))
    }

    /// Returns `true` if this is a CSV error.
    pub fn is_csv(&self) -> bool {
        matches!(self, ChannelpackError::Csv(_))
    }

    /// Returns `true` if this error came from the Telegram API.
    ///
    /// API errors (including unresolvable handles) are the recoverable class:
    /// the exporter skips the affected channel and carries on.
    pub fn is_api(&self) -> bool {
        matches!(
            self,
            ChannelpackError::Api { .. } | ChannelpackError::ChannelNotFound { .. }
        )
    }

    /// Returns `true` if this is a missing-column error.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, ChannelpackError::MissingColumn { .. })
    }

    /// Returns `true` if this is a configuration/environment error.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ChannelpackError::MissingEnv { .. } | ChannelpackError::InvalidEnv { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChannelpackError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_api_error_display() {
        let err = ChannelpackError::api("FLOOD_WAIT_30");
        assert!(err.to_string().contains("Telegram API error"));
        assert!(err.to_string().contains("FLOOD_WAIT_30"));
    }

    #[test]
    fn test_channel_not_found_display() {
        let err = ChannelpackError::channel_not_found("@nosuchchannel");
        assert!(err.to_string().contains("@nosuchchannel"));
        assert!(err.to_string().contains("did not resolve"));
    }

    #[test]
    fn test_not_authorized_display() {
        let err = ChannelpackError::not_authorized("scraping.session");
        let display = err.to_string();
        assert!(display.contains("scraping.session"));
        assert!(display.contains("not authorized"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = ChannelpackError::missing_column("Message", "data/raw/telegram_data.csv");
        let display = err.to_string();
        assert!(display.contains("Message"));
        assert!(display.contains("telegram_data.csv"));
    }

    #[test]
    fn test_env_error_display() {
        let err = ChannelpackError::missing_env("TELEGRAM_APP_ID");
        assert!(err.to_string().contains("TELEGRAM_APP_ID"));

        let err = ChannelpackError::invalid_env("TELEGRAM_APP_ID", "abc", "expected an integer");
        let display = err.to_string();
        assert!(display.contains("abc"));
        assert!(display.contains("expected an integer"));
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChannelpackError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_api());
        assert!(!io_err.is_missing_column());

        let api_err = ChannelpackError::api("timeout");
        assert!(api_err.is_api());
        assert!(!api_err.is_io());

        // Unresolvable handles count as API errors: both are skippable.
        let not_found = ChannelpackError::channel_not_found("@x");
        assert!(not_found.is_api());

        let col_err = ChannelpackError::missing_column("Message", "in.csv");
        assert!(col_err.is_missing_column());
        assert!(!col_err.is_api());

        let env_err = ChannelpackError::missing_env("TELEGRAM_API_HASH");
        assert!(env_err.is_config());
        assert!(!env_err.is_io());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChannelpackError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = ChannelpackError::channel_not_found("@x");
        let debug = format!("{:?}", err);
        assert!(debug.contains("ChannelNotFound"));
    }
}
