//! Error types for solution-dl
//!
//! This module provides the error handling for the download core, including:
//! - One variant per failure kind of the download pipeline (params, fetch, write)
//! - Ambient failures from the HTTP client, filesystem and config layers
//! - Machine-readable error codes for callers that branch on the kind

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for solution-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Where a set of download parameters came from
///
/// Only affects the wording of identifier errors, never validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamsSource {
    /// Built from user-supplied command-line flags
    Flags,
    /// Built from an exercise already present in the workspace
    Exercise,
}

/// Main error type for solution-dl
///
/// Every failure below the top-level operation is returned to the caller
/// unchanged. Nothing in this crate retries.
#[derive(Debug, Error)]
pub enum Error {
    /// Both or neither of the exercise slug and solution UUID were given
    #[error("{}", identifier_message(*origin))]
    AmbiguousOrMissingIdentifier {
        /// Provenance of the offending parameters
        origin: ParamsSource,
    },

    /// An exercise without a slug cannot identify a solution
    #[error("exercise slug is empty")]
    EmptySlug,

    /// A required user configuration value is empty
    #[error("missing required user config '{key}'")]
    MissingUserConfig {
        /// The configuration key (`token`, `workspace` or `apibaseurl`)
        key: String,
    },

    /// A flag could not be read from the flag source
    #[error("unable to read flag '{name}': {reason}")]
    FlagRead {
        /// Name of the flag
        name: String,
        /// Why the read failed
        reason: String,
    },

    /// The API response body was not a valid solution payload
    #[error("unable to parse API response - {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// The API rejected the token (HTTP 401)
    #[error(
        "unauthorized request. Please run the configure command. You can find your API token at {settings_url}"
    )]
    Unauthorized {
        /// Settings page where the user can find their token
        settings_url: String,
    },

    /// The API answered with a non-200, non-401 status
    #[error("{message}")]
    Api {
        /// Message reported by the API, possibly with candidate track ids appended
        message: String,
    },

    /// A fetched download has no solution id or carries an API error message
    #[error("{reason}")]
    EmptyOrErroredDownload {
        /// Why the download was rejected
        reason: String,
    },

    /// A solution file URL could not be built or parsed
    #[error("invalid file URL '{url}': {reason}")]
    InvalidFileUrl {
        /// The URL as constructed from the download base URL and filename
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// Configuration file or setup error
    #[error("{message}")]
    Config {
        /// Human-readable message, may span multiple lines
        message: String,
        /// The configuration key involved, if any
        key: Option<String>,
        /// The configuration file involved, if any
        path: Option<PathBuf>,
    },

    /// I/O error while writing solution files or metadata
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error (metadata, config)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn identifier_message(source: ParamsSource) -> &'static str {
    match source {
        ParamsSource::Flags => "need an --exercise name or a solution --uuid",
        ParamsSource::Exercise => "need a 'slug' or a 'uuid'",
    }
}

impl Error {
    /// Create a configuration error that is not tied to a file
    pub fn config(message: impl Into<String>, key: Option<&str>) -> Self {
        Error::Config {
            message: message.into(),
            key: key.map(str::to_string),
            path: None,
        }
    }

    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::AmbiguousOrMissingIdentifier { .. } => "ambiguous_or_missing_identifier",
            Error::EmptySlug => "empty_slug",
            Error::MissingUserConfig { .. } => "missing_user_config",
            Error::FlagRead { .. } => "flag_read_error",
            Error::ResponseParse(_) => "response_parse_error",
            Error::Unauthorized { .. } => "unauthorized",
            Error::Api { .. } => "api_error",
            Error::EmptyOrErroredDownload { .. } => "empty_or_errored_download",
            Error::InvalidFileUrl { .. } => "invalid_file_url",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Network(_) => "network_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}
