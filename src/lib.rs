//! # solution-dl
//!
//! Download core for a coding-practice platform's command-line client.
//!
//! Given an exercise slug or a solution UUID, it fetches the solution record
//! from the platform API, resolves where the exercise belongs in the local
//! workspace, downloads every solution file there and writes the exercise
//! metadata next to them.
//!
//! ## Design
//!
//! - **Library-first** - argument parsing and terminal output belong to the
//!   caller; output sinks are passed in explicitly
//! - **Sequential** - one request for the solution record, then one request
//!   per file, in list order
//! - **Fail fast** - every error is returned to the caller; only missing or
//!   empty solution files are skipped
//!
//! ## Quick Start
//!
//! ```no_run
//! use solution_dl::{Download, DownloadFlags, DownloadParams, DownloadWriter, UserConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UserConfig::load_default()?;
//!     let flags = DownloadFlags::for_exercise("hello-world").with_track("rust");
//!
//!     let params = DownloadParams::from_flags(&config, &flags)?;
//!     let download = Download::fetch(params).await?;
//!
//!     let writer = DownloadWriter::new(download)?;
//!     writer.write_solution_files().await?;
//!     writer.write_metadata().await?;
//!
//!     println!("{}", writer.exercise().path().display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Authenticated API client
pub mod api;
/// The download command
pub mod command;
/// User configuration
pub mod config;
/// Solution download core
pub mod download;
/// Error types
pub mod error;
/// Command-line flag access
pub mod flags;
/// Exercise locations and metadata
pub mod workspace;

// Re-export commonly used types
pub use api::ApiClient;
pub use command::DownloadCommand;
pub use config::UserConfig;
pub use download::{
    ApiFileFetcher, Download, DownloadParams, DownloadPayload, DownloadWriter, FileFetch,
    FileFetcher, Solution, WriteReport, resolve_exercise, sanitize_legacy_filepath,
};
pub use error::{Error, ParamsSource, Result};
pub use flags::{DownloadFlags, FlagSource};
pub use workspace::{Exercise, ExerciseMetadata, JsonMetadataStore, MetadataStore};
