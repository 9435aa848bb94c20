//! Writing solution files and metadata to the workspace

use super::{Download, sanitize_legacy_filepath};
use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::workspace::{Exercise, JsonMetadataStore, MetadataStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::StatusCode;
use reqwest::header::CONTENT_LENGTH;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncWriteExt};
use tokio_util::io::StreamReader;
use tracing::{debug, info};
use url::Url;

/// Streamed content of one solution file
pub type FileBody = Box<dyn AsyncRead + Send + Unpin>;

/// Why a solution file was not written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The file request answered with a non-200 status
    Status(u16),
    /// The file request answered with `Content-Length: 0`
    Empty,
}

/// Outcome of requesting one solution file
///
/// Request failures are the `Err` side of the surrounding `Result`.
pub enum FileFetch {
    /// The file has content to write
    Fetched(FileBody),
    /// The file is missing or empty and is intentionally not written
    Skipped(SkipReason),
}

impl std::fmt::Debug for FileFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFetch::Fetched(_) => f.write_str("Fetched(..)"),
            FileFetch::Skipped(reason) => f.debug_tuple("Skipped").field(reason).finish(),
        }
    }
}

/// Retrieves solution files by the path listed in the solution record
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Request one solution file
    async fn fetch_file(&self, filename: &str) -> Result<FileFetch>;
}

/// Fetches solution files from the API's file download base URL
#[derive(Clone, Debug)]
pub struct ApiFileFetcher {
    client: ApiClient,
    base_url: String,
}

impl ApiFileFetcher {
    /// Create a fetcher appending filenames to `base_url`
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetcher for the files of `download`, authenticated with its user config
    pub fn for_download(download: &Download) -> Result<Self> {
        let config = download.params().config();
        let client = ApiClient::new(&config.token)?;
        Ok(Self::new(
            client,
            download.solution().file_download_base_url.clone(),
        ))
    }

    /// URL of one file: the base URL and filename concatenated as-is
    ///
    /// Filenames may start with `/`; nothing is normalized. `#` and `\` in
    /// the filename are percent-encoded so they stay part of the path instead
    /// of starting a fragment or acting as a separator.
    pub fn file_url(&self, filename: &str) -> Result<Url> {
        let unparsed = format!("{}{}", self.base_url, filename);
        if filename.is_empty() {
            return Err(Error::InvalidFileUrl {
                url: unparsed,
                reason: "filename is empty".to_string(),
            });
        }
        let escaped = format!("{}{}", self.base_url, escape_filename(filename));
        Url::parse(&escaped).map_err(|e| Error::InvalidFileUrl {
            url: unparsed,
            reason: e.to_string(),
        })
    }
}

fn escape_filename(filename: &str) -> String {
    filename.replace('#', "%23").replace('\\', "%5C")
}

#[async_trait]
impl FileFetcher for ApiFileFetcher {
    async fn fetch_file(&self, filename: &str) -> Result<FileFetch> {
        let url = self.file_url(filename)?;
        let response = self.client.get(url.as_str(), &[]).await?;

        if response.status() != StatusCode::OK {
            return Ok(FileFetch::Skipped(SkipReason::Status(
                response.status().as_u16(),
            )));
        }
        if response
            .headers()
            .get(CONTENT_LENGTH)
            .is_some_and(|len| len.as_bytes() == b"0")
        {
            return Ok(FileFetch::Skipped(SkipReason::Empty));
        }

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        Ok(FileFetch::Fetched(Box::new(StreamReader::new(Box::pin(
            stream,
        )))))
    }
}

/// Files written and skipped by [`DownloadWriter::write_solution_files`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Destination paths written, in list order
    pub written: Vec<PathBuf>,
    /// Filenames skipped as missing or empty, as listed by the API
    pub skipped: Vec<String>,
}

/// Writes a validated [`Download`] to the workspace
///
/// The file fetcher and metadata store default to [`ApiFileFetcher`] and
/// [`JsonMetadataStore`] and can be replaced for testing or embedding.
pub struct DownloadWriter {
    download: Download,
    fetcher: Option<Box<dyn FileFetcher>>,
    store: Option<Box<dyn MetadataStore>>,
}

impl DownloadWriter {
    /// Create a writer for `download`
    ///
    /// # Errors
    /// [`Error::EmptyOrErroredDownload`] if the download has no solution id or
    /// carries an API error
    pub fn new(download: Download) -> Result<Self> {
        download.validate()?;
        Ok(Self {
            download,
            fetcher: None,
            store: None,
        })
    }

    /// Use `fetcher` instead of requesting files from the API
    pub fn with_fetcher(mut self, fetcher: impl FileFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Use `store` instead of the JSON metadata file
    pub fn with_metadata_store(mut self, store: impl MetadataStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// The download being written
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Where the download is written
    pub fn exercise(&self) -> Exercise {
        self.download.exercise()
    }

    /// Write the exercise metadata into the exercise's metadata directory
    pub async fn write_metadata(&self) -> Result<()> {
        let dir = self.exercise().metadata_dir();
        let metadata = self.download.metadata();
        match &self.store {
            Some(store) => store.write(&metadata, &dir).await,
            None => JsonMetadataStore.write(&metadata, &dir).await,
        }
    }

    /// Fetch and write every solution file, in list order
    ///
    /// Files answered with a non-200 status or an empty body are skipped.
    /// Any other failure stops the run; files already written stay on disk
    /// and existing files are overwritten without prompting.
    pub async fn write_solution_files(&self) -> Result<WriteReport> {
        let default_fetcher;
        let fetcher: &dyn FileFetcher = match &self.fetcher {
            Some(fetcher) => fetcher.as_ref(),
            None => {
                default_fetcher = ApiFileFetcher::for_download(&self.download)?;
                &default_fetcher
            }
        };

        let exercise = self.exercise();
        let dir = exercise.metadata_dir();
        let mut report = WriteReport::default();

        for filename in &self.download.solution().files {
            let mut body = match fetcher.fetch_file(filename).await? {
                FileFetch::Fetched(body) => body,
                FileFetch::Skipped(reason) => {
                    debug!("skipping {}: {:?}", filename, reason);
                    report.skipped.push(filename.clone());
                    continue;
                }
            };

            let path = dir.join(sanitize_legacy_filepath(filename, &exercise.slug));
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let mut file = tokio::fs::File::create(&path).await?;
            tokio::io::copy(&mut body, &mut file).await?;
            file.flush().await?;

            debug!("wrote {}", path.display());
            report.written.push(path);
        }

        info!(
            "wrote {} files to {} ({} skipped)",
            report.written.len(),
            dir.display(),
            report.skipped.len()
        );
        Ok(report)
    }
}
