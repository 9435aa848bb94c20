//! Exercise locations and solution metadata on disk

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Hidden directory inside an exercise holding its metadata
pub const METADATA_DIR: &str = ".exercism";

/// Metadata file name inside [`METADATA_DIR`]
pub const METADATA_FILE: &str = "metadata.json";

/// Where an exercise lives in the workspace
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exercise {
    /// Owner root: the workspace, possibly nested under `teams/` and `users/`
    pub root: PathBuf,
    /// Track id
    pub track: String,
    /// Exercise slug
    pub slug: String,
}

impl Exercise {
    /// Directory holding the exercise files (`root/track/slug`)
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.track).join(&self.slug)
    }

    /// Directory the metadata store writes into
    ///
    /// Same as [`Exercise::path`]; the store adds its own hidden subdirectory.
    pub fn metadata_dir(&self) -> PathBuf {
        self.path()
    }

    /// Full path of the metadata file
    pub fn metadata_file(&self) -> PathBuf {
        metadata_file(&self.metadata_dir())
    }
}

fn metadata_file(dir: &Path) -> PathBuf {
    dir.join(METADATA_DIR).join(METADATA_FILE)
}

/// Solution metadata persisted next to the exercise files
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMetadata {
    /// Track id
    pub track: String,
    /// Exercise slug
    pub exercise: String,
    /// Solution id
    pub id: String,
    /// Owning team slug
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub team: String,
    /// Solution URL on the website
    pub url: String,
    /// Handle of the solution's owner
    pub handle: String,
    /// Whether the owner is the user who downloaded it
    pub is_requester: bool,
    /// Timestamp of the latest submitted iteration, as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    /// Whether the exercise is approved automatically
    #[serde(default)]
    pub auto_approve: bool,
}

impl ExerciseMetadata {
    /// Read metadata previously written into `dir`
    pub async fn read(dir: &Path) -> Result<Self> {
        let content = tokio::fs::read(metadata_file(dir)).await?;
        Ok(serde_json::from_slice(&content)?)
    }
}

/// Persists exercise metadata into an exercise directory
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Write `metadata` for the exercise rooted at `dir`
    async fn write(&self, metadata: &ExerciseMetadata, dir: &Path) -> Result<()>;
}

/// Default store: pretty JSON in `dir/.exercism/metadata.json`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMetadataStore;

#[async_trait]
impl MetadataStore for JsonMetadataStore {
    async fn write(&self, metadata: &ExerciseMetadata, dir: &Path) -> Result<()> {
        let path = metadata_file(dir);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_vec_pretty(metadata)?;
        tokio::fs::write(&path, content).await?;
        debug!("wrote metadata to {}", path.display());
        Ok(())
    }
}
