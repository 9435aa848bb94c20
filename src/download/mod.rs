//! Solution download core.
//!
//! A download runs strictly in sequence:
//!
//! 1. [`DownloadParams`] identify the solution (by UUID, or exercise slug
//!    plus optional track and team) and carry the user config.
//! 2. [`Download::fetch`] requests the solution record and classifies the
//!    response.
//! 3. [`DownloadWriter`] fetches every listed file into the exercise
//!    directory resolved from the solution's ownership, then writes the
//!    exercise metadata.
//!
//! Split into focused submodules:
//! - [`params`] - parameter resolution and validation
//! - [`payload`] - wire schema of the solution record
//! - [`fetch`] - the solution record request
//! - [`sanitize`] - legacy file path cleanup
//! - [`writer`] - per-file fetch and write, metadata write

pub mod fetch;
pub mod params;
pub mod payload;
pub mod sanitize;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod tests;

pub use params::DownloadParams;
pub use payload::{ApiErrorBody, DownloadPayload, Solution};
pub use sanitize::sanitize_legacy_filepath;
pub use writer::{
    ApiFileFetcher, DownloadWriter, FileBody, FileFetch, FileFetcher, SkipReason, WriteReport,
};

use crate::error::{Error, Result};
use crate::workspace::{Exercise, ExerciseMetadata};
use std::path::Path;

/// A fetched solution record together with the parameters that selected it
#[derive(Clone, Debug)]
pub struct Download {
    params: DownloadParams,
    payload: DownloadPayload,
}

impl Download {
    /// Assemble a download from already-decoded parts
    ///
    /// No validation happens here; see [`Download::validate`].
    pub fn new(params: DownloadParams, payload: DownloadPayload) -> Self {
        Self { params, payload }
    }

    /// The parameters the download was requested with
    pub fn params(&self) -> &DownloadParams {
        &self.params
    }

    /// The decoded API response
    pub fn payload(&self) -> &DownloadPayload {
        &self.payload
    }

    /// The solution described by the API
    pub fn solution(&self) -> &Solution {
        &self.payload.solution
    }

    /// The API error object, empty on success
    pub fn api_error(&self) -> &ApiErrorBody {
        &self.payload.error
    }

    /// Where the solution lives in the workspace
    pub fn exercise(&self) -> Exercise {
        resolve_exercise(self.solution(), &self.params.config().workspace_path())
    }

    /// Metadata to persist next to the solution files
    pub fn metadata(&self) -> ExerciseMetadata {
        let solution = self.solution();
        ExerciseMetadata {
            track: solution.exercise.track.id.clone(),
            exercise: solution.exercise.id.clone(),
            id: solution.id.clone(),
            team: solution.team.slug.clone(),
            url: solution.url.clone(),
            handle: solution.user.handle.clone(),
            is_requester: solution.user.is_requester,
            submitted_at: solution.iteration.submitted_at.clone(),
            auto_approve: solution.exercise.auto_approve,
        }
    }

    /// A usable download has a solution id and no API error message
    pub fn validate(&self) -> Result<()> {
        if self.solution().id.is_empty() {
            return Err(Error::EmptyOrErroredDownload {
                reason: "download is empty".to_string(),
            });
        }
        if !self.api_error().message.is_empty() {
            return Err(Error::EmptyOrErroredDownload {
                reason: self.api_error().message.clone(),
            });
        }
        Ok(())
    }
}

/// Resolve the workspace location of a solution
///
/// Team solutions nest under `teams/<slug>`; solutions owned by someone other
/// than the requester nest under `users/<handle>`, after the team segment.
pub fn resolve_exercise(solution: &Solution, workspace: &Path) -> Exercise {
    let mut root = workspace.to_path_buf();
    if !solution.team.slug.is_empty() {
        root = root.join("teams").join(&solution.team.slug);
    }
    if !solution.user.is_requester {
        root = root.join("users").join(&solution.user.handle);
    }
    Exercise {
        root,
        track: solution.exercise.track.id.clone(),
        slug: solution.exercise.id.clone(),
    }
}
