//! Wire schema of the solution record returned by the API
//!
//! A single schema covers both success and failure bodies: every field
//! defaults when absent or `null`, and the `error` object is only populated
//! when the API reports a problem.

use serde::{Deserialize, Deserializer, Serialize};

/// Error type the API uses when an exercise slug matches several tracks
pub const TRACK_AMBIGUOUS: &str = "track_ambiguous";

// `null` reads as the default value, like an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level API response for `GET /solutions/{id}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadPayload {
    /// The solution, zero-valued on error responses
    #[serde(deserialize_with = "nullable")]
    pub solution: Solution,
    /// API error, zero-valued on success responses
    #[serde(deserialize_with = "nullable")]
    pub error: ApiErrorBody,
}

/// A solution as described by the API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Solution {
    /// Solution id
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Solution page on the website
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Owning team; empty slug means no team
    #[serde(deserialize_with = "nullable")]
    pub team: Team,
    /// Owning user
    #[serde(deserialize_with = "nullable")]
    pub user: User,
    /// Exercise the solution belongs to
    #[serde(deserialize_with = "nullable")]
    pub exercise: ExerciseInfo,
    /// Prefix every file path is appended to when downloading
    #[serde(deserialize_with = "nullable")]
    pub file_download_base_url: String,
    /// Solution file paths, in API order
    #[serde(deserialize_with = "nullable")]
    pub files: Vec<String>,
    /// Latest iteration
    #[serde(deserialize_with = "nullable")]
    pub iteration: Iteration,
}

/// Team owning a solution
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    /// Display name
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Slug used in workspace paths
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
}

/// User owning a solution
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Public handle
    #[serde(deserialize_with = "nullable")]
    pub handle: String,
    /// Whether the owner is the authenticated user
    #[serde(deserialize_with = "nullable")]
    pub is_requester: bool,
}

/// Exercise descriptor embedded in a solution
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseInfo {
    /// Exercise slug
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Instructions page
    #[serde(deserialize_with = "nullable")]
    pub instructions_url: String,
    /// Whether submissions are approved automatically
    #[serde(deserialize_with = "nullable")]
    pub auto_approve: bool,
    /// Track the exercise belongs to
    #[serde(deserialize_with = "nullable")]
    pub track: Track,
}

/// Track descriptor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Track id
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Language name
    #[serde(deserialize_with = "nullable")]
    pub language: String,
}

/// Latest iteration of a solution
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Iteration {
    /// Submission timestamp as sent by the API
    pub submitted_at: Option<String>,
}

/// Error object of a failed API response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Machine-readable error type (e.g. `track_ambiguous`)
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    /// Human-readable message
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    /// Candidate tracks, only for `track_ambiguous`
    #[serde(deserialize_with = "nullable")]
    pub possible_track_ids: Vec<String>,
}

impl ApiErrorBody {
    /// Message shown to the user for a non-200 response
    ///
    /// `track_ambiguous` errors list the candidate tracks after the message.
    pub fn describe(&self) -> String {
        if self.kind == TRACK_AMBIGUOUS {
            format!("{}: {}", self.message, self.possible_track_ids.join(", "))
        } else {
            self.message.clone()
        }
    }
}
