//! Flag access for the download command
//!
//! The command-line parser itself lives outside this crate. The download core
//! only needs to read a handful of string flags by name, so it depends on the
//! [`FlagSource`] trait rather than on a particular parser.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Flag naming the solution UUID
pub const FLAG_UUID: &str = "uuid";
/// Flag naming the exercise slug
pub const FLAG_EXERCISE: &str = "exercise";
/// Flag naming the track id
pub const FLAG_TRACK: &str = "track";
/// Flag naming the team slug
pub const FLAG_TEAM: &str = "team";

/// String-keyed read access to parsed command-line flags
pub trait FlagSource {
    /// Read a string flag. Undefined flags are an [`Error::FlagRead`].
    fn get_string(&self, name: &str) -> Result<String>;
}

fn undefined(name: &str) -> Error {
    Error::FlagRead {
        name: name.to_string(),
        reason: "flag accessed but not defined".to_string(),
    }
}

/// The flags of the download command
///
/// Unset flags read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadFlags {
    /// The solution UUID
    pub uuid: Option<String>,
    /// The exercise slug
    pub exercise: Option<String>,
    /// The track id
    pub track: Option<String>,
    /// The team slug
    pub team: Option<String>,
}

impl DownloadFlags {
    /// Flags selecting the latest solution of an exercise
    pub fn for_exercise(exercise: impl Into<String>) -> Self {
        Self {
            exercise: Some(exercise.into()),
            ..Default::default()
        }
    }

    /// Flags selecting a solution by UUID
    pub fn for_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }

    /// Set the track flag
    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Set the team flag
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }
}

impl FlagSource for DownloadFlags {
    fn get_string(&self, name: &str) -> Result<String> {
        let value = match name {
            FLAG_UUID => &self.uuid,
            FLAG_EXERCISE => &self.exercise,
            FLAG_TRACK => &self.track,
            FLAG_TEAM => &self.team,
            _ => return Err(undefined(name)),
        };
        Ok(value.clone().unwrap_or_default())
    }
}

impl FlagSource for HashMap<String, String> {
    fn get_string(&self, name: &str) -> Result<String> {
        self.get(name).cloned().ok_or_else(|| undefined(name))
    }
}
