//! Parameters identifying which solution to download

use crate::config::UserConfig;
use crate::error::{Error, ParamsSource, Result};
use crate::flags::{FLAG_EXERCISE, FLAG_TEAM, FLAG_TRACK, FLAG_UUID, FlagSource};
use crate::workspace::Exercise;

/// Identifies a solution by UUID, or by exercise slug (plus optional track
/// and team) for the requester's latest solution
///
/// Exactly one of `uuid` and `slug` is set on a constructed value, and the
/// user config carries a token, workspace and API base URL.
#[derive(Clone, Debug)]
pub struct DownloadParams {
    pub(crate) config: UserConfig,
    pub(crate) uuid: String,
    pub(crate) slug: String,
    pub(crate) track: String,
    pub(crate) team: String,
    pub(crate) origin: ParamsSource,
}

impl DownloadParams {
    /// Parameters for the latest solution of an exercise already in the workspace
    ///
    /// # Errors
    /// [`Error::EmptySlug`] when the exercise has no slug, otherwise any
    /// validation error
    pub fn from_exercise(config: &UserConfig, exercise: &Exercise) -> Result<Self> {
        if exercise.slug.is_empty() {
            return Err(Error::EmptySlug);
        }
        let params = Self {
            config: config.clone(),
            uuid: String::new(),
            slug: exercise.slug.clone(),
            track: exercise.track.clone(),
            team: String::new(),
            origin: ParamsSource::Exercise,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters from the `uuid`, `exercise`, `track` and `team` flags
    ///
    /// The identifier is checked before `track` and `team` are read.
    pub fn from_flags(config: &UserConfig, flags: &impl FlagSource) -> Result<Self> {
        let mut params = Self {
            config: config.clone(),
            uuid: flags.get_string(FLAG_UUID)?,
            slug: flags.get_string(FLAG_EXERCISE)?,
            track: String::new(),
            team: String::new(),
            origin: ParamsSource::Flags,
        };
        params.validate_identifier()?;

        params.track = flags.get_string(FLAG_TRACK)?;
        params.team = flags.get_string(FLAG_TEAM)?;
        params.validate()?;
        Ok(params)
    }

    /// Check the identifier invariant and the required user config
    pub fn validate(&self) -> Result<()> {
        self.validate_identifier()?;
        if let Some(key) = self.config.missing_key() {
            return Err(Error::MissingUserConfig {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    // Both set, or both empty (equal).
    fn validate_identifier(&self) -> Result<()> {
        if (!self.slug.is_empty() && !self.uuid.is_empty()) || self.uuid == self.slug {
            return Err(Error::AmbiguousOrMissingIdentifier {
                origin: self.origin,
            });
        }
        Ok(())
    }

    /// User configuration the parameters were resolved against
    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    /// Solution UUID, empty when downloading by exercise
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Exercise slug, empty when downloading by UUID
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Track id, may be empty
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Team slug, may be empty
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Where the parameters came from
    pub fn origin(&self) -> ParamsSource {
        self.origin
    }

    /// Solution record URL: `{apibaseurl}/solutions/{uuid|latest}`
    pub fn request_url(&self) -> String {
        let id = if self.uuid.is_empty() {
            "latest"
        } else {
            &self.uuid
        };
        format!("{}/solutions/{}", self.config.apibaseurl, id)
    }

    /// Query pairs for the solution record request
    ///
    /// Empty when a UUID is set; the API resolves by UUID alone.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        if !self.uuid.is_empty() {
            return Vec::new();
        }
        let mut query = vec![("exercise_id", self.slug.as_str())];
        if !self.track.is_empty() {
            query.push(("track_id", self.track.as_str()));
        }
        if !self.team.is_empty() {
            query.push(("team_id", self.team.as_str()));
        }
        query
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::test_helpers::{fake_config, fake_flags};
    use crate::flags::DownloadFlags;
    use std::collections::HashMap;

    fn fake_exercise() -> Exercise {
        Exercise {
            root: Default::default(),
            track: "bogus-track".into(),
            slug: "bogus-exercise".into(),
        }
    }

    #[test]
    fn test_from_exercise_valid() {
        let cfg = fake_config();
        let params = DownloadParams::from_exercise(&cfg, &fake_exercise()).unwrap();

        assert_eq!(params.config(), &cfg);
        assert_eq!(params.slug(), "bogus-exercise");
        assert_eq!(params.track(), "bogus-track");
        assert_eq!(params.uuid(), "");
        assert_eq!(params.team(), "");
        assert_eq!(params.origin(), ParamsSource::Exercise);
    }

    #[test]
    fn test_from_exercise_requires_slug() {
        let mut exercise = fake_exercise();
        exercise.slug.clear();

        let err = DownloadParams::from_exercise(&fake_config(), &exercise).unwrap_err();
        assert!(matches!(err, Error::EmptySlug));
    }

    #[test]
    fn test_from_exercise_validates_user_config() {
        let exercise = fake_exercise();
        for key in ["token", "workspace", "apibaseurl"] {
            let mut cfg = fake_config();
            match key {
                "token" => cfg.token.clear(),
                "workspace" => cfg.workspace.clear(),
                _ => cfg.apibaseurl.clear(),
            }

            match DownloadParams::from_exercise(&cfg, &exercise) {
                Err(Error::MissingUserConfig { key: missing }) => assert_eq!(missing, key),
                other => panic!("Expected MissingUserConfig for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_flags_valid() {
        let cfg = fake_config();
        let params = DownloadParams::from_flags(&cfg, &fake_flags()).unwrap();

        assert_eq!(params.slug(), "bogus-exercise");
        assert_eq!(params.track(), "bogus-track");
        assert_eq!(params.team(), "bogus-team");
        assert_eq!(params.uuid(), "");
        assert_eq!(params.origin(), ParamsSource::Flags);
    }

    #[test]
    fn test_from_flags_requires_exactly_one_identifier() {
        let cfg = fake_config();

        let mut flags = fake_flags();
        flags.exercise = None;
        let err = DownloadParams::from_flags(&cfg, &flags).unwrap_err();
        assert_eq!(err.to_string(), "need an --exercise name or a solution --uuid");

        flags.uuid = Some("bogus-uuid".into());
        let params = DownloadParams::from_flags(&cfg, &flags).unwrap();
        assert_eq!(params.uuid(), "bogus-uuid");

        flags.exercise = Some("bogus-exercise".into());
        let err = DownloadParams::from_flags(&cfg, &flags).unwrap_err();
        assert!(matches!(
            err,
            Error::AmbiguousOrMissingIdentifier {
                origin: ParamsSource::Flags
            }
        ));
    }

    #[test]
    fn test_from_flags_validates_user_config() {
        let flags = fake_flags();
        let mut cfg = fake_config();
        cfg.apibaseurl.clear();

        let err = DownloadParams::from_flags(&cfg, &flags).unwrap_err();
        assert!(matches!(err, Error::MissingUserConfig { ref key } if key == "apibaseurl"));
    }

    #[test]
    fn test_from_flags_propagates_read_errors() {
        let mut flags = HashMap::new();
        flags.insert("uuid".to_string(), String::new());
        let err = DownloadParams::from_flags(&fake_config(), &flags).unwrap_err();
        assert!(matches!(err, Error::FlagRead { ref name, .. } if name == "exercise"));
    }

    #[test]
    fn test_from_flags_checks_identifier_before_track_and_team() {
        // track/team undefined, but the missing identifier is reported first
        let mut flags = HashMap::new();
        flags.insert("uuid".to_string(), String::new());
        flags.insert("exercise".to_string(), String::new());
        let err = DownloadParams::from_flags(&fake_config(), &flags).unwrap_err();
        assert!(matches!(err, Error::AmbiguousOrMissingIdentifier { .. }));

        flags.insert("exercise".to_string(), "bogus-exercise".to_string());
        let err = DownloadParams::from_flags(&fake_config(), &flags).unwrap_err();
        assert!(matches!(err, Error::FlagRead { ref name, .. } if name == "track"));
    }

    #[test]
    fn test_request_url_and_query_by_exercise() {
        let params = DownloadParams::from_flags(&fake_config(), &fake_flags()).unwrap();

        assert_eq!(params.request_url(), "http://example.com/solutions/latest");
        assert_eq!(
            params.query(),
            vec![
                ("exercise_id", "bogus-exercise"),
                ("track_id", "bogus-track"),
                ("team_id", "bogus-team"),
            ]
        );
    }

    #[test]
    fn test_query_omits_empty_track_and_team() {
        let flags = DownloadFlags::for_exercise("bogus-exercise");
        let params = DownloadParams::from_flags(&fake_config(), &flags).unwrap();
        assert_eq!(params.query(), vec![("exercise_id", "bogus-exercise")]);
    }

    #[test]
    fn test_request_url_and_query_by_uuid() {
        let flags = DownloadFlags::for_uuid("bogus-uuid")
            .with_track("bogus-track")
            .with_team("bogus-team");
        let params = DownloadParams::from_flags(&fake_config(), &flags).unwrap();

        assert_eq!(
            params.request_url(),
            "http://example.com/solutions/bogus-uuid"
        );
        assert!(params.query().is_empty());
    }
}
