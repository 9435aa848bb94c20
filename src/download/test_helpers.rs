//! Shared fixtures for download tests.

use super::{Download, DownloadParams, DownloadPayload};
use crate::config::UserConfig;
use crate::error::ParamsSource;
use crate::flags::DownloadFlags;

pub(crate) const WORKSPACE: &str = "/home/username";
pub(crate) const API_BASE_URL: &str = "http://example.com";
pub(crate) const HANDLE: &str = "alice";
pub(crate) const TEAM: &str = "bogus-team";
pub(crate) const TRACK: &str = "bogus-track";
pub(crate) const SLUG: &str = "bogus-exercise";

pub(crate) fn fake_config() -> UserConfig {
    UserConfig::new("abc123", WORKSPACE, API_BASE_URL)
}

pub(crate) fn fake_flags() -> DownloadFlags {
    DownloadFlags::for_exercise(SLUG)
        .with_track(TRACK)
        .with_team(TEAM)
}

pub(crate) fn fake_params() -> DownloadParams {
    DownloadParams {
        config: fake_config(),
        uuid: String::new(),
        slug: SLUG.to_string(),
        track: TRACK.to_string(),
        team: TEAM.to_string(),
        origin: ParamsSource::Flags,
    }
}

/// Params pointed at a mock server
pub(crate) fn fake_params_for(apibaseurl: &str) -> DownloadParams {
    let mut params = fake_params();
    params.config.apibaseurl = apibaseurl.to_string();
    params
}

/// Decode `template` into a download without any request
pub(crate) fn fake_download(template: &str) -> Download {
    let payload: DownloadPayload = serde_json::from_str(template).unwrap();
    Download::new(fake_params(), payload)
}

pub(crate) const DOWNLOAD_PAYLOAD_TMPL: &str = r#"
{
    "solution": {
        "id": "bogus-id",
        "user": {
            "handle": "alice"
        },
        "team": {
            "name": "bogus-team",
            "slug": "bogus-team-slug"
        },
        "exercise": {
            "id": "bogus-exercise",
            "instructions_url": "http://example.com/bogus-exercise",
            "auto_approve": false,
            "track": {
                "id": "bogus-track",
                "language": "Bogus Language"
            }
        },
        "file_download_base_url": "bogus-base-url",
        "files": [
            "file-1.txt",
            "subdir/file-2.txt",
            "special-char-filename#.txt",
            "/with-leading-slash.txt",
            "\\with-leading-backslash.txt",
            "\\with\\backslashes\\in\\path.txt",
            "file-3.txt",
            "/full/path/with/numeric-suffix/bogus-track/bogus-exercise-12345/subdir/numeric.txt",
            "empty"
        ],
        "iteration": {
            "submitted_at": "2017-08-21t10:11:12.130z"
        }
    }
}
"#;

pub(crate) const ERROR_TMPL: &str = r#"
{
    "error": {
        "type": "bogus",
        "message": "error-msg",
        "possible_track_ids": []
    }
}
"#;

pub(crate) const TRACK_AMBIGUOUS_TMPL: &str = r#"
{
    "error": {
        "type": "track_ambiguous",
        "message": "m",
        "possible_track_ids": ["a", "b"]
    }
}
"#;
