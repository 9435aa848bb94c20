//! User configuration for solution-dl
//!
//! The user config is a small JSON document (`user.json`) holding the API
//! token, the local workspace root and the API base URL. Every field defaults
//! to empty so that a partially written file still loads; the download core
//! decides which values are required.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// API base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "https://api.exercism.io/v1";

/// Site URL paired with [`DEFAULT_API_BASE_URL`]
pub const DEFAULT_SITE_URL: &str = "https://exercism.io";

/// Environment variable overriding the config directory
pub const CONFIG_HOME_ENV: &str = "EXERCISM_CONFIG_HOME";

/// File name of the user config inside the config directory
pub const USER_CONFIG_FILE: &str = "user.json";

// Path of the settings page on the website
const SETTINGS_PATH: &str = "/my/settings";

/// Config keys every download requires
pub const REQUIRED_KEYS: [&str; 3] = ["token", "workspace", "apibaseurl"];

/// Resolved user configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// API token sent as a bearer credential
    #[serde(default)]
    pub token: String,

    /// Local root directory for downloaded exercises
    #[serde(default)]
    pub workspace: String,

    /// Base URL of the platform API (e.g. "https://api.exercism.io/v1")
    #[serde(default)]
    pub apibaseurl: String,
}

impl UserConfig {
    /// Create a config from its three values
    pub fn new(
        token: impl Into<String>,
        workspace: impl Into<String>,
        apibaseurl: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            workspace: workspace.into(),
            apibaseurl: apibaseurl.into(),
        }
    }

    /// String-keyed accessor. Unknown keys read as empty.
    pub fn get(&self, key: &str) -> &str {
        match key {
            "token" => &self.token,
            "workspace" => &self.workspace,
            "apibaseurl" => &self.apibaseurl,
            _ => "",
        }
    }

    /// First required key that is empty, if any
    pub fn missing_key(&self) -> Option<&'static str> {
        REQUIRED_KEYS.into_iter().find(|key| self.get(key).is_empty())
    }

    /// Workspace root as a path
    pub fn workspace_path(&self) -> PathBuf {
        PathBuf::from(&self.workspace)
    }

    /// Config directory
    ///
    /// `EXERCISM_CONFIG_HOME` wins when set, otherwise `<config dir>/exercism`
    /// using the platform convention.
    pub fn dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(CONFIG_HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }
        dirs::config_dir()
            .map(|dir| dir.join("exercism"))
            .ok_or_else(|| Error::config("unable to locate a configuration directory", None))
    }

    /// Load the user config from a JSON file
    ///
    /// A missing file is not an error and yields the empty config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no user config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_slice(&content).map_err(|e| Error::Config {
            message: format!("invalid user config: {}", e),
            key: None,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load `user.json` from [`UserConfig::dir`]
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::dir()?.join(USER_CONFIG_FILE))
    }

    /// Site URL derived from the configured API base URL
    pub fn site_url(&self) -> String {
        infer_site_url(&self.apibaseurl)
    }

    /// Settings page derived from the configured API base URL
    pub fn settings_url(&self) -> String {
        format!("{}{}", self.site_url(), SETTINGS_PATH)
    }
}

fn origin_regex() -> &'static Regex {
    static ORIGIN: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    ORIGIN.get_or_init(|| Regex::new(r"^(https?://[^/]*).*").expect("static regex is valid"))
}

/// Infer the website URL from an API base URL
///
/// ```
/// use solution_dl::config::infer_site_url;
///
/// assert_eq!(infer_site_url(""), "https://exercism.io");
/// assert_eq!(infer_site_url("http://localhost:3000/api/v1"), "http://localhost:3000");
/// ```
pub fn infer_site_url(apibaseurl: &str) -> String {
    let apibaseurl = if apibaseurl.is_empty() {
        DEFAULT_API_BASE_URL
    } else {
        apibaseurl
    };
    if apibaseurl == DEFAULT_API_BASE_URL {
        return DEFAULT_SITE_URL.to_string();
    }
    origin_regex().replace(apibaseurl, "$1").into_owned()
}

/// Settings page where users find their API token
pub fn settings_url(apibaseurl: &str) -> String {
    format!("{}{}", infer_site_url(apibaseurl), SETTINGS_PATH)
}
