//! Authenticated HTTP client for the platform API
//!
//! Wraps a `reqwest::Client` that attaches the user's token as a bearer
//! credential to every request. Both the solution record and the individual
//! solution files are fetched through it.

use crate::error::{Error, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Timeout for a single API request (connect through last body byte)
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("solution-dl/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API token
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client sending `Authorization: Bearer <token>`
    ///
    /// # Errors
    /// Returns error if the token is not a valid header value or the
    /// underlying HTTP client cannot be created
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if !token.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                Error::config(format!("invalid API token: {}", e), Some("token"))
            })?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http })
    }

    /// Authenticated GET with optional query pairs
    ///
    /// The response is returned whatever its status; callers classify it.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        Ok(request.send().await?)
    }
}
