//! Solution record request

use super::{Download, DownloadParams, DownloadPayload};
use crate::api::ApiClient;
use crate::error::{Error, Result};
use reqwest::StatusCode;
use tracing::{debug, info};

impl Download {
    /// Fetch the solution record selected by `params`
    ///
    /// Builds an [`ApiClient`] from the token and API base URL in the
    /// parameters' user config.
    pub async fn fetch(params: DownloadParams) -> Result<Self> {
        params.validate()?;
        let config = params.config();
        let client = ApiClient::new(&config.token)?;
        Self::fetch_with(&client, params).await
    }

    /// Fetch the solution record through an existing client
    ///
    /// The body is decoded before the status is looked at, so a malformed
    /// error body surfaces as [`Error::ResponseParse`]. Then:
    /// - 401 is [`Error::Unauthorized`] pointing at the settings page
    /// - any other non-200 is [`Error::Api`] with the API's message
    /// - 200 must carry a solution id and no error message
    pub async fn fetch_with(client: &ApiClient, params: DownloadParams) -> Result<Self> {
        params.validate()?;

        let url = params.request_url();
        let response = client.get(&url, &params.query()).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("solution record response: HTTP {} ({} bytes)", status, body.len());

        let payload: DownloadPayload =
            serde_json::from_slice(&body).map_err(Error::ResponseParse)?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized {
                settings_url: params.config().settings_url(),
            });
        }
        if status != StatusCode::OK {
            return Err(Error::Api {
                message: payload.error.describe(),
            });
        }

        let download = Download::new(params, payload);
        download.validate()?;
        info!(
            "fetched solution {} ({} files)",
            download.solution().id,
            download.solution().files.len()
        );
        Ok(download)
    }
}
