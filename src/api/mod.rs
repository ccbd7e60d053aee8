pub mod attendance;
pub mod dashboard;
pub mod employee;

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;

/// Error envelope the server attaches to non-2xx responses. `detail` is
/// optional on the wire; absence triggers the caller-supplied fallback.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Typed client for the HRMS REST API. Cheap to clone; the inner
/// `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client pointed at an arbitrary base URL, used by the test fixture.
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Decode a 2xx body as `T`, or turn the error response into an
    /// `ApiError` carrying the server's detail message.
    pub(crate) async fn expect_json<T: DeserializeOwned>(
        resp: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "response ok");
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::decode_error(resp, fallback).await)
        }
    }

    /// For endpoints whose success body we only need the `message` of.
    pub(crate) async fn expect_message(resp: Response, fallback: &str) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct MessageBody {
            message: Option<String>,
        }
        let body: MessageBody = Self::expect_json(resp, fallback).await?;
        Ok(body.message.unwrap_or_default())
    }

    async fn decode_error(resp: Response, fallback: &str) -> ApiError {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(|| fallback.to_string());
        debug!(status = status.as_u16(), detail = %detail, "error response");
        if status == StatusCode::SERVICE_UNAVAILABLE {
            ApiError::ServiceUnavailable { detail }
        } else {
            ApiError::Api {
                status: status.as_u16(),
                detail,
            }
        }
    }
}
