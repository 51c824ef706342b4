// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the digit prediction endpoint.
//!
//! One call is one `multipart/form-data` POST to `<base>/predict` carrying a
//! single part named `image`. The endpoint answers
//! `{ "digit": <int>, "confidence": <number> }` on success.

use super::state::PredictionResult;
use super::workflow::Upload;
use crate::error::{Error, PredictionError, Result};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// Path appended to the configured endpoint base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name expected by the endpoint.
pub const IMAGE_FIELD: &str = "image";

const USER_AGENT: &str = concat!("DigitLens/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a configured [`reqwest::Client`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    predict_url: String,
}

impl PredictionClient {
    /// Builds a client for the endpoint rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute URL and
    /// [`Error::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid endpoint URL '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid endpoint URL '{base_url}': not a base URL"
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let predict_url = format!("{}{PREDICT_PATH}", base_url.trim_end_matches('/'));
        Ok(Self { http, predict_url })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Sends one image and decodes the prediction.
    ///
    /// # Errors
    ///
    /// - [`PredictionError::NetworkFailure`] when no HTTP response is received
    /// - [`PredictionError::ServerError`] on a non-2xx status
    /// - [`PredictionError::MalformedResponse`] when the body cannot be decoded
    pub async fn predict(
        &self,
        upload: Upload,
    ) -> std::result::Result<PredictionResult, PredictionError> {
        let Upload {
            file_name,
            media_type,
            bytes,
        } = upload;

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&media_type)
            .map_err(|e| PredictionError::NetworkFailure(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictionError::NetworkFailure(e.to_string()))?;

        serde_json::from_slice::<PredictionResult>(&body)
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_is_appended_to_base() {
        let client = PredictionClient::new("http://localhost:5000", Duration::from_secs(5))
            .expect("valid url");
        assert_eq!(client.predict_url(), "http://localhost:5000/predict");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let client = PredictionClient::new("http://example.test/api/", Duration::from_secs(5))
            .expect("valid url");
        assert_eq!(client.predict_url(), "http://example.test/api/predict");
    }

    #[test]
    fn relative_url_is_rejected() {
        let result = PredictionClient::new("localhost", Duration::from_secs(5));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn non_base_url_is_rejected() {
        let result = PredictionClient::new("mailto:someone@example.test", Duration::from_secs(5));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
