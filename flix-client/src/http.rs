use crate::config::ClientConfig;
use flix_core::ApiError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Credentialed HTTP client for the Movieflix backend. A cookie store
/// carries the session cookie across calls, the equivalent of the
/// browser's `credentials: "include"`.
#[derive(Clone)]
pub struct MovieflixClient {
    http: Client,
    base_url: String,
}

impl MovieflixClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(MovieflixClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(response).await
    }

    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_text(response).await
    }

    pub(crate) async fn post_multipart_text(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_text(response).await
    }

    pub(crate) async fn put_multipart_json<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .put(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json(response).await
    }

    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = reject_error_status(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Map the status code, then decode the body into the contract type.
/// Decode failures are schema errors, never silently tolerated.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = reject_error_status(response).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Schema(e.to_string()))
}

async fn decode_text(response: Response) -> Result<String, ApiError> {
    let response = reject_error_status(response).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Non-2xx responses become typed rejections carrying the body verbatim,
/// so business-rule messages (invalid OTP, email already registered) reach
/// the caller unchanged.
async fn reject_error_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let message = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "backend rejected request");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}
