//! REST calls against the registration backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies are kept as
//! distinct `ApiError` variants so callers can choose their own wording, but
//! nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{Registration, RegistrationRecord};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map an HTTP status to success (2xx) or `ApiError::Status`.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Decode the list endpoint body. Anything other than a JSON array of
/// registration objects is an error.
#[cfg(any(test, feature = "hydrate"))]
fn decode_registrations(body: &str) -> Result<Vec<RegistrationRecord>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fully described registration POST, built before handing it to the browser.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubmitRequest {
    method: &'static str,
    url: String,
    content_type: &'static str,
    body: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn build_submit_request(config: &ApiConfig, registration: &Registration) -> Result<SubmitRequest, ApiError> {
    let body = serde_json::to_string(registration).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(SubmitRequest { method: "POST", url: config.register_url(), content_type: "application/json", body })
}

/// Submit a registration via `POST {base}/api/register`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the backend answers with
/// a non-2xx status. The response body is ignored.
pub async fn submit_registration(config: &ApiConfig, registration: &Registration) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = build_submit_request(config, registration)?;
        let method = req
            .method
            .parse::<gloo_net::http::Method>()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = gloo_net::http::RequestBuilder::new(&req.url)
            .method(method)
            .header("Content-Type", req.content_type)
            .body(req.body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, registration);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every registration via `GET {base}/api/registrations`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a JSON array of registrations.
pub async fn fetch_registrations(config: &ApiConfig) -> Result<Vec<RegistrationRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.registrations_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_registrations(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}
