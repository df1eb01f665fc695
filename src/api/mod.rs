//! REST API Bindings
//!
//! Frontend bindings to the backend's `/api` routes, organized by domain.
//! Every request resolves to one of two outcomes: a parsed JSON body, or an
//! `ApiError` covering transport failures, non-2xx statuses, and parse
//! failures alike. No retries, no cancellation.

pub mod restaurants;
pub mod reviews;
pub mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Base path of the backend REST contract
pub const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Resolve an `/api/...` path against the page origin. reqwest needs an
/// absolute URL even though the browser fetch underneath would accept a
/// relative one.
fn absolute(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string());
    format!("{origin}{path}")
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = reqwest::get(absolute(path)).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = reqwest::Client::new()
        .post(absolute(path))
        .json(body)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}
