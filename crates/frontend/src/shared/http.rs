//! Typed JSON requests against the sales API.
//!
//! Every request sends the session cookie (`credentials: include`); the
//! session itself is managed by the API.

use crate::shared::api_utils::api_url;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

/// `api_url(path)` followed by the query string of `query`
pub fn url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", api_url(path), qs))
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

fn check(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = result.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = check(with_session(Request::get(url)).send().await)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = check(with_session(Request::get(url)).send().await)?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = with_session(Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = check(request.send().await)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    check(with_session(Request::delete(url)).send().await)?;
    Ok(())
}
