//! `gloo-net` transport for the REST API. Every call goes through [`send`],
//! which joins the path to the configured base URL, attaches caller headers,
//! and aborts after [`REQUEST_TIMEOUT_MS`]. Header values may carry the bearer
//! token, so they are never logged.

use super::{
    config::AppConfig,
    errors::AppError,
    http::{build_url_with_base, error_from_response},
};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use web_sys::{AbortController, AbortSignal};

const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

pub async fn get_json_with_headers<T: DeserializeOwned>(
    path: &str,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let response = send(Method::Get, path, None, headers).await?;
    json_body(response).await
}

/// Unauthenticated JSON `POST`, used by the login and register endpoints.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send(Method::Post, path, Some(encode(body)?), &[]).await?;
    json_body(response).await
}

pub async fn patch_json_with_headers_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let response = send(Method::Patch, path, Some(encode(body)?), headers).await?;
    json_body(response).await
}

/// `PATCH` whose success response carries nothing we need.
pub async fn patch_json_with_headers<B: Serialize>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), AppError> {
    let response = send(Method::Patch, path, Some(encode(body)?), headers).await?;
    ensure_success(response).await
}

pub async fn delete_with_headers(path: &str, headers: &[(String, String)]) -> Result<(), AppError> {
    let response = send(Method::Delete, path, None, headers).await?;
    ensure_success(response).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

fn build_request(
    method: Method,
    url: &str,
    body: Option<String>,
    headers: &[(String, String)],
    signal: &AbortSignal,
) -> Result<Request, AppError> {
    let builder = headers
        .iter()
        .fold(method.builder(url), |builder, (name, value)| {
            builder.header(name, value)
        })
        .abort_signal(Some(signal));

    match body {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(payload),
        None => builder.build(),
    }
    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
}

async fn send(
    method: Method,
    path: &str,
    body: Option<String>,
    headers: &[(String, String)],
) -> Result<Response, AppError> {
    let url = build_url_with_base(&AppConfig::load().api_base_url, path);
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let request = build_request(method, &url, body, headers, &controller.signal())?;

    // Dropping the timer on return cancels it.
    let _timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());

    debug!(?method, %url, "sending request");
    request.send().await.map_err(|err| {
        let mapped = transport_error(&err.to_string());
        warn!(?method, %url, error = %mapped, "request failed before a response arrived");
        mapped
    })
}

/// An aborted fetch is how our timeout shows up; anything else is connectivity.
fn transport_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();
    if lowered.contains("abort") || lowered.contains("timeout") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

async fn ensure_success(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn status_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(status, url = %response.url(), "API returned an error status");
    error_from_response(status, &body)
}
