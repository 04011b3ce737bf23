//! HTTP helpers for the auth API with consistent timeouts. The helpers return
//! the raw status and body so each operation can apply its own status mapping
//! in `features::auth::protocol`. They attach no credentials; the access token
//! lives in the session cache and is only used by the checkout flow.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Raw response handed to the protocol layer for status mapping.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts JSON to a path under the configured API base.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, AppError> {
    send_json(Method::POST, path, body).await
}

/// Patches JSON to a path under the configured API base.
pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, AppError> {
    send_json(Method::PATCH, path, body).await
}

async fn send_json<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<ApiResponse, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(ApiResponse { status, body })
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    // No response at all (DNS, CORS, abort) is a connectivity error, distinct
    // from every HTTP status mapping.
    request.send().await.map_err(|_| AppError::Connectivity)
}
