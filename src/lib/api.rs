//! HTTP helpers for JSON APIs with consistent timeouts and error handling. Feature
//! clients use these helpers to avoid duplicating request setup and to enforce a
//! predictable timeout policy. The helpers never log request bodies; credentials
//! and activation codes pass through them.

#[cfg(target_arch = "wasm32")]
use super::errors::{AppError, message_from_body};
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Appends url-encoded query parameters to a URL that has none yet.
pub fn with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().copied())
        .finish();
    format!("{url}?{query}")
}

/// Posts JSON and returns the response status for any 2xx answer.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(base_url: &str, path: &str, body: &B) -> Result<u16, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = encode(body)?;
    let response = send_with_timeout(move |signal| {
        gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_status_response(response).await
}

/// Posts JSON with cookies so the server can set a session.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_credentials<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<u16, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = encode(body)?;
    let response = send_with_timeout(move |signal| {
        gloo_net::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_status_response(response).await
}

/// Issues a GET with query parameters and expects no meaningful body.
#[cfg(target_arch = "wasm32")]
pub async fn get_with_query(
    base_url: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<u16, AppError> {
    let url = with_query(&build_url_with_base(base_url, path), params);
    let response = send_with_timeout(|signal| {
        gloo_net::http::Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_status_response(response).await
}

/// Fetches JSON with cookies and returns `None` on 204 or 401.
#[cfg(target_arch = "wasm32")]
pub async fn get_optional_json_with_credentials<T: DeserializeOwned>(
    base_url: &str,
    path: &str,
) -> Result<Option<T>, AppError> {
    let url = build_url_with_base(base_url, path);
    let response = send_with_timeout(|signal| {
        gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    let status = response.status();
    if status == 204 || status == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<Option<T>>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

#[cfg(target_arch = "wasm32")]
fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = web_sys::AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout =
        gloo_timers::callback::Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

#[cfg(target_arch = "wasm32")]
async fn handle_status_response(response: gloo_net::http::Response) -> Result<u16, AppError> {
    if response.ok() {
        Ok(response.status())
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn http_error(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: message_from_body(&body),
    }
}
