//! HTTP helpers for the JSON API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. Authenticated calls attach a bearer
//! token provided by callers; the helpers never store credentials themselves.
//!
//! Every endpoint answers with the same envelope, `{success, message?, errors?,
//! data?}`. A `success: false` answer (or a non-2xx status carrying the same
//! envelope) is a handled service rejection and surfaces verbatim; anything
//! else non-2xx is reported with a sanitized body excerpt.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Response envelope shared by every API endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
    #[serde(default)]
    pub data: Option<T>,
}

/// One field-level validation failure reported by the API.
#[derive(Debug, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub msg: String,
}

impl<T> ApiEnvelope<T> {
    /// Joins field errors in arrival order, falling back to the top-level
    /// message, then to a generic line.
    fn rejection_message(&self) -> String {
        if let Some(errors) = &self.errors {
            let joined = errors
                .iter()
                .map(|error| error.msg.as_str())
                .filter(|msg| !msg.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                return joined;
            }
        }
        self.message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Request failed.".to_string())
    }

    /// Unwraps the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, AppError> {
        if !self.success {
            return Err(AppError::Service(self.rejection_message()));
        }
        self.data
            .ok_or_else(|| AppError::Parse("Response is missing expected data.".to_string()))
    }

    /// Accepts a successful envelope whose payload is irrelevant.
    pub fn into_ack(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Service(self.rejection_message()))
        }
    }
}

/// Fetches JSON from the API, attaching a bearer token when provided.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::get(&url).abort_signal(Some(signal)), token.as_deref())
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_envelope::<T>(response).await?.into_data()
}

/// Posts JSON and parses the envelope payload.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_body(path, "POST", body, token).await?.into_data()
}

/// Posts JSON where only the success flag matters.
pub async fn post_json_ack<B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<(), AppError> {
    send_body::<B, serde_json::Value>(path, "POST", body, token)
        .await?
        .into_ack()
}

/// Replaces a resource and parses the envelope payload.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_body(path, "PUT", body, token).await?.into_data()
}

/// Partially updates a resource and parses the envelope payload.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    send_body(path, "PATCH", body, token).await?.into_data()
}

/// Deletes a resource; the envelope payload is ignored.
pub async fn delete_json(path: &str, token: Option<&str>) -> Result<(), AppError> {
    let url = build_url(path);
    let token = token.map(str::to_string);
    let response = send_with_timeout(move |signal| {
        with_bearer(
            Request::delete(&url).abort_signal(Some(signal)),
            token.as_deref(),
        )
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_envelope::<serde_json::Value>(response).await?.into_ack()
}

/// Sends a JSON body with the given method and decodes the envelope.
async fn send_body<B: Serialize, T: DeserializeOwned>(
    path: &str,
    method: &str,
    body: &B,
    token: Option<&str>,
) -> Result<ApiEnvelope<T>, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let method = method.to_string();
    let token = token.map(str::to_string);

    let response = send_with_timeout(move |signal| {
        let builder = match method.as_str() {
            "PUT" => Request::put(&url),
            "PATCH" => Request::patch(&url),
            _ => Request::post(&url),
        };
        with_bearer(builder, token.as_deref())
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_envelope(response).await
}

/// Attaches an `Authorization: Bearer` header when a token is present.
fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
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
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Decodes the API envelope, mapping non-2xx answers that still carry an
/// envelope to service rejections and everything else to HTTP errors.
async fn handle_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, AppError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if response.ok() {
        return decode_envelope(&body);
    }

    if let Ok(envelope) = decode_envelope::<T>(&body) {
        if envelope.message.is_some() || envelope.errors.is_some() {
            return Err(AppError::Service(envelope.rejection_message()));
        }
    }

    Err(AppError::Http {
        status,
        message: sanitize_body(body),
    })
}

fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, AppError> {
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, decode_envelope, sanitize_body, ApiEnvelope};
    use crate::app_lib::AppError;
    use serde_json::Value;

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.productr.dev/", "/users/login"),
            "https://api.productr.dev/users/login"
        );
        assert_eq!(build_url_with_base("", "/users/login"), "/users/login");
    }

    #[test]
    fn rejection_joins_field_errors_in_arrival_order() {
        let envelope: ApiEnvelope<Value> = decode_envelope(
            r#"{"success":false,"errors":[{"msg":"Name is required"},{"msg":"Please provide a valid email"}]}"#,
        )
        .unwrap();

        assert_eq!(
            envelope.into_ack(),
            Err(AppError::Service(
                "Name is required, Please provide a valid email".to_string()
            ))
        );
    }

    #[test]
    fn rejection_falls_back_to_message_then_generic() {
        let with_message: ApiEnvelope<Value> =
            decode_envelope(r#"{"success":false,"message":"Invalid OTP"}"#).unwrap();
        assert_eq!(
            with_message.into_ack(),
            Err(AppError::Service("Invalid OTP".to_string()))
        );

        let bare: ApiEnvelope<Value> = decode_envelope(r#"{"success":false}"#).unwrap();
        assert_eq!(
            bare.into_ack(),
            Err(AppError::Service("Request failed.".to_string()))
        );
    }

    #[test]
    fn success_without_data_is_a_parse_error() {
        let envelope: ApiEnvelope<Value> = decode_envelope(r#"{"success":true}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(AppError::Parse(_))));
    }

    #[test]
    fn success_with_data_unwraps_payload() {
        let envelope: ApiEnvelope<Value> =
            decode_envelope(r#"{"success":true,"data":{"token":"tok"}}"#).unwrap();
        let data = envelope.into_data().unwrap();
        assert_eq!(data["token"], "tok");
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("   ".to_string()), "Request failed.");
        let long = "x".repeat(400);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
