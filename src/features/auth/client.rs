//! Client wrappers for the identity API endpoints. These helpers centralize
//! paths and payload shapes, keeping auth flows consistent and preventing
//! token leakage in route code.

use crate::{
    app_lib::{post_json, post_json_ack, AppError},
    features::auth::types::{AuthPayload, LoginRequest, OtpRequest, RegisterRequest},
};

/// Asks the identity service to issue a login OTP for `email`.
/// The code itself is delivered out of band; the response carries no secrets.
pub async fn request_otp(email: &str) -> Result<(), AppError> {
    post_json_ack("/users/otp/request", &OtpRequest::login(email), None).await
}

/// Exchanges `{email, otp}` for a session. One-shot: a rejected code is
/// surfaced to the caller, never retried here.
pub async fn login(request: &LoginRequest) -> Result<AuthPayload, AppError> {
    post_json("/users/login", request, None).await
}

/// Registers a new account and returns the session issued with it.
pub async fn register(request: &RegisterRequest) -> Result<AuthPayload, AppError> {
    post_json("/users/register", request, None).await
}
