//! Request and response types for auth-related API calls. These payloads carry
//! one-time codes and bearer credentials, so they must never be logged.

use serde::{Deserialize, Serialize};

/// Identity record for the signed-in user. The API uses `_id` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OtpRequest {
    pub email: String,
    pub purpose: String,
}

impl OtpRequest {
    /// Builds the login-purpose challenge request the backend expects.
    pub fn login(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            purpose: "login".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Session payload returned by login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_maps_wire_id_field() {
        let user: User = serde_json::from_str(
            r#"{"_id":"651f","name":"Ada","email":"a@b.com","role":"admin"}"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(user.id, "651f");
        assert_eq!(user.role, "admin");

        let json = serde_json::to_string(&user).expect("Failed to serialize");
        assert!(json.contains(r#""_id":"651f""#));
    }

    #[test]
    fn user_role_defaults_when_absent() {
        let user: User =
            serde_json::from_str(r#"{"_id":"1","name":"Ada","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.role, "");
    }

    #[test]
    fn otp_request_carries_login_purpose() {
        let json = serde_json::to_string(&OtpRequest::login("a@b.com")).unwrap();
        assert!(json.contains(r#""purpose":"login""#));
    }

    #[test]
    fn auth_payload_round_trips() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"user":{"_id":"1","name":"Ada","email":"a@b.com"},"token":"tok"}"#,
        )
        .unwrap();
        assert_eq!(payload.token, "tok");
        assert_eq!(payload.user.email, "a@b.com");
    }
}
