//! Shared frontend utilities for API access, configuration, errors, session
//! persistence, and build metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Request:** The login page POSTs `/users/otp/request` with the email and
//!    a `login` purpose, then hands off to the OTP entry page.
//! 2. **Verify:** The OTP page POSTs `/users/login` with `{email, otp}`; on
//!    success the returned `{user, token}` pair is committed to the session
//!    store and persisted under the `auth.user`/`auth.token` storage keys.
//! 3. **Restore:** On startup the session store rehydrates from those keys so
//!    a reload keeps the user signed in.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging tokens.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;

pub(crate) use api::{delete_json, get_json, patch_json, post_json, post_json_ack, put_json};
pub(crate) use errors::AppError;
