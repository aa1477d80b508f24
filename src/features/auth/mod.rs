//! Auth feature module covering the OTP login flow, registration, session
//! persistence, and route gating. It keeps authentication logic out of the UI
//! and must stay aligned with backend protocol expectations. This module
//! touches security boundaries and must avoid logging token material.
//!
//! Flow Overview: Login submits the email for an OTP challenge and hands off
//! to the code-entry page. Verification exchanges `{email, otp}` for a
//! `{user, token}` pair, which is committed to the session store exactly once
//! and persisted for reloads. Registration returns the same pair directly.

pub(crate) mod client;
mod guards;
pub(crate) mod otp;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::{ProtectedRoute, PublicRoute};
