//! Auth session state and context for the frontend. The provider restores the
//! session once on mount from durable storage and exposes derived auth signals
//! for guards and routes. The session store is the only writer of auth state;
//! the OTP flow commits into it exactly once per successful verification.

use crate::app_lib::storage;
use crate::features::auth::types::User;
use leptos::prelude::*;

/// The live session: identity plus bearer credential.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around fresh signals; `loading` stays set until
    /// `restore` has run.
    fn new() -> Self {
        let session = RwSignal::new(None::<Session>);
        let loading = RwSignal::new(true);
        let is_authenticated =
            Signal::derive(move || session.get().is_some_and(|s| !s.token.is_empty()));
        let is_loading = Signal::derive(move || loading.get());
        Self {
            session,
            loading,
            is_authenticated,
            is_loading,
        }
    }

    /// Rehydrates the session from durable storage. Absent or corrupt entries
    /// read as logged out; either way the loading flag clears.
    pub fn restore(&self) {
        self.loading.set(true);
        if let Some((user, token)) = storage::load_session() {
            self.session.set(Some(Session { user, token }));
        }
        self.loading.set(false);
    }

    /// Persists and publishes a fresh session. The storage write lands before
    /// the in-memory update so an immediately following read observes both.
    /// Committing identical values twice leaves state unchanged.
    pub fn commit_session(&self, user: User, token: String) {
        if token.trim().is_empty() {
            return;
        }
        storage::store_session(&user, &token);
        let next = Session { user, token };
        if self.session.get_untracked().as_ref() != Some(&next) {
            self.session.set(Some(next));
        }
    }

    /// Clears the in-memory session and the persisted entries. Safe to call
    /// when already logged out.
    pub fn clear_session(&self) {
        storage::clear_session();
        if self.session.get_untracked().is_some() {
            self.session.set(None);
        }
    }

    /// Read-only snapshot of the current session.
    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    /// The signed-in identity, if any.
    pub fn user(&self) -> Option<User> {
        self.session.get().map(|s| s.user)
    }

    /// The bearer credential for authenticated API calls.
    pub fn token(&self) -> Option<String> {
        self.session.get().map(|s| s.token)
    }
}

/// Provides auth context and restores the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    auth.restore();

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let auth = AuthContext::new();
        auth.restore();
        auth
    })
}

#[cfg(test)]
mod tests {
    use super::AuthContext;
    use crate::app_lib::storage;
    use crate::features::auth::types::User;
    use leptos::prelude::GetUntracked;

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            role: String::new(),
        }
    }

    #[test]
    fn starts_loading_and_logged_out() {
        let auth = AuthContext::new();
        assert!(auth.is_loading.get_untracked());
        assert!(!auth.is_authenticated.get_untracked());
    }

    #[test]
    fn commit_publishes_and_clear_resets() {
        storage::clear_session();
        let auth = AuthContext::new();
        auth.restore();

        auth.commit_session(sample_user(), "tok".to_string());
        assert!(auth.is_authenticated.get_untracked());
        assert_eq!(auth.token(), Some("tok".to_string()));
        assert_eq!(auth.user().map(|u| u.email), Some("a@b.com".to_string()));
        assert!(storage::load_session().is_some());

        auth.clear_session();
        assert!(!auth.is_authenticated.get_untracked());
        assert!(auth.session().is_none());
        assert!(storage::load_session().is_none());

        // clearing again is a no-op, not an error
        auth.clear_session();
        assert!(auth.session().is_none());
    }

    #[test]
    fn commit_is_idempotent() {
        storage::clear_session();
        let auth = AuthContext::new();
        auth.restore();

        auth.commit_session(sample_user(), "tok".to_string());
        let before = auth.session();
        auth.commit_session(sample_user(), "tok".to_string());
        assert_eq!(auth.session(), before);
    }

    #[test]
    fn commit_rejects_blank_token() {
        storage::clear_session();
        let auth = AuthContext::new();
        auth.restore();

        auth.commit_session(sample_user(), "   ".to_string());
        assert!(!auth.is_authenticated.get_untracked());
        assert!(storage::load_session().is_none());
    }

    #[test]
    fn otp_verification_scenario_commits_the_session() {
        use crate::features::auth::otp::{OtpChallenge, VerifyStart};

        storage::clear_session();
        let auth = AuthContext::new();
        auth.restore();

        // email accepted -> challenge issued with the cooldown running
        let mut challenge = OtpChallenge::new("a@b.com", 0.0);
        assert_eq!(challenge.resend_remaining_secs(0.0), 20);

        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            challenge.enter_digit(index, digit);
        }
        let VerifyStart::Ready(code) = challenge.begin_verify() else {
            panic!("expected a complete code");
        };
        assert_eq!(code, "123456");

        // service accepts -> the session is committed exactly once
        challenge.verify_succeeded();
        auth.commit_session(
            User {
                id: "1".to_string(),
                name: "Ada".to_string(),
                email: "a@b.com".to_string(),
                role: String::new(),
            },
            "tok".to_string(),
        );
        assert!(auth.is_authenticated.get_untracked());
        assert_eq!(auth.token(), Some("tok".to_string()));
        storage::clear_session();
    }

    #[test]
    fn restore_picks_up_persisted_session() {
        storage::clear_session();
        storage::store_session(&sample_user(), "tok");

        let auth = AuthContext::new();
        auth.restore();
        assert!(!auth.is_loading.get_untracked());
        assert!(auth.is_authenticated.get_untracked());
        assert_eq!(auth.token(), Some("tok".to_string()));
        storage::clear_session();
    }
}
