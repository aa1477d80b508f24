//! OTP challenge state machine for the login flow. The machine is plain data
//! driven by events, so it is testable without a DOM: routes own one inside a
//! signal, feed it input/paste/submit events, and apply the focus hints it
//! returns to the actual input elements.
//!
//! Lifecycle: the login page creates a challenge when the email submission is
//! accepted, the code-entry page drives it, and it is dropped on successful
//! verification. It is never persisted.

use crate::app_lib::AppError;
use leptos::prelude::*;

/// Number of code cells; the service issues 6-digit codes.
pub const CODE_LEN: usize = 6;
/// Cooldown before the code can be re-requested.
pub const RESEND_COOLDOWN_MS: f64 = 20_000.0;

/// Where the challenge currently stands. `Submitting` covers an in-flight
/// resend request; `Verifying` an in-flight code check. Both act as
/// single-flight gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Submitting,
    Verifying,
    Failed,
    Verified,
}

/// What a verify request resolved to before any network traffic.
#[derive(Debug, PartialEq)]
pub enum VerifyStart {
    /// All cells populated; the assembled code is ready to send.
    Ready(String),
    /// Fewer than six digits entered; no network call is made.
    Incomplete,
    /// A verification (or resend) is already in flight; drop the event.
    AlreadyRunning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OtpChallenge {
    email: String,
    digits: [String; CODE_LEN],
    state: AttemptState,
    resend_available_at: f64,
}

impl OtpChallenge {
    /// Creates a challenge for `email` with the resend cooldown already
    /// running (the service has just sent a code).
    pub fn new(email: impl Into<String>, now_ms: f64) -> Self {
        Self {
            email: email.into(),
            digits: Default::default(),
            state: AttemptState::Idle,
            resend_available_at: now_ms + RESEND_COOLDOWN_MS,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn digit(&self, index: usize) -> &str {
        self.digits.get(index).map_or("", String::as_str)
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn resend_available_at(&self) -> f64 {
        self.resend_available_at
    }

    pub fn can_resend(&self, now_ms: f64) -> bool {
        now_ms >= self.resend_available_at
    }

    /// Whole seconds until resend unlocks, for countdown display.
    pub fn resend_remaining_secs(&self, now_ms: f64) -> u32 {
        let remaining_ms = self.resend_available_at - now_ms;
        if remaining_ms <= 0.0 {
            0
        } else {
            (remaining_ms / 1000.0).ceil() as u32
        }
    }

    fn is_busy(&self) -> bool {
        matches!(self.state, AttemptState::Submitting | AttemptState::Verifying)
    }

    /// Writes one cell. A single digit lands in the cell and hints focus to
    /// the next one; an empty value clears the cell. Anything else (multiple
    /// characters, non-digits) is dropped. Entering digits after a rejection
    /// returns the challenge to `Idle` so the stale error clears.
    pub fn enter_digit(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= CODE_LEN || self.is_busy() {
            return None;
        }

        if value.is_empty() {
            self.digits[index].clear();
            return None;
        }

        let mut chars = value.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if !ch.is_ascii_digit() {
            return None;
        }

        self.digits[index] = ch.to_string();
        if self.state == AttemptState::Failed {
            self.state = AttemptState::Idle;
        }
        (index < CODE_LEN - 1).then_some(index + 1)
    }

    /// Backspace over an already-empty cell hints focus to the previous one;
    /// over a filled cell the browser clears it first (handled via
    /// `enter_digit` with an empty value).
    pub fn backspace(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= CODE_LEN || self.is_busy() {
            return None;
        }
        self.digits[index].is_empty().then_some(index - 1)
    }

    /// Fills cells left-to-right from index 0 with the leading digits of the
    /// pasted text (up to six), overwriting existing entries, and hints focus
    /// to the last filled cell.
    pub fn paste(&mut self, text: &str) -> Option<usize> {
        if self.is_busy() {
            return None;
        }

        let mut filled = 0;
        for ch in text.chars().take(CODE_LEN) {
            if !ch.is_ascii_digit() {
                break;
            }
            self.digits[filled] = ch.to_string();
            filled += 1;
        }

        if filled == 0 {
            return None;
        }
        if self.state == AttemptState::Failed {
            self.state = AttemptState::Idle;
        }
        Some((filled - 1).min(CODE_LEN - 1))
    }

    /// The assembled code, present only when all six cells are populated.
    pub fn code(&self) -> Option<String> {
        if self.digits.iter().any(String::is_empty) {
            return None;
        }
        Some(self.digits.concat())
    }

    /// Gate for a verification attempt. Moves to `Verifying` only when the
    /// code is complete and nothing else is in flight.
    pub fn begin_verify(&mut self) -> VerifyStart {
        if self.is_busy() {
            return VerifyStart::AlreadyRunning;
        }
        match self.code() {
            Some(code) => {
                self.state = AttemptState::Verifying;
                VerifyStart::Ready(code)
            }
            None => VerifyStart::Incomplete,
        }
    }

    /// The service rejected the code. Digits stay put so the user can correct
    /// them; they are cleared only by an explicit resend.
    pub fn verify_rejected(&mut self) {
        self.state = AttemptState::Failed;
    }

    /// The service accepted the code; terminal for this challenge.
    pub fn verify_succeeded(&mut self) {
        self.state = AttemptState::Verified;
    }

    /// Gate for a resend request: a no-op while the cooldown is running or
    /// another request is in flight.
    pub fn begin_resend(&mut self, now_ms: f64) -> bool {
        if self.is_busy() || !self.can_resend(now_ms) {
            return false;
        }
        self.state = AttemptState::Submitting;
        true
    }

    /// A fresh code is on its way: clear every cell and restart the cooldown.
    pub fn resend_succeeded(&mut self, now_ms: f64) {
        for digit in &mut self.digits {
            digit.clear();
        }
        self.state = AttemptState::Idle;
        self.resend_available_at = now_ms + RESEND_COOLDOWN_MS;
    }

    /// The resend failed; the existing cooldown is left untouched.
    pub fn resend_failed(&mut self) {
        self.state = AttemptState::Idle;
    }
}

/// Local precondition failure for an incomplete code; worded exactly as the
/// form shows it.
pub fn incomplete_code_error() -> AppError {
    AppError::Validation("Please enter a valid OTP".to_string())
}

/// Context handing the pending challenge from the login page to the
/// code-entry page. Absence means the email step has not run; the code-entry
/// page then bounces back to login.
#[derive(Clone, Copy)]
pub struct ChallengeContext {
    pub challenge: RwSignal<Option<OtpChallenge>>,
}

/// Provides the challenge hand-off slot for the login flow.
#[component]
pub fn ChallengeProvider(children: Children) -> impl IntoView {
    provide_context(ChallengeContext {
        challenge: RwSignal::new(None),
    });

    view! { {children()} }
}

/// Returns the challenge context or an empty fallback slot.
pub fn use_challenge() -> ChallengeContext {
    use_context::<ChallengeContext>().unwrap_or_else(|| ChallengeContext {
        challenge: RwSignal::new(None),
    })
}

/// Millisecond wall-clock for countdown math.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::{AttemptState, OtpChallenge, VerifyStart, CODE_LEN, RESEND_COOLDOWN_MS};

    fn filled(now_ms: f64) -> OtpChallenge {
        let mut challenge = OtpChallenge::new("a@b.com", now_ms);
        for (index, digit) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            challenge.enter_digit(index, digit);
        }
        challenge
    }

    fn digits(challenge: &OtpChallenge) -> Vec<String> {
        (0..CODE_LEN).map(|i| challenge.digit(i).to_string()).collect()
    }

    #[test]
    fn cells_hold_at_most_one_digit_each() {
        let mut challenge = OtpChallenge::new("a@b.com", 0.0);

        assert_eq!(challenge.enter_digit(0, "7"), Some(1));
        assert_eq!(challenge.digit(0), "7");

        // multi-character and non-digit input is dropped
        assert_eq!(challenge.enter_digit(1, "12"), None);
        assert_eq!(challenge.enter_digit(1, "x"), None);
        assert_eq!(challenge.digit(1), "");

        // deleting clears the cell without moving focus
        assert_eq!(challenge.enter_digit(0, ""), None);
        assert_eq!(challenge.digit(0), "");

        // out-of-range writes are ignored
        assert_eq!(challenge.enter_digit(CODE_LEN, "1"), None);
    }

    #[test]
    fn focus_advances_on_entry_and_stops_at_the_last_cell() {
        let mut challenge = OtpChallenge::new("a@b.com", 0.0);
        for index in 0..CODE_LEN - 1 {
            assert_eq!(challenge.enter_digit(index, "1"), Some(index + 1));
        }
        assert_eq!(challenge.enter_digit(CODE_LEN - 1, "1"), None);
    }

    #[test]
    fn backspace_retreats_only_over_empty_cells() {
        let mut challenge = OtpChallenge::new("a@b.com", 0.0);
        challenge.enter_digit(0, "1");

        assert_eq!(challenge.backspace(1), Some(0));
        assert_eq!(challenge.backspace(0), None);

        challenge.enter_digit(1, "2");
        assert_eq!(challenge.backspace(1), None);
    }

    #[test]
    fn paste_fills_left_to_right_and_focuses_last_filled() {
        let mut challenge = filled(0.0);
        assert_eq!(challenge.paste("987654321"), Some(5));
        assert_eq!(digits(&challenge), ["9", "8", "7", "6", "5", "4"]);

        let mut partial = OtpChallenge::new("a@b.com", 0.0);
        assert_eq!(partial.paste("12"), Some(1));
        assert_eq!(digits(&partial), ["1", "2", "", "", "", ""]);

        assert_eq!(partial.paste("abc"), None);
    }

    #[test]
    fn verify_requires_all_six_digits() {
        let mut challenge = OtpChallenge::new("a@b.com", 0.0);
        challenge.enter_digit(0, "1");
        assert_eq!(challenge.begin_verify(), VerifyStart::Incomplete);
        assert_eq!(challenge.state(), AttemptState::Idle);

        let mut complete = filled(0.0);
        assert_eq!(
            complete.begin_verify(),
            VerifyStart::Ready("123456".to_string())
        );
        assert_eq!(complete.state(), AttemptState::Verifying);
    }

    #[test]
    fn verify_is_single_flight() {
        let mut challenge = filled(0.0);
        assert!(matches!(challenge.begin_verify(), VerifyStart::Ready(_)));
        assert_eq!(challenge.begin_verify(), VerifyStart::AlreadyRunning);

        // input events are ignored while a request is in flight
        assert_eq!(challenge.enter_digit(0, "9"), None);
        assert_eq!(challenge.paste("999999"), None);
        assert_eq!(challenge.digit(0), "1");
    }

    #[test]
    fn rejection_keeps_digits_for_correction() {
        let mut challenge = filled(0.0);
        challenge.begin_verify();
        challenge.verify_rejected();

        assert_eq!(challenge.state(), AttemptState::Failed);
        assert_eq!(digits(&challenge), ["1", "2", "3", "4", "5", "6"]);

        // correcting a digit returns to an interactive state
        assert_eq!(challenge.enter_digit(0, "9"), Some(1));
        assert_eq!(challenge.state(), AttemptState::Idle);
    }

    #[test]
    fn resend_is_a_noop_before_the_cooldown_elapses() {
        let mut challenge = filled(1_000.0);
        let before = challenge.clone();

        assert!(!challenge.begin_resend(1_000.0 + RESEND_COOLDOWN_MS - 1.0));
        assert_eq!(challenge, before);
    }

    #[test]
    fn resend_clears_digits_and_restarts_the_cooldown() {
        let mut challenge = filled(1_000.0);
        let unlocked = 1_000.0 + RESEND_COOLDOWN_MS;

        assert!(challenge.begin_resend(unlocked));
        assert_eq!(challenge.state(), AttemptState::Submitting);
        // second resend while one is in flight is dropped
        assert!(!challenge.begin_resend(unlocked));

        challenge.resend_succeeded(unlocked);
        assert_eq!(digits(&challenge), ["", "", "", "", "", ""]);
        assert_eq!(challenge.resend_available_at(), unlocked + RESEND_COOLDOWN_MS);
        assert_eq!(challenge.resend_remaining_secs(unlocked), 20);
    }

    #[test]
    fn failed_resend_keeps_the_existing_cooldown() {
        let mut challenge = filled(1_000.0);
        let unlocked = 1_000.0 + RESEND_COOLDOWN_MS;
        let deadline_before = challenge.resend_available_at();

        assert!(challenge.begin_resend(unlocked));
        challenge.resend_failed();

        assert_eq!(challenge.resend_available_at(), deadline_before);
        assert_eq!(digits(&challenge), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(challenge.state(), AttemptState::Idle);
    }

    #[test]
    fn countdown_is_derived_from_the_deadline() {
        let challenge = OtpChallenge::new("a@b.com", 0.0);
        assert_eq!(challenge.resend_remaining_secs(0.0), 20);
        assert_eq!(challenge.resend_remaining_secs(19_100.0), 1);
        assert_eq!(challenge.resend_remaining_secs(RESEND_COOLDOWN_MS), 0);
        assert!(challenge.can_resend(RESEND_COOLDOWN_MS));
        assert!(!challenge.can_resend(19_999.0));
    }
}
