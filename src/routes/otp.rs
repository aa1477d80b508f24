//! OTP entry route.
//!
//! Drives the pending challenge created by the login page:
//! 1. Six single-digit cells with auto-advance, backspace retreat, and paste.
//! 2. Verify against the identity service and commit the session once.
//! 3. Resend with a 20-second cooldown; digits clear only on resend.
//!
//! Reaching this page without a pending challenge bounces back to login.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::otp::{
    incomplete_code_error, now_ms, use_challenge, AttemptState, VerifyStart, CODE_LEN,
};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{AuthPayload, LoginRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

#[component]
pub fn OtpPage() -> impl IntoView {
    let auth = use_auth();
    let flow = use_challenge();
    let navigate = use_navigate();

    let (error, set_error) = signal::<Option<AppError>>(None);
    let (now, set_now) = signal(now_ms());
    let cell_refs: [NodeRef<Input>; CODE_LEN] = std::array::from_fn(|_| NodeRef::new());

    // One tick per second drives the resend countdown; the timer dies with
    // the page.
    #[cfg(target_arch = "wasm32")]
    {
        let interval =
            gloo_timers::callback::Interval::new(1_000, move || set_now.set(now_ms()));
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    // No pending challenge and no session: the email step was skipped.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if flow.challenge.with(|challenge| challenge.is_none())
                && !auth.is_authenticated.get()
                && !auth.is_loading.get()
            {
                navigate(paths::LOGIN, Default::default());
            }
        });
    }

    let focus_cell = move |index: usize| {
        if let Some(input) = cell_refs[index].get_untracked() {
            let _ = input.focus();
        }
    };

    let verify_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::request_otp(&email).await }
    });

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(result) = verify_action.value().get() {
                match result {
                    Ok(AuthPayload { user, token }) => {
                        flow.challenge.update(|challenge| {
                            if let Some(challenge) = challenge {
                                challenge.verify_succeeded();
                            }
                        });
                        auth.commit_session(user, token);
                        flow.challenge.set(None);
                        navigate(
                            paths::DASHBOARD,
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => {
                        flow.challenge.update(|challenge| {
                            if let Some(challenge) = challenge {
                                challenge.verify_rejected();
                            }
                        });
                        set_error.set(Some(err));
                    }
                }
            }
        });
    }

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            flow.challenge.update(|challenge| {
                let Some(challenge) = challenge else { return };
                match &result {
                    Ok(()) => challenge.resend_succeeded(now_ms()),
                    Err(_) => challenge.resend_failed(),
                }
            });
            if let Err(err) = result {
                set_error.set(Some(err));
            } else {
                focus_cell(0);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let start = flow
            .challenge
            .try_update(|challenge| challenge.as_mut().map(|c| c.begin_verify()))
            .flatten();
        let email = flow
            .challenge
            .with_untracked(|challenge| challenge.as_ref().map(|c| c.email().to_string()));

        match (start, email) {
            (Some(VerifyStart::Ready(otp)), Some(email)) => {
                verify_action.dispatch(LoginRequest { email, otp });
            }
            (Some(VerifyStart::Incomplete), _) => set_error.set(Some(incomplete_code_error())),
            _ => {}
        }
    };

    let on_resend = move |_| {
        set_error.set(None);
        let started = flow
            .challenge
            .try_update(|challenge| {
                challenge
                    .as_mut()
                    .is_some_and(|c| c.begin_resend(now_ms()))
            })
            .unwrap_or(false);
        if !started {
            return;
        }
        if let Some(email) = flow
            .challenge
            .with_untracked(|challenge| challenge.as_ref().map(|c| c.email().to_string()))
        {
            resend_action.dispatch(email);
        }
    };

    let verifying = move || {
        flow.challenge
            .with(|challenge| {
                challenge
                    .as_ref()
                    .map(|c| c.state() == AttemptState::Verifying)
            })
            .unwrap_or(false)
    };
    let can_resend = move || {
        flow.challenge
            .with(|challenge| challenge.as_ref().map(|c| c.can_resend(now.get())))
            .unwrap_or(false)
    };
    let remaining_secs = move || {
        flow.challenge
            .with(|challenge| {
                challenge
                    .as_ref()
                    .map(|c| c.resend_remaining_secs(now.get()))
            })
            .unwrap_or(0)
    };
    let has_error = move || error.get().is_some();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm">
                <h1 class="mb-6 text-center text-xl font-semibold text-gray-900 dark:text-white">
                    "Login to your Productr Account"
                </h1>
                <form on:submit=on_submit>
                    <label class="block mb-2 text-sm font-medium text-gray-400">
                        "Enter OTP"
                    </label>
                    <div
                        class="mb-4 flex justify-between gap-2"
                        on:paste=move |event| {
                            event.prevent_default();
                            let text = event
                                .dyn_ref::<web_sys::ClipboardEvent>()
                                .and_then(|clipboard| clipboard.clipboard_data())
                                .and_then(|data| data.get_data("text").ok())
                                .unwrap_or_default();
                            set_error.set(None);
                            let hint = flow
                                .challenge
                                .try_update(|challenge| {
                                    challenge.as_mut().and_then(|c| c.paste(&text))
                                })
                                .flatten();
                            if let Some(index) = hint {
                                focus_cell(index);
                            }
                        }
                    >
                        {cell_refs
                            .iter()
                            .copied()
                            .enumerate()
                            .map(|(index, cell_ref)| {
                                let digit_value = move || {
                                    flow.challenge.with(|challenge| {
                                        challenge
                                            .as_ref()
                                            .map(|c| c.digit(index).to_string())
                                            .unwrap_or_default()
                                    })
                                };
                                view! {
                                    <input
                                        node_ref=cell_ref
                                        type="text"
                                        inputmode="numeric"
                                        maxlength="1"
                                        autofocus={index == 0}
                                        class="h-12 w-12 rounded-lg border border-gray-300 bg-gray-50 text-center text-lg text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                                        class=("border-red-400", has_error)
                                        prop:value=digit_value
                                        on:input=move |event| {
                                            set_error.set(None);
                                            let value = event_target_value(&event);
                                            let hint = flow
                                                .challenge
                                                .try_update(|challenge| {
                                                    challenge
                                                        .as_mut()
                                                        .and_then(|c| c.enter_digit(index, &value))
                                                })
                                                .flatten();
                                            if let Some(next) = hint {
                                                focus_cell(next);
                                            }
                                        }
                                        on:keydown=move |event| {
                                            if event.key() == "Backspace" {
                                                let hint = flow
                                                    .challenge
                                                    .try_update(|challenge| {
                                                        challenge
                                                            .as_mut()
                                                            .and_then(|c| c.backspace(index))
                                                    })
                                                    .flatten();
                                                if let Some(previous) = hint {
                                                    focus_cell(previous);
                                                }
                                            }
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mb-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}

                    <Button button_type="submit" disabled=Signal::derive(verifying)>
                        {move || if verifying() { "Verifying..." } else { "Enter your OTP" }}
                    </Button>
                    {move || verifying().then_some(view! { <div class="mt-4"><Spinner /></div> })}

                    <div class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                        "Didn't receive OTP? "
                        {move || {
                            if can_resend() {
                                view! {
                                    <button
                                        type="button"
                                        class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                                        on:click=on_resend
                                    >
                                        "Resend"
                                    </button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <span>{move || format!("Resend in {}s", remaining_secs())}</span>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </form>
            </div>
        </div>
    }
}
