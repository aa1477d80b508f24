//! Login route: the email-entry step of the OTP flow. Submitting asks the
//! identity service for a code and hands the pending challenge to the OTP
//! entry page. Service errors are shown verbatim; nothing here stores state
//! beyond the challenge hand-off.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::otp::{now_ms, use_challenge, OtpChallenge};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let flow = use_challenge();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let submit_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move {
            client::request_otp(&email).await?;
            Ok::<String, AppError>(email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(email) => {
                    flow.challenge.set(Some(OtpChallenge::new(email, now_ms())));
                    navigate(paths::OTP, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if submit_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_error.set(Some(AppError::Validation("Email is required.".to_string())));
            return;
        }

        submit_action.dispatch(email_value);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm">
                <div class="mb-8 flex items-center justify-center gap-2">
                    <span class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Productr"
                    </span>
                    <span class="text-blue-600 text-2xl">"∞"</span>
                </div>
                <h1 class="mb-6 text-center text-xl font-semibold text-gray-900 dark:text-white">
                    "Login to your Productr Account"
                </h1>
                <form on:submit=on_submit>
                    <div class="mb-5">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="email"
                        >
                            "Email or Phone number"
                        </label>
                        <input
                            id="email"
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                            autocomplete="email"
                            placeholder="Enter email or phone number"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=submit_action.pending()>
                        {move || if submit_action.pending().get() { "Processing..." } else { "Login" }}
                    </Button>
                    {move || {
                        submit_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                    <div class="mt-6 rounded-lg border border-gray-200 bg-white p-4 text-center text-sm dark:border-gray-700 dark:bg-gray-800">
                        <span class="text-gray-500 dark:text-gray-400">
                            "Don't have a Productr Account? "
                        </span>
                        <A
                            href={paths::REGISTER}
                            {..}
                            class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                        >
                            "SignUp Here"
                        </A>
                    </div>
                </form>
            </div>
        </div>
    }
}
