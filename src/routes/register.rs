//! Registration route. Validates inputs locally before calling the identity
//! service; a successful registration returns a full session which is
//! committed directly, skipping the OTP hop.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::RegisterRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Maximum accepted account-name length.
const MAX_NAME_LEN: usize = 100;
/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Local form validation; the first failing rule wins. Never contacts the
/// service.
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(
            "Name cannot exceed 100 characters".to_string(),
        ));
    }

    let email = email.trim();
    if !is_plausible_email(email) {
        return Err(AppError::Validation(
            "Please provide a valid email".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    if password != confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    Ok(RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Cheap shape check: one `@` with a dotted, non-empty domain. The service
/// remains the authority on addresses.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && !email.contains(char::is_whitespace)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(payload) => {
                    auth.commit_session(payload.user, payload.token);
                    navigate(
                        paths::DASHBOARD,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if register_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        match validate_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm">
                <h1 class="mb-6 text-center text-xl font-semibold text-gray-900 dark:text-white">
                    "Register"
                </h1>
                <form on:submit=on_submit>
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
                    <TextField label="Name" value=name />
                    <TextField label="Email" value=email input_type="email" />
                    <TextField label="Password" value=password input_type="password" />
                    <TextField
                        label="Confirm Password"
                        value=confirm_password
                        input_type="password"
                    />
                    <Button button_type="submit" disabled=register_action.pending()>
                        {move || {
                            if register_action.pending().get() { "Registering..." } else { "Register" }
                        }}
                    </Button>
                    {move || {
                        register_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    <div class="mt-6 text-center text-sm">
                        <span class="text-gray-500 dark:text-gray-400">
                            "Already have an account? "
                        </span>
                        <A
                            href={paths::LOGIN}
                            {..}
                            class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                        >
                            "Login here"
                        </A>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{is_plausible_email, validate_registration};
    use crate::app_lib::AppError;

    #[test]
    fn accepts_a_complete_registration() {
        let request = validate_registration("Ada", "a@b.com", "secret1", "secret1")
            .expect("valid registration");
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "a@b.com");
    }

    #[test]
    fn rejects_each_invalid_field_in_order() {
        assert_eq!(
            validate_registration("  ", "a@b.com", "secret1", "secret1"),
            Err(AppError::Validation("Name is required".to_string()))
        );
        let long_name = "x".repeat(101);
        assert_eq!(
            validate_registration(&long_name, "a@b.com", "secret1", "secret1"),
            Err(AppError::Validation(
                "Name cannot exceed 100 characters".to_string()
            ))
        );
        assert_eq!(
            validate_registration("Ada", "not-an-email", "secret1", "secret1"),
            Err(AppError::Validation(
                "Please provide a valid email".to_string()
            ))
        );
        assert_eq!(
            validate_registration("Ada", "a@b.com", "short", "short"),
            Err(AppError::Validation(
                "Password must be at least 6 characters".to_string()
            ))
        );
        assert_eq!(
            validate_registration("Ada", "a@b.com", "secret1", "secret2"),
            Err(AppError::Validation("Passwords do not match".to_string()))
        );
    }

    #[test]
    fn email_shape_check_covers_the_common_cases() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email("first.last@sub.domain.io"));
        assert!(!is_plausible_email("plain"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@b.c"));
        assert!(!is_plausible_email("a b@c.com"));
    }
}
