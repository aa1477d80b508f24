//! Route gating derived from session state. The decision itself is a pure
//! function so it can be tested off-DOM; the wrapper components apply it on
//! every navigation. UX-only guard; real access control lives on the API.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// What a navigation target requires from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable only with a session (dashboard, products, items, users).
    Protected,
    /// Reachable only without one (login, code entry, registration).
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration is still pending; render an interstitial and make
    /// no redirect decision yet.
    Wait,
    Allow,
    RedirectToLogin,
    RedirectToLanding,
}

/// Pure navigation decision. The original target is discarded on redirect;
/// there is no "return to" memory.
pub fn route_decision(is_authenticated: bool, loading: bool, access: RouteAccess) -> GuardDecision {
    if loading {
        return GuardDecision::Wait;
    }
    match access {
        RouteAccess::Protected if !is_authenticated => GuardDecision::RedirectToLogin,
        RouteAccess::PublicOnly if is_authenticated => GuardDecision::RedirectToLanding,
        _ => GuardDecision::Allow,
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

#[component]
fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let decision = Signal::derive(move || {
        route_decision(auth.is_authenticated.get(), auth.is_loading.get(), access)
    });

    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectToLogin => navigate(paths::LOGIN, replace()),
        GuardDecision::RedirectToLanding => navigate(paths::DASHBOARD, replace()),
        GuardDecision::Wait | GuardDecision::Allow => {}
    });

    view! {
        {move || {
            if decision.get() == GuardDecision::Allow {
                Either::Left(children())
            } else {
                Either::Right(
                    view! {
                        <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
                            <div class="animate-pulse text-gray-400">"Loading..."</div>
                        </div>
                    },
                )
            }
        }}
    }
}

/// Renders children only for signed-in users; everyone else lands on login.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    view! { <Guarded access=RouteAccess::Protected children=children /> }
}

/// Renders children only for signed-out users; a live session is sent to the
/// landing route instead.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    view! { <Guarded access=RouteAccess::PublicOnly children=children /> }
}

#[cfg(test)]
mod tests {
    use super::{route_decision, GuardDecision, RouteAccess};

    #[test]
    fn loading_defers_every_decision() {
        for access in [RouteAccess::Protected, RouteAccess::PublicOnly] {
            for is_authenticated in [false, true] {
                assert_eq!(
                    route_decision(is_authenticated, true, access),
                    GuardDecision::Wait
                );
            }
        }
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login_from_protected_targets() {
        assert_eq!(
            route_decision(false, false, RouteAccess::Protected),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            route_decision(true, false, RouteAccess::Protected),
            GuardDecision::Allow
        );
    }

    #[test]
    fn signed_in_users_are_sent_to_the_landing_route_from_auth_pages() {
        assert_eq!(
            route_decision(true, false, RouteAccess::PublicOnly),
            GuardDecision::RedirectToLanding
        );
        assert_eq!(
            route_decision(false, false, RouteAccess::PublicOnly),
            GuardDecision::Allow
        );
    }
}
