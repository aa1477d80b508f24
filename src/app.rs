use crate::components::ToastProvider;
use crate::features::auth::otp::ChallengeProvider;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <AuthProvider>
                <ChallengeProvider>
                    <Router>
                        <AppRoutes />
                    </Router>
                </ChallengeProvider>
            </AuthProvider>
        </ToastProvider>
    }
}
