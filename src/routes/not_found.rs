//! Minimalistic 404 page for unknown routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <div class="relative">
                <h1 class="select-none text-9xl font-black text-gray-100 dark:text-gray-800">
                    "404"
                </h1>
                <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900 dark:text-white">
                    "Page not found"
                </p>
            </div>
            <p class="mt-4 max-w-sm text-gray-500 dark:text-gray-400">
                "The page you requested is missing or has moved."
            </p>
            <div class="mt-6">
                <A
                    href={paths::DASHBOARD}
                    {..}
                    class="inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
