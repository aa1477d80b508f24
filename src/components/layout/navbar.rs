//! Top navigation for the item and user pages. It centralizes the signed-in
//! links and the logout action so routes can focus on content. Navigation
//! remains client-side; backend routes must enforce access control.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Wraps a route with the top navbar and a content container.
#[component]
pub fn Navbar(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let user_name = move || auth.user().map(|user| user.name).unwrap_or_default();

    let on_logout = move |_| {
        auth.clear_session();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::DASHBOARD}
                        {..}
                        class="flex items-center space-x-2"
                    >
                        <span class="font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Productr"
                        </span>
                        <span class="text-blue-600">"∞"</span>
                    </A>
                    <ul class="font-medium flex items-center space-x-6">
                        <li>
                            <A
                                href={paths::ITEMS}
                                {..}
                                class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                            >
                                "Items"
                            </A>
                        </li>
                        <li>
                            <A
                                href={paths::ITEM_CREATE}
                                {..}
                                class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                            >
                                "Create Item"
                            </A>
                        </li>
                        <li>
                            <A
                                href={paths::USERS}
                                {..}
                                class="block py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                            >
                                "Users"
                            </A>
                        </li>
                        <li class="flex items-center gap-3">
                            <span class="text-sm text-gray-500 dark:text-gray-400">
                                {user_name}
                            </span>
                            <button
                                type="button"
                                class="py-2 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                on:click=on_logout
                            >
                                "Logout"
                            </button>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!(
                    "Productr v{} ({})",
                    build_info::VERSION,
                    build_info::short_commit_hash()
                )}
            </footer>
        </div>
    }
}
