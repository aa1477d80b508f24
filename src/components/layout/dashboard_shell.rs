//! Sidebar shell for the product dashboard pages.
//!
//! Organized as the product design lays it out:
//! 1. Brand block and search.
//! 2. Navigation (Home, Products).
//! 3. Header with the account menu and logout.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let (menu_open, set_menu_open) = signal(false);

    let user_label = move || {
        auth.user()
            .map(|user| user.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Account".to_string())
    };

    let on_logout = move |_| {
        auth.clear_session();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900">
            <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
                <div class="flex items-center gap-2 px-6 py-5">
                    <span class="text-lg font-semibold text-gray-900 dark:text-white">
                        "Productr"
                    </span>
                    <span class="text-blue-600">"∞"</span>
                </div>
                <nav class="flex-1 px-4 py-2 space-y-1">
                    <SidebarLink
                        target=paths::DASHBOARD
                        icon="home"
                        label="Home"
                        active=Signal::derive(move || pathname() == paths::DASHBOARD)
                    />
                    <SidebarLink
                        target=paths::PRODUCTS
                        icon="grid_view"
                        label="Products"
                        active=Signal::derive(move || pathname() == paths::PRODUCTS)
                    />
                </nav>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <header class="flex items-center justify-between gap-4 border-b border-gray-200 bg-white px-6 py-4 dark:border-gray-800 dark:bg-gray-900">
                    <input
                        type="text"
                        placeholder="Search Services, Products"
                        class="w-full max-w-md rounded-lg border border-gray-300 bg-gray-50 px-3 py-2 text-sm text-gray-900 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    />
                    <div class="relative">
                        <button
                            type="button"
                            class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-200"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="material-symbols-outlined">"account_circle"</span>
                            {user_label}
                            <span class="material-symbols-outlined text-base">"expand_more"</span>
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="absolute right-0 mt-2 w-40 rounded-lg border border-gray-200 bg-white py-1 shadow-lg dark:border-gray-700 dark:bg-gray-800">
                                <button
                                    type="button"
                                    class="block w-full px-4 py-2 text-left text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:hover:bg-gray-700"
                                    on:click=on_logout.clone()
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </header>
                <main class="flex-1 overflow-y-auto p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href={target}
            {..}
            class="flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800"
            class=("bg-gray-100", move || active.get())
            class=("dark:bg-gray-800", move || active.get())
            class=("text-blue-700", move || active.get())
        >
            <span class="material-symbols-outlined text-base">{icon}</span>
            <span>{label}</span>
        </A>
    }
}
